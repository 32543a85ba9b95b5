//! REST API Wrappers
//!
//! Frontend bindings to backend endpoints, organized by domain.

mod admin;
mod auth;
mod food;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config;
use crate::error::ApiError;
use crate::storage;

// Re-export all public items
pub use admin::*;
pub use auth::*;
pub use food::*;

/// Build a request against the backend, attaching the stored bearer token
fn request(method: Method, path: &str) -> RequestBuilder {
    debug!(%method, path, "api request");
    let builder = reqwest::Client::new().request(method, config::endpoint(path));
    match storage::token() {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// Send and decode a JSON body
async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let body = send(builder).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Send and discard the body (204 and `{"message": ...}` acknowledgements)
async fn send_unit(builder: RequestBuilder) -> Result<(), ApiError> {
    send(builder).await.map(|_| ())
}

async fn send(builder: RequestBuilder) -> Result<String, ApiError> {
    let response = builder.send().await?;
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(ApiError::from_status(status.as_u16(), &body))
    }
}
