//! Auth Endpoints
//!
//! Token login, signup and the signed-in user's own account.

use reqwest::Method;

use super::{request, send_json, send_unit};
use crate::error::ApiError;
use crate::models::{AuthToken, LoginCredentials, PasswordChange, SignupData, User};

pub const TOKENS_PATH: &str = "/auth/tokens";
pub const SIGNUP_PATH: &str = "/auth/";
pub const CURRENT_USER_PATH: &str = "/users/";
pub const PASSWORD_PATH: &str = "/users/password";

/// Exchange credentials for a bearer token (OAuth2 password form)
pub async fn login(credentials: &LoginCredentials) -> Result<AuthToken, ApiError> {
    let form = [
        ("username", credentials.username.as_str()),
        ("password", credentials.password.as_str()),
    ];
    send_json(request(Method::POST, TOKENS_PATH).form(&form)).await
}

pub async fn signup(data: &SignupData) -> Result<(), ApiError> {
    send_unit(request(Method::POST, SIGNUP_PATH).json(data)).await
}

pub async fn get_current_user() -> Result<User, ApiError> {
    send_json(request(Method::GET, CURRENT_USER_PATH)).await
}

pub async fn change_password(change: &PasswordChange) -> Result<(), ApiError> {
    send_unit(request(Method::PUT, PASSWORD_PATH).json(change)).await
}
