//! API Error Types

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Not authenticated{}", detail_suffix(.detail))]
    Unauthorized { detail: Option<String> },

    #[error("Request failed ({status}){}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    #[error("Response error: {0}")]
    Decode(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {}", d)).unwrap_or_default()
}

impl ApiError {
    /// Server-provided `detail`, if any, for showing to the user
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } | ApiError::Unauthorized { detail } => detail.as_deref(),
            _ => None,
        }
    }

    /// Missing or expired token, or rejected credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = extract_detail(body);
        if status == 401 {
            return ApiError::Unauthorized { detail };
        }
        ApiError::Status { status, detail }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Pull the FastAPI `detail` out of an error body.
/// `detail` is either a string or a list of `{ "msg": ... }` objects.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_string_detail() {
        let body = r#"{"detail":"Incorrect username or password"}"#;
        assert_eq!(extract_detail(body).as_deref(), Some("Incorrect username or password"));
    }

    #[test]
    fn test_extract_validation_detail() {
        let body = r#"{"detail":[{"loc":["body","quantity"],"msg":"Input should be greater than 0"},{"msg":"Field required"}]}"#;
        assert_eq!(
            extract_detail(body).as_deref(),
            Some("Input should be greater than 0; Field required")
        );
    }

    #[test]
    fn test_extract_detail_from_garbage() {
        assert_eq!(extract_detail("<html>502</html>"), None);
        assert_eq!(extract_detail(r#"{"message":"x"}"#), None);
    }

    #[test]
    fn test_from_status() {
        assert!(ApiError::from_status(401, "").is_unauthorized());
        let err = ApiError::from_status(403, r#"{"detail":"Forbidden"}"#);
        assert_eq!(err.detail(), Some("Forbidden"));
        assert_eq!(err.to_string(), "Request failed (403): Forbidden");
        assert_eq!(ApiError::from_status(500, "").to_string(), "Request failed (500)");
    }

    #[test]
    fn test_unauthorized_keeps_detail() {
        let err = ApiError::from_status(401, r#"{"detail":"Incorrect username or password"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.detail(), Some("Incorrect username or password"));
        assert_eq!(err.to_string(), "Not authenticated: Incorrect username or password");

        let bare = ApiError::from_status(401, "");
        assert_eq!(bare.detail(), None);
        assert_eq!(bare.to_string(), "Not authenticated");
    }
}
