//! Build-time configuration

/// Backend used when `FOOD_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Base URL of the REST backend, without a trailing slash
pub fn api_url() -> String {
    normalize_base(option_env!("FOOD_API_URL").unwrap_or(DEFAULT_API_URL))
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Join the base URL and an absolute API path
pub fn endpoint(path: &str) -> String {
    format!("{}{}", api_url(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("https://api.example.com/"), "https://api.example.com");
        assert_eq!(normalize_base("  "), DEFAULT_API_URL);
        assert_eq!(normalize_base("http://localhost:8000"), "http://localhost:8000");
    }
}
