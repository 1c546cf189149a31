//! Application configuration (server URL and derived endpoints).

/// Default API server URL
const DEFAULT_SERVER_URL: &str = "http://localhost:5001";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    server_url: String,
}

impl Default for Config {
    fn default() -> Self {
        let server_url = std::env::var("BIZDIR_API_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self { server_url }
    }
}

impl Config {
    /// Create a configuration from the environment, falling back to the
    /// default local server.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration pointing at an explicit server URL.
    pub fn with_server_url(server_url: impl Into<String>) -> Self {
        Self { server_url: server_url.into() }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Full URL for an API endpoint path.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    /// Public URL of an uploaded asset by server-assigned filename.
    pub fn uploads_url(&self, filename: &str) -> String {
        format!("{}/uploads/{}", self.server_url, filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_server_url() {
        let config = Config::with_server_url("http://127.0.0.1:9999");
        assert_eq!(config.server_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_api_url() {
        let config = Config::with_server_url("http://127.0.0.1:9999");
        assert_eq!(config.api_url("/login"), "http://127.0.0.1:9999/login");
        assert_eq!(
            config.api_url("/api/users/3"),
            "http://127.0.0.1:9999/api/users/3"
        );
    }

    #[test]
    fn test_uploads_url() {
        let config = Config::with_server_url("http://127.0.0.1:9999");
        assert_eq!(
            config.uploads_url("avatar.png"),
            "http://127.0.0.1:9999/uploads/avatar.png"
        );
    }
}
