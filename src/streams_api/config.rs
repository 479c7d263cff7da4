use crate::streams_api::types::VagonError;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

/// Production origin of the Vagon Streams management API
pub const API_BASE_URL: &str = "https://api.vagon.io";

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "VAGON_API_KEY";
/// Environment variable holding the API secret
pub const ENV_API_SECRET: &str = "VAGON_API_SECRET";
/// Environment variable holding the request timeout in milliseconds
pub const ENV_REQUEST_TIMEOUT_MS: &str = "VAGON_REQUEST_TIMEOUT_MS";
/// Environment variable overriding the API origin
pub const ENV_API_BASE_URL: &str = "VAGON_API_BASE_URL";

/// Client configuration
///
/// Holds the credential pair used to sign every request, plus an optional
/// per-request timeout. The secret is kept in a [`SecretString`] so it never
/// shows up in `Debug` output or logs.
///
/// A configuration is checked when it is handed to
/// [`VagonClient::new`](crate::VagonClient::new), not when it is built.
#[derive(Debug)]
pub struct Configuration {
    api_key: String,
    api_secret: SecretString,
    request_timeout: Option<Duration>,
    base_url: String,
}

impl Configuration {
    /// Create a configuration from an API key and secret
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use vagon_streams_sdk::Configuration;
    ///
    /// let config = Configuration::new("my-key", "my-secret")
    ///     .with_request_timeout(Duration::from_secs(10));
    /// assert_eq!(config.api_key(), "my-key");
    /// ```
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::new(api_secret.into()),
            request_timeout: None,
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// Abort any call that has not completed within `timeout`
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Send requests to a different origin (staging, local mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build a configuration from `VAGON_API_KEY`, `VAGON_API_SECRET`,
    /// and the optional `VAGON_REQUEST_TIMEOUT_MS` / `VAGON_API_BASE_URL`
    pub fn from_env() -> Result<Self, VagonError> {
        let api_key = std::env::var(ENV_API_KEY).unwrap_or_default();
        let api_secret = std::env::var(ENV_API_SECRET).unwrap_or_default();
        let mut config = Self::new(api_key, api_secret);

        if let Ok(raw) = std::env::var(ENV_REQUEST_TIMEOUT_MS) {
            let millis = raw.trim().parse::<u64>().map_err(|e| {
                VagonError::Config(format!(
                    "{} must be a whole number of milliseconds: {}",
                    ENV_REQUEST_TIMEOUT_MS, e
                ))
            })?;
            config = config.with_request_timeout(Duration::from_millis(millis));
        }

        if let Ok(base_url) = std::env::var(ENV_API_BASE_URL) {
            config = config.with_base_url(base_url);
        }

        Ok(config)
    }

    /// Check that both credentials are present and the base URL is usable
    pub fn validate(&self) -> Result<(), VagonError> {
        if self.api_key.is_empty() || self.api_secret.expose_secret().is_empty() {
            return Err(VagonError::Config(
                "API key and secret are required".to_string(),
            ));
        }

        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            VagonError::Config(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;
        if parsed.cannot_be_a_base() {
            return Err(VagonError::Config(format!(
                "Invalid base URL '{}': not an absolute http(s) origin",
                self.base_url
            )));
        }

        Ok(())
    }

    /// The API key sent in clear in the `Authorization` header
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }

    /// Per-request timeout, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Origin every endpoint path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Configuration::new("key", "secret");
        assert_eq!(config.api_key(), "key");
        assert_eq!(config.api_secret(), "secret");
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.base_url(), "https://api.vagon.io");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_credentials_fail_validation() {
        let cases = [("", "secret"), ("key", ""), ("", "")];
        for (key, secret) in cases {
            let result = Configuration::new(key, secret)
                .with_request_timeout(Duration::from_secs(1))
                .validate();
            assert!(
                matches!(result, Err(VagonError::Config(_))),
                "expected config error for key={:?} secret={:?}",
                key,
                secret
            );
        }
    }

    #[test]
    fn test_invalid_base_url() {
        let result = Configuration::new("key", "secret")
            .with_base_url("not a url")
            .validate();
        assert!(matches!(result, Err(VagonError::Config(_))));

        let result = Configuration::new("key", "secret")
            .with_base_url("mailto:ops@example.com")
            .validate();
        assert!(matches!(result, Err(VagonError::Config(_))));
    }

    #[test]
    fn test_from_env() {
        std::env::set_var(ENV_API_KEY, "env-key");
        std::env::set_var(ENV_API_SECRET, "env-secret");
        std::env::set_var(ENV_REQUEST_TIMEOUT_MS, "2500");
        std::env::set_var(ENV_API_BASE_URL, "http://localhost:9000");

        let config = Configuration::from_env().unwrap();
        assert_eq!(config.api_key(), "env-key");
        assert_eq!(config.api_secret(), "env-secret");
        assert_eq!(config.request_timeout(), Some(Duration::from_millis(2500)));
        assert_eq!(config.base_url(), "http://localhost:9000");

        std::env::set_var(ENV_REQUEST_TIMEOUT_MS, "soon");
        assert!(matches!(
            Configuration::from_env(),
            Err(VagonError::Config(_))
        ));

        std::env::remove_var(ENV_REQUEST_TIMEOUT_MS);
        std::env::remove_var(ENV_API_BASE_URL);
        std::env::remove_var(ENV_API_SECRET);
        let config = Configuration::from_env().unwrap();
        assert!(config.validate().is_err());

        std::env::remove_var(ENV_API_KEY);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = Configuration::new("key", "super-secret-value");
        let debug = format!("{:?}", config);
        assert!(debug.contains("key"));
        assert!(!debug.contains("super-secret-value"));
    }
}
