use std::fmt;
use std::time::Duration;

/// Vagon Streams SDK error type
///
/// Represents every failure a client call can surface. Construction problems
/// are reported as [`VagonError::Config`]; everything that happens once a
/// request is being built or sent is an [`ApiError`].
#[derive(Debug)]
pub enum VagonError {
    /// Client configuration is unusable (missing credentials, bad base URL)
    Config(String),
    /// API request failed (transport, HTTP status, or response parsing)
    Api(ApiError),
}

impl VagonError {
    /// HTTP status code when the server answered with a non-success status
    pub fn status(&self) -> Option<u16> {
        match self {
            VagonError::Api(ApiError::Http { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Raw response body when the server answered with a non-success status
    pub fn body(&self) -> Option<&str> {
        match self {
            VagonError::Api(ApiError::Http { body, .. }) => Some(body),
            _ => None,
        }
    }

    /// True when the server responded with a non-success status
    pub fn is_http(&self) -> bool {
        matches!(self, VagonError::Api(ApiError::Http { .. }))
    }

    /// True when the request never produced a response
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            VagonError::Api(ApiError::Network(_)) | VagonError::Api(ApiError::Timeout(_))
        )
    }

    /// True when the configured request timeout elapsed
    pub fn is_timeout(&self) -> bool {
        matches!(self, VagonError::Api(ApiError::Timeout(_)))
    }
}

impl fmt::Display for VagonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VagonError::Config(msg) => write!(f, "Configuration error: {}", msg),
            VagonError::Api(err) => write!(f, "API error: {}", err),
        }
    }
}

impl std::error::Error for VagonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VagonError::Api(err) => Some(err),
            VagonError::Config(_) => None,
        }
    }
}

impl From<ApiError> for VagonError {
    fn from(err: ApiError) -> Self {
        VagonError::Api(err)
    }
}

/// API-specific errors
#[derive(Debug)]
pub enum ApiError {
    /// Network error (DNS, connection refused, reset, ...)
    Network(String),
    /// The configured request timeout elapsed before a response arrived
    Timeout(Duration),
    /// Server answered with a non-success status; `body` is the raw text
    Http { status: u16, body: String },
    /// Failed to parse a success response
    Parse(String),
    /// Request building failed
    Request(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Timeout(after) => {
                write!(f, "Request timed out after {} ms", after.as_millis())
            }
            ApiError::Http { status, body } => write!(f, "HTTP {} error: {}", status, body),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Request(msg) => write!(f, "Request error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timeout".to_string())
        } else if err.is_connect() {
            ApiError::Network(format!("Connection failed: {}", err))
        } else if err.is_builder() {
            ApiError::Request(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::Request(format!("Invalid request URL: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_accessors() {
        let err = VagonError::from(ApiError::Http {
            status: 401,
            body: "unauthorized".to_string(),
        });

        assert!(err.is_http());
        assert!(!err.is_transport());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.body(), Some("unauthorized"));
        assert_eq!(err.to_string(), "API error: HTTP 401 error: unauthorized");
    }

    #[test]
    fn test_transport_errors_are_not_http() {
        let network = VagonError::from(ApiError::Network("refused".to_string()));
        let timeout = VagonError::from(ApiError::Timeout(Duration::from_millis(250)));

        assert!(network.is_transport());
        assert!(!network.is_http());
        assert_eq!(network.status(), None);

        assert!(timeout.is_transport());
        assert!(timeout.is_timeout());
        assert_eq!(
            timeout.to_string(),
            "API error: Request timed out after 250 ms"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = VagonError::Config("API key and secret are required".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: API key and secret are required"
        );
        assert!(std::error::Error::source(&err).is_none());
    }
}
