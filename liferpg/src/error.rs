//! Error types.

use thiserror::Error;

/// The main error type for Life RPG client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Request never produced a response.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend envelope signalled a business failure (`code != 0`).
    #[error("API error [{code}]: {message}")]
    Api { code: i64, message: String },

    /// HTTP 401: the session token is missing, invalid or expired.
    #[error("Authentication expired")]
    Unauthorized,

    /// HTTP 403: the authenticated user may not perform this operation.
    #[error("Permission denied")]
    PermissionDenied,

    /// Any other non-2xx HTTP status.
    #[error("Server error [{status}]: {message}")]
    Server { status: u16, message: String },

    /// A required field was missing in the response.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Invalid argument passed to an API method.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Create a business-level API error.
    pub fn api(code: i64, message: impl Into<String>) -> Self {
        Error::Api {
            code,
            message: message.into(),
        }
    }

    /// Create a server error from an HTTP status.
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Error::Server {
            status,
            message: message.into(),
        }
    }

    /// Create a missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Error::MissingField(field.into())
    }

    /// Check if this error means the session is no longer valid.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Unauthorized)
    }

    /// Check if this is an authorization (not authentication) error.
    pub fn is_permission_error(&self) -> bool {
        matches!(self, Error::PermissionDenied)
    }

    /// The message a failed call surfaced to the user, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::Api { message, .. } | Error::Server { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Result type alias for Life RPG client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::api(1, "用户名或密码错误");
        assert_eq!(format!("{}", e), "API error [1]: 用户名或密码错误");

        let e = Error::server(500, "boom");
        assert_eq!(format!("{}", e), "Server error [500]: boom");
    }

    #[test]
    fn test_error_classes() {
        assert!(Error::Unauthorized.is_auth_error());
        assert!(!Error::PermissionDenied.is_auth_error());
        assert!(Error::PermissionDenied.is_permission_error());
        assert!(!Error::api(1, "x").is_auth_error());
    }

    #[test]
    fn test_message() {
        assert_eq!(Error::api(1, "nope").message(), Some("nope"));
        assert_eq!(Error::Unauthorized.message(), None);
    }
}
