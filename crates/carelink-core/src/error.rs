//! Error types for CareLink

use thiserror::Error;

/// Main error type for CareLink data and view operations
#[derive(Error, Debug)]
pub enum CareError {
    /// Transport-level HTTP failure (connect, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed base URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Role string that does not name a known role
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// Operation requires a signed-in user
    #[error("No authenticated user")]
    NotAuthenticated,

    /// Backend refused or could not serve the request
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias using CareError
pub type CareResult<T> = Result<T, CareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CareError::Api {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(format!("{}", err), "API returned 503: maintenance");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let care_err: CareError = io_err.into();
        assert!(matches!(care_err, CareError::Io(_)));
    }

    #[test]
    fn test_error_from_url() {
        let care_err: CareError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(care_err, CareError::Url(_)));
    }
}
