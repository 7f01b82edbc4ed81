use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for error-sieve operations
pub type Result<T> = std::result::Result<T, SieveError>;

/// Error types raised by the classification and utility layers
#[derive(Debug, Error)]
pub enum SieveError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Properties parse error: {0}")]
    PropertiesParse(#[from] toml::de::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Properties file not found: {path}")]
    PropertiesNotFound { path: PathBuf },
}

impl SieveError {
    /// Create a new invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// True if this is a validation failure rather than an I/O or parse failure
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
