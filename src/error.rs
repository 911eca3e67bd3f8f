//! Error types for teamkeys

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for teamkeys operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// GitHub API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check that GITHUB_ACCESS_TOKEN is valid.")]
    Unauthorized,

    #[error("Access denied. The token lacks permission for this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} doesn't exist or it's empty, set it and try it again")]
    MissingVar(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
