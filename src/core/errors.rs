//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Provider responded with a non-success status
    #[error("{provider} API error: {status} - {message}")]
    ApiError {
        /// Name of the provider that failed
        provider: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Request could not reach the provider
    #[error("{provider} network error: {message}")]
    NetworkError {
        /// Name of the provider that failed
        provider: &'static str,
        /// Underlying transport error
        message: String,
    },

    /// Provider responded 2xx but the body did not match its schema
    #[error("{provider} invalid response: {message}")]
    InvalidResponseError {
        /// Name of the provider that failed
        provider: &'static str,
        /// What was wrong with the body
        message: String,
    },

    /// Provider responded with an empty or whitespace-only translation
    #[error("{provider} returned an empty translation")]
    EmptyTranslation {
        /// Name of the provider that failed
        provider: &'static str,
    },

    /// File operation error
    #[error("File error: {path} - {message}")]
    FileError {
        /// Path involved in the failed operation
        path: String,
        /// What went wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is invalid or missing
        message: String,
    },

    /// Wrapper for anyhow errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<anyhow::Error> for TranslationError {
    fn from(err: anyhow::Error) -> Self {
        TranslationError::InternalError(err.to_string())
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
