//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Request data is malformed or out of bounds; the caller must fix it
    #[error("{message}")]
    InvalidArgument {
        message: String,
    },

    /// Model could not be loaded at startup
    #[error("Model unavailable: {model} - {message}")]
    ModelUnavailable {
        model: String,
        message: String,
    },

    /// Inference runtime failed while serving a request
    #[error("Provider failure: {message}")]
    ProviderFailure {
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Config source error
    #[error("Config source error: {0}")]
    ConfigSourceError(#[from] config::ConfigError),
}

impl TranslationError {
    /// Shorthand for [`TranslationError::InvalidArgument`]
    pub fn invalid(message: impl Into<String>) -> Self {
        TranslationError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Shorthand for [`TranslationError::ProviderFailure`]
    pub fn provider(message: impl Into<String>) -> Self {
        TranslationError::ProviderFailure {
            message: message.into(),
        }
    }

    /// Whether the caller caused this error
    pub fn is_client_error(&self) -> bool {
        matches!(self, TranslationError::InvalidArgument { .. })
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
