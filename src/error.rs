//! Request-level error type.
//!
//! The `Display` text of each variant is the exact body sent to clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("The url was not valid! Make sure to start the url with http:// or https://")]
    InvalidLongUrl,

    #[error("The url was not valid! Make sure to start the url with {prefix}")]
    InvalidShortUrl { prefix: String },

    #[error("No url for key {key} was found!")]
    KeyNotFound { key: String },

    #[error("The key for {url} has expired!")]
    KeyExpired { url: String },

    /// Internal: the key source kept producing keys already in use.
    #[error("Failed to generate a unique key after {attempts} attempts")]
    KeyGenerationExhausted { attempts: usize },
}

impl AppError {
    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidLongUrl
            | AppError::InvalidShortUrl { .. }
            | AppError::KeyNotFound { .. }
            | AppError::KeyExpired { .. } => StatusCode::NOT_FOUND,
            AppError::KeyGenerationExhausted { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
