//! Crate-level error type and `Result` alias for structured error handling.
//! Converts underlying I/O, JSON and HTTP errors, and provides semantic
//! variants for upstream API failures and malformed prompt files.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The API answered 2xx but the body lacks an expected field.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Invalid prompt file {path}: {reason}")]
    InvalidPromptFile { path: String, reason: String },
}

impl Error {
    pub fn invalid_response<E: std::fmt::Display>(e: E) -> Self {
        Error::InvalidResponse(e.to_string())
    }
}
