use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("API key not found. Make sure to set {var} in your environment or .env file.")]
    MissingApiKey { var: &'static str },

    #[error("Prompt cannot be empty.")]
    EmptyPrompt,

    #[error("Failed to initialize logging: {0}")]
    Logging(#[source] std::io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Library(#[from] promptpress::Error),
}
