use thiserror::Error;

/// Application-level errors (input handling)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown property name: {0}")]
    UnknownProperty(String),

    #[error("No method given and the calendar has no METHOD property")]
    MissingMethod,

    #[error(transparent)]
    UnknownMethod(#[from] kunai_rfc::rfc::ical::core::UnknownMethod),

    #[error("Invalid component document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    RfcError(#[from] kunai_rfc::error::RfcError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
