// Error handling module
// Contains custom error types and error handling utilities

use serde::Serialize;
use thiserror::Error;

// Application error type
#[derive(Debug, Error, Serialize)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("A dubbing run is already in progress")]
    AlreadyProcessing,

    #[error("{0} is not implemented: no real dubbed file is produced")]
    NotImplemented(&'static str),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

// Result type alias for application
pub type AppResult<T> = Result<T, AppError>;
