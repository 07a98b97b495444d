// src/domain/errors.rs
use thiserror::Error;

use crate::domain::model::FormField;

/// Failures raised while editing the form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Field is read-only: {0}")]
    ReadOnlyField(FormField),
}

/// Failures raised while sending an order to the ticket hub, before any
/// HTTP status is known.
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<hyper::Error> for SubmissionError {
    fn from(err: hyper::Error) -> Self {
        SubmissionError::Transport(err.to_string())
    }
}

// Result type alias for convenience
pub type FormResult<T> = Result<T, FormError>;
pub type SubmissionResult<T> = Result<T, SubmissionError>;
