// src/application/dto/mod.rs
// Application level errors and form input parsing

pub mod parser;

use thiserror::Error;

use crate::domain::errors::{FormError, SubmissionError};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),
}
