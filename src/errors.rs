// src/errors.rs
// Top-level errors surfaced by the binary

use thiserror::Error;

use crate::application::dto::ApplicationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type AppResult<T> = Result<T, AppError>;
