// src/domain/mod.rs
pub mod errors;
pub mod model;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export common types for convenience
pub use errors::{FormError, FormResult, SubmissionError, SubmissionResult};
pub use model::{FormField, TicketFormInput, TicketOrderRequest, DEFAULT_CONCERT_ID};
pub use repository::{OrderResponse, TicketOrderRepository};
pub use service::Notifier;
pub use validation::{validate, validate_field, ValidationError, ValidationErrors};
