// src/application/mod.rs
pub mod dto;
pub mod usecase;

pub use dto::ApplicationError;
pub use usecase::{submit_order, FailureOutcome, SubmitState, SuccessOutcome, TicketForm};
