pub mod submission_usecase;
pub mod ticket_form_usecase;

// Re-export public API
pub use submission_usecase::{submit_order, FailureOutcome, SuccessOutcome};
pub use ticket_form_usecase::{SubmitState, TicketForm};
