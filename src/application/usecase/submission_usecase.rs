// src/application/usecase/submission_usecase.rs
// Sends a validated order and classifies the outcome

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::errors::SubmissionError;
use crate::domain::model::TicketOrderRequest;
use crate::domain::repository::TicketOrderRepository;

pub const PURCHASE_SUCCESS_MESSAGE: &str = "Purchase successful!";
pub const PURCHASE_REJECTED_MESSAGE: &str = "Failed to process the purchase. Please try again.";
pub const SUBMISSION_ERROR_MESSAGE: &str = "There was an error submitting the form.";

/// The ticket hub accepted the order
#[derive(Debug, Clone)]
pub struct SuccessOutcome {
    pub status: u16,
    pub body: String,
    pub submitted_at: DateTime<Utc>,
}

impl SuccessOutcome {
    pub fn message(&self) -> &'static str {
        PURCHASE_SUCCESS_MESSAGE
    }
}

/// The order did not go through
#[derive(Debug, Error)]
pub enum FailureOutcome {
    /// The ticket hub answered with something other than 200
    #[error("Ticket hub rejected the order with status {status}")]
    Rejected { status: u16, body: String },

    /// The request never produced a response
    #[error("Order could not be sent: {0}")]
    Transport(#[from] SubmissionError),
}

impl FailureOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            FailureOutcome::Rejected { .. } => PURCHASE_REJECTED_MESSAGE,
            FailureOutcome::Transport(_) => SUBMISSION_ERROR_MESSAGE,
        }
    }
}

/// Send an order once. Only status 200 counts as a purchase.
pub async fn submit_order(
    repository: &(dyn TicketOrderRepository + Send + Sync),
    order: &TicketOrderRequest,
) -> Result<SuccessOutcome, FailureOutcome> {
    log::debug!("Formatted order: {:?}", order);

    let response = match repository.post_order(order).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("Error occurred during API call: {}", e);
            return Err(FailureOutcome::Transport(e));
        }
    };

    if response.status != 200 {
        log::warn!(
            "Ticket hub rejected order with status {}: {}",
            response.status,
            response.body
        );
        return Err(FailureOutcome::Rejected {
            status: response.status,
            body: response.body,
        });
    }

    log::info!("API response: {}", response.body);
    Ok(SuccessOutcome {
        status: response.status,
        body: response.body,
        submitted_at: Utc::now(),
    })
}
