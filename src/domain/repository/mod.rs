// src/domain/repository/mod.rs
// Repository interfaces for domain entities

use async_trait::async_trait;

use crate::domain::errors::SubmissionResult;
use crate::domain::model::TicketOrderRequest;

/// Status and body returned by the ticket hub for one order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderResponse {
    pub status: u16,
    pub body: String,
}

/// Repository interface for the remote purchasing endpoint
#[async_trait]
pub trait TicketOrderRepository {
    /// Send one order. Any HTTP status is `Ok`; only transport and
    /// serialization failures are errors.
    async fn post_order(&self, order: &TicketOrderRequest) -> SubmissionResult<OrderResponse>;
}
