// src/application/usecase/ticket_form_usecase.rs
// Ticket purchase form: field state, validation and submission

use std::sync::Arc;

use crate::application::dto::ApplicationError;
use crate::application::usecase::submission_usecase::{submit_order, FailureOutcome, SuccessOutcome};
use crate::domain::model::{FormField, TicketFormInput, TicketOrderRequest};
use crate::domain::repository::TicketOrderRepository;
use crate::domain::service::Notifier;
use crate::domain::validation::{self, ValidationErrors};

/// Where a submit attempt ended
#[derive(Debug)]
pub enum SubmitState {
    /// Validation failed, nothing was sent
    Blocked(ValidationErrors),
    /// The order went through and the form was reset
    Succeeded(SuccessOutcome),
    /// The order failed and the entered values were kept
    Failed(FailureOutcome),
}

impl SubmitState {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitState::Succeeded(_))
    }
}

pub struct TicketForm {
    input: TicketFormInput,
    errors: ValidationErrors,
    submit_count: usize,
    repository: Arc<dyn TicketOrderRepository + Send + Sync>,
    notifier: Arc<dyn Notifier + Send + Sync>,
}

impl TicketForm {
    pub fn new(
        concert_id: i64,
        repository: Arc<dyn TicketOrderRepository + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
    ) -> Self {
        Self {
            input: TicketFormInput::new(concert_id),
            errors: ValidationErrors::new(),
            submit_count: 0,
            repository,
            notifier,
        }
    }

    pub fn values(&self) -> &TicketFormInput {
        &self.input
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    /// Edit one field. Once the form has been submitted, the field is
    /// re-validated on every change.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> Result<(), ApplicationError> {
        self.input.set(field, value)?;

        if self.submit_count > 0 {
            let message = self
                .input
                .value(field)
                .and_then(|value| validation::validate_field(field, value));
            self.errors.set(field, message);
        }
        Ok(())
    }

    /// Replace every editable value, keeping the concert id
    pub fn fill(&mut self, input: TicketFormInput) -> Result<(), ApplicationError> {
        for field in FormField::ALL.iter().filter(|f| f.is_editable()) {
            if let Some(value) = input.value(*field) {
                self.set_field(*field, value)?;
            }
        }
        Ok(())
    }

    /// Check all fields without touching the form state
    pub fn validate(&self) -> Result<TicketOrderRequest, ValidationErrors> {
        validation::validate(&self.input)
    }

    /// Back to the initial, never-submitted state
    pub fn reset(&mut self) {
        self.input = TicketFormInput::new(self.input.concert_id);
        self.errors.clear();
        self.submit_count = 0;
    }

    pub async fn submit(&mut self) -> SubmitState {
        self.submit_count += 1;

        let order = match self.validate() {
            Ok(order) => order,
            Err(errors) => {
                log::debug!("Submission blocked: {}", errors);
                self.errors = errors.clone();
                return SubmitState::Blocked(errors);
            }
        };
        self.errors.clear();

        match submit_order(self.repository.as_ref(), &order).await {
            Ok(outcome) => {
                self.notifier.notify_success(outcome.message());
                self.reset();
                SubmitState::Succeeded(outcome)
            }
            Err(failure) => {
                self.notifier.notify_failure(failure.message());
                SubmitState::Failed(failure)
            }
        }
    }
}
