// src/adapter/coordinator.rs
// Application root: wires the notification surface and the ticket form

use std::sync::Arc;

use crate::application::dto::ApplicationError;
use crate::application::usecase::{SubmitState, TicketForm};
use crate::config::Config;
use crate::domain::repository::TicketOrderRepository;
use crate::domain::model::TicketFormInput;
use crate::domain::service::Notifier;
use crate::infrastructure::notification::ConsoleNotifier;
use crate::infrastructure::ticket_hub::HyperTicketHubRepository;

pub struct TicketHubApp {
    form: TicketForm,
}

impl TicketHubApp {
    pub fn new(form: TicketForm) -> Self {
        Self { form }
    }

    /// Mount a form posting to the configured ticket hub, reporting on the console
    pub fn from_config(config: &Config) -> Result<Self, ApplicationError> {
        let repository = HyperTicketHubRepository::new(&config.order_endpoint())?;
        log::info!("Orders will be posted to {}", repository.endpoint());

        Ok(Self::with_parts(
            config,
            Arc::new(repository),
            Arc::new(ConsoleNotifier::new()),
        ))
    }

    pub fn with_parts(
        config: &Config,
        repository: Arc<dyn TicketOrderRepository + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
    ) -> Self {
        Self::new(TicketForm::new(config.form.concert_id, repository, notifier))
    }

    pub fn form(&self) -> &TicketForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TicketForm {
        &mut self.form
    }

    /// Fill the form with the given values and submit it once
    pub async fn purchase(&mut self, input: TicketFormInput) -> Result<SubmitState, ApplicationError> {
        self.form.fill(input)?;
        let state = self.form.submit().await;

        match &state {
            SubmitState::Blocked(errors) => log::info!("Purchase blocked: {}", errors),
            SubmitState::Succeeded(outcome) => {
                log::info!("Purchase completed at {}", outcome.submitted_at)
            }
            SubmitState::Failed(failure) => log::error!("Purchase failed: {}", failure),
        }

        Ok(state)
    }
}
