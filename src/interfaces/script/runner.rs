use super::event_reader::ScriptCommand;
use crate::application::controller::CheckoutController;
use crate::domain::ports::{Authenticator, ServiceCatalog};
use crate::domain::step::Step;
use crate::error::{CheckoutError, Result};

/// Replays script commands against a controller, standing in for the UI's
/// collaborators.
pub struct ScriptRunner<'a> {
    catalog: &'a dyn ServiceCatalog,
    authenticator: &'a dyn Authenticator,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(catalog: &'a dyn ServiceCatalog, authenticator: &'a dyn Authenticator) -> Self {
        Self {
            catalog,
            authenticator,
        }
    }

    pub async fn run(
        &self,
        controller: &mut CheckoutController,
        command: ScriptCommand,
    ) -> Result<Step> {
        match command {
            ScriptCommand::Select { provider } => controller.on_provider_selected(provider).await,
            ScriptCommand::Choose { provider_id } => {
                let provider = self
                    .catalog
                    .find(controller.state().locale(), &provider_id)
                    .ok_or_else(|| {
                        CheckoutError::ValidationError(format!("Unknown provider: {provider_id}"))
                    })?;
                controller.on_provider_selected(provider).await
            }
            ScriptCommand::SubmitForm { data } => controller.on_category_form_submitted(data).await,
            ScriptCommand::SubmitPayment { data } => controller.on_payment_submitted(data).await,
            ScriptCommand::Authenticate { request } => {
                controller.authenticate(self.authenticator, request).await
            }
            ScriptCommand::CompleteAuth { data } => controller.on_auth_completed(data).await,
            ScriptCommand::Back { from } => {
                let from = from.unwrap_or_else(|| controller.step());
                controller.on_back_requested(from).await
            }
            ScriptCommand::Locale { locale } => controller.on_locale_changed(locale).await,
        }
    }
}
