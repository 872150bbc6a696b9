use super::config::{CheckoutConfig, UnknownCategoryPolicy};
use crate::domain::event::CheckoutEvent;
use crate::domain::locale::Locale;
use crate::domain::payment::PaymentData;
use crate::domain::ports::{AuthRequest, Authenticator, TransactionSinkBox};
use crate::domain::provider::{RawProvider, SelectedProvider};
use crate::domain::record::{FormData, UserData};
use crate::domain::state::{CheckoutState, FlowRules, Outcome};
use crate::domain::step::Step;
use crate::domain::view::{FALLBACK_CATEGORY, View};
use crate::error::{CheckoutError, Result};
use tracing::{debug, info, warn};

/// Reported in place of a discriminator when the provider carries none.
pub const MISSING_DISCRIMINATOR: &str = "<missing>";

/// The checkout flow controller.
///
/// `CheckoutController` owns the wizard state and is the only thing that
/// changes it. Each inbound callback is turned into a [`CheckoutEvent`], run
/// through the transition table, and the resulting state replaces the old one.
/// The terminal transition hands the merged transaction to the sink before the
/// new state is committed, so a failing sink leaves the wizard where it was.
pub struct CheckoutController {
    config: CheckoutConfig,
    rules: FlowRules,
    state: CheckoutState,
    sink: TransactionSinkBox,
}

impl CheckoutController {
    /// Creates a controller in the initial state.
    ///
    /// # Arguments
    ///
    /// * `config` - Flow options (auth step, category policy, default locale).
    /// * `sink` - Receives every completed transaction.
    pub fn new(config: CheckoutConfig, sink: TransactionSinkBox) -> Self {
        let rules = config.flow_rules();
        Self {
            state: CheckoutState::new(rules.default_locale.clone()),
            config,
            rules,
            sink,
        }
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step()
    }

    /// What the host should render for the current state.
    pub fn view(&self) -> View {
        View::of(&self.state)
    }

    /// Accepts a provider from the catalog, normalizing its discriminator.
    pub async fn on_provider_selected(&mut self, provider: RawProvider) -> Result<Step> {
        let provider = SelectedProvider::normalize(provider);
        if provider.category.is_none() && self.step() == Step::SelectService {
            let discriminator = provider
                .discriminator
                .clone()
                .unwrap_or_else(|| MISSING_DISCRIMINATOR.to_string());
            match self.config.unknown_category {
                UnknownCategoryPolicy::Reject => {
                    return Err(CheckoutError::UnknownCategory(discriminator));
                }
                UnknownCategoryPolicy::Fallback => {
                    warn!(
                        provider = %provider.id,
                        discriminator = %discriminator,
                        fallback = %FALLBACK_CATEGORY,
                        "Unrecognised service category, using fallback form"
                    );
                }
            }
        }
        self.dispatch(CheckoutEvent::ProviderSelected(provider)).await
    }

    pub async fn on_category_form_submitted(&mut self, form: FormData) -> Result<Step> {
        self.dispatch(CheckoutEvent::CategoryFormSubmitted(form)).await
    }

    pub async fn on_payment_submitted(&mut self, payment: PaymentData) -> Result<Step> {
        self.dispatch(CheckoutEvent::PaymentSubmitted(payment)).await
    }

    pub async fn on_auth_completed(&mut self, user: UserData) -> Result<Step> {
        self.dispatch(CheckoutEvent::AuthCompleted(user)).await
    }

    /// `from` is the step whose collaborator asked to go back.
    pub async fn on_back_requested(&mut self, from: Step) -> Result<Step> {
        self.dispatch(CheckoutEvent::BackRequested { from }).await
    }

    pub async fn on_locale_changed(&mut self, locale: Locale) -> Result<Step> {
        self.dispatch(CheckoutEvent::LocaleChanged(locale)).await
    }

    /// Runs the authentication collaborator and applies its result.
    ///
    /// Outside the auth step nothing is called. A failed attempt is returned
    /// to the caller and the wizard stays on the auth step.
    pub async fn authenticate(
        &mut self,
        authenticator: &dyn Authenticator,
        request: AuthRequest,
    ) -> Result<Step> {
        if self.step() != Step::Auth {
            debug!(current = %self.step(), "Ignoring authentication outside the auth step");
            return Ok(self.step());
        }
        let transaction = self.state.transaction_data().cloned().unwrap_or_default();
        let user = authenticator.authenticate(&transaction, request).await?;
        self.on_auth_completed(user).await
    }

    async fn dispatch(&mut self, event: CheckoutEvent) -> Result<Step> {
        let transition = self.state.transition(event, &self.rules)?;

        match transition.outcome {
            Outcome::Moved { from, to } => {
                info!(%from, %to, "Checkout step changed");
            }
            Outcome::LocaleChanged => {
                info!(locale = %transition.state.locale(), "Locale changed");
            }
            Outcome::Ignored { event, current } => {
                debug!(event, %current, "Ignoring event not issued for the current step");
            }
            Outcome::Completed(transaction) => {
                self.sink.emit(transaction).await?;
                info!("Transaction completed");
            }
        }

        self.state = transition.state;
        Ok(self.state.step())
    }
}
