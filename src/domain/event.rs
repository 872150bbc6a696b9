use super::locale::Locale;
use super::payment::PaymentData;
use super::provider::SelectedProvider;
use super::record::{FormData, UserData};
use super::step::Step;

/// An inbound callback from one of the wizard's collaborators.
///
/// Every event except a locale change is bound to the step whose collaborator
/// issued it; [`CheckoutEvent::origin`] exposes that binding so stale callbacks
/// can be recognised.
#[derive(Debug, PartialEq, Clone)]
pub enum CheckoutEvent {
    ProviderSelected(SelectedProvider),
    CategoryFormSubmitted(FormData),
    PaymentSubmitted(PaymentData),
    AuthCompleted(UserData),
    BackRequested { from: Step },
    LocaleChanged(Locale),
}

impl CheckoutEvent {
    pub fn origin(&self) -> Option<Step> {
        match self {
            CheckoutEvent::ProviderSelected(_) => Some(Step::SelectService),
            CheckoutEvent::CategoryFormSubmitted(_) => Some(Step::EnterDetails),
            CheckoutEvent::PaymentSubmitted(_) => Some(Step::Payment),
            CheckoutEvent::AuthCompleted(_) => Some(Step::Auth),
            CheckoutEvent::BackRequested { from } => Some(*from),
            CheckoutEvent::LocaleChanged(_) => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CheckoutEvent::ProviderSelected(_) => "provider_selected",
            CheckoutEvent::CategoryFormSubmitted(_) => "category_form_submitted",
            CheckoutEvent::PaymentSubmitted(_) => "payment_submitted",
            CheckoutEvent::AuthCompleted(_) => "auth_completed",
            CheckoutEvent::BackRequested { .. } => "back_requested",
            CheckoutEvent::LocaleChanged(_) => "locale_changed",
        }
    }
}
