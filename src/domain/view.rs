use super::locale::Locale;
use super::payment::PaymentSummary;
use super::provider::{SelectedProvider, ServiceCategory};
use super::state::{CheckoutState, Stage};
use super::step::Step;
use super::transaction::TransactionData;

/// Form shown for providers whose category is missing or unrecognised.
pub const FALLBACK_CATEGORY: ServiceCategory = ServiceCategory::Airtime;

/// Which collaborator the host should render, and with what inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    ServiceSelector,
    CategoryForm {
        category: ServiceCategory,
        provider: SelectedProvider,
        /// Set when `category` is [`FALLBACK_CATEGORY`] standing in for an unknown one.
        fallback: bool,
    },
    PaymentForm(PaymentSummary),
    Auth(TransactionData),
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub step: Step,
    pub locale: Locale,
    pub screen: Screen,
}

impl View {
    pub fn of(state: &CheckoutState) -> Self {
        let screen = match state.stage() {
            Stage::SelectService => Screen::ServiceSelector,
            Stage::EnterDetails { provider, .. } => Screen::CategoryForm {
                category: provider.category.unwrap_or(FALLBACK_CATEGORY),
                provider: provider.clone(),
                fallback: provider.category.is_none(),
            },
            Stage::Payment { form, .. } => Screen::PaymentForm(PaymentSummary::from_form(form)),
            Stage::Auth { transaction, .. } => Screen::Auth(transaction.clone()),
        };
        Self {
            step: state.step(),
            locale: state.locale().clone(),
            screen,
        }
    }
}
