use super::event::CheckoutEvent;
use super::locale::Locale;
use super::provider::SelectedProvider;
use super::record::FormData;
use super::step::Step;
use super::transaction::TransactionData;
use crate::error::Result;

/// Rules the transition table depends on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowRules {
    /// Whether payment is followed by an authentication step.
    pub auth_step: bool,
    /// Locale of the initial state, restored on completion.
    pub default_locale: Locale,
}

/// The data each step carries. A provider exists in every stage but the first,
/// and payment or auth cannot be reached without a submitted form.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Stage {
    #[default]
    SelectService,
    EnterDetails {
        provider: SelectedProvider,
        /// Only set after backing out of payment; holds the provider contribution.
        transaction: Option<TransactionData>,
    },
    Payment {
        provider: SelectedProvider,
        form: FormData,
        transaction: TransactionData,
    },
    Auth {
        provider: SelectedProvider,
        form: FormData,
        transaction: TransactionData,
    },
}

/// The complete wizard state. Never mutated: every transition produces a new value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckoutState {
    stage: Stage,
    locale: Locale,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Moved { from: Step, to: Step },
    LocaleChanged,
    /// The event did not belong to the current step, or has no edge from it.
    Ignored { event: &'static str, current: Step },
    /// Terminal transition: the merged record to hand to the sink.
    Completed(TransactionData),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: CheckoutState,
    pub outcome: Outcome,
}

impl CheckoutState {
    pub fn new(locale: Locale) -> Self {
        Self {
            stage: Stage::SelectService,
            locale,
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn step(&self) -> Step {
        match self.stage {
            Stage::SelectService => Step::SelectService,
            Stage::EnterDetails { .. } => Step::EnterDetails,
            Stage::Payment { .. } => Step::Payment,
            Stage::Auth { .. } => Step::Auth,
        }
    }

    pub fn selected_provider(&self) -> Option<&SelectedProvider> {
        match &self.stage {
            Stage::SelectService => None,
            Stage::EnterDetails { provider, .. }
            | Stage::Payment { provider, .. }
            | Stage::Auth { provider, .. } => Some(provider),
        }
    }

    pub fn form_data(&self) -> Option<&FormData> {
        match &self.stage {
            Stage::Payment { form, .. } | Stage::Auth { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn transaction_data(&self) -> Option<&TransactionData> {
        match &self.stage {
            Stage::SelectService => None,
            Stage::EnterDetails { transaction, .. } => transaction.as_ref(),
            Stage::Payment { transaction, .. } | Stage::Auth { transaction, .. } => {
                Some(transaction)
            }
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Applies one event according to the transition table.
    ///
    /// Events bound to a step other than the current one leave the state untouched.
    pub fn transition(&self, event: CheckoutEvent, rules: &FlowRules) -> Result<Transition> {
        let from = self.step();
        let name = event.name();
        let ignored = || Transition {
            state: self.clone(),
            outcome: Outcome::Ignored {
                event: name,
                current: from,
            },
        };

        if let Some(origin) = event.origin()
            && origin != from
        {
            return Ok(ignored());
        }

        let stage = match (self.stage.clone(), event) {
            (stage, CheckoutEvent::LocaleChanged(locale)) => {
                return Ok(Transition {
                    state: Self { stage, locale },
                    outcome: Outcome::LocaleChanged,
                });
            }
            (Stage::SelectService, CheckoutEvent::ProviderSelected(provider)) => {
                Stage::EnterDetails {
                    provider,
                    transaction: None,
                }
            }
            (Stage::EnterDetails { provider, .. }, CheckoutEvent::CategoryFormSubmitted(form)) => {
                let transaction = TransactionData::from_form(&form, &provider);
                Stage::Payment {
                    provider,
                    form,
                    transaction,
                }
            }
            (
                Stage::Payment {
                    provider,
                    form,
                    transaction,
                },
                CheckoutEvent::PaymentSubmitted(payment),
            ) => {
                let transaction = transaction.with_payment(&payment)?;
                if !rules.auth_step {
                    return Ok(Self::completed(transaction, rules));
                }
                Stage::Auth {
                    provider,
                    form,
                    transaction,
                }
            }
            (Stage::Auth { transaction, .. }, CheckoutEvent::AuthCompleted(user)) => {
                return Ok(Self::completed(transaction.with_user(&user), rules));
            }
            (Stage::EnterDetails { .. }, CheckoutEvent::BackRequested { .. }) => {
                Stage::SelectService
            }
            // Only the form contribution is rolled back; the provider stays merged.
            (Stage::Payment { provider, .. }, CheckoutEvent::BackRequested { .. }) => {
                Stage::EnterDetails {
                    transaction: Some(TransactionData::from_provider(&provider)),
                    provider,
                }
            }
            (
                Stage::Auth {
                    provider,
                    form,
                    transaction,
                },
                CheckoutEvent::BackRequested { .. },
            ) => Stage::Payment {
                provider,
                form,
                transaction,
            },
            _ => return Ok(ignored()),
        };

        let state = Self {
            stage,
            locale: self.locale.clone(),
        };
        let to = state.step();
        Ok(Transition {
            state,
            outcome: Outcome::Moved { from, to },
        })
    }

    fn completed(transaction: TransactionData, rules: &FlowRules) -> Transition {
        Transition {
            state: Self::new(rules.default_locale.clone()),
            outcome: Outcome::Completed(transaction),
        }
    }
}
