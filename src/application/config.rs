use crate::domain::locale::Locale;
use crate::domain::state::FlowRules;
use serde::{Deserialize, Serialize};

/// What to do with a provider whose category cannot be recognised.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownCategoryPolicy {
    /// Accept the provider and show the airtime form.
    #[default]
    Fallback,
    /// Refuse the selection with `CheckoutError::UnknownCategory`.
    Reject,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(default, rename_all = "kebab-case")]
pub struct CheckoutConfig {
    pub auth_step: bool,
    pub unknown_category: UnknownCategoryPolicy,
    pub default_locale: Locale,
}

impl CheckoutConfig {
    pub fn with_auth_step(mut self, enabled: bool) -> Self {
        self.auth_step = enabled;
        self
    }

    pub fn with_unknown_category(mut self, policy: UnknownCategoryPolicy) -> Self {
        self.unknown_category = policy;
        self
    }

    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    pub fn flow_rules(&self) -> FlowRules {
        FlowRules {
            auth_step: self.auth_step,
            default_locale: self.default_locale.clone(),
        }
    }
}
