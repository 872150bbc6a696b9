use serde::{Deserialize, Serialize};
use std::fmt;

/// The screen currently shown by the checkout wizard.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    #[default]
    SelectService,
    EnterDetails,
    Payment,
    Auth,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::SelectService => "select-service",
            Step::EnterDetails => "enter-details",
            Step::Payment => "payment",
            Step::Auth => "auth",
        };
        f.write_str(name)
    }
}
