use super::payment::PaymentData;
use super::provider::SelectedProvider;
use super::record::{FormData, Record, UserData};
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

pub const PROVIDER_KEY: &str = "provider";
pub const PAYMENT_KEY: &str = "payment";
pub const USER_KEY: &str = "user";

/// The record accumulated across the wizard's steps.
///
/// Form fields sit at the top level; the provider, payment and user
/// contributions live under their own keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TransactionData(Record);

impl TransactionData {
    /// Only the provider contribution, as left behind after backing out of payment.
    pub fn from_provider(provider: &SelectedProvider) -> Self {
        Self(Record::new().with(PROVIDER_KEY, provider.to_value()))
    }

    /// `merge(form, {provider})`.
    pub fn from_form(form: &FormData, provider: &SelectedProvider) -> Self {
        let mut record = form.clone();
        record.insert(PROVIDER_KEY, provider.to_value());
        Self(record)
    }

    pub fn with_payment(mut self, payment: &PaymentData) -> Result<Self> {
        let value = serde_json::to_value(payment)?;
        self.0.insert(PAYMENT_KEY, value);
        Ok(self)
    }

    pub fn with_user(mut self, user: &UserData) -> Self {
        self.0.insert(USER_KEY, Value::from(user.clone()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get_str(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys()
    }
}
