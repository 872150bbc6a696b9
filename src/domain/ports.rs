use super::locale::Locale;
use super::provider::{RawProvider, ServiceCategory};
use super::record::UserData;
use super::transaction::TransactionData;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Receives each completed transaction exactly once.
#[async_trait]
pub trait TransactionSink: Send + Sync {
    async fn emit(&self, transaction: TransactionData) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// Credentials collected by the authentication step.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthRequest {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub phone_number: String,
}

/// The authentication collaborator. Resolves once with a mergeable identity.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(
        &self,
        transaction: &TransactionData,
        request: AuthRequest,
    ) -> Result<UserData>;
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CatalogProvider {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CatalogCategory {
    pub category: ServiceCategory,
    pub providers: Vec<CatalogProvider>,
}

impl CatalogCategory {
    /// The selection value for one of this category's providers, tagged with the category.
    pub fn select(&self, provider_id: &str) -> Option<RawProvider> {
        self.providers
            .iter()
            .find(|provider| provider.id == provider_id)
            .map(|provider| RawProvider {
                name: Some(provider.name.to_string()),
                ..RawProvider::new(provider.id, self.category.label())
            })
    }
}

/// The service catalog collaborator.
pub trait ServiceCatalog: Send + Sync {
    fn categories(&self, locale: &Locale) -> Vec<CatalogCategory>;

    fn find(&self, locale: &Locale, provider_id: &str) -> Option<RawProvider> {
        self.categories(locale)
            .iter()
            .find_map(|category| category.select(provider_id))
    }
}

pub type TransactionSinkBox = Box<dyn TransactionSink>;
pub type AuthenticatorBox = Box<dyn Authenticator>;
pub type ServiceCatalogBox = Box<dyn ServiceCatalog>;
