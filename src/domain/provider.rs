use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use std::str::FromStr;

/// The kind of service a provider belongs to. Selects the data-entry form.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ServiceCategory {
    Airtime,
    Airlines,
    Reservations,
    Utilities,
    Transfers,
    Internet,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 6] = [
        ServiceCategory::Airtime,
        ServiceCategory::Airlines,
        ServiceCategory::Transfers,
        ServiceCategory::Reservations,
        ServiceCategory::Internet,
        ServiceCategory::Utilities,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Airtime => "Airtime",
            ServiceCategory::Airlines => "Airlines",
            ServiceCategory::Reservations => "Reservations",
            ServiceCategory::Utilities => "Utilities",
            ServiceCategory::Transfers => "Transfers",
            ServiceCategory::Internet => "Internet",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive, synonym-tolerant parsing of a category discriminator.
impl FromStr for ServiceCategory {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "airtime" => Ok(ServiceCategory::Airtime),
            "airline" | "airlines" | "flight" | "flights" => Ok(ServiceCategory::Airlines),
            "reservation" | "reservations" | "booking" | "bookings" => {
                Ok(ServiceCategory::Reservations)
            }
            "utility" | "utilities" => Ok(ServiceCategory::Utilities),
            "transfer" | "transfers" => Ok(ServiceCategory::Transfers),
            "internet" | "data" | "wifi" => Ok(ServiceCategory::Internet),
            _ => Err(CheckoutError::UnknownCategory(s.to_string())),
        }
    }
}

/// A provider exactly as handed over by the catalog collaborator.
///
/// Different catalog revisions key the discriminator as `category`, `type` or
/// `serviceId`; all three are accepted here and collapsed by
/// [`SelectedProvider::normalize`].
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Default)]
pub struct RawProvider {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, rename = "serviceId", skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
}

impl RawProvider {
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: Some(category.into()),
            ..Default::default()
        }
    }

    /// First non-blank discriminator, in `category`, `type`, `serviceId` order.
    pub fn discriminator(&self) -> Option<&str> {
        [&self.category, &self.kind, &self.service_id]
            .into_iter()
            .filter_map(|key| key.as_deref())
            .map(str::trim)
            .find(|value| !value.is_empty())
    }
}

/// The canonical provider record owned by the controller.
#[derive(Debug, PartialEq, Clone)]
pub struct SelectedProvider {
    pub id: String,
    pub name: Option<String>,
    /// `None` when the discriminator was missing or not recognised.
    pub category: Option<ServiceCategory>,
    /// The discriminator as the catalog supplied it.
    pub discriminator: Option<String>,
}

impl SelectedProvider {
    pub fn normalize(raw: RawProvider) -> Self {
        let discriminator = raw.discriminator().map(str::to_string);
        let category = discriminator
            .as_deref()
            .and_then(|value| value.parse::<ServiceCategory>().ok());
        Self {
            id: raw.id,
            name: raw.name,
            category,
            discriminator,
        }
    }

    /// The category label carried into the transaction record.
    pub fn category_label(&self) -> Option<&str> {
        match self.category {
            Some(category) => Some(category.label()),
            None => self.discriminator.as_deref(),
        }
    }

    pub fn to_value(&self) -> Value {
        let mut value = json!({ "id": self.id });
        if let Some(name) = &self.name {
            value["name"] = json!(name);
        }
        if let Some(category) = self.category_label() {
            value["category"] = json!(category);
        }
        value
    }
}
