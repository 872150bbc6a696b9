//! Typed payloads for the category data-entry forms.
//!
//! The controller treats form output as an opaque [`FormData`] record; these
//! types only give hosts a convenient way to build well-shaped submissions.

use super::provider::ServiceCategory;
use super::record::{FormData, Record};
use crate::error::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

pub trait CategoryForm: Serialize {
    /// The category whose `Screen::CategoryForm` renders this form.
    const CATEGORY: ServiceCategory;

    fn into_form_data(self) -> Result<FormData>
    where
        Self: Sized,
    {
        Record::from_serializable(&self)
    }
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AirtimeForm {
    pub phone_number: String,
    pub amount: Decimal,
    pub currency: String,
}

impl CategoryForm for AirtimeForm {
    const CATEGORY: ServiceCategory = ServiceCategory::Airtime;
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransferForm {
    pub account_number: String,
    pub amount: Decimal,
    pub currency: String,
    pub description: String,
}

impl CategoryForm for TransferForm {
    const CATEGORY: ServiceCategory = ServiceCategory::Transfers;
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UtilityForm {
    pub meter_number: String,
    pub amount: Decimal,
    pub currency: String,
}

impl CategoryForm for UtilityForm {
    const CATEGORY: ServiceCategory = ServiceCategory::Utilities;
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    #[default]
    Economy,
    Business,
    First,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct AirlineForm {
    pub from: String,
    pub to: String,
    pub date: String,
    pub passengers: u32,
    pub class: CabinClass,
}

impl CategoryForm for AirlineForm {
    const CATEGORY: ServiceCategory = ServiceCategory::Airlines;
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReservationForm {
    pub date: String,
    pub time: String,
    pub guests: u32,
    pub special_requests: String,
}

impl CategoryForm for ReservationForm {
    const CATEGORY: ServiceCategory = ServiceCategory::Reservations;
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    #[default]
    Data,
    Wifi,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct InternetPlan {
    pub id: &'static str,
    pub name: &'static str,
    /// Validity period for data bundles, line speed for wifi packages.
    pub detail: &'static str,
    pub price: Decimal,
}

pub static DATA_PLANS: [InternetPlan; 4] = [
    InternetPlan { id: "1gb", name: "1GB", detail: "24 Hours", price: dec!(1) },
    InternetPlan { id: "5gb", name: "5GB", detail: "7 Days", price: dec!(5) },
    InternetPlan { id: "10gb", name: "10GB", detail: "30 Days", price: dec!(10) },
    InternetPlan { id: "unlimited", name: "Unlimited", detail: "30 Days", price: dec!(30) },
];

pub static WIFI_PLANS: [InternetPlan; 4] = [
    InternetPlan { id: "basic", name: "Basic", detail: "10 Mbps", price: dec!(20) },
    InternetPlan { id: "standard", name: "Standard", detail: "25 Mbps", price: dec!(35) },
    InternetPlan { id: "premium", name: "Premium", detail: "50 Mbps", price: dec!(50) },
    InternetPlan { id: "ultra", name: "Ultra", detail: "100 Mbps", price: dec!(75) },
];

impl PackageType {
    pub fn plans(&self) -> &'static [InternetPlan] {
        match self {
            PackageType::Data => &DATA_PLANS,
            PackageType::Wifi => &WIFI_PLANS,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InternetForm {
    pub phone_number: String,
    pub package_type: PackageType,
    pub plan: String,
    pub amount: Decimal,
    pub currency: String,
}

impl InternetForm {
    /// Picking a plan fixes both the plan id and the amount.
    pub fn for_plan(
        phone_number: impl Into<String>,
        package_type: PackageType,
        plan: &InternetPlan,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            package_type,
            plan: plan.id.to_string(),
            amount: plan.price,
            currency: super::payment::DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl CategoryForm for InternetForm {
    const CATEGORY: ServiceCategory = ServiceCategory::Internet;
}
