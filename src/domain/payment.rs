use super::record::FormData;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_MOBILE_PROVIDER: &str = "mpesa";

/// Output of the payment-method form, discriminated by `method`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum PaymentData {
    Mobile(MobileMoney),
    Card(CardDetails),
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MobileMoney {
    pub mobile_number: String,
    #[serde(default = "default_mobile_provider")]
    pub provider: String,
}

fn default_mobile_provider() -> String {
    DEFAULT_MOBILE_PROVIDER.to_string()
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    #[serde(default)]
    pub save_card: bool,
}

impl PaymentData {
    pub fn mobile(mobile_number: impl Into<String>) -> Self {
        PaymentData::Mobile(MobileMoney {
            mobile_number: mobile_number.into(),
            provider: default_mobile_provider(),
        })
    }
}

/// What the payment form is shown: the amount and currency from the details step.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentSummary {
    pub amount: Option<Decimal>,
    pub currency: String,
}

impl PaymentSummary {
    /// Reads `amount` (number or numeric string) and `currency` from a form.
    /// An absent or blank currency means USD.
    pub fn from_form(form: &FormData) -> Self {
        let amount = match form.get("amount") {
            Some(Value::Number(n)) => Decimal::from_str(&n.to_string()).ok(),
            Some(Value::String(s)) => Decimal::from_str(s.trim()).ok(),
            _ => None,
        };
        let currency = form
            .get_str("currency")
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
            .to_string();
        Self { amount, currency }
    }
}

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Groups the first 4 to 16 digits in blocks of four.
///
/// Input with fewer than four digits is returned unchanged.
pub fn format_card_number(value: &str) -> String {
    let digits = digits(value);
    if digits.len() < 4 {
        return value.to_string();
    }
    let digits = &digits[..digits.len().min(16)];
    digits
        .as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders `MMYY` digits as `MM/YY` once more than two digits are typed.
pub fn format_expiry_date(value: &str) -> String {
    let digits = digits(value);
    if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..digits.len().min(4)])
    } else {
        digits
    }
}

pub fn validate_mobile_number(number: &str) -> bool {
    let compact: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    (10..=12).contains(&compact.len()) && compact.chars().all(|c| c.is_ascii_digit())
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct CardValidation {
    pub errors: BTreeMap<&'static str, &'static str>,
}

impl CardValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks card number length, expiry (relative to `today`) and CVV.
pub fn validate_card(card: &CardDetails, today: NaiveDate) -> CardValidation {
    let mut errors = BTreeMap::new();

    let number: String = card.card_number.chars().filter(|c| !c.is_whitespace()).collect();
    if number.len() < 13 {
        errors.insert("cardNumber", "Please enter a valid card number");
    }

    match parse_expiry(&card.expiry_date) {
        None => {
            errors.insert("expiryDate", "Please enter a valid expiry date");
        }
        Some((month, year)) => {
            let current_year = (today.year() % 100) as u32;
            if year < current_year || (year == current_year && month < today.month()) {
                errors.insert("expiryDate", "Card has expired");
            }
        }
    }

    let cvv = card.cvv.as_str();
    if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
        errors.insert("cvv", "Please enter a valid CVV");
    }

    CardValidation { errors }
}

fn parse_expiry(value: &str) -> Option<(u32, u32)> {
    let (month, year) = value.split_once('/')?;
    let two_digits = |part: &str| part.len() == 2 && part.chars().all(|c| c.is_ascii_digit());
    if !two_digits(month) || !two_digits(year) {
        return None;
    }
    let month: u32 = month.parse().ok()?;
    let year: u32 = year.parse().ok()?;
    (1..=12).contains(&month).then_some((month, year))
}
