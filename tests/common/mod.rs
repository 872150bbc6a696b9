#![allow(dead_code)]

use checkout_wizard::application::config::CheckoutConfig;
use checkout_wizard::application::controller::CheckoutController;
use checkout_wizard::domain::provider::RawProvider;
use checkout_wizard::domain::record::{FormData, Record};
use checkout_wizard::infrastructure::in_memory::InMemorySink;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub fn write_script(lines: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    for line in lines {
        writeln!(file, "{line}")?;
    }
    file.flush()?;
    Ok(file)
}

pub fn controller(config: CheckoutConfig) -> (CheckoutController, InMemorySink) {
    let sink = InMemorySink::new();
    let controller = CheckoutController::new(config, Box::new(sink.clone()));
    (controller, sink)
}

pub fn vodacom() -> RawProvider {
    RawProvider::new("vodacom", "Airtime")
}

pub fn airtime_form() -> FormData {
    Record::new()
        .with("phoneNumber", "0551234")
        .with("amount", "10")
        .with("currency", "USD")
}

pub const SELECT_VODACOM: &str =
    r#"{"event":"select","provider":{"id":"vodacom","category":"Airtime"}}"#;
pub const SUBMIT_AIRTIME: &str = r#"{"event":"submit_form","data":{"phoneNumber":"0551234","amount":"10","currency":"USD"}}"#;
pub const SUBMIT_MOBILE: &str =
    r#"{"event":"submit_payment","data":{"method":"mobile","mobileNumber":"0551234"}}"#;
