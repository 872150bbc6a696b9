mod common;

use checkout_wizard::application::config::CheckoutConfig;
use checkout_wizard::application::controller::CheckoutController;
use checkout_wizard::domain::locale::Locale;
use checkout_wizard::domain::payment::PaymentData;
use checkout_wizard::domain::provider::{RawProvider, ServiceCategory};
use checkout_wizard::domain::record::Record;
use checkout_wizard::domain::state::CheckoutState;
use checkout_wizard::domain::step::Step;
use checkout_wizard::domain::view::Screen;
use common::{airtime_form, controller, vodacom};
use serde_json::json;

fn assert_no_orphan_data(controller: &CheckoutController) {
    let state = controller.state();
    assert_eq!(
        state.selected_provider().is_some(),
        state.step() != Step::SelectService,
        "provider presence must follow the step (at {})",
        state.step()
    );
    if state.step() == Step::Payment || state.step() == Step::Auth {
        assert!(state.form_data().is_some());
        assert!(state.transaction_data().is_some());
    }
}

#[tokio::test]
async fn test_scenario_select_and_submit_airtime() {
    let (mut controller, _) = controller(CheckoutConfig::default());

    let step = controller.on_provider_selected(vodacom()).await.unwrap();
    assert_eq!(step, Step::EnterDetails);

    let step = controller.on_category_form_submitted(airtime_form()).await.unwrap();
    assert_eq!(step, Step::Payment);
    assert_eq!(
        serde_json::to_value(controller.state().transaction_data().unwrap()).unwrap(),
        json!({
            "phoneNumber": "0551234",
            "amount": "10",
            "currency": "USD",
            "provider": {"id": "vodacom", "category": "Airtime"}
        })
    );
}

#[tokio::test]
async fn test_transaction_is_superset_of_form_plus_provider() {
    let (mut controller, _) = controller(CheckoutConfig::default());
    controller.on_provider_selected(vodacom()).await.unwrap();
    let form = airtime_form().with("note", "gift");
    controller.on_category_form_submitted(form.clone()).await.unwrap();

    let transaction = controller.state().transaction_data().unwrap();
    for key in form.keys() {
        assert_eq!(transaction.get(key), form.get(key));
    }
    assert!(transaction.contains_key("provider"));
    assert_eq!(transaction.keys().count(), form.len() + 1);
}

#[tokio::test]
async fn test_scenario_back_from_payment_keeps_provider() {
    let (mut controller, _) = controller(CheckoutConfig::default());
    controller.on_provider_selected(vodacom()).await.unwrap();
    controller.on_category_form_submitted(airtime_form()).await.unwrap();

    let step = controller.on_back_requested(Step::Payment).await.unwrap();

    assert_eq!(step, Step::EnterDetails);
    let state = controller.state();
    assert!(state.form_data().is_none());
    assert_eq!(state.selected_provider().unwrap().id, "vodacom");
    // Narrow rollback: only the form fields go, the provider contribution stays.
    assert_eq!(
        serde_json::to_value(state.transaction_data().unwrap()).unwrap(),
        json!({"provider": {"id": "vodacom", "category": "Airtime"}})
    );
    assert_no_orphan_data(&controller);
}

#[tokio::test]
async fn test_back_from_details_always_clears() {
    // Fresh selection.
    let (mut controller, _) = controller(CheckoutConfig::default());
    controller.on_provider_selected(vodacom()).await.unwrap();
    let step = controller.on_back_requested(Step::EnterDetails).await.unwrap();
    assert_eq!(step, Step::SelectService);
    assert!(controller.state().selected_provider().is_none());
    assert!(controller.state().transaction_data().is_none());

    // After a round trip through payment.
    controller.on_provider_selected(vodacom()).await.unwrap();
    controller.on_category_form_submitted(airtime_form()).await.unwrap();
    controller.on_back_requested(Step::Payment).await.unwrap();
    let step = controller.on_back_requested(Step::EnterDetails).await.unwrap();
    assert_eq!(step, Step::SelectService);
    assert!(controller.state().selected_provider().is_none());
    assert!(controller.state().transaction_data().is_none());
}

#[tokio::test]
async fn test_scenario_payment_completes_without_auth() {
    let (mut controller, sink) = controller(CheckoutConfig::default());
    controller.on_provider_selected(vodacom()).await.unwrap();
    controller.on_category_form_submitted(airtime_form()).await.unwrap();

    let step = controller
        .on_payment_submitted(PaymentData::mobile("0551234"))
        .await
        .unwrap();

    assert_eq!(step, Step::SelectService);
    assert_eq!(controller.state(), &CheckoutState::new(Locale::default()));
    let completed = sink.completed().await;
    assert_eq!(completed.len(), 1);
    assert_eq!(
        completed[0].get("payment"),
        Some(&json!({"method": "mobile", "mobileNumber": "0551234", "provider": "mpesa"}))
    );
    assert_eq!(completed[0].get_str("phoneNumber"), Some("0551234"));
}

#[tokio::test]
async fn test_scenario_auth_step_completes_with_user() {
    let (mut controller, sink) = controller(CheckoutConfig::default().with_auth_step(true));
    controller.on_provider_selected(vodacom()).await.unwrap();
    controller.on_category_form_submitted(airtime_form()).await.unwrap();

    let step = controller
        .on_payment_submitted(PaymentData::mobile("0551234"))
        .await
        .unwrap();
    assert_eq!(step, Step::Auth);
    assert!(sink.completed().await.is_empty());
    assert_no_orphan_data(&controller);

    let user = Record::new().with("id", "usr_1").with("name", "A");
    let step = controller.on_auth_completed(user).await.unwrap();

    assert_eq!(step, Step::SelectService);
    assert_eq!(controller.state(), &CheckoutState::new(Locale::default()));
    let completed = sink.completed().await;
    assert_eq!(completed.len(), 1);
    let mut keys: Vec<&str> = completed[0].keys().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["amount", "currency", "payment", "phoneNumber", "provider", "user"]
    );
    assert_eq!(completed[0].get("user"), Some(&json!({"id": "usr_1", "name": "A"})));
}

#[tokio::test]
async fn test_back_from_auth_retains_payment_and_resubmit_overwrites() {
    let (mut controller, sink) = controller(CheckoutConfig::default().with_auth_step(true));
    controller.on_provider_selected(vodacom()).await.unwrap();
    controller.on_category_form_submitted(airtime_form()).await.unwrap();
    controller
        .on_payment_submitted(PaymentData::mobile("0551234"))
        .await
        .unwrap();

    let step = controller.on_back_requested(Step::Auth).await.unwrap();
    assert_eq!(step, Step::Payment);
    assert!(controller.state().transaction_data().unwrap().contains_key("payment"));

    controller
        .on_payment_submitted(PaymentData::mobile("0209999999"))
        .await
        .unwrap();
    controller.on_auth_completed(Record::new().with("id", "usr_2")).await.unwrap();

    let completed = sink.completed().await;
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].get("payment").unwrap()["mobileNumber"], "0209999999");
}

#[tokio::test]
async fn test_scenario_unknown_category_falls_back_to_airtime() {
    let (mut controller, _) = controller(CheckoutConfig::default());
    let step = controller
        .on_provider_selected(RawProvider::new("x", "Unknown"))
        .await
        .unwrap();

    assert_eq!(step, Step::EnterDetails);
    match controller.view().screen {
        Screen::CategoryForm {
            category,
            fallback,
            provider,
        } => {
            assert_eq!(category, ServiceCategory::Airtime);
            assert!(fallback);
            assert_eq!(provider.id, "x");
        }
        other => panic!("unexpected screen {other:?}"),
    }
}

#[tokio::test]
async fn test_stale_events_are_ignored_at_every_step() {
    let (mut controller, sink) = controller(CheckoutConfig::default().with_auth_step(true));

    // At SelectService.
    let before = controller.state().clone();
    controller.on_category_form_submitted(airtime_form()).await.unwrap();
    controller.on_payment_submitted(PaymentData::mobile("1")).await.unwrap();
    controller.on_auth_completed(Record::new()).await.unwrap();
    controller.on_back_requested(Step::Payment).await.unwrap();
    assert_eq!(controller.state(), &before);

    // At EnterDetails.
    controller.on_provider_selected(vodacom()).await.unwrap();
    let before = controller.state().clone();
    controller
        .on_provider_selected(RawProvider::new("gtp", "Transfers"))
        .await
        .unwrap();
    controller.on_payment_submitted(PaymentData::mobile("1")).await.unwrap();
    controller.on_back_requested(Step::Auth).await.unwrap();
    assert_eq!(controller.state(), &before);

    // At Payment: a late form submission after navigating forward.
    controller.on_category_form_submitted(airtime_form()).await.unwrap();
    let before = controller.state().clone();
    controller
        .on_category_form_submitted(Record::new().with("amount", "999"))
        .await
        .unwrap();
    controller.on_back_requested(Step::EnterDetails).await.unwrap();
    assert_eq!(controller.state(), &before);

    // At Auth.
    controller.on_payment_submitted(PaymentData::mobile("1")).await.unwrap();
    let before = controller.state().clone();
    controller.on_payment_submitted(PaymentData::mobile("2")).await.unwrap();
    controller.on_back_requested(Step::Payment).await.unwrap();
    assert_eq!(controller.state(), &before);

    assert!(sink.completed().await.is_empty());
}

#[tokio::test]
async fn test_locale_is_pass_through() {
    let (mut controller, _) = controller(CheckoutConfig::default());
    controller.on_locale_changed(Locale::new("fr")).await.unwrap();
    controller.on_provider_selected(vodacom()).await.unwrap();

    assert_eq!(controller.view().locale, Locale::new("fr"));
    assert_eq!(controller.step(), Step::EnterDetails);
}

#[tokio::test]
async fn test_completion_restores_configured_default_locale() {
    let config = CheckoutConfig::default().with_default_locale(Locale::new("sw"));
    let (mut controller, sink) = controller(config);

    controller.on_locale_changed(Locale::new("fr")).await.unwrap();
    controller.on_provider_selected(vodacom()).await.unwrap();
    controller.on_category_form_submitted(airtime_form()).await.unwrap();
    assert_eq!(controller.state().locale(), &Locale::new("fr"));

    controller
        .on_payment_submitted(PaymentData::mobile("0551234"))
        .await
        .unwrap();

    assert_eq!(sink.completed().await.len(), 1);
    assert_eq!(controller.state(), &CheckoutState::new(Locale::new("sw")));
    assert_eq!(controller.view().locale, Locale::new("sw"));
}

#[tokio::test]
async fn test_payment_view_shows_form_amount() {
    let (mut controller, _) = controller(CheckoutConfig::default());
    controller.on_provider_selected(vodacom()).await.unwrap();
    controller
        .on_category_form_submitted(Record::new().with("amount", "12.50"))
        .await
        .unwrap();

    let Screen::PaymentForm(summary) = controller.view().screen else {
        panic!("expected the payment form");
    };
    assert_eq!(summary.amount.map(|a| a.to_string()), Some("12.50".to_string()));
    assert_eq!(summary.currency, "USD");
}
