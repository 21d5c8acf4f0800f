// Integration tests for the monetary-correction surface: the rate series
// endpoints, the correction calculation, its notifications and the history.

use std::sync::Arc;

use actix_web::{test, App};
use chrono::{Months, Utc};
use serde_json::{json, Value};

use recupera::bootstrap::{configure_api, Services};
use recupera::config::ListingConfig;
use recupera::core::notify::{MemoryNotifier, NotificationKind};

macro_rules! call {
    ($app:expr, $req:expr) => {
        test::call_service($app, $req.to_request()).await
    };
}

fn app_services() -> Services {
    Services::in_memory(ListingConfig::default())
}

/// Six monthly rates of 1,00% so the accumulated index at month six is 6,00%.
fn flat_series_payload(months: usize) -> Value {
    let rates: Vec<Value> = (1..=months)
        .map(|month| json!({"reference": format!("{:02}/2024", month), "monthly_rate": "1.0"}))
        .collect();
    json!({ "rates": rates })
}

fn iso_months_ago(months: u32) -> String {
    let date = Utc::now().date_naive() - Months::new(months);
    date.format("%Y-%m-%d").to_string()
}

#[actix_web::test]
async fn test_bundled_series_is_served() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let resp = call!(&app, test::TestRequest::get().uri("/selic"));
    assert_eq!(resp.status(), 200);

    let series: Value = test::read_body_json(resp).await;
    assert_eq!(series["months"], 30);

    let rates = series["rates"].as_array().unwrap();
    assert_eq!(rates[0]["reference"], "01/2023");

    // Accumulated column is monotonically non-decreasing
    let accumulated: Vec<f64> = rates
        .iter()
        .map(|r| r["accumulated"].as_str().unwrap().parse().unwrap())
        .collect();
    for pair in accumulated.windows(2) {
        assert!(pair[1] >= pair[0]);
    }
}

#[actix_web::test]
async fn test_correction_reference_scenario() {
    let notifier = Arc::new(MemoryNotifier::new());
    let services = Services::with_notifier(ListingConfig::default(), notifier.clone());
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let resp = call!(
        &app,
        test::TestRequest::put()
            .uri("/selic")
            .set_json(flat_series_payload(6))
    );
    assert_eq!(resp.status(), 200);
    let series: Value = test::read_body_json(resp).await;
    assert_eq!(series["months"], 6);

    let resp = call!(
        &app,
        test::TestRequest::post().uri("/corrections").set_json(json!({
            "original_value": "15000.00",
            "origination_date": iso_months_ago(6)
        }))
    );
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["correction"]["corrected_value"], "15900.00");
    assert_eq!(body["correction"]["difference"], "900.00");
    assert_eq!(body["correction"]["elapsed_months"], 6);
    assert_eq!(body["correction"]["accumulated_rate"], "6.0");
    assert_eq!(body["correction"]["series_exhausted"], false);
    assert!(body["warning"].is_null());
    assert_eq!(
        body["message"],
        "Correção calculada: original R$ 15.000,00 → corrigido R$ 15.900,00"
    );

    // The toast collaborator received the same message
    let messages = notifier.messages();
    assert!(messages.contains(&(
        NotificationKind::Success,
        "Correção calculada: original R$ 15.000,00 → corrigido R$ 15.900,00".to_string()
    )));
}

#[actix_web::test]
async fn test_future_origination_creates_nothing() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let tomorrow = (Utc::now().date_naive() + chrono::Days::new(1))
        .format("%Y-%m-%d")
        .to_string();

    let resp = call!(
        &app,
        test::TestRequest::post().uri("/corrections").set_json(json!({
            "original_value": "1000.00",
            "origination_date": tomorrow
        }))
    );
    assert_eq!(resp.status(), 400);

    let resp = call!(&app, test::TestRequest::get().uri("/corrections"));
    let history: Value = test::read_body_json(resp).await;
    assert_eq!(history["total_items"], 0);
}

#[actix_web::test]
async fn test_exhausted_series_warns_and_clamps() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let resp = call!(
        &app,
        test::TestRequest::put()
            .uri("/selic")
            .set_json(flat_series_payload(2))
    );
    assert_eq!(resp.status(), 200);

    let resp = call!(
        &app,
        test::TestRequest::post().uri("/corrections").set_json(json!({
            "original_value": "15000.00",
            "origination_date": iso_months_ago(6)
        }))
    );
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["correction"]["series_exhausted"], true);
    assert_eq!(body["correction"]["accumulated_rate"], "2.0");
    assert_eq!(body["correction"]["corrected_value"], "15300.00");
    assert!(body["warning"]
        .as_str()
        .unwrap()
        .contains("2 de 6 meses"));
}

#[actix_web::test]
async fn test_series_replacement_is_validated() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let resp = call!(
        &app,
        test::TestRequest::put()
            .uri("/selic")
            .set_json(json!({"rates": []}))
    );
    assert_eq!(resp.status(), 400);

    let out_of_order = json!({"rates": [
        {"reference": "02/2024", "monthly_rate": "1.0"},
        {"reference": "01/2024", "monthly_rate": "1.0"}
    ]});
    let resp = call!(
        &app,
        test::TestRequest::put().uri("/selic").set_json(out_of_order)
    );
    assert_eq!(resp.status(), 400);

    let negative = json!({"rates": [{"reference": "01/2024", "monthly_rate": "-0.5"}]});
    let resp = call!(
        &app,
        test::TestRequest::put().uri("/selic").set_json(negative)
    );
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_history_filters_by_credit() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let resp = call!(
        &app,
        test::TestRequest::post().uri("/clients").set_json(json!({
            "name": "Comércio Silva Ltda",
            "document": "12.345.678/0001-90",
            "client_type": "privado"
        }))
    );
    let client: Value = test::read_body_json(resp).await;
    let client_id = client["id"].as_str().unwrap().to_string();

    let resp = call!(
        &app,
        test::TestRequest::post().uri("/credits").set_json(json!({
            "client_id": client_id,
            "credit_type": "irrf",
            "credit_amount": "15000.00",
            "original_amount": "15000.00",
            "period_start": "01/01/2024",
            "period_end": "31/12/2024"
        }))
    );
    let credit: Value = test::read_body_json(resp).await;
    let credit_id = credit["id"].as_str().unwrap().to_string();

    // One correction tied to the credit, one standalone
    let resp = call!(
        &app,
        test::TestRequest::post().uri("/corrections").set_json(json!({
            "credit_id": credit_id,
            "original_value": "15000.00",
            "origination_date": iso_months_ago(6)
        }))
    );
    assert_eq!(resp.status(), 201);

    let resp = call!(
        &app,
        test::TestRequest::post().uri("/corrections").set_json(json!({
            "original_value": "2000.00",
            "origination_date": iso_months_ago(3)
        }))
    );
    assert_eq!(resp.status(), 201);

    let resp = call!(&app, test::TestRequest::get().uri("/corrections"));
    let history: Value = test::read_body_json(resp).await;
    assert_eq!(history["total_items"], 2);

    // Newest first: the standalone correction came last
    assert!(history["items"][0]["credit_id"].is_null());

    let resp = call!(
        &app,
        test::TestRequest::get().uri(&format!("/corrections?credit_id={}", credit_id))
    );
    let filtered: Value = test::read_body_json(resp).await;
    assert_eq!(filtered["total_items"], 1);
    assert_eq!(filtered["items"][0]["credit_id"], *credit_id);

    // Correcting against an unknown credit is refused
    let resp = call!(
        &app,
        test::TestRequest::post().uri("/corrections").set_json(json!({
            "credit_id": "nao-existe",
            "original_value": "1000.00",
            "origination_date": iso_months_ago(3)
        }))
    );
    assert_eq!(resp.status(), 404);
}
