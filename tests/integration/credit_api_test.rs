// Integration tests for the tax-credit surface: creation with denormalized
// client data, permissive status changes and the summary aggregation.

use actix_web::{test, App};
use serde_json::{json, Value};

use recupera::bootstrap::{configure_api, Services};
use recupera::config::ListingConfig;

fn app_services() -> Services {
    Services::in_memory(ListingConfig::default())
}

macro_rules! call {
    ($app:expr, $req:expr) => {
        test::call_service($app, $req.to_request()).await
    };
}

async fn create_client(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    name: &str,
    document: &str,
) -> String {
    let resp = call!(
        app,
        test::TestRequest::post().uri("/clients").set_json(json!({
            "name": name,
            "document": document,
            "client_type": "privado"
        }))
    );
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    body["id"].as_str().unwrap().to_string()
}

fn credit_payload(client_id: &str, amount: i64) -> Value {
    json!({
        "client_id": client_id,
        "credit_type": "pis_cofins",
        "credit_amount": amount,
        "original_amount": amount,
        "period_start": "01/01/2024",
        "period_end": "2024-12-31"
    })
}

#[actix_web::test]
async fn test_create_credit_copies_client_data() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let client_id = create_client(&app, "Comércio Silva Ltda", "12.345.678/0001-90").await;

    let resp = call!(
        &app,
        test::TestRequest::post()
            .uri("/credits")
            .set_json(credit_payload(&client_id, 15000))
    );
    assert_eq!(resp.status(), 201);

    let credit: Value = test::read_body_json(resp).await;
    assert_eq!(credit["client_name"], "Comércio Silva Ltda");
    assert_eq!(credit["document_number"], "12.345.678/0001-90");
    assert_eq!(credit["status"], "pending");
    assert_eq!(credit["period_start"], "01/01/2024");
    assert_eq!(credit["period_end"], "31/12/2024");
}

#[actix_web::test]
async fn test_create_credit_for_unknown_client() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let resp = call!(
        &app,
        test::TestRequest::post()
            .uri("/credits")
            .set_json(credit_payload("nao-existe", 1000))
    );
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_create_credit_validation_errors() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let client_id = create_client(&app, "Comércio Silva Ltda", "12.345.678/0001-90").await;

    let mut negative = credit_payload(&client_id, 1000);
    negative["credit_amount"] = json!(-50);
    let resp = call!(
        &app,
        test::TestRequest::post().uri("/credits").set_json(negative)
    );
    assert_eq!(resp.status(), 400);

    let mut inverted = credit_payload(&client_id, 1000);
    inverted["period_start"] = json!("31/12/2024");
    inverted["period_end"] = json!("01/01/2024");
    let resp = call!(
        &app,
        test::TestRequest::post().uri("/credits").set_json(inverted)
    );
    assert_eq!(resp.status(), 400);

    let mut bad_date = credit_payload(&client_id, 1000);
    bad_date["period_start"] = json!("ontem");
    let resp = call!(
        &app,
        test::TestRequest::post().uri("/credits").set_json(bad_date)
    );
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_status_change_is_permissive() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let client_id = create_client(&app, "Comércio Silva Ltda", "12.345.678/0001-90").await;
    let resp = call!(
        &app,
        test::TestRequest::post()
            .uri("/credits")
            .set_json(credit_payload(&client_id, 1000))
    );
    let credit: Value = test::read_body_json(resp).await;
    let id = credit["id"].as_str().unwrap().to_string();

    let resp = call!(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/credits/{}/status", id))
            .set_json(json!({"status": "rejected"}))
    );
    assert_eq!(resp.status(), 200);

    // Reclassification from a terminal status is allowed
    let resp = call!(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/credits/{}/status", id))
            .set_json(json!({"status": "recovered"}))
    );
    assert_eq!(resp.status(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["status"], "recovered");
}

#[actix_web::test]
async fn test_summary_reference_scenario() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let client_id = create_client(&app, "Comércio Silva Ltda", "12.345.678/0001-90").await;

    let mut ids = Vec::new();
    for amount in [100, 200, 300, 50] {
        let resp = call!(
            &app,
            test::TestRequest::post()
                .uri("/credits")
                .set_json(credit_payload(&client_id, amount))
        );
        let credit: Value = test::read_body_json(resp).await;
        ids.push(credit["id"].as_str().unwrap().to_string());
    }

    for (id, status) in ids.iter().zip(["pending", "approved", "approved", "rejected"]) {
        let resp = call!(
            &app,
            test::TestRequest::patch()
                .uri(&format!("/credits/{}/status", id))
                .set_json(json!({ "status": status }))
        );
        assert_eq!(resp.status(), 200);
    }

    let resp = call!(&app, test::TestRequest::get().uri("/credits/summary"));
    assert_eq!(resp.status(), 200);

    let summary: Value = test::read_body_json(resp).await;
    assert_eq!(summary["total"], 4);
    assert_eq!(summary["pending"], 1);
    assert_eq!(summary["approved"], 2);
    assert_eq!(summary["rejected"], 1);
    assert_eq!(summary["approved_amount"], "500");
    assert_eq!(summary["total_amount"], "650");
}

#[actix_web::test]
async fn test_list_filters() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let silva = create_client(&app, "Comércio Silva Ltda", "12.345.678/0001-90").await;
    let padaria = create_client(&app, "Padaria Central", "98.765.432/0001-10").await;

    for (client_id, credit_type) in
        [(&silva, "pis_cofins"), (&silva, "irrf"), (&padaria, "pis_cofins")]
    {
        let mut payload = credit_payload(client_id, 1000);
        payload["credit_type"] = json!(credit_type);
        let resp = call!(&app, test::TestRequest::post().uri("/credits").set_json(payload));
        assert_eq!(resp.status(), 201);
    }

    let resp = call!(
        &app,
        test::TestRequest::get().uri("/credits?search=silva&credit_type=pis_cofins")
    );
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["total_items"], 1);

    let resp = call!(&app, test::TestRequest::get().uri("/credits?status=pending"));
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["total_items"], 3);
}

#[actix_web::test]
async fn test_delete_credit() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let client_id = create_client(&app, "Comércio Silva Ltda", "12.345.678/0001-90").await;
    let resp = call!(
        &app,
        test::TestRequest::post()
            .uri("/credits")
            .set_json(credit_payload(&client_id, 1000))
    );
    let credit: Value = test::read_body_json(resp).await;
    let id = credit["id"].as_str().unwrap().to_string();

    let resp = call!(
        &app,
        test::TestRequest::delete().uri(&format!("/credits/{}", id))
    );
    assert_eq!(resp.status(), 204);

    let resp = call!(
        &app,
        test::TestRequest::get().uri(&format!("/credits/{}", id))
    );
    assert_eq!(resp.status(), 404);
}
