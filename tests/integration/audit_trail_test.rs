// Integration tests for the audit trail: every mutation appends one event,
// actor identity comes from the request headers, and the listing filters
// combine.

use actix_web::{test, App};
use chrono::Utc;
use serde_json::{json, Value};

use recupera::bootstrap::{configure_api, Services};
use recupera::config::ListingConfig;

macro_rules! call {
    ($app:expr, $req:expr) => {
        test::call_service($app, $req.to_request()).await
    };
}

fn app_services() -> Services {
    Services::in_memory(ListingConfig::default())
}

fn client_payload() -> Value {
    json!({
        "name": "Comércio Silva Ltda",
        "document": "12.345.678/0001-90",
        "client_type": "privado"
    })
}

#[actix_web::test]
async fn test_mutations_append_attributed_events() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let resp = call!(
        &app,
        test::TestRequest::post()
            .uri("/clients")
            .insert_header(("X-User", "maria.souza"))
            .insert_header(("X-User-Role", "analista"))
            .set_json(client_payload())
    );
    assert_eq!(resp.status(), 201);
    let client: Value = test::read_body_json(resp).await;
    let client_id = client["id"].as_str().unwrap().to_string();

    let resp = call!(
        &app,
        test::TestRequest::post()
            .uri("/credits")
            .insert_header(("X-User", "maria.souza"))
            .set_json(json!({
                "client_id": client_id,
                "credit_type": "csll",
                "credit_amount": 1000,
                "original_amount": 1000,
                "period_start": "01/01/2024",
                "period_end": "31/12/2024"
            }))
    );
    assert_eq!(resp.status(), 201);
    let credit: Value = test::read_body_json(resp).await;
    let credit_id = credit["id"].as_str().unwrap().to_string();

    // Status change without user headers is attributed to the system
    let resp = call!(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/credits/{}/status", credit_id))
            .set_json(json!({"status": "approved"}))
    );
    assert_eq!(resp.status(), 200);

    let resp = call!(&app, test::TestRequest::get().uri("/audit"));
    assert_eq!(resp.status(), 200);
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["total_items"], 3);

    // Newest first: the status change leads
    let newest = &page["items"][0];
    assert_eq!(newest["action"], "status_change");
    assert_eq!(newest["actor"], "sistema");
    assert_eq!(newest["previous_status"], "pending");
    assert_eq!(newest["new_status"], "approved");

    let oldest = &page["items"][2];
    assert_eq!(oldest["action"], "create");
    assert_eq!(oldest["resource_type"], "client");
    assert_eq!(oldest["actor"], "maria.souza");
    assert_eq!(oldest["actor_role"], "analista");
}

#[actix_web::test]
async fn test_listing_filters_combine() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let resp = call!(
        &app,
        test::TestRequest::post()
            .uri("/clients")
            .insert_header(("X-User", "maria.souza"))
            .set_json(client_payload())
    );
    let client: Value = test::read_body_json(resp).await;
    let client_id = client["id"].as_str().unwrap().to_string();

    let resp = call!(
        &app,
        test::TestRequest::put()
            .uri(&format!("/clients/{}", client_id))
            .insert_header(("X-User", "joao.lima"))
            .set_json(json!({"segment": "indústria"}))
    );
    assert_eq!(resp.status(), 200);

    let resp = call!(
        &app,
        test::TestRequest::get().uri("/audit?action=update")
    );
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["total_items"], 1);
    assert_eq!(page["items"][0]["actor"], "joao.lima");

    let resp = call!(
        &app,
        test::TestRequest::get().uri("/audit?actor=maria.souza&resource_type=client")
    );
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["total_items"], 1);
    assert_eq!(page["items"][0]["action"], "create");

    let resp = call!(
        &app,
        test::TestRequest::get().uri("/audit?search=silva")
    );
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["total_items"], 2);

    let resp = call!(
        &app,
        test::TestRequest::get().uri("/audit?action=delete")
    );
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["total_items"], 0);
}

#[actix_web::test]
async fn test_date_bounds_and_pagination() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    for (name, document) in [
        ("Comércio Silva Ltda", "12.345.678/0001-90"),
        ("Padaria Central", "98.765.432/0001-10"),
        ("Construtora Horizonte", "11.222.333/0001-44"),
    ] {
        let resp = call!(
            &app,
            test::TestRequest::post().uri("/clients").set_json(json!({
                "name": name,
                "document": document,
                "client_type": "privado"
            }))
        );
        assert_eq!(resp.status(), 201);
    }

    let today = Utc::now().date_naive();
    let yesterday = today.pred_opt().unwrap();

    let resp = call!(
        &app,
        test::TestRequest::get().uri(&format!(
            "/audit?from={}&to={}",
            today.format("%Y-%m-%d"),
            today.format("%Y-%m-%d")
        ))
    );
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["total_items"], 3);

    let resp = call!(
        &app,
        test::TestRequest::get()
            .uri(&format!("/audit?to={}", yesterday.format("%Y-%m-%d")))
    );
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["total_items"], 0);

    let resp = call!(
        &app,
        test::TestRequest::get().uri("/audit?page=2&page_size=2")
    );
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["total_pages"], 2);
    assert_eq!(page["items"].as_array().unwrap().len(), 1);
}
