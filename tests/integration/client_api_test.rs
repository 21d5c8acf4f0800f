// Integration tests for the client CRUD surface and the active-client
// session selection, driven through the actix service in-process.

use actix_web::{test, App};
use serde_json::{json, Value};

use recupera::bootstrap::{configure_api, Services};
use recupera::config::ListingConfig;

fn app_services() -> Services {
    Services::in_memory(ListingConfig::default())
}

fn client_payload(name: &str, document: &str) -> Value {
    json!({
        "name": name,
        "document": document,
        "email": "contato@exemplo.com.br",
        "client_type": "privado",
        "segment": "varejo"
    })
}

#[actix_web::test]
async fn test_create_and_fetch_client() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/clients")
            .set_json(client_payload("Comércio Silva Ltda", "12.345.678/0001-90"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["name"], "Comércio Silva Ltda");
    assert_eq!(created["document"], "12.345.678/0001-90");
    assert_eq!(created["status"], "ativo");

    let id = created["id"].as_str().unwrap();
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/clients/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["id"], *id);
}

#[actix_web::test]
async fn test_invalid_cnpj_is_rejected() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/clients")
            .set_json(client_payload("Cliente Inválido", "123"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("14 dígitos"));
}

#[actix_web::test]
async fn test_duplicate_cnpj_is_rejected() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/clients")
            .set_json(client_payload("Primeiro", "12.345.678/0001-90"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);

    // Same digits, different punctuation
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/clients")
            .set_json(client_payload("Segundo", "12345678000190"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_list_with_search_and_pagination() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    for (name, document) in [
        ("Comércio Silva Ltda", "12.345.678/0001-90"),
        ("Silva & Filhos ME", "98.765.432/0001-10"),
        ("Padaria Central", "11.222.333/0001-44"),
    ] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/clients")
                .set_json(client_payload(name, document))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 201);
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/clients?search=silva&page=1&page_size=1")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["total_items"], 2);
    assert_eq!(page["total_pages"], 2);
    assert_eq!(page["items"].as_array().unwrap().len(), 1);

    // Page past the end is empty, not an error
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/clients?search=silva&page=9&page_size=1")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let page: Value = test::read_body_json(resp).await;
    assert!(page["items"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_update_and_delete_flow() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/clients")
            .set_json(client_payload("Comércio Silva Ltda", "12.345.678/0001-90"))
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/clients/{}", id))
            .set_json(json!({"status": "inativo"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["status"], "inativo");

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/clients/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 204);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/clients/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_active_client_session() {
    let services = app_services();
    let app =
        test::init_service(App::new().configure(|cfg| configure_api(cfg, &services))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/clients")
            .set_json(client_payload("Comércio Silva Ltda", "12.345.678/0001-90"))
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    // Selecting an unknown client is refused
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/session/active-client")
            .set_json(json!({"client_id": "nao-existe"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/session/active-client")
            .set_json(json!({"client_id": id}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/session").to_request(),
    )
    .await;
    let session: Value = test::read_body_json(resp).await;
    assert_eq!(session["active_client_id"], *id);
    assert_eq!(session["client_name"], "Comércio Silva Ltda");

    // Clearing the selection
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/session/active-client")
            .set_json(json!({"client_id": null}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/session").to_request(),
    )
    .await;
    let session: Value = test::read_body_json(resp).await;
    assert!(session["active_client_id"].is_null());
}
