use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::config::ListingConfig;
use crate::core::error::AppError;
use crate::core::listing::resolve_paging;
use crate::middleware::actor::Actor;
use crate::modules::clients::models::{
    ClientStatus, ClientType, CreateClientRequest, UpdateClientRequest,
};
use crate::modules::clients::repositories::client_repository::ClientFilter;
use crate::modules::clients::services::client_service::ClientService;

/// Query parameters for listing clients
#[derive(Debug, Deserialize)]
pub struct ListClientsQuery {
    #[serde(default)]
    pub search: String,
    pub status: Option<ClientStatus>,
    pub client_type: Option<ClientType>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// Payload for PUT /session/active-client
#[derive(Debug, Deserialize)]
pub struct SelectClientRequest {
    pub client_id: Option<String>,
}

/// Create a new client
/// POST /clients
pub async fn create_client(
    service: web::Data<Arc<ClientService>>,
    actor: Actor,
    request: web::Json<CreateClientRequest>,
) -> Result<HttpResponse, AppError> {
    let client = service.create_client(request.into_inner(), &actor).await?;
    Ok(HttpResponse::Created().json(client))
}

/// List clients with search, status and type filters
/// GET /clients
pub async fn list_clients(
    service: web::Data<Arc<ClientService>>,
    listing: web::Data<ListingConfig>,
    query: web::Query<ListClientsQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let (page, page_size) = resolve_paging(query.page, query.page_size, &listing)?;

    let filter = ClientFilter {
        search: query.search,
        status: query.status,
        client_type: query.client_type,
    };

    let clients = service.list_clients(&filter, page, page_size).await?;
    Ok(HttpResponse::Ok().json(clients))
}

/// Get client by ID
/// GET /clients/{id}
pub async fn get_client(
    service: web::Data<Arc<ClientService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let client = service.get_client(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(client))
}

/// Update client fields
/// PUT /clients/{id}
pub async fn update_client(
    service: web::Data<Arc<ClientService>>,
    actor: Actor,
    path: web::Path<String>,
    request: web::Json<UpdateClientRequest>,
) -> Result<HttpResponse, AppError> {
    let client = service
        .update_client(&path.into_inner(), request.into_inner(), &actor)
        .await?;
    Ok(HttpResponse::Ok().json(client))
}

/// Remove a client
/// DELETE /clients/{id}
pub async fn delete_client(
    service: web::Data<Arc<ClientService>>,
    actor: Actor,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_client(&path.into_inner(), &actor).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Select the active client for the session
/// PUT /session/active-client
pub async fn select_active_client(
    service: web::Data<Arc<ClientService>>,
    request: web::Json<SelectClientRequest>,
) -> Result<HttpResponse, AppError> {
    let view = service
        .select_active_client(request.into_inner().client_id)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

/// Current active-client selection
/// GET /session
pub async fn current_session(
    service: web::Data<Arc<ClientService>>,
) -> Result<HttpResponse, AppError> {
    let view = service.current_session().await?;
    Ok(HttpResponse::Ok().json(view))
}

/// Configure client and session routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/clients")
            .route("", web::post().to(create_client))
            .route("", web::get().to(list_clients))
            .route("/{id}", web::get().to(get_client))
            .route("/{id}", web::put().to(update_client))
            .route("/{id}", web::delete().to(delete_client)),
    )
    .service(
        web::scope("/session")
            .route("", web::get().to(current_session))
            .route("/active-client", web::put().to(select_active_client)),
    );
}
