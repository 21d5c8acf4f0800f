use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::config::ListingConfig;
use crate::core::error::AppError;
use crate::core::listing::resolve_paging;
use crate::middleware::actor::Actor;
use crate::modules::credits::models::CreditType;
use crate::modules::recovery::models::{
    CreateRecoveryRequest, ProcessType, RecoveryProgressRequest, RecoveryStatus,
    UpdateRecoveryRequest,
};
use crate::modules::recovery::repositories::recovery_repository::RecoveryFilter;
use crate::modules::recovery::services::recovery_service::RecoveryService;

/// Query parameters for listing recovery processes
#[derive(Debug, Deserialize)]
pub struct ListRecoveryQuery {
    #[serde(default)]
    pub search: String,
    pub status: Option<RecoveryStatus>,
    pub process_type: Option<ProcessType>,
    pub credit_type: Option<CreditType>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// Open a new recovery process
/// POST /recovery
pub async fn create_process(
    service: web::Data<Arc<RecoveryService>>,
    actor: Actor,
    request: web::Json<CreateRecoveryRequest>,
) -> Result<HttpResponse, AppError> {
    let process = service.create_process(request.into_inner(), &actor).await?;
    Ok(HttpResponse::Created().json(process))
}

/// List recovery processes with filters
/// GET /recovery
pub async fn list_processes(
    service: web::Data<Arc<RecoveryService>>,
    listing: web::Data<ListingConfig>,
    query: web::Query<ListRecoveryQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let (page, page_size) = resolve_paging(query.page, query.page_size, &listing)?;

    let filter = RecoveryFilter {
        search: query.search,
        status: query.status,
        process_type: query.process_type,
        credit_type: query.credit_type,
    };

    let processes = service.list_processes(&filter, page, page_size).await?;
    Ok(HttpResponse::Ok().json(processes))
}

/// Aggregated counters for the dashboard
/// GET /recovery/summary
pub async fn recovery_summary(
    service: web::Data<Arc<RecoveryService>>,
) -> Result<HttpResponse, AppError> {
    let summary = service.summary().await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Get recovery process by ID
/// GET /recovery/{id}
pub async fn get_process(
    service: web::Data<Arc<RecoveryService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let process = service.get_process(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(process))
}

/// Update process fields
/// PUT /recovery/{id}
pub async fn update_process(
    service: web::Data<Arc<RecoveryService>>,
    actor: Actor,
    path: web::Path<String>,
    request: web::Json<UpdateRecoveryRequest>,
) -> Result<HttpResponse, AppError> {
    let process = service
        .update_process(&path.into_inner(), request.into_inner(), &actor)
        .await?;
    Ok(HttpResponse::Ok().json(process))
}

/// Remove a process
/// DELETE /recovery/{id}
pub async fn delete_process(
    service: web::Data<Arc<RecoveryService>>,
    actor: Actor,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_process(&path.into_inner(), &actor).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register recovered value and optional status change
/// POST /recovery/{id}/progress
pub async fn register_progress(
    service: web::Data<Arc<RecoveryService>>,
    actor: Actor,
    path: web::Path<String>,
    request: web::Json<RecoveryProgressRequest>,
) -> Result<HttpResponse, AppError> {
    let process = service
        .register_progress(&path.into_inner(), request.into_inner(), &actor)
        .await?;
    Ok(HttpResponse::Ok().json(process))
}

/// Configure recovery routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/recovery")
            .route("", web::post().to(create_process))
            .route("", web::get().to(list_processes))
            .route("/summary", web::get().to(recovery_summary))
            .route("/{id}", web::get().to(get_process))
            .route("/{id}", web::put().to(update_process))
            .route("/{id}", web::delete().to(delete_process))
            .route("/{id}/progress", web::post().to(register_progress)),
    );
}
