use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::config::ListingConfig;
use crate::core::error::AppError;
use crate::core::listing::resolve_paging;
use crate::middleware::actor::Actor;
use crate::modules::credits::models::{
    CreateCreditRequest, CreditStatus, CreditType, UpdateCreditRequest,
};
use crate::modules::credits::repositories::credit_repository::CreditFilter;
use crate::modules::credits::services::credit_service::CreditService;

/// Query parameters for listing credits
#[derive(Debug, Deserialize)]
pub struct ListCreditsQuery {
    #[serde(default)]
    pub search: String,
    pub status: Option<CreditStatus>,
    pub credit_type: Option<CreditType>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// Payload for PATCH /credits/{id}/status
#[derive(Debug, Deserialize)]
pub struct ChangeStatusRequest {
    pub status: CreditStatus,
}

/// Create a new tax credit
/// POST /credits
pub async fn create_credit(
    service: web::Data<Arc<CreditService>>,
    actor: Actor,
    request: web::Json<CreateCreditRequest>,
) -> Result<HttpResponse, AppError> {
    let credit = service.create_credit(request.into_inner(), &actor).await?;
    Ok(HttpResponse::Created().json(credit))
}

/// List credits with search, status and type filters
/// GET /credits
pub async fn list_credits(
    service: web::Data<Arc<CreditService>>,
    listing: web::Data<ListingConfig>,
    query: web::Query<ListCreditsQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let (page, page_size) = resolve_paging(query.page, query.page_size, &listing)?;

    let filter = CreditFilter {
        search: query.search,
        status: query.status,
        credit_type: query.credit_type,
    };

    let credits = service.list_credits(&filter, page, page_size).await?;
    Ok(HttpResponse::Ok().json(credits))
}

/// Aggregated counters for the dashboard
/// GET /credits/summary
pub async fn credit_summary(
    service: web::Data<Arc<CreditService>>,
) -> Result<HttpResponse, AppError> {
    let summary = service.summary().await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Get credit by ID
/// GET /credits/{id}
pub async fn get_credit(
    service: web::Data<Arc<CreditService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let credit = service.get_credit(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(credit))
}

/// Update credit fields
/// PUT /credits/{id}
pub async fn update_credit(
    service: web::Data<Arc<CreditService>>,
    actor: Actor,
    path: web::Path<String>,
    request: web::Json<UpdateCreditRequest>,
) -> Result<HttpResponse, AppError> {
    let credit = service
        .update_credit(&path.into_inner(), request.into_inner(), &actor)
        .await?;
    Ok(HttpResponse::Ok().json(credit))
}

/// Remove a credit
/// DELETE /credits/{id}
pub async fn delete_credit(
    service: web::Data<Arc<CreditService>>,
    actor: Actor,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_credit(&path.into_inner(), &actor).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Assign a new status directly
/// PATCH /credits/{id}/status
pub async fn change_status(
    service: web::Data<Arc<CreditService>>,
    actor: Actor,
    path: web::Path<String>,
    request: web::Json<ChangeStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let credit = service
        .change_status(&path.into_inner(), request.into_inner().status, &actor)
        .await?;
    Ok(HttpResponse::Ok().json(credit))
}

/// Configure credit routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/credits")
            .route("", web::post().to(create_credit))
            .route("", web::get().to(list_credits))
            .route("/summary", web::get().to(credit_summary))
            .route("/{id}", web::get().to(get_credit))
            .route("/{id}", web::put().to(update_credit))
            .route("/{id}", web::delete().to(delete_credit))
            .route("/{id}/status", web::patch().to(change_status)),
    );
}
