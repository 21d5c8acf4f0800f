use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::config::ListingConfig;
use crate::core::error::AppError;
use crate::core::listing::resolve_paging;
use crate::middleware::actor::Actor;
use crate::modules::correction::repositories::correction_repository::CorrectionFilter;
use crate::modules::correction::services::correction_service::{
    CalculateCorrectionRequest, CorrectionService, ReplaceSeriesRequest,
};

/// Query parameters for the correction history
#[derive(Debug, Deserialize)]
pub struct ListCorrectionsQuery {
    pub credit_id: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// Compute a monetary correction and append it to the history
/// POST /corrections
pub async fn calculate_correction(
    service: web::Data<Arc<CorrectionService>>,
    actor: Actor,
    request: web::Json<CalculateCorrectionRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.calculate(request.into_inner(), &actor).await?;
    Ok(HttpResponse::Created().json(response))
}

/// Correction history, newest first
/// GET /corrections
pub async fn list_corrections(
    service: web::Data<Arc<CorrectionService>>,
    listing: web::Data<ListingConfig>,
    query: web::Query<ListCorrectionsQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let (page, page_size) = resolve_paging(query.page, query.page_size, &listing)?;

    let filter = CorrectionFilter {
        credit_id: query.credit_id,
    };

    let corrections = service.history(&filter, page, page_size).await?;
    Ok(HttpResponse::Ok().json(corrections))
}

/// Current rate series
/// GET /selic
pub async fn get_series(
    service: web::Data<Arc<CorrectionService>>,
) -> Result<HttpResponse, AppError> {
    let series = service.series().await?;
    Ok(HttpResponse::Ok().json(series))
}

/// Replace the rate series from monthly rates
/// PUT /selic
pub async fn replace_series(
    service: web::Data<Arc<CorrectionService>>,
    actor: Actor,
    request: web::Json<ReplaceSeriesRequest>,
) -> Result<HttpResponse, AppError> {
    let series = service.replace_series(request.into_inner(), &actor).await?;
    Ok(HttpResponse::Ok().json(series))
}

/// Configure correction and rate-series routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/corrections")
            .route("", web::post().to(calculate_correction))
            .route("", web::get().to(list_corrections)),
    )
    .service(
        web::scope("/selic")
            .route("", web::get().to(get_series))
            .route("", web::put().to(replace_series)),
    );
}
