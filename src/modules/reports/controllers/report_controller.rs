use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::dates::parse_flexible;
use crate::core::error::AppError;
use crate::modules::reports::services::report_service::ReportService;

/// Query parameters for the period credit report
#[derive(Debug, Deserialize)]
pub struct PeriodReportQuery {
    /// `DD/MM/YYYY` or ISO
    pub start: String,
    /// `DD/MM/YYYY` or ISO
    pub end: String,
}

/// Composed counters for the dashboard
/// GET /reports/dashboard
pub async fn dashboard(
    service: web::Data<Arc<ReportService>>,
) -> Result<HttpResponse, AppError> {
    let report = service.dashboard().await?;
    Ok(HttpResponse::Ok().json(report))
}

/// Credit summary restricted to a period
/// GET /reports/credits
pub async fn period_credit_report(
    service: web::Data<Arc<ReportService>>,
    query: web::Query<PeriodReportQuery>,
) -> Result<HttpResponse, AppError> {
    let start = parse_flexible(&query.start)?;
    let end = parse_flexible(&query.end)?;

    let report = service.credit_period_report(start, end).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// Configure report routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("/dashboard", web::get().to(dashboard))
            .route("/credits", web::get().to(period_credit_report)),
    );
}
