use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::config::ListingConfig;
use crate::core::dates::parse_flexible;
use crate::core::error::AppError;
use crate::core::listing::resolve_paging;
use crate::modules::audit::models::{AuditAction, ResourceType};
use crate::modules::audit::repositories::audit_repository::AuditFilter;
use crate::modules::audit::services::audit_service::AuditService;

/// Query parameters for listing the audit trail
#[derive(Debug, Deserialize)]
pub struct ListAuditQuery {
    #[serde(default)]
    pub search: String,
    pub action: Option<AuditAction>,
    pub resource_type: Option<ResourceType>,
    pub actor: Option<String>,
    /// Inclusive day bound, `DD/MM/YYYY` or ISO
    pub from: Option<String>,
    /// Inclusive day bound, `DD/MM/YYYY` or ISO
    pub to: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// List audit trail events, newest first
/// GET /audit
pub async fn list_audit(
    service: web::Data<Arc<AuditService>>,
    listing: web::Data<ListingConfig>,
    query: web::Query<ListAuditQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let (page, page_size) = resolve_paging(query.page, query.page_size, &listing)?;

    let filter = AuditFilter {
        search: query.search,
        action: query.action,
        resource_type: query.resource_type,
        actor: query.actor,
        from: query.from.as_deref().map(parse_flexible).transpose()?,
        to: query.to.as_deref().map(parse_flexible).transpose()?,
    };

    let events = service.list(&filter, page, page_size).await?;
    Ok(HttpResponse::Ok().json(events))
}

/// Configure audit routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/audit").route("", web::get().to(list_audit)));
}
