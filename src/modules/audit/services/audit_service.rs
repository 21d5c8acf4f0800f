use std::sync::Arc;

use crate::core::error::Result;
use crate::core::listing::{paginate, Page};
use crate::modules::audit::models::AuditEvent;
use crate::modules::audit::repositories::audit_repository::{AuditFilter, AuditRepository};

/// Records and serves the audit trail.
///
/// Writes only happen through `record`, called by the other services on every
/// mutation; the HTTP surface is read-only.
pub struct AuditService {
    repo: Arc<dyn AuditRepository>,
}

impl AuditService {
    pub fn new(repo: Arc<dyn AuditRepository>) -> Self {
        Self { repo }
    }

    pub async fn record(&self, event: AuditEvent) -> Result<()> {
        tracing::debug!(
            actor = %event.actor,
            action = %event.action,
            resource_type = %event.resource_type,
            resource_id = %event.resource_id,
            "Audit event recorded"
        );

        self.repo.append(event).await?;
        Ok(())
    }

    pub async fn list(
        &self,
        filter: &AuditFilter,
        page: u32,
        page_size: u32,
    ) -> Result<Page<AuditEvent>> {
        let events = self.repo.list(filter).await?;
        paginate(events, page, page_size)
    }
}
