use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::core::listing::matches_query;
use crate::modules::audit::models::{AuditAction, AuditEvent, ResourceType};

/// Typed filter for audit trail listings.
///
/// `from`/`to` are inclusive day bounds on the event timestamp.
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    pub search: String,
    pub action: Option<AuditAction>,
    pub resource_type: Option<ResourceType>,
    pub actor: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl AuditFilter {
    fn matches(&self, event: &AuditEvent) -> bool {
        let day = event.timestamp.date_naive();

        matches_query(&self.search, &[&event.resource_name, &event.details])
            && self.action.map_or(true, |a| event.action == a)
            && self.resource_type.map_or(true, |r| event.resource_type == r)
            && self
                .actor
                .as_deref()
                .map_or(true, |actor| event.actor == actor)
            && self.from.map_or(true, |from| day >= from)
            && self.to.map_or(true, |to| day <= to)
    }
}

/// Append-only store for the audit trail; no update or delete exists.
#[async_trait]
pub trait AuditRepository: Send + Sync {
    async fn append(&self, event: AuditEvent) -> Result<AuditEvent>;

    /// Matching events, newest first.
    async fn list(&self, filter: &AuditFilter) -> Result<Vec<AuditEvent>>;
}

#[derive(Default)]
pub struct InMemoryAuditRepository {
    records: RwLock<Vec<AuditEvent>>,
}

impl InMemoryAuditRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditRepository for InMemoryAuditRepository {
    async fn append(&self, event: AuditEvent) -> Result<AuditEvent> {
        self.records.write().await.push(event.clone());
        Ok(event)
    }

    async fn list(&self, filter: &AuditFilter) -> Result<Vec<AuditEvent>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .rev()
            .filter(|event| filter.matches(event))
            .cloned()
            .collect())
    }
}
