use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::core::listing::matches_query;
use crate::core::traits::repository::Repository;
use crate::modules::credits::models::CreditType;
use crate::modules::recovery::models::{ProcessType, RecoveryProcess, RecoveryStatus};

/// Typed filter for recovery-process listings
#[derive(Debug, Clone, Default)]
pub struct RecoveryFilter {
    /// Substring match on client name, case-insensitive
    pub search: String,
    pub status: Option<RecoveryStatus>,
    pub process_type: Option<ProcessType>,
    pub credit_type: Option<CreditType>,
}

impl RecoveryFilter {
    fn matches(&self, process: &RecoveryProcess) -> bool {
        matches_query(&self.search, &[&process.client_name])
            && self.status.map_or(true, |status| process.status == status)
            && self
                .process_type
                .map_or(true, |process_type| process.process_type == process_type)
            && self
                .credit_type
                .map_or(true, |credit_type| process.credit_type == credit_type)
    }
}

/// In-memory recovery-process store
#[derive(Default)]
pub struct InMemoryRecoveryRepository {
    records: RwLock<Vec<RecoveryProcess>>,
}

impl InMemoryRecoveryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<RecoveryProcess, RecoveryFilter> for InMemoryRecoveryRepository {
    async fn create(&self, entity: RecoveryProcess) -> Result<RecoveryProcess> {
        self.records.write().await.push(entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<RecoveryProcess>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|p| p.id == id).cloned())
    }

    async fn update(&self, entity: RecoveryProcess) -> Result<RecoveryProcess> {
        let mut records = self.records.write().await;

        match records.iter_mut().find(|p| p.id == entity.id) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(AppError::not_found(format!("Processo {}", entity.id))),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|p| p.id != id);
        Ok(records.len() < before)
    }

    async fn list(&self, filter: &RecoveryFilter) -> Result<Vec<RecoveryProcess>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|process| filter.matches(process))
            .cloned()
            .collect())
    }
}
