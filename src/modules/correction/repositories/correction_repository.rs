use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::modules::correction::models::MonetaryCorrection;

/// Filter for the correction history
#[derive(Debug, Clone, Default)]
pub struct CorrectionFilter {
    pub credit_id: Option<String>,
}

impl CorrectionFilter {
    fn matches(&self, correction: &MonetaryCorrection) -> bool {
        self.credit_id
            .as_deref()
            .map_or(true, |id| correction.credit_id.as_deref() == Some(id))
    }
}

/// Append-only history of computed corrections
#[async_trait]
pub trait CorrectionRepository: Send + Sync {
    async fn append(&self, correction: MonetaryCorrection) -> Result<MonetaryCorrection>;

    /// Matching corrections, newest first.
    async fn list(&self, filter: &CorrectionFilter) -> Result<Vec<MonetaryCorrection>>;
}

#[derive(Default)]
pub struct InMemoryCorrectionRepository {
    records: RwLock<Vec<MonetaryCorrection>>,
}

impl InMemoryCorrectionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CorrectionRepository for InMemoryCorrectionRepository {
    async fn append(&self, correction: MonetaryCorrection) -> Result<MonetaryCorrection> {
        self.records.write().await.push(correction.clone());
        Ok(correction)
    }

    async fn list(&self, filter: &CorrectionFilter) -> Result<Vec<MonetaryCorrection>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .rev()
            .filter(|correction| filter.matches(correction))
            .cloned()
            .collect())
    }
}
