use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::core::listing::matches_query;
use crate::core::traits::repository::Repository;
use crate::modules::credits::models::{CreditStatus, CreditType, TaxCredit};

/// Typed filter for credit listings
#[derive(Debug, Clone, Default)]
pub struct CreditFilter {
    /// Substring match on client name or CNPJ digits, case-insensitive
    pub search: String,
    pub status: Option<CreditStatus>,
    pub credit_type: Option<CreditType>,
}

impl CreditFilter {
    fn matches(&self, credit: &TaxCredit) -> bool {
        matches_query(
            &self.search,
            &[&credit.client_name, &credit.document_number],
        ) && self.status.map_or(true, |status| credit.status == status)
            && self
                .credit_type
                .map_or(true, |credit_type| credit.credit_type == credit_type)
    }
}

/// In-memory credit store
#[derive(Default)]
pub struct InMemoryCreditRepository {
    records: RwLock<Vec<TaxCredit>>,
}

impl InMemoryCreditRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<TaxCredit, CreditFilter> for InMemoryCreditRepository {
    async fn create(&self, entity: TaxCredit) -> Result<TaxCredit> {
        self.records.write().await.push(entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<TaxCredit>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|c| c.id == id).cloned())
    }

    async fn update(&self, entity: TaxCredit) -> Result<TaxCredit> {
        let mut records = self.records.write().await;

        match records.iter_mut().find(|c| c.id == entity.id) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(AppError::not_found(format!("Crédito {}", entity.id))),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|c| c.id != id);
        Ok(records.len() < before)
    }

    async fn list(&self, filter: &CreditFilter) -> Result<Vec<TaxCredit>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|credit| filter.matches(credit))
            .cloned()
            .collect())
    }
}
