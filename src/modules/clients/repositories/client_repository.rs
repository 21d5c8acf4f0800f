use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::core::listing::matches_query;
use crate::core::traits::repository::Repository;
use crate::modules::clients::models::{format_cnpj, Client, ClientStatus, ClientType};

/// Typed filter for client listings
#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    /// Substring match on name or CNPJ digits, case-insensitive
    pub search: String,
    pub status: Option<ClientStatus>,
    pub client_type: Option<ClientType>,
}

impl ClientFilter {
    fn matches(&self, client: &Client) -> bool {
        matches_query(&self.search, &[&client.name, &client.document])
            && self.status.map_or(true, |status| client.status == status)
            && self
                .client_type
                .map_or(true, |client_type| client.client_type == client_type)
    }
}

/// In-memory client store; records live for the lifetime of the process.
#[derive(Default)]
pub struct InMemoryClientRepository {
    records: RwLock<Vec<Client>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Client, ClientFilter> for InMemoryClientRepository {
    async fn create(&self, entity: Client) -> Result<Client> {
        let mut records = self.records.write().await;

        if records.iter().any(|c| c.document == entity.document) {
            return Err(AppError::validation(format!(
                "Já existe cliente com o CNPJ {}",
                format_cnpj(&entity.document)
            )));
        }

        records.push(entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Client>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|c| c.id == id).cloned())
    }

    async fn update(&self, entity: Client) -> Result<Client> {
        let mut records = self.records.write().await;

        match records.iter_mut().find(|c| c.id == entity.id) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(AppError::not_found(format!("Cliente {}", entity.id))),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|c| c.id != id);
        Ok(records.len() < before)
    }

    async fn list(&self, filter: &ClientFilter) -> Result<Vec<Client>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|client| filter.matches(client))
            .cloned()
            .collect())
    }
}
