use async_trait::async_trait;

use crate::core::error::Result;

/// Base repository trait for CRUD operations over string-keyed records.
///
/// `T` is the entity type and `F` the typed filter its listing accepts.
/// Keeping the boundary async lets a database-backed implementation replace
/// the in-memory stores without touching the services.
#[async_trait]
pub trait Repository<T, F>: Send + Sync {
    /// Insert a new entity.
    async fn create(&self, entity: T) -> Result<T>;

    /// Find an entity by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<T>>;

    /// Replace an existing entity, matched by id.
    async fn update(&self, entity: T) -> Result<T>;

    /// Remove an entity by id; returns whether a record was removed.
    async fn delete(&self, id: &str) -> Result<bool>;

    /// List entities matching the filter, in insertion order.
    async fn list(&self, filter: &F) -> Result<Vec<T>>;
}
