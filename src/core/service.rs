//! Service trait for entity storage

use crate::core::entity::{Entity, EntityId};
use crate::core::error::ShopError;
use async_trait::async_trait;

/// Service trait for managing stored entities
///
/// Implementations provide the storage operations for a specific entity
/// type. Handlers only ever see this trait, never a concrete backend.
#[async_trait]
pub trait DataService<T: Entity>: Send + Sync {
    /// Store a new entity, assigning it the next identifier
    async fn create(&self, entity: T) -> Result<T, ShopError>;

    /// Store an entity under the identifier it already carries
    ///
    /// Used for seeding. Later `create` calls never reuse that identifier.
    async fn insert(&self, entity: T) -> Result<T, ShopError>;

    /// Get an entity by identifier; `None` means not found
    async fn get(&self, id: EntityId) -> Result<Option<T>, ShopError>;

    /// List all entities, ascending identifier
    async fn list(&self) -> Result<Vec<T>, ShopError>;

    /// Replace an existing entity
    async fn update(&self, entity: T) -> Result<T, ShopError>;
}
