//! Entity trait shared by every record the shop stores

use chrono::{DateTime, Utc};

/// Identifier assigned by the store, starting at 1 in creation order
pub type EntityId = u64;

/// Base trait for all entities in the system.
///
/// Every entity carries:
/// - id: store-assigned identifier (0 until the entity is stored)
/// - created_at: creation timestamp, set once at construction
///
/// The `impl_entity!` macro implements this trait for structs that have
/// an `id: EntityId` field and a creation timestamp field.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "orders")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "order")
    fn resource_name_singular() -> &'static str;

    /// Get the identifier of this entity instance
    fn id(&self) -> EntityId;

    /// Set the identifier; only the store calls this, on creation
    fn assign_id(&mut self, id: EntityId);

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Whether the entity has been given an identifier by a store
    fn is_stored(&self) -> bool {
        self.id() != 0
    }
}
