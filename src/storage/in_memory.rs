//! In-memory implementation of DataService for development and tests

use crate::core::entity::{Entity, EntityId};
use crate::core::error::{EntityError, ShopError, StorageError};
use crate::core::service::DataService;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory data service
///
/// Keeps entities ordered by identifier and hands out identifiers from an
/// atomic counter. Uses RwLock for thread-safe access; clones share data.
#[derive(Clone)]
pub struct InMemoryDataService<T: Entity> {
    data: Arc<RwLock<BTreeMap<EntityId, T>>>,
    next_id: Arc<AtomicU64>,
}

impl<T: Entity> InMemoryDataService<T> {
    /// Create a new, empty in-memory service
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<EntityId, T>>, ShopError> {
        self.data.read().map_err(|_| Self::poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<EntityId, T>>, ShopError> {
        self.data.write().map_err(|_| Self::poisoned())
    }

    fn poisoned() -> ShopError {
        StorageError::LockPoisoned {
            entity_type: T::resource_name_singular().to_string(),
        }
        .into()
    }
}

impl<T: Entity> Default for InMemoryDataService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> DataService<T> for InMemoryDataService<T> {
    async fn create(&self, mut entity: T) -> Result<T, ShopError> {
        let mut data = self.write()?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        entity.assign_id(id);
        data.insert(id, entity.clone());

        Ok(entity)
    }

    async fn insert(&self, entity: T) -> Result<T, ShopError> {
        let mut data = self.write()?;

        let id = entity.id();
        if id == 0 {
            return Err(StorageError::OperationFailed {
                operation: "insert".to_string(),
                message: format!("{} has no identifier", T::resource_name_singular()),
            }
            .into());
        }
        if data.contains_key(&id) {
            return Err(EntityError::AlreadyExists {
                entity_type: T::resource_name_singular().to_string(),
                id,
            }
            .into());
        }

        data.insert(id, entity.clone());
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);

        Ok(entity)
    }

    async fn get(&self, id: EntityId) -> Result<Option<T>, ShopError> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>, ShopError> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn update(&self, entity: T) -> Result<T, ShopError> {
        let mut data = self.write()?;

        let slot = data.get_mut(&entity.id()).ok_or_else(|| EntityError::NotFound {
            entity_type: T::resource_name_singular().to_string(),
            id: entity.id(),
        })?;
        *slot = entity.clone();

        Ok(entity)
    }
}
