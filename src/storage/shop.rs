//! Aggregated store for all entities
//!
//! `ShopStore` is the single storage handle injected into handlers. It
//! holds one `DataService` per entity and the few queries that span them.

use super::InMemoryDataService;
use crate::config::CatalogConfig;
use crate::core::entity::EntityId;
use crate::core::error::{ConfigError, EntityError, ShopError};
use crate::core::service::DataService;
use crate::entities::{Master, Order, Review, Service, ServiceSummary};
use std::collections::HashMap;
use std::sync::Arc;

/// Aggregated store containing all entity services
#[derive(Clone)]
pub struct ShopStore {
    pub masters: Arc<dyn DataService<Master>>,
    pub services: Arc<dyn DataService<Service>>,
    pub orders: Arc<dyn DataService<Order>>,
    pub reviews: Arc<dyn DataService<Review>>,
}

impl ShopStore {
    pub fn new(
        masters: Arc<dyn DataService<Master>>,
        services: Arc<dyn DataService<Service>>,
        orders: Arc<dyn DataService<Order>>,
        reviews: Arc<dyn DataService<Review>>,
    ) -> Self {
        Self {
            masters,
            services,
            orders,
            reviews,
        }
    }

    /// Store backed by fresh in-memory services
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryDataService::<Master>::new()),
            Arc::new(InMemoryDataService::<Service>::new()),
            Arc::new(InMemoryDataService::<Order>::new()),
            Arc::new(InMemoryDataService::<Review>::new()),
        )
    }

    /// Load services and masters from configuration
    ///
    /// Every service name a master references must be in the same catalog;
    /// nothing is stored if one is missing.
    pub async fn seed_catalog(&self, catalog: &CatalogConfig) -> Result<(), ShopError> {
        for master in &catalog.masters {
            if let Some(unknown) = master
                .services
                .iter()
                .find(|name| !catalog.services.iter().any(|s| &s.name == *name))
            {
                return Err(ConfigError::UnknownService {
                    master: master.name.clone(),
                    service: unknown.clone(),
                }
                .into());
            }
        }

        let mut ids_by_name: HashMap<&str, EntityId> = HashMap::new();
        for seed in &catalog.services {
            let service = self
                .services
                .create(
                    Service::new(seed.name.as_str(), seed.price, seed.duration_minutes)
                        .with_description(seed.description.as_str()),
                )
                .await?;
            ids_by_name.insert(seed.name.as_str(), service.id);
        }

        for seed in &catalog.masters {
            let mut master = Master::new(seed.name.as_str(), seed.experience.as_str())
                .with_services(seed.services.iter().filter_map(|name| {
                    ids_by_name.get(name.as_str()).copied()
                }));
            master.is_active = seed.is_active;
            self.masters.create(master).await?;
        }

        tracing::info!(
            services = catalog.services.len(),
            masters = catalog.masters.len(),
            "catalog seeded"
        );
        Ok(())
    }

    /// Find an order or report it as not found
    pub async fn find_order(&self, id: EntityId) -> Result<Order, ShopError> {
        self.orders.get(id).await?.ok_or_else(|| {
            EntityError::NotFound {
                entity_type: "order".to_string(),
                id,
            }
            .into()
        })
    }

    /// Masters shown to the public
    pub async fn active_masters(&self) -> Result<Vec<Master>, ShopError> {
        Ok(self
            .masters
            .list()
            .await?
            .into_iter()
            .filter(|m| m.is_active)
            .collect())
    }

    /// The most recent published reviews, newest first
    pub async fn published_reviews(&self, limit: usize) -> Result<Vec<Review>, ShopError> {
        let mut reviews: Vec<Review> = self
            .reviews
            .list()
            .await?
            .into_iter()
            .filter(|r| r.is_published)
            .collect();
        reviews.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        reviews.truncate(limit);
        Ok(reviews)
    }

    /// `{id, name}` of the services a master offers, ascending id
    ///
    /// An unknown master offers nothing.
    pub async fn services_for_master(
        &self,
        master_id: EntityId,
    ) -> Result<Vec<ServiceSummary>, ShopError> {
        let Some(master) = self.masters.get(master_id).await? else {
            return Ok(Vec::new());
        };

        Ok(self
            .services
            .list()
            .await?
            .iter()
            .filter(|s| master.offers(s.id))
            .map(Service::summary)
            .collect())
    }
}

impl Default for ShopStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
