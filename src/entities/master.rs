//! Master entity: a barber offering one or more services

use crate::core::entity::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Master {
    pub id: EntityId,
    pub name: String,
    pub experience: String,
    pub is_active: bool,
    /// Identifiers of the services this master offers
    pub services: Vec<EntityId>,
    pub created_at: DateTime<Utc>,
}

crate::impl_entity!(Master, "master", "masters");

impl Master {
    /// Create an active master offering no services yet
    pub fn new(name: impl Into<String>, experience: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            experience: experience.into(),
            is_active: true,
            services: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_services(mut self, services: impl IntoIterator<Item = EntityId>) -> Self {
        self.services = services.into_iter().collect();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Whether this master offers the given service
    pub fn offers(&self, service_id: EntityId) -> bool {
        self.services.contains(&service_id)
    }
}
