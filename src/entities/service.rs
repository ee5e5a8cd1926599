//! Service entity: a bookable offering

use crate::core::entity::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    /// Price in whole currency units
    pub price: u32,
    pub duration_minutes: u32,
    pub created_at: DateTime<Utc>,
}

crate::impl_entity!(Service, "service", "services");

impl Service {
    pub fn new(name: impl Into<String>, price: u32, duration_minutes: u32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: String::new(),
            price,
            duration_minutes,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn summary(&self) -> ServiceSummary {
        ServiceSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// `{id, name}` pair returned by the services-by-master lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub id: EntityId,
    pub name: String,
}
