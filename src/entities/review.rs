//! Review entity: a customer testimonial

use crate::core::entity::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: EntityId,
    pub client_name: String,
    pub text: String,
    /// 1..=5
    pub rating: u8,
    pub master_id: Option<EntityId>,
    /// Reviews stay hidden from the landing page until moderated
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

crate::impl_entity!(Review, "review", "reviews");

impl Review {
    /// Create an unpublished review
    pub fn new(client_name: impl Into<String>, text: impl Into<String>, rating: u8) -> Self {
        Self {
            id: 0,
            client_name: client_name.into(),
            text: text.into(),
            rating,
            master_id: None,
            is_published: false,
            created_at: Utc::now(),
        }
    }

    pub fn with_master(mut self, master_id: EntityId) -> Self {
        self.master_id = Some(master_id);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn publish(mut self) -> Self {
        self.is_published = true;
        self
    }
}
