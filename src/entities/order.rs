//! Order entity: one booking request submitted from the public site

use crate::core::entity::EntityId;
use crate::core::search::{SearchField, Searchable};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Processing status of a booking request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    New,
    Confirmed,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// A booking request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityId,
    pub client_name: String,
    pub phone: String,
    pub comment: String,
    pub master_id: Option<EntityId>,
    pub service_id: Option<EntityId>,
    pub appointment_date: Option<NaiveDate>,
    pub status: OrderStatus,
    /// Set once at construction; the only sort key of the order desk
    pub date_created: DateTime<Utc>,
}

crate::impl_entity!(Order, "order", "orders", created_at: date_created);

impl Order {
    /// Create a new, not yet stored order stamped with the current time
    pub fn new(
        client_name: impl Into<String>,
        phone: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            client_name: client_name.into(),
            phone: phone.into(),
            comment: comment.into(),
            master_id: None,
            service_id: None,
            appointment_date: None,
            status: OrderStatus::New,
            date_created: Utc::now(),
        }
    }

    pub fn with_master(mut self, master_id: EntityId) -> Self {
        self.master_id = Some(master_id);
        self
    }

    pub fn with_service(mut self, service_id: EntityId) -> Self {
        self.service_id = Some(service_id);
        self
    }

    pub fn with_appointment_date(mut self, date: NaiveDate) -> Self {
        self.appointment_date = Some(date);
        self
    }

    /// Override the creation timestamp before the order is stored
    pub fn with_date_created(mut self, date_created: DateTime<Utc>) -> Self {
        self.date_created = date_created;
        self
    }
}

impl Searchable for Order {
    fn search_text(&self, field: SearchField) -> &str {
        match field {
            SearchField::Name => &self.client_name,
            SearchField::Phone => &self.phone,
            SearchField::Comment => &self.comment,
        }
    }
}
