//! # Barbershop
//!
//! Booking and catalog website for a barbershop.
//!
//! ## Features
//!
//! - **Landing page**: active masters, the service catalog and the latest published reviews
//! - **Booking**: clients request a visit with a master for one of the master's services
//! - **Reviews**: clients leave a rated review, published after moderation
//! - **Order desk**: staff list bookings newest first and search them by name, phone or comment
//! - **Configuration-Based**: site settings, staff tokens and the catalog come from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use barbershop::prelude::*;
//!
//! let config = AppConfig::from_env()?;
//! let store = ShopStore::in_memory();
//! store.seed_catalog(&config.catalog).await?;
//!
//! ServerBuilder::new()
//!     .with_config(config)
//!     .with_store(store)
//!     .serve()
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        auth::{AuthContext, AuthPolicy, AuthProvider, NoAuthProvider, StaticTokenAuthProvider},
        entity::{Entity, EntityId},
        error::{ShopError, ShopResult},
        search::{SearchField, SearchRequest, Searchable, filter_orders},
        service::DataService,
        validation::{FieldErrors, OrderInput, ReviewInput, validate_order, validate_review},
    };

    // === Entities ===
    pub use crate::entities::{Master, Order, OrderStatus, Review, Service, ServiceSummary};

    // === Storage ===
    pub use crate::storage::{InMemoryDataService, ShopStore};

    // === Config ===
    pub use crate::config::{AppConfig, CatalogConfig, SiteConfig, StaffAccount};

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
