//! Shared setup for HTTP-level tests
//!
//! Builds the full router over an in-memory store seeded with the demo
//! catalog (services 1..=3, masters Oleg = 1 and Anna = 2) and one staff
//! account.
//!
//! # Usage
//!
//! ```rust,ignore
//! mod site_harness;
//! use site_harness::*;
//!
//! let site = TestSite::new().await;
//! let response = site.server.get("/orders/").authorization_bearer(STAFF_TOKEN).await;
//! ```

#![allow(dead_code)]

use axum_test::TestServer;
use barbershop::config::{AppConfig, StaffAccount};
use barbershop::entities::{Order, Review};
use barbershop::server::ServerBuilder;
use barbershop::storage::ShopStore;
use chrono::{DateTime, Duration, TimeZone, Utc};

pub const STAFF_USER: &str = "admin";
pub const STAFF_TOKEN: &str = "test-staff-token";

pub const OLEG: u64 = 1;
pub const ANNA: u64 = 2;
pub const HAIRCUT: u64 = 1;
pub const BEARD_TRIM: u64 = 2;
pub const ROYAL_SHAVE: u64 = 3;

pub struct TestSite {
    pub server: TestServer,
    pub store: ShopStore,
}

impl TestSite {
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    pub async fn with_config(config: AppConfig) -> Self {
        let store = ShopStore::in_memory();
        store.seed_catalog(&config.catalog).await.unwrap();

        let app = ServerBuilder::new()
            .with_config(config)
            .with_store(store.clone())
            .build()
            .expect("Failed to build router");
        let server = TestServer::new(app);

        Self { server, store }
    }

    /// Store an order created `minutes` after a fixed base time
    pub async fn add_order(&self, name: &str, phone: &str, comment: &str, minutes: i64) -> Order {
        self.store
            .orders
            .create(
                Order::new(name, phone, comment)
                    .with_master(OLEG)
                    .with_service(HAIRCUT)
                    .with_date_created(at(minutes)),
            )
            .await
            .unwrap()
    }

    pub async fn add_review(&self, name: &str, text: &str, published: bool, minutes: i64) -> Review {
        let review = Review::new(name, text, 5).with_created_at(at(minutes));
        let review = if published { review.publish() } else { review };
        self.store.reviews.create(review).await.unwrap()
    }
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::demo();
    config.site.name = "Test Barbers".to_string();
    config.staff = vec![StaffAccount {
        username: STAFF_USER.to_string(),
        token: STAFF_TOKEN.to_string(),
    }];
    config
}

pub fn at(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes)
}
