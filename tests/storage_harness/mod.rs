//! Shared test harness for storage backend testing
//!
//! Provides `TestRecord`, a minimal stored entity that is also
//! [`Searchable`], and helpers for creating test data.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod data_service_tests;

use barbershop::core::entity::EntityId;
use barbershop::core::search::{SearchField, Searchable};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A record with one text value per searchable field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

barbershop::impl_entity!(TestRecord, "test_record", "test_records");

impl Searchable for TestRecord {
    fn search_text(&self, field: SearchField) -> &str {
        match field {
            SearchField::Name => &self.name,
            SearchField::Phone => &self.phone,
            SearchField::Comment => &self.comment,
        }
    }
}

/// Fixed point in time all test timestamps are relative to
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

/// An unsaved record created `minutes` after [`base_time`]
pub fn create_test_record(name: &str, phone: &str, comment: &str, minutes: i64) -> TestRecord {
    TestRecord {
        id: 0,
        name: name.to_string(),
        phone: phone.to_string(),
        comment: comment.to_string(),
        created_at: base_time() + Duration::minutes(minutes),
    }
}

/// A record already carrying an identifier
pub fn create_test_record_with_id(id: EntityId, name: &str) -> TestRecord {
    TestRecord {
        id,
        ..create_test_record(name, "", "", 0)
    }
}
