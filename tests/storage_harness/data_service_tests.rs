//! Macro-generated test suite for `DataService<TestRecord>` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use barbershop::storage::InMemoryDataService;
//!
//! data_service_tests!(InMemoryDataService::<TestRecord>::new());
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_create_assigns_id` — create then retrieve, verify all fields
//! - `test_get_nonexistent` — get with unknown id returns None
//! - `test_list_empty` — list on empty store returns empty vec
//! - `test_list_ascending_id` — list returns records by ascending id
//! - `test_update_existing` — mutate name, verify persisted
//! - `test_update_nonexistent` — update unknown id returns NotFound
//!
//! ## Seeding
//! - `test_insert_keeps_id` — insert stores under the carried id
//! - `test_insert_duplicate_id` — second insert with the same id fails
//! - `test_insert_without_id` — insert of an unsaved record fails
//! - `test_create_after_insert_skips_used_ids`
//!
//! ## Concurrency
//! - `test_concurrent_access` — parallel creates get distinct ids

/// Generate a full `DataService<TestRecord>` conformance test suite.
///
/// `$factory` must evaluate to a fresh service implementing
/// `DataService<TestRecord> + Clone + 'static`. It is re-evaluated for each
/// test to ensure isolation.
#[macro_export]
macro_rules! data_service_tests {
    ($factory:expr) => {
        mod data_service_contract_tests {
            use super::*;
            use barbershop::core::entity::Entity;
            use barbershop::core::error::{EntityError, ShopError};
            use barbershop::core::service::DataService;
            use std::collections::HashSet;

            // ==================================================================
            // CRUD
            // ==================================================================

            #[tokio::test]
            async fn test_create_assigns_id() {
                let service = $factory;
                let record = create_test_record("Alice", "+7 900", "window seat", 5);
                assert!(!record.is_stored());

                let created = service.create(record).await.unwrap();
                assert!(created.is_stored());
                assert_eq!(created.name, "Alice");

                let retrieved = service.get(created.id()).await.unwrap();
                assert_eq!(retrieved, Some(created));
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let service = $factory;
                assert!(service.get(4242).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_list_empty() {
                let service = $factory;
                assert!(service.list().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_list_ascending_id() {
                let service = $factory;
                for (i, name) in ["Eve", "Bob", "Dan", "Amy", "Cid"].iter().enumerate() {
                    service
                        .create(create_test_record(name, "", "", i as i64))
                        .await
                        .unwrap();
                }

                let all = service.list().await.unwrap();
                assert_eq!(all.len(), 5);
                let ids: Vec<u64> = all.iter().map(|r| r.id).collect();
                let mut sorted = ids.clone();
                sorted.sort_unstable();
                assert_eq!(ids, sorted);
            }

            #[tokio::test]
            async fn test_update_existing() {
                let service = $factory;
                let mut record = service
                    .create(create_test_record("Alice", "", "", 0))
                    .await
                    .unwrap();

                record.name = "Alicia".to_string();
                service.update(record.clone()).await.unwrap();

                let stored = service.get(record.id).await.unwrap().unwrap();
                assert_eq!(stored.name, "Alicia");
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let service = $factory;
                let err = service
                    .update(create_test_record_with_id(77, "Ghost"))
                    .await
                    .unwrap_err();
                assert!(matches!(
                    err,
                    ShopError::Entity(EntityError::NotFound { id: 77, .. })
                ));
            }

            // ==================================================================
            // Seeding
            // ==================================================================

            #[tokio::test]
            async fn test_insert_keeps_id() {
                let service = $factory;
                let inserted = service
                    .insert(create_test_record_with_id(10, "Seeded"))
                    .await
                    .unwrap();
                assert_eq!(inserted.id, 10);
                assert_eq!(service.get(10).await.unwrap().unwrap().name, "Seeded");
            }

            #[tokio::test]
            async fn test_insert_duplicate_id() {
                let service = $factory;
                service
                    .insert(create_test_record_with_id(3, "First"))
                    .await
                    .unwrap();

                let err = service
                    .insert(create_test_record_with_id(3, "Second"))
                    .await
                    .unwrap_err();
                assert!(matches!(
                    err,
                    ShopError::Entity(EntityError::AlreadyExists { id: 3, .. })
                ));
                assert_eq!(service.get(3).await.unwrap().unwrap().name, "First");
            }

            #[tokio::test]
            async fn test_insert_without_id() {
                let service = $factory;
                let result = service.insert(create_test_record("Nobody", "", "", 0)).await;
                assert!(result.is_err());
                assert!(service.list().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_create_after_insert_skips_used_ids() {
                let service = $factory;
                service
                    .insert(create_test_record_with_id(5, "Seeded"))
                    .await
                    .unwrap();

                let created = service
                    .create(create_test_record("Fresh", "", "", 0))
                    .await
                    .unwrap();
                assert!(created.id > 5);
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_access() {
                let service = $factory;
                let mut handles = Vec::new();
                for i in 0..20 {
                    let service = service.clone();
                    handles.push(tokio::spawn(async move {
                        service
                            .create(create_test_record(&format!("Client {}", i), "", "", i))
                            .await
                            .unwrap()
                            .id
                    }));
                }

                let mut ids = HashSet::new();
                for handle in handles {
                    ids.insert(handle.await.unwrap());
                }
                assert_eq!(ids.len(), 20);
                assert_eq!(service.list().await.unwrap().len(), 20);
            }
        }
    };
}
