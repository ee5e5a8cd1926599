//! Macros for reducing boilerplate when defining entities
//!
//! These macros generate the repetitive trait implementations needed
//! for each stored record type.

/// Implement [`Entity`](crate::core::entity::Entity) for a struct
///
/// The struct must have an `id: EntityId` field and a
/// `DateTime<Utc>` creation field (named `created_at` unless given).
///
/// # Example
///
/// ```rust,ignore
/// pub struct Order {
///     pub id: EntityId,
///     pub date_created: DateTime<Utc>,
///     // ...
/// }
///
/// impl_entity!(Order, "order", "orders", created_at: date_created);
/// ```
#[macro_export]
macro_rules! impl_entity {
    ($type:ident, $singular:expr, $plural:expr) => {
        $crate::impl_entity!($type, $singular, $plural, created_at: created_at);
    };
    ($type:ident, $singular:expr, $plural:expr, created_at: $created_field:ident) => {
        impl $crate::core::entity::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> $crate::core::entity::EntityId {
                self.id
            }

            fn assign_id(&mut self, id: $crate::core::entity::EntityId) {
                self.id = id;
            }

            fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.$created_field
            }
        }
    };
}
