//! Core traits and types shared by the whole site

pub mod auth;
pub mod entity;
pub mod error;
pub mod search;
pub mod service;
pub mod validation;

pub use auth::{AuthContext, AuthPolicy, AuthProvider, NoAuthProvider, StaticTokenAuthProvider};
pub use entity::{Entity, EntityId};
pub use error::{ShopError, ShopResult};
pub use search::{SearchField, SearchRequest, Searchable, filter_orders};
pub use service::DataService;
