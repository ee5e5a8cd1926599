//! Entities module - contains all stored records of the shop

pub mod macros;
pub mod master;
pub mod order;
pub mod review;
pub mod service;

pub use master::Master;
pub use order::{Order, OrderStatus};
pub use review::Review;
pub use service::{Service, ServiceSummary};
