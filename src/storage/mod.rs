//! Storage implementations and the aggregated shop store

pub mod in_memory;
pub mod shop;

pub use in_memory::InMemoryDataService;
pub use shop::ShopStore;
