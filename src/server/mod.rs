//! HTTP layer: routes, handlers, page rendering
//!
//! `ServerBuilder` wires the store, the auth provider and the site
//! configuration into an [`AppState`] and returns an axum `Router`.

pub mod builder;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;

pub use builder::ServerBuilder;
pub use render::Renderer;
pub use state::{AppState, StaffUser};
