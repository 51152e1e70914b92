//! Server crate for the movie catalog API.
//!
//! This crate contains the axum application: routing, handlers, the origin
//! allow-list and the shared catalog state.

pub mod app;
pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod state;

pub use app::{router, serve};
pub use config::{DEFAULT_PORT, ServerConfig};
pub use cors::{OriginDecision, OriginPolicy};
pub use error::ApiError;
pub use state::AppState;
