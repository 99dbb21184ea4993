//! HTTP presentation layer
//!
//! Thin axum boundary over the weather query service: request validation,
//! error-to-status mapping, and static frontend serving.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use routes::create_router;
pub use state::AppState;
