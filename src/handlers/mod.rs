//! HTTP handlers
//!
//! Axum handlers and routers for the article API and the service's health
//! and status endpoints.

pub mod generate;
pub mod status;

pub use generate::{api_router, generate_article_handler};
pub use status::{status_router, AppState, HealthResponse, StatusResponse};
