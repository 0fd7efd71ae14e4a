//! Bot Detection Service
//!
//! HTTP front for the bot engine: fetches an account's profile and recent
//! posts from the upstream data service and returns the engine's verdict.
//! Bind to 127.0.0.1 by default (internal only).

pub mod config;
pub mod error;
pub mod fetch;
mod handlers;
pub mod platform;
mod state;
pub mod types;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use config::Config;
pub use error::ServiceError;
pub use handlers::{analyze, health};
pub use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/analyze", post(analyze))
    .route("/analyze-tiktok", post(analyze))
    .layer(CorsLayer::permissive())
    .with_state(state)
}
