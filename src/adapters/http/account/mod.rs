//! Public and member-overview endpoints.
//!
//! - `GET /api/health` - liveness probe
//! - `GET /api/plans` - subscription plan catalog
//! - `GET /api/dashboard` - profile plus tier overview

mod handlers;

use axum::{routing::get, Router};

pub use handlers::{dashboard, health, plans, DashboardResponse, HealthResponse};

use super::AppState;

pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/plans", get(plans))
        .route("/dashboard", get(dashboard))
}
