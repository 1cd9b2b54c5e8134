//! Router assembly.
//!
//! `api_router` mounts every feature area under `/api` behind the auth and
//! session layers; `app` adds tracing, request timeout and CORS for serving.

use axum::{middleware, Router};
use http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::account::account_routes;
use super::bp::bp_routes;
use super::chat::chat_routes;
use super::content::content_routes;
use super::middleware::{auth_middleware, session_middleware};
use super::store::store_routes;
use super::AppState;
use crate::config::ServerConfig;

/// All API routes with state applied.
///
/// Layer order: `auth_middleware` runs first and injects the caller, then
/// `session_middleware` loads the profile for that caller.
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(account_routes())
        .merge(content_routes())
        .nest("/store", store_routes())
        .nest("/bp", bp_routes())
        .nest("/chat", chat_routes())
        .layer(middleware::from_fn_with_state(
            state.profiles.clone(),
            session_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state.session_validator.clone(),
            auth_middleware,
        ))
        .with_state(state);

    Router::new().nest("/api", api)
}

/// CORS for the configured origins, permissive when none are configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin: {}", e);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
}

/// The servable application.
pub fn app(state: AppState, server: &ServerConfig) -> Router {
    api_router(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}
