//! Blood-pressure estimator endpoint.
//!
//! - `POST /api/bp/estimate` - lifestyle estimate, saved to history

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use super::error::ApiError;
use super::middleware::RequireSession;
use super::AppState;
use crate::application::EstimateBpResult;
use crate::domain::bp::BpEstimateRequest;

pub fn bp_routes() -> Router<AppState> {
    Router::new().route("/estimate", post(estimate_bp))
}

/// POST /api/bp/estimate
pub async fn estimate_bp(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    payload: Result<Json<BpEstimateRequest>, JsonRejection>,
) -> Result<Json<EstimateBpResult>, ApiError> {
    let Json(request) = payload?;
    let result = state.estimate_bp_handler().handle(&session, request).await?;
    Ok(Json(result))
}
