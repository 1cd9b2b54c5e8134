use axum::Json;
use serde::Serialize;

use super::super::middleware::RequireSession;
use crate::domain::dashboard::DashboardOverview;
use crate::domain::membership::{subscription_plans, SubscriptionPlan};
use crate::domain::profile::UserProfile;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/plans
pub async fn plans() -> Json<&'static [SubscriptionPlan]> {
    Json(subscription_plans())
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub profile: UserProfile,
    #[serde(flatten)]
    pub overview: DashboardOverview,
}

/// GET /api/dashboard
pub async fn dashboard(RequireSession(session): RequireSession) -> Json<DashboardResponse> {
    let overview = DashboardOverview::for_profile(&session.profile);
    Json(DashboardResponse {
        profile: session.profile,
        overview,
    })
}
