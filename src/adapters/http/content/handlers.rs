use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::super::error::ApiError;
use super::super::middleware::RequireSession;
use super::super::AppState;
use crate::domain::meals::{MealPlan, MealPlanRequest};
use crate::domain::tips::{DailyTip, TipCategory};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TipsQuery {
    #[serde(default)]
    pub category: Option<TipCategory>,
}

/// GET /api/tips
pub async fn list_tips(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    query: Result<Query<TipsQuery>, QueryRejection>,
) -> Result<Json<Vec<DailyTip>>, ApiError> {
    let Query(query) = query?;
    let tips = state
        .list_tips_handler()
        .handle(&session, query.category)
        .await?;
    Ok(Json(tips))
}

/// GET /api/meals
pub async fn list_meal_plans(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
) -> Result<Json<Vec<MealPlan>>, ApiError> {
    let plans = state.list_meal_plans_handler().handle(&session).await?;
    Ok(Json(plans))
}

/// POST /api/meals
pub async fn create_meal_plan(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    payload: Result<Json<MealPlanRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MealPlan>), ApiError> {
    let Json(request) = payload?;
    let plan = state
        .create_meal_plan_handler()
        .handle(&session, request)
        .await?;
    Ok((StatusCode::CREATED, Json(plan)))
}
