//! Record-store content endpoints.
//!
//! - `GET /api/tips?category=` - tips for the caller's tier
//! - `GET /api/meals` - caller's saved meal plans
//! - `POST /api/meals` - generate and save a meal plan

mod handlers;

use axum::{routing::get, Router};

pub use handlers::{create_meal_plan, list_meal_plans, list_tips, TipsQuery};

use super::AppState;

pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/tips", get(list_tips))
        .route("/meals", get(list_meal_plans).post(create_meal_plan))
}
