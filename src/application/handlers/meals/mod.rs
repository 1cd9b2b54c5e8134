//! Meal plan handlers.

mod create_meal_plan;
mod list_meal_plans;

use thiserror::Error;

use crate::domain::foundation::DomainError;
use crate::domain::session::UpgradeRequired;

pub use create_meal_plan::CreateMealPlanHandler;
pub use list_meal_plans::ListMealPlansHandler;

#[derive(Debug, Clone, Error)]
pub enum MealPlanError {
    #[error(transparent)]
    UpgradeRequired(#[from] UpgradeRequired),

    #[error("Repository error: {0}")]
    Repository(DomainError),
}

#[cfg(test)]
pub(crate) mod test_support {
    pub use crate::application::handlers::chat::test_support::session;
}
