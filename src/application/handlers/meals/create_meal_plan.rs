//! CreateMealPlanHandler - generates and saves a plan.

use std::sync::Arc;

use super::MealPlanError;
use crate::domain::meals::{MealPlan, MealPlanRequest};
use crate::domain::membership::Feature;
use crate::domain::session::SessionContext;
use crate::ports::MealPlanRepository;

pub struct CreateMealPlanHandler {
    repository: Arc<dyn MealPlanRepository>,
}

impl CreateMealPlanHandler {
    pub fn new(repository: Arc<dyn MealPlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        session: &SessionContext,
        request: MealPlanRequest,
    ) -> Result<MealPlan, MealPlanError> {
        session.require(Feature::MealPlanCreation)?;

        let plan = MealPlan::generate(session.user_id(), request);
        self.repository
            .create(&plan)
            .await
            .map_err(MealPlanError::Repository)?;

        tracing::debug!(user_id = %session.user_id(), goal = plan.goal.as_str(), "Meal plan created");
        Ok(plan)
    }
}
