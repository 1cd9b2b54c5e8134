//! ListMealPlansHandler - the caller's saved plans, newest first.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::meals::MealPlan;
use crate::domain::session::SessionContext;
use crate::ports::MealPlanRepository;

pub struct ListMealPlansHandler {
    repository: Arc<dyn MealPlanRepository>,
}

impl ListMealPlansHandler {
    pub fn new(repository: Arc<dyn MealPlanRepository>) -> Self {
        Self { repository }
    }

    /// Any signed-in member may read their plans.
    pub async fn handle(&self, session: &SessionContext) -> Result<Vec<MealPlan>, DomainError> {
        self.repository.list_by_user(&session.user_id()).await
    }
}
