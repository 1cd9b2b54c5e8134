//! MealPlanRepository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::meals::MealPlan;

#[async_trait]
pub trait MealPlanRepository: Send + Sync {
    async fn create(&self, plan: &MealPlan) -> Result<(), DomainError>;

    /// The member's plans, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<MealPlan>, DomainError>;
}
