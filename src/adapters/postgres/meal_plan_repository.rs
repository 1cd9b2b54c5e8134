//! PostgreSQL implementation of MealPlanRepository.
//!
//! The generated menu is stored as a JSONB document in `meal_plans.meals`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, MealPlanId, Timestamp, UserId};
use crate::domain::meals::{Budget, DietaryPreference, MealGoal, MealPlan, Meals};
use crate::ports::MealPlanRepository;

pub struct PostgresMealPlanRepository {
    pool: PgPool,
}

impl PostgresMealPlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MealPlanRow {
    id: Uuid,
    user_id: Uuid,
    goal: String,
    dietary_preference: String,
    budget: String,
    meals: Json<Meals>,
    created_at: DateTime<Utc>,
}

impl From<MealPlanRow> for MealPlan {
    fn from(row: MealPlanRow) -> Self {
        MealPlan {
            id: MealPlanId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            goal: MealGoal::from_raw(&row.goal),
            dietary_preference: DietaryPreference::from_raw(&row.dietary_preference),
            budget: Budget::from_raw(&row.budget),
            meals: row.meals.0,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[async_trait]
impl MealPlanRepository for PostgresMealPlanRepository {
    async fn create(&self, plan: &MealPlan) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO meal_plans (id, user_id, goal, dietary_preference, budget, meals, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(plan.id.as_uuid())
        .bind(plan.user_id.as_uuid())
        .bind(plan.goal.as_str())
        .bind(plan.dietary_preference.as_str())
        .bind(plan.budget.as_str())
        .bind(Json(&plan.meals))
        .bind(plan.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert meal plan: {}", e)))?;

        Ok(())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<MealPlan>, DomainError> {
        let rows: Vec<MealPlanRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, goal, dietary_preference, budget, meals, created_at
            FROM meal_plans
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list meal plans: {}", e)))?;

        Ok(rows.into_iter().map(MealPlan::from).collect())
    }
}
