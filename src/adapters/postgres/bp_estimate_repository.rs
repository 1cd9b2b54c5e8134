//! PostgreSQL implementation of BpEstimateRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::bp::BpEstimate;
use crate::domain::foundation::DomainError;
use crate::ports::BpEstimateRepository;

pub struct PostgresBpEstimateRepository {
    pool: PgPool,
}

impl PostgresBpEstimateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BpEstimateRepository for PostgresBpEstimateRepository {
    async fn insert(&self, estimate: &BpEstimate) -> Result<(), DomainError> {
        let request = &estimate.request;
        sqlx::query(
            r#"
            INSERT INTO bp_estimates (
                id, user_id, age, work_type, activity_level, mood, stress_level,
                systolic, diastolic, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(estimate.id.as_uuid())
        .bind(estimate.user_id.as_uuid())
        .bind(request.age)
        .bind(request.work_type.as_str())
        .bind(request.activity_level.as_str())
        .bind(request.mood.as_str())
        .bind(request.stress_level)
        .bind(estimate.reading.systolic)
        .bind(estimate.reading.diastolic)
        .bind(estimate.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert BP estimate: {}", e)))?;

        Ok(())
    }
}
