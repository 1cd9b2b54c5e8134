//! PostgreSQL implementation of ProfileReader.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::membership::SubscriptionTier;
use crate::domain::profile::{Role, UserProfile};
use crate::ports::ProfileReader;

/// Reads the `profiles` table written by the auth service sign-up hook.
pub struct PostgresProfileReader {
    pool: PgPool,
}

impl PostgresProfileReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    email: String,
    full_name: Option<String>,
    avatar_url: Option<String>,
    phone: Option<String>,
    institution: Option<String>,
    role: Option<String>,
    subscription_tier: Option<String>,
    vouchers: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for UserProfile {
    fn from(row: ProfileRow) -> Self {
        UserProfile {
            id: UserId::from_uuid(row.id),
            email: row.email,
            full_name: row.full_name,
            avatar_url: row.avatar_url,
            phone: row.phone,
            institution: row.institution,
            role: row.role.as_deref().and_then(Role::from_raw),
            // Unrecognised or missing tiers grant nothing beyond free.
            subscription_tier: row
                .subscription_tier
                .as_deref()
                .map(SubscriptionTier::from_raw)
                .unwrap_or_default(),
            vouchers: row.vouchers.unwrap_or(0),
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

#[async_trait]
impl ProfileReader for PostgresProfileReader {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            SELECT id, email, full_name, avatar_url, phone, institution, role,
                   subscription_tier, vouchers, created_at, updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch profile: {}", e)))?;

        Ok(row.map(UserProfile::from))
    }
}
