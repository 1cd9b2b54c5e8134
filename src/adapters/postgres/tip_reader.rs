//! PostgreSQL implementation of TipReader.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, TipId, Timestamp};
use crate::domain::tips::{DailyTip, TipAudience, TipCategory, TipQuery};
use crate::ports::TipReader;

pub struct PostgresTipReader {
    pool: PgPool,
}

impl PostgresTipReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TipRow {
    id: Uuid,
    title: String,
    content: String,
    category: String,
    target_audience: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<TipRow> for DailyTip {
    fn from(row: TipRow) -> Self {
        DailyTip {
            id: TipId::from_uuid(row.id),
            title: row.title,
            content: row.content,
            category: TipCategory::from_raw(&row.category),
            target_audience: TipAudience::from_raw(&row.target_audience),
            is_active: row.is_active,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[async_trait]
impl TipReader for PostgresTipReader {
    async fn list_visible(&self, query: TipQuery) -> Result<Vec<DailyTip>, DomainError> {
        let rows: Vec<TipRow> = sqlx::query_as(
            r#"
            SELECT id, title, content, category, target_audience, is_active, created_at
            FROM daily_tips
            WHERE is_active
              AND target_audience IN ('all', $1)
              AND ($2::TEXT IS NULL OR category = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(query.tier.as_str())
        .bind(query.category.map(|c| c.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list tips: {}", e)))?;

        Ok(rows.into_iter().map(DailyTip::from).collect())
    }
}
