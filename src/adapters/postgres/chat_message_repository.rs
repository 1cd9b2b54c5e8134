//! PostgreSQL implementation of ChatMessageRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::chat::{ChatMessage, MessageType};
use crate::domain::foundation::{ChatMessageId, DomainError, Timestamp, UserId};
use crate::ports::ChatMessageRepository;

pub struct PostgresChatMessageRepository {
    pool: PgPool,
}

impl PostgresChatMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ChatMessageRow {
    id: Uuid,
    user_id: Uuid,
    message: String,
    response: Option<String>,
    message_type: String,
    created_at: DateTime<Utc>,
}

impl From<ChatMessageRow> for ChatMessage {
    fn from(row: ChatMessageRow) -> Self {
        ChatMessage {
            id: ChatMessageId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            message: row.message,
            response: row.response,
            message_type: MessageType::from_raw(&row.message_type),
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[async_trait]
impl ChatMessageRepository for PostgresChatMessageRepository {
    async fn append(&self, message: &ChatMessage) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO chat_messages (id, user_id, message, response, message_type, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(message.id.as_uuid())
        .bind(message.user_id.as_uuid())
        .bind(&message.message)
        .bind(message.response.as_deref())
        .bind(message.message_type.as_str())
        .bind(message.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert chat message: {}", e)))?;

        Ok(())
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        // Newest N, then flipped back into send order.
        let rows: Vec<ChatMessageRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, message, response, message_type, created_at
            FROM (
                SELECT id, user_id, message, response, message_type, created_at
                FROM chat_messages
                WHERE user_id = $1
                ORDER BY created_at DESC
                LIMIT $2
            ) recent
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list chat messages: {}", e)))?;

        Ok(rows.into_iter().map(ChatMessage::from).collect())
    }
}
