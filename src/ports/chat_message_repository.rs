//! ChatMessageRepository port.

use async_trait::async_trait;

use crate::domain::chat::ChatMessage;
use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait ChatMessageRepository: Send + Sync {
    async fn append(&self, message: &ChatMessage) -> Result<(), DomainError>;

    /// The member's exchanges in the order they were sent, at most `limit`
    /// most recent.
    async fn list_by_user(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, DomainError>;
}
