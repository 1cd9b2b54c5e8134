//! ListChatMessagesHandler - the caller's chat history.

use std::sync::Arc;

use super::ChatError;
use crate::domain::chat::ChatMessage;
use crate::domain::membership::Feature;
use crate::domain::session::SessionContext;
use crate::ports::ChatMessageRepository;

/// Exchanges returned when the caller does not ask for a limit.
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;
const MAX_HISTORY_LIMIT: u32 = 200;

pub struct ListChatMessagesHandler {
    repository: Arc<dyn ChatMessageRepository>,
}

impl ListChatMessagesHandler {
    pub fn new(repository: Arc<dyn ChatMessageRepository>) -> Self {
        Self { repository }
    }

    /// Most recent exchanges, oldest first.
    pub async fn handle(
        &self,
        session: &SessionContext,
        limit: Option<u32>,
    ) -> Result<Vec<ChatMessage>, ChatError> {
        session.require(Feature::Chat)?;
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT).clamp(1, MAX_HISTORY_LIMIT);

        self.repository
            .list_by_user(&session.user_id(), limit)
            .await
            .map_err(ChatError::Repository)
    }
}
