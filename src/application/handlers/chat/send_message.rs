//! SendChatMessageHandler - asks the assistant and stores the exchange.

use serde::Serialize;
use std::sync::Arc;

use super::ChatError;
use crate::domain::chat::{normalize_message, ChatMessage, MessageType, FALLBACK_REPLY, SYSTEM_PROMPT};
use crate::domain::foundation::Timestamp;
use crate::domain::membership::Feature;
use crate::domain::session::SessionContext;
use crate::ports::{AIProvider, ChatMessageRepository, CompletionRequest, MessageRole};

/// Prompt settings for the assistant.
#[derive(Debug, Clone)]
pub struct ChatHandlerConfig {
    pub system_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for ChatHandlerConfig {
    fn default() -> Self {
        Self {
            system_prompt: SYSTEM_PROMPT.to_string(),
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub message: String,
    pub message_type: MessageType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendChatMessageResult {
    pub message: ChatMessage,
    /// True when the reply is the fixed fallback.
    pub fallback: bool,
    /// Whether the caller may request audio for the reply.
    pub has_audio: bool,
}

pub struct SendChatMessageHandler {
    provider: Arc<dyn AIProvider>,
    repository: Arc<dyn ChatMessageRepository>,
    config: ChatHandlerConfig,
}

impl SendChatMessageHandler {
    pub fn new(provider: Arc<dyn AIProvider>, repository: Arc<dyn ChatMessageRepository>) -> Self {
        Self::with_config(provider, repository, ChatHandlerConfig::default())
    }

    pub fn with_config(
        provider: Arc<dyn AIProvider>,
        repository: Arc<dyn ChatMessageRepository>,
        config: ChatHandlerConfig,
    ) -> Self {
        Self {
            provider,
            repository,
            config,
        }
    }

    pub async fn handle(
        &self,
        session: &SessionContext,
        command: SendChatMessageCommand,
    ) -> Result<SendChatMessageResult, ChatError> {
        session.require(Feature::Chat)?;
        let text = normalize_message(&command.message)?;

        // History is ordered by when the member asked, not when the reply came.
        let issued_at = Timestamp::now();

        let request = CompletionRequest::new(session.user_id())
            .with_system_prompt(self.config.system_prompt.as_str())
            .with_message(MessageRole::User, text.as_str())
            .with_max_tokens(self.config.max_tokens)
            .with_temperature(self.config.temperature);

        let (reply, fallback) = match self.provider.complete(request).await {
            Ok(response) if !response.content.trim().is_empty() => (response.content, false),
            Ok(_) => {
                tracing::warn!(user_id = %session.user_id(), "Chat provider returned an empty reply");
                (FALLBACK_REPLY.to_string(), true)
            }
            Err(e) => {
                let info = self.provider.provider_info();
                tracing::warn!(
                    user_id = %session.user_id(),
                    provider = %info.name,
                    "Chat completion failed, using fallback: {}",
                    e
                );
                (FALLBACK_REPLY.to_string(), true)
            }
        };

        let message = ChatMessage::new(session.user_id(), text, reply, command.message_type, issued_at);
        if let Err(e) = self.repository.append(&message).await {
            tracing::warn!(user_id = %session.user_id(), "Failed to save chat message: {}", e);
        }

        Ok(SendChatMessageResult {
            message,
            fallback,
            has_audio: session.can(Feature::VoiceResponses),
        })
    }
}
