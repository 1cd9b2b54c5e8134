//! Chat exchanges with the health assistant.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChatMessageId, Timestamp, UserId, ValidationError};

/// Longest message accepted from a user.
pub const MAX_MESSAGE_CHARS: usize = 4000;

/// First message shown in a new conversation.
pub const GREETING: &str = "Hello! I'm your AI health assistant. How can I help you today? \
I can provide medical advice, answer health questions, and help you with wellness planning.";

/// Instruction sent ahead of every user message.
pub const SYSTEM_PROMPT: &str = "You are a friendly AI health assistant for a wellness app. \
Give concise, practical guidance on nutrition, exercise, sleep, stress and general health. \
Encourage users to consult a healthcare professional for diagnosis or persistent symptoms.";

/// Reply substituted when the completion service fails.
pub const FALLBACK_REPLY: &str = "I'm having trouble responding right now. Please try again in a \
moment, and if you have urgent symptoms contact a healthcare professional.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Text,
    Voice,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Text => "text",
            MessageType::Voice => "voice",
        }
    }

    pub fn from_raw(value: &str) -> Self {
        match value {
            "voice" => MessageType::Voice,
            _ => MessageType::Text,
        }
    }
}

/// A user message and the assistant's reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: ChatMessageId,
    pub user_id: UserId,
    pub message: String,
    pub response: Option<String>,
    pub message_type: MessageType,
    /// When the user sent the message, not when the reply arrived.
    pub created_at: Timestamp,
}

impl ChatMessage {
    pub fn new(
        user_id: UserId,
        message: impl Into<String>,
        response: impl Into<String>,
        message_type: MessageType,
        issued_at: Timestamp,
    ) -> Self {
        Self {
            id: ChatMessageId::new(),
            user_id,
            message: message.into(),
            response: Some(response.into()),
            message_type,
            created_at: issued_at,
        }
    }
}

/// Trims and checks a user's chat input.
pub fn normalize_message(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("message"));
    }
    let chars = trimmed.chars().count();
    if chars > MAX_MESSAGE_CHARS {
        return Err(ValidationError::out_of_range(
            "message",
            1,
            MAX_MESSAGE_CHARS as i32,
            chars as i32,
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_message_rejected() {
        assert_eq!(normalize_message("  \n"), Err(ValidationError::empty_field("message")));
    }

    #[test]
    fn message_is_trimmed() {
        assert_eq!(normalize_message("  how much water?  ").unwrap(), "how much water?");
    }

    #[test]
    fn overlong_message_rejected() {
        let long = "a".repeat(MAX_MESSAGE_CHARS + 1);
        assert!(matches!(
            normalize_message(&long),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn message_keeps_issue_time() {
        let issued = Timestamp::now();
        let msg = ChatMessage::new(
            UserId::from_uuid(uuid::Uuid::new_v4()),
            "hi",
            "hello",
            MessageType::Text,
            issued,
        );
        assert_eq!(msg.created_at, issued);
        assert_eq!(msg.response.as_deref(), Some("hello"));
    }
}
