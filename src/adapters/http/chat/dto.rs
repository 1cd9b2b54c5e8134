use serde::{Deserialize, Serialize};

use crate::domain::chat::{ChatMessage, MessageType};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatHistoryQuery {
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatHistoryResponse {
    pub greeting: &'static str,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
    #[serde(default)]
    pub message_type: MessageType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRequestBody {
    pub text: String,
}
