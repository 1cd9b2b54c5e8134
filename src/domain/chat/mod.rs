//! AI chat domain module.

mod message;

pub use message::{
    normalize_message, ChatMessage, MessageType, FALLBACK_REPLY, GREETING, MAX_MESSAGE_CHARS,
    SYSTEM_PROMPT,
};
