//! AI chat handlers.
//!
//! ## Commands
//! - Send a message and store the exchange
//!
//! ## Queries
//! - List chat history
//! - Synthesize speech for a reply

mod list_messages;
mod send_message;
mod synthesize_speech;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::session::UpgradeRequired;

pub use list_messages::{ListChatMessagesHandler, DEFAULT_HISTORY_LIMIT};
pub use send_message::{
    ChatHandlerConfig, SendChatMessageCommand, SendChatMessageHandler, SendChatMessageResult,
};
pub use synthesize_speech::SynthesizeSpeechHandler;

#[derive(Debug, Clone, Error)]
pub enum ChatError {
    #[error(transparent)]
    UpgradeRequired(#[from] UpgradeRequired),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(DomainError),
}
