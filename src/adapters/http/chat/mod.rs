//! AI chat endpoints. The whole group sits behind the Pro tier guard.
//!
//! - `GET /api/chat/messages?limit=` - greeting plus recent history
//! - `POST /api/chat/messages` - ask the assistant
//! - `POST /api/chat/speech` - synthesize a reply (Pro+), 204 when unavailable

mod dto;
mod handlers;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub use dto::{ChatHistoryQuery, ChatHistoryResponse, SendMessageRequest, SpeechRequestBody};
pub use handlers::{list_messages, send_message, synthesize_speech};

use super::middleware::require_tier;
use super::AppState;
use crate::domain::session::RequiredTier;

pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", get(list_messages).post(send_message))
        .route("/speech", post(synthesize_speech))
        .layer(middleware::from_fn_with_state(RequiredTier::Tier1, require_tier))
}
