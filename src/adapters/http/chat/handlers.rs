use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::super::error::ApiError;
use super::super::middleware::RequireSession;
use super::super::AppState;
use super::dto::{ChatHistoryQuery, ChatHistoryResponse, SendMessageRequest, SpeechRequestBody};
use crate::application::{SendChatMessageCommand, SendChatMessageResult};
use crate::domain::chat::GREETING;

/// GET /api/chat/messages
pub async fn list_messages(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    query: Result<Query<ChatHistoryQuery>, QueryRejection>,
) -> Result<Json<ChatHistoryResponse>, ApiError> {
    let Query(query) = query?;
    let messages = state
        .list_chat_messages_handler()
        .handle(&session, query.limit)
        .await?;
    Ok(Json(ChatHistoryResponse {
        greeting: GREETING,
        messages,
    }))
}

/// POST /api/chat/messages
pub async fn send_message(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SendChatMessageResult>), ApiError> {
    let Json(request) = payload?;
    let command = SendChatMessageCommand {
        message: request.message,
        message_type: request.message_type,
    };
    let result = state
        .send_chat_message_handler()
        .handle(&session, command)
        .await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// POST /api/chat/speech - audio bytes, or 204 when no audio could be made.
pub async fn synthesize_speech(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    payload: Result<Json<SpeechRequestBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let audio = state
        .synthesize_speech_handler()
        .handle(&session, &request.text)
        .await?;

    Ok(match audio {
        Some(audio) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, audio.content_type)],
            audio.bytes,
        )
            .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}
