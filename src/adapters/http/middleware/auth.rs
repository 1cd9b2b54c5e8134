//! Authentication middleware for axum.
//!
//! The middleware depends only on the `SessionValidator` port, so the hosted
//! auth service and the test mock plug in the same way.
//!
//! ```text
//! Request → auth_middleware → AuthenticatedUser in extensions
//!                                      ↓
//!                 session_middleware → SessionContext in extensions
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::super::error::ApiError;
use crate::domain::foundation::AuthenticatedUser;
use crate::ports::SessionValidator;

/// Auth middleware state - wraps the session validator.
pub type AuthState = Arc<dyn SessionValidator>;

/// Pulls the raw token out of an `Authorization: Bearer <token>` header value.
fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ").map(str::trim).filter(|t| !t.is_empty())
}

/// Validates a Bearer token when one is present.
///
/// A request without a token passes through untouched; route groups that
/// need a caller reject it later. A token that fails validation is rejected
/// here with 401 (or 503 when the auth service is down).
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_owned);

    match token {
        Some(token) => match validator.validate(&token).await {
            Ok(user) => {
                tracing::debug!(user_id = %user.id, "Authenticated request");
                request.extensions_mut().insert(user);
                next.run(request).await
            }
            Err(e) => {
                tracing::debug!("Token rejected: {}", e);
                ApiError::from(e).into_response()
            }
        },
        None => next.run(request).await,
    }
}
