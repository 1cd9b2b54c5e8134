//! Session middleware, extractors and the tier guard.
//!
//! `session_middleware` runs after `auth_middleware`: for an authenticated
//! caller it loads the profile once and inserts a [`SessionContext`] into
//! request extensions. Handlers take the context through [`RequireSession`]
//! or [`OptionalSession`]; route groups that demand a tier add
//! [`require_tier`].

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::super::error::ApiError;
use crate::domain::foundation::AuthenticatedUser;
use crate::domain::profile::UserProfile;
use crate::domain::session::{evaluate, GuardState, RequiredTier, SessionContext, SessionSnapshot};
use crate::ports::ProfileReader;

pub type SessionState = Arc<dyn ProfileReader>;

/// Profile for a signed-in caller. A missing or unreadable profile is
/// treated as a free account.
async fn load_profile(profiles: &dyn ProfileReader, user: &AuthenticatedUser) -> UserProfile {
    match profiles.find_by_user(&user.id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            tracing::warn!(user_id = %user.id, "No profile row, treating as free");
            UserProfile::free(user.id, user.email.clone())
        }
        Err(e) => {
            tracing::warn!(user_id = %user.id, "Profile lookup failed, treating as free: {}", e);
            UserProfile::free(user.id, user.email.clone())
        }
    }
}

pub async fn session_middleware(
    State(profiles): State<SessionState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(user) = request.extensions().get::<AuthenticatedUser>().cloned() {
        let profile = load_profile(profiles.as_ref(), &user).await;
        request
            .extensions_mut()
            .insert(SessionContext::new(user, profile));
    }
    next.run(request).await
}

/// Rejects the request unless the session satisfies `required`.
///
/// Mount with `middleware::from_fn_with_state(RequiredTier::Tier1, require_tier)`.
pub async fn require_tier(
    State(required): State<RequiredTier>,
    request: Request,
    next: Next,
) -> Response {
    let snapshot = match request.extensions().get::<SessionContext>() {
        Some(session) => SessionSnapshot::SignedIn(session.profile.clone()),
        None => SessionSnapshot::SignedOut,
    };

    match evaluate(&snapshot, Some(required)) {
        GuardState::Authorized => next.run(request).await,
        GuardState::InsufficientTier => ApiError::upgrade_required(format!(
            "This area requires a {} membership or higher",
            required.as_tier().display_name()
        ))
        .with_detail("required_tier", required.as_tier().as_str())
        .into_response(),
        GuardState::Unauthenticated | GuardState::Loading => {
            ApiError::unauthenticated("Authentication required").into_response()
        }
    }
}

/// Extractor for handlers that need a signed-in caller.
#[derive(Debug, Clone)]
pub struct RequireSession(pub SessionContext);

impl<S> axum::extract::FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<SessionContext>()
                .cloned()
                .map(RequireSession)
                .ok_or_else(|| ApiError::unauthenticated("Authentication required"))
        })
    }
}

/// Extractor for routes that also serve guests.
#[derive(Debug, Clone)]
pub struct OptionalSession(pub Option<SessionContext>);

impl<S> axum::extract::FromRequestParts<S> for OptionalSession
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            Ok(OptionalSession(parts.extensions.get::<SessionContext>().cloned()))
        })
    }
}
