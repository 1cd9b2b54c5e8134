//! Authenticated caller identity.
//!
//! Populated by a `SessionValidator` adapter from a verified bearer token and
//! placed into request extensions by the auth middleware. Provider specifics
//! (claim names, issuers) never leak past the adapter.

use super::UserId;
use thiserror::Error;

/// Caller identity extracted from a validated access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: String,
    /// Full name from the token's user metadata, when present.
    pub display_name: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            display_name,
        }
    }

    /// Returns the display name, or the email when no name is set.
    pub fn display_name_or_email(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Token validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// True when the client should sign in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user(display_name: Option<&str>) -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::from_uuid(Uuid::new_v4()),
            "ada@example.com",
            display_name.map(String::from),
        )
    }

    #[test]
    fn display_name_preferred_over_email() {
        assert_eq!(user(Some("Ada")).display_name_or_email(), "Ada");
    }

    #[test]
    fn email_used_when_name_missing() {
        assert_eq!(user(None).display_name_or_email(), "ada@example.com");
    }

    #[test]
    fn expired_and_invalid_tokens_require_reauthentication() {
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(AuthError::TokenExpired.requires_reauthentication());
        assert!(!AuthError::service_unavailable("down").requires_reauthentication());
    }
}
