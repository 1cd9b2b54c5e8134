//! Session validation port.
//!
//! Turns a bearer access token into the caller's identity. Implementations
//! must check the signature plus the issuer, audience and expiry claims.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// # Contract
///
/// - `AuthError::InvalidToken` for malformed tokens or bad signatures
/// - `AuthError::TokenExpired` for expired tokens
/// - `AuthError::ServiceUnavailable` for transient failures
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (no "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
