//! HTTP middleware for axum.
//!
//! - `auth` - Bearer token validation
//! - `session` - per-request profile loading, session extractors, tier guard

pub mod auth;
pub mod session;

pub use auth::{auth_middleware, AuthState};
pub use session::{
    require_tier, session_middleware, OptionalSession, RequireSession, SessionState,
};
