//! Foundation module - shared domain primitives.
//!
//! Identifiers, timestamps, money, caller identity and the error vocabulary
//! used by every other domain module.

mod auth;
mod errors;
mod ids;
mod price;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BpEstimateId, ChatMessageId, MealPlanId, TipId, UserId};
pub use price::{Currency, Price};
pub use timestamp::Timestamp;
