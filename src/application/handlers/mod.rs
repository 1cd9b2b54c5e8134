//! Application handlers.
//!
//! Command and query handlers that check the caller's session context,
//! run domain logic and coordinate ports.

pub mod bp;
pub mod chat;
pub mod meals;
pub mod store;
pub mod tips;
