//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, money, errors, caller identity)
//! - `membership` - Subscription tiers, feature policy, plan catalog
//! - `session` - Route guard decisions and per-request session context
//! - `profile` - User profile record
//! - `bp` - Lifestyle blood-pressure heuristic
//! - `store` - Accessory catalog, tier pricing, session cart
//! - `tips`, `meals`, `chat` - Record-store content
//! - `dashboard` - Member overview and quick actions

pub mod bp;
pub mod chat;
pub mod dashboard;
pub mod foundation;
pub mod meals;
pub mod membership;
pub mod profile;
pub mod session;
pub mod store;
pub mod tips;
