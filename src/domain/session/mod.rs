//! Session domain module.
//!
//! Route guard decisions and the explicit per-request session context that
//! replaces any process-wide "current user" state.

mod context;
mod guard;

pub use context::{SessionContext, UpgradeRequired};
pub use guard::{
    evaluate, GuardState, RequiredTier, SessionSnapshot, LOGIN_PATH, UPGRADE_PATH,
};
