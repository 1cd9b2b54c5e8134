//! Route guard decisions.
//!
//! A guard sees one of three session snapshots (still resolving, signed out,
//! signed in with a profile) and an optional tier requirement, and lands in
//! exactly one [`GuardState`]. Tier comparison is an exhaustive match so a
//! new tier cannot silently pass a requirement.
//!
//! # Example
//!
//! ```ignore
//! let state = evaluate(&SessionSnapshot::SignedIn(profile), Some(RequiredTier::Tier1));
//! if let Some(path) = state.redirect() {
//!     return redirect_to(path);
//! }
//! ```

use serde::Serialize;

use crate::domain::membership::SubscriptionTier;
use crate::domain::profile::UserProfile;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Where under-tier members are sent.
pub const UPGRADE_PATH: &str = "/upgrade";

/// Tier a route group demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredTier {
    Tier1,
    Tier2,
}

impl RequiredTier {
    /// Tier2 satisfies any requirement; tier1 satisfies only a tier1 requirement.
    pub fn is_satisfied_by(&self, tier: SubscriptionTier) -> bool {
        match (self, tier) {
            (_, SubscriptionTier::Tier2) => true,
            (RequiredTier::Tier1, SubscriptionTier::Tier1) => true,
            (RequiredTier::Tier2, SubscriptionTier::Tier1) => false,
            (_, SubscriptionTier::Free) => false,
        }
    }

    pub fn as_tier(&self) -> SubscriptionTier {
        match self {
            RequiredTier::Tier1 => SubscriptionTier::Tier1,
            RequiredTier::Tier2 => SubscriptionTier::Tier2,
        }
    }
}

/// What the session source currently knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSnapshot {
    /// Session lookup has not resolved yet.
    Pending,
    SignedOut,
    SignedIn(UserProfile),
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardState {
    Loading,
    Unauthenticated,
    InsufficientTier,
    Authorized,
}

impl GuardState {
    /// Redirect target for the two redirecting states.
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            GuardState::Unauthenticated => Some(LOGIN_PATH),
            GuardState::InsufficientTier => Some(UPGRADE_PATH),
            GuardState::Loading | GuardState::Authorized => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, GuardState::Loading)
    }
}

/// Decides access for a snapshot and an optional tier requirement.
pub fn evaluate(snapshot: &SessionSnapshot, required: Option<RequiredTier>) -> GuardState {
    match snapshot {
        SessionSnapshot::Pending => GuardState::Loading,
        SessionSnapshot::SignedOut => GuardState::Unauthenticated,
        SessionSnapshot::SignedIn(profile) => match required {
            Some(req) if !req.is_satisfied_by(profile.subscription_tier) => {
                GuardState::InsufficientTier
            }
            _ => GuardState::Authorized,
        },
    }
}
