//! Subscription tier definitions.

use serde::{Deserialize, Serialize};

/// Subscription tier stored on a user's profile.
///
/// Any value the record store or a client sends that is not one of the three
/// known tiers is read as [`SubscriptionTier::Free`], the most restrictive
/// tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SubscriptionTier {
    #[default]
    Free,
    /// Marketed as "Pro".
    Tier1,
    /// Marketed as "Pro+".
    Tier2,
}

impl SubscriptionTier {
    /// All tiers, lowest first.
    pub const ALL: [SubscriptionTier; 3] = [
        SubscriptionTier::Free,
        SubscriptionTier::Tier1,
        SubscriptionTier::Tier2,
    ];

    /// Parses a stored tier value, degrading unknown values to `Free`.
    ///
    /// Matching is exact: case and surrounding whitespace are not normalized.
    pub fn from_raw(value: &str) -> Self {
        match value {
            "tier1" => SubscriptionTier::Tier1,
            "tier2" => SubscriptionTier::Tier2,
            _ => SubscriptionTier::Free,
        }
    }

    /// Wire and storage value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "free",
            SubscriptionTier::Tier1 => "tier1",
            SubscriptionTier::Tier2 => "tier2",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "Free",
            SubscriptionTier::Tier1 => "Pro",
            SubscriptionTier::Tier2 => "Pro+",
        }
    }

    /// Numeric rank; a higher rank unlocks a superset of features.
    pub fn rank(&self) -> u8 {
        match self {
            SubscriptionTier::Free => 0,
            SubscriptionTier::Tier1 => 1,
            SubscriptionTier::Tier2 => 2,
        }
    }

    pub fn is_paid(&self) -> bool {
        !matches!(self, SubscriptionTier::Free)
    }
}

impl From<String> for SubscriptionTier {
    fn from(value: String) -> Self {
        Self::from_raw(&value)
    }
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
