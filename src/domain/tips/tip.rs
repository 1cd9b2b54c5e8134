//! Daily wellness tips.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TipId, Timestamp};
use crate::domain::membership::SubscriptionTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipCategory {
    Nutrition,
    Exercise,
    MentalHealth,
    Sleep,
    Hydration,
    General,
}

impl TipCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipCategory::Nutrition => "nutrition",
            TipCategory::Exercise => "exercise",
            TipCategory::MentalHealth => "mental_health",
            TipCategory::Sleep => "sleep",
            TipCategory::Hydration => "hydration",
            TipCategory::General => "general",
        }
    }

    pub fn from_raw(value: &str) -> Self {
        match value {
            "nutrition" => TipCategory::Nutrition,
            "exercise" => TipCategory::Exercise,
            "mental_health" => TipCategory::MentalHealth,
            "sleep" => TipCategory::Sleep,
            "hydration" => TipCategory::Hydration,
            _ => TipCategory::General,
        }
    }
}

/// Who a tip is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TipAudience {
    All,
    Tier(SubscriptionTier),
    /// A stored value naming no known audience; shown to nobody.
    Unrecognized,
}

impl TipAudience {
    /// Stored audience value, matched exactly.
    pub fn from_raw(value: &str) -> Self {
        match value {
            "all" => TipAudience::All,
            "free" => TipAudience::Tier(SubscriptionTier::Free),
            "tier1" => TipAudience::Tier(SubscriptionTier::Tier1),
            "tier2" => TipAudience::Tier(SubscriptionTier::Tier2),
            _ => TipAudience::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TipAudience::All => "all",
            TipAudience::Tier(tier) => tier.as_str(),
            TipAudience::Unrecognized => "unknown",
        }
    }

    /// Tips target either everyone or exactly one tier.
    pub fn includes(&self, tier: SubscriptionTier) -> bool {
        match self {
            TipAudience::All => true,
            TipAudience::Tier(target) => *target == tier,
            TipAudience::Unrecognized => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTip {
    pub id: TipId,
    pub title: String,
    pub content: String,
    pub category: TipCategory,
    #[serde(serialize_with = "serialize_audience")]
    pub target_audience: TipAudience,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl DailyTip {
    /// Whether a member of `tier` sees this tip.
    pub fn is_visible_to(&self, tier: SubscriptionTier) -> bool {
        self.is_active && self.target_audience.includes(tier)
    }
}

fn serialize_audience<S: serde::Serializer>(audience: &TipAudience, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(audience.as_str())
}

/// Filter for a tip listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipQuery {
    pub tier: SubscriptionTier,
    pub category: Option<TipCategory>,
}

impl TipQuery {
    pub fn matches(&self, tip: &DailyTip) -> bool {
        tip.is_visible_to(self.tier) && self.category.map_or(true, |c| tip.category == c)
    }
}
