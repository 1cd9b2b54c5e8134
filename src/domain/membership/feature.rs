//! Feature gating by subscription tier.
//!
//! Every gating decision in the app goes through [`is_feature_available`].
//! Each [`Feature`] has a minimum tier; a tier unlocks a feature when its rank
//! is at least that minimum, so higher tiers always unlock a superset.
//!
//! | Feature | Free | Pro | Pro+ |
//! |---------|------|-----|------|
//! | tips, meal plan view, store browsing | yes | yes | yes |
//! | chat, meal plan creation, BP estimator | no | yes | yes |
//! | voice responses, store discount | no | no | yes |

use serde::{Deserialize, Serialize};

use super::SubscriptionTier;

/// A gated capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Tips,
    MealPlanView,
    StoreBrowsing,
    Chat,
    MealPlanCreation,
    BpEstimator,
    VoiceResponses,
    StoreDiscount,
}

impl Feature {
    pub const ALL: [Feature; 8] = [
        Feature::Tips,
        Feature::MealPlanView,
        Feature::StoreBrowsing,
        Feature::Chat,
        Feature::MealPlanCreation,
        Feature::BpEstimator,
        Feature::VoiceResponses,
        Feature::StoreDiscount,
    ];

    /// Cheapest tier that unlocks this feature.
    pub fn minimum_tier(&self) -> SubscriptionTier {
        match self {
            Feature::Tips | Feature::MealPlanView | Feature::StoreBrowsing => {
                SubscriptionTier::Free
            }
            Feature::Chat | Feature::MealPlanCreation | Feature::BpEstimator => {
                SubscriptionTier::Tier1
            }
            Feature::VoiceResponses | Feature::StoreDiscount => SubscriptionTier::Tier2,
        }
    }

    /// Human label used in upgrade notices.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Tips => "Daily tips",
            Feature::MealPlanView => "Meal plans",
            Feature::StoreBrowsing => "Store",
            Feature::Chat => "AI health chat",
            Feature::MealPlanCreation => "Meal plan creation",
            Feature::BpEstimator => "BP estimator",
            Feature::VoiceResponses => "Voice responses",
            Feature::StoreDiscount => "Accessory discount",
        }
    }

    /// Notice shown when a tier lacks this feature.
    pub fn upgrade_notice(&self) -> String {
        let minimum = self.minimum_tier();
        if minimum == SubscriptionTier::Tier2 {
            format!("{} requires a {} membership", self.label(), minimum.display_name())
        } else {
            format!(
                "{} requires a {} membership or higher",
                self.label(),
                minimum.display_name()
            )
        }
    }
}

/// Returns whether `tier` unlocks `feature`.
pub fn is_feature_available(tier: SubscriptionTier, feature: Feature) -> bool {
    tier.rank() >= feature.minimum_tier().rank()
}

/// All features unlocked by `tier`.
pub fn features_for(tier: SubscriptionTier) -> Vec<Feature> {
    Feature::ALL
        .iter()
        .copied()
        .filter(|f| is_feature_available(tier, *f))
        .collect()
}
