//! Dashboard overview for the signed-in member.

use serde::Serialize;

use crate::domain::membership::{is_feature_available, Feature, SubscriptionTier};
use crate::domain::profile::UserProfile;
use crate::domain::session::UPGRADE_PATH;

/// A dashboard shortcut tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub available: bool,
    /// Where the tile links: `href` when available, the upgrade page otherwise.
    pub link: &'static str,
}

impl QuickAction {
    fn new(title: &'static str, description: &'static str, href: &'static str, available: bool) -> Self {
        Self {
            title,
            description,
            href,
            available,
            link: if available { href } else { UPGRADE_PATH },
        }
    }

    fn gated(
        title: &'static str,
        description: &'static str,
        href: &'static str,
        tier: SubscriptionTier,
        feature: Feature,
    ) -> Self {
        Self::new(title, description, href, is_feature_available(tier, feature))
    }
}

/// Tiles shown to a member of `tier`, in display order.
pub fn quick_actions(tier: SubscriptionTier) -> Vec<QuickAction> {
    vec![
        QuickAction::gated("Get Tips", "Personalized health advice", "/tips", tier, Feature::Tips),
        QuickAction::gated("Plan My Meals", "Custom meal planning", "/meals", tier, Feature::MealPlanCreation),
        QuickAction::gated("Check BP", "Blood pressure estimator", "/bp-estimator", tier, Feature::BpEstimator),
        QuickAction::gated("Talk to GP", "AI health consultation", "/chat", tier, Feature::Chat),
        QuickAction::gated("Shop Accessories", "Health monitoring devices", "/store", tier, Feature::StoreBrowsing),
        QuickAction::new(
            "Upgrade to Pro+",
            "Unlock all features",
            UPGRADE_PATH,
            tier != SubscriptionTier::Tier2,
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardOverview {
    pub greeting_name: String,
    pub tier: SubscriptionTier,
    /// "Pro Member" / "Pro+ Member"; absent for free accounts.
    pub membership_badge: Option<String>,
    pub vouchers: i32,
    pub features: Vec<Feature>,
    pub quick_actions: Vec<QuickAction>,
}

impl DashboardOverview {
    pub fn for_profile(profile: &UserProfile) -> Self {
        let tier = profile.subscription_tier;
        Self {
            greeting_name: profile.greeting_name().to_string(),
            tier,
            membership_badge: tier
                .is_paid()
                .then(|| format!("{} Member", tier.display_name())),
            vouchers: profile.vouchers,
            features: crate::domain::membership::features_for(tier),
            quick_actions: quick_actions(tier),
        }
    }
}
