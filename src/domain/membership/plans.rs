//! Subscription plan catalog shown on the upgrade page.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Serialize;

use super::SubscriptionTier;
use crate::domain::foundation::{Currency, Price};

/// A purchasable subscription level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionPlan {
    pub tier: SubscriptionTier,
    pub name: &'static str,
    /// Monthly price.
    pub price: Price,
    pub features: Vec<&'static str>,
}

static PLANS: Lazy<Vec<SubscriptionPlan>> = Lazy::new(|| {
    vec![
        SubscriptionPlan {
            tier: SubscriptionTier::Free,
            name: SubscriptionTier::Free.display_name(),
            price: Price::new(Decimal::ZERO, Currency::Ngn),
            features: vec!["Daily tips", "Basic meal plan", "No chat access"],
        },
        SubscriptionPlan {
            tier: SubscriptionTier::Tier1,
            name: SubscriptionTier::Tier1.display_name(),
            price: Price::new(Decimal::from(3000), Currency::Ngn),
            features: vec!["Full meal plans", "GPT-4o chat", "BP estimator", "Priority support"],
        },
        SubscriptionPlan {
            tier: SubscriptionTier::Tier2,
            name: SubscriptionTier::Tier2.display_name(),
            price: Price::new(Decimal::from(5000), Currency::Ngn),
            features: vec![
                "All Pro features",
                "Voice GP responses",
                "10% off accessories",
                "Premium support",
            ],
        },
    ]
});

/// All plans, cheapest first.
pub fn subscription_plans() -> &'static [SubscriptionPlan] {
    &PLANS
}

/// Plan for a given tier.
pub fn plan_for(tier: SubscriptionTier) -> &'static SubscriptionPlan {
    // PLANS holds one entry per tier in rank order.
    &PLANS[tier.rank() as usize]
}
