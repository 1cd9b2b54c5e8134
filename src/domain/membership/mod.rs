//! Membership domain module.
//!
//! Subscription tiers, the feature policy that gates every paid capability,
//! and the plan catalog.

mod feature;
mod plans;
mod tier;

pub use feature::{features_for, is_feature_available, Feature};
pub use plans::{plan_for, subscription_plans, SubscriptionPlan};
pub use tier::SubscriptionTier;
