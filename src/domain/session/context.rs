//! Per-request session context.

use thiserror::Error;

use crate::domain::foundation::{AuthenticatedUser, UserId};
use crate::domain::membership::{is_feature_available, Feature, SubscriptionTier};
use crate::domain::profile::UserProfile;

/// The signed-in caller and the profile loaded for this request.
///
/// Built once per request and handed to every handler explicitly.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user: AuthenticatedUser,
    pub profile: UserProfile,
}

/// A feature the caller's tier does not unlock.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{notice}")]
pub struct UpgradeRequired {
    pub feature: Feature,
    pub required_tier: SubscriptionTier,
    pub notice: String,
}

impl UpgradeRequired {
    pub fn for_feature(feature: Feature) -> Self {
        Self {
            feature,
            required_tier: feature.minimum_tier(),
            notice: feature.upgrade_notice(),
        }
    }
}

impl SessionContext {
    pub fn new(user: AuthenticatedUser, profile: UserProfile) -> Self {
        Self { user, profile }
    }

    pub fn user_id(&self) -> UserId {
        self.user.id
    }

    pub fn tier(&self) -> SubscriptionTier {
        self.profile.subscription_tier
    }

    pub fn can(&self, feature: Feature) -> bool {
        is_feature_available(self.tier(), feature)
    }

    /// Fails with an upgrade notice when the tier lacks `feature`.
    pub fn require(&self, feature: Feature) -> Result<(), UpgradeRequired> {
        if self.can(feature) {
            Ok(())
        } else {
            Err(UpgradeRequired::for_feature(feature))
        }
    }
}
