//! User profile record kept by the hosted record store.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::membership::SubscriptionTier;

/// Campus role captured at sign-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
    Staff,
}

impl Role {
    /// Parses a stored role; unknown values are dropped.
    pub fn from_raw(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Role::Student),
            "faculty" => Some(Role::Faculty),
            "staff" => Some(Role::Staff),
            _ => None,
        }
    }
}

/// A user's profile as read at the start of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub institution: Option<String>,
    pub role: Option<Role>,
    pub subscription_tier: SubscriptionTier,
    pub vouchers: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserProfile {
    /// Minimal free-tier profile for a user whose record could not be read.
    pub fn free(id: UserId, email: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            email: email.into(),
            full_name: None,
            avatar_url: None,
            phone: None,
            institution: None,
            role: None,
            subscription_tier: SubscriptionTier::Free,
            vouchers: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_tier(mut self, tier: SubscriptionTier) -> Self {
        self.subscription_tier = tier;
        self
    }

    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = Some(name.into());
        self
    }

    /// Name used in greetings; falls back to the email address.
    pub fn greeting_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}
