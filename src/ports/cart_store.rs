//! CartStore port - holds each member's session cart.
//!
//! Carts are never written to the record store; implementations keep them for
//! the lifetime of the process at most and may discard carts left idle.
//! Each mutation is applied atomically against the stored cart.

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::membership::SubscriptionTier;
use crate::domain::store::{AddOutcome, Cart, CartError, StoreItem};

#[async_trait]
pub trait CartStore: Send + Sync {
    /// Current cart, empty when the member has none.
    async fn load(&self, user_id: &UserId) -> Cart;

    /// Adds `item` under the cart rules for `tier` and returns the cart as
    /// stored afterwards.
    async fn add(
        &self,
        user_id: &UserId,
        item: &'static StoreItem,
        tier: SubscriptionTier,
    ) -> Result<(AddOutcome, Cart), CartError>;

    /// Removes `item_id` if present and returns the cart as stored afterwards.
    async fn remove(&self, user_id: &UserId, item_id: &str) -> Cart;

    async fn clear(&self, user_id: &UserId);
}
