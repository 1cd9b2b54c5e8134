//! Cart handlers.
//!
//! Carts live in the `CartStore` for the session only; nothing here touches
//! the record store.

use serde::Serialize;
use std::sync::Arc;

use super::StoreError;
use crate::domain::foundation::Price;
use crate::domain::membership::{is_feature_available, Feature, SubscriptionTier};
use crate::domain::session::SessionContext;
use crate::domain::store::{find_item, AddOutcome, Cart, CartError, CartLine, DISCOUNT_ITEM_CAP};
use crate::ports::CartStore;

/// Cart priced for the caller's tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub item_count: usize,
    pub total: Price,
    pub discount_applied: bool,
    /// Most items the caller may hold, when capped.
    pub item_cap: Option<usize>,
}

impl CartView {
    pub fn of(cart: &Cart, tier: SubscriptionTier) -> Result<Self, CartError> {
        let discount = is_feature_available(tier, Feature::StoreDiscount);
        Ok(Self {
            items: cart.lines(tier),
            item_count: cart.len(),
            total: cart.total(tier)?,
            discount_applied: discount && !cart.is_empty(),
            item_cap: discount.then_some(DISCOUNT_ITEM_CAP),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddToCartResult {
    pub outcome: AddOutcome,
    pub cart: CartView,
}

pub struct AddToCartHandler {
    carts: Arc<dyn CartStore>,
}

impl AddToCartHandler {
    pub fn new(carts: Arc<dyn CartStore>) -> Self {
        Self { carts }
    }

    pub async fn handle(
        &self,
        session: &SessionContext,
        item_id: &str,
    ) -> Result<AddToCartResult, StoreError> {
        let item = find_item(item_id).ok_or_else(|| StoreError::ItemNotFound(item_id.to_string()))?;
        let user_id = session.user_id();

        let (outcome, cart) = self.carts.add(&user_id, item, session.tier()).await?;

        Ok(AddToCartResult {
            outcome,
            cart: CartView::of(&cart, session.tier())?,
        })
    }
}

pub struct RemoveFromCartHandler {
    carts: Arc<dyn CartStore>,
}

impl RemoveFromCartHandler {
    pub fn new(carts: Arc<dyn CartStore>) -> Self {
        Self { carts }
    }

    /// Removing an item that is not in the cart leaves it unchanged.
    pub async fn handle(&self, session: &SessionContext, item_id: &str) -> Result<CartView, StoreError> {
        if find_item(item_id).is_none() {
            return Err(StoreError::ItemNotFound(item_id.to_string()));
        }
        let cart = self.carts.remove(&session.user_id(), item_id).await;
        Ok(CartView::of(&cart, session.tier())?)
    }
}

pub struct ViewCartHandler {
    carts: Arc<dyn CartStore>,
}

impl ViewCartHandler {
    pub fn new(carts: Arc<dyn CartStore>) -> Self {
        Self { carts }
    }

    /// Prices are recomputed from the caller's current tier on every read.
    pub async fn handle(&self, session: &SessionContext) -> Result<CartView, StoreError> {
        let cart = self.carts.load(&session.user_id()).await;
        Ok(CartView::of(&cart, session.tier())?)
    }
}

pub struct ClearCartHandler {
    carts: Arc<dyn CartStore>,
}

impl ClearCartHandler {
    pub fn new(carts: Arc<dyn CartStore>) -> Self {
        Self { carts }
    }

    pub async fn handle(&self, session: &SessionContext) -> Result<CartView, StoreError> {
        self.carts.clear(&session.user_id()).await;
        Ok(CartView::of(&Cart::new(), session.tier())?)
    }
}
