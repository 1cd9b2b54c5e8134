//! Session-scoped shopping cart.
//!
//! A cart is an ordered set of catalog items: insertion order is kept for
//! display and an item appears at most once. Pro+ members get the accessory
//! discount on at most [`DISCOUNT_ITEM_CAP`] items, enforced as a hard cap on
//! cart size. Removing an item frees a slot.

use serde::Serialize;
use thiserror::Error;

use super::pricing::{discounted_price, total};
use super::StoreItem;
use crate::domain::foundation::{Currency, Price};
use crate::domain::membership::{is_feature_available, Feature, SubscriptionTier};

/// Most items a discount-eligible member may hold in the cart.
pub const DISCOUNT_ITEM_CAP: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Pro+ members can add up to {max} items for discount")]
    DiscountCapReached { max: usize },

    #[error("Cart is priced in {} and cannot hold an item priced in {}", .expected.code(), .found.code())]
    CurrencyMismatch { expected: Currency, found: Currency },
}

/// Result of a successful add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    Added,
    AlreadyInCart,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<&'static StoreItem>,
}

/// One priced cart row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub item: &'static StoreItem,
    pub price: Price,
    pub discounted: bool,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `item` for a member of `tier`.
    ///
    /// The cap is checked before the duplicate check, so a full Pro+ cart
    /// reports the cap even for an item it already holds. Every item in a
    /// cart shares one currency.
    pub fn add(
        &mut self,
        item: &'static StoreItem,
        tier: SubscriptionTier,
    ) -> Result<AddOutcome, CartError> {
        if is_feature_available(tier, Feature::StoreDiscount) && self.items.len() >= DISCOUNT_ITEM_CAP
        {
            return Err(CartError::DiscountCapReached {
                max: DISCOUNT_ITEM_CAP,
            });
        }
        if self.contains(item.id) {
            return Ok(AddOutcome::AlreadyInCart);
        }
        if let Some(first) = self.items.first() {
            if first.price.currency != item.price.currency {
                return Err(CartError::CurrencyMismatch {
                    expected: first.price.currency,
                    found: item.price.currency,
                });
            }
        }
        self.items.push(item);
        Ok(AddOutcome::Added)
    }

    /// Removes an item; returns whether it was present.
    pub fn remove(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.items.iter().any(|item| item.id == item_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[&'static StoreItem] {
        &self.items
    }

    /// Rows priced for `tier`, in insertion order.
    pub fn lines(&self, tier: SubscriptionTier) -> Vec<CartLine> {
        self.items
            .iter()
            .map(|&item| {
                let price = discounted_price(item.price, tier);
                CartLine {
                    item,
                    price,
                    discounted: price.amount < item.price.amount,
                }
            })
            .collect()
    }

    pub fn total(&self, tier: SubscriptionTier) -> Result<Price, CartError> {
        total(self.items.iter().copied(), tier)
    }
}
