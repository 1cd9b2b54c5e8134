//! Catalog listing priced for the caller.

use serde::Serialize;

use crate::domain::foundation::Price;
use crate::domain::membership::SubscriptionTier;
use crate::domain::store::{discounted_price, items_in, ItemCategory, StoreItem};

/// A catalog item with the price the caller would pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub item: &'static StoreItem,
    pub member_price: Price,
    pub discounted: bool,
}

/// Items in `category` (or all), priced for `tier`. Anonymous callers
/// browse at the free tier.
pub fn browse_catalog(tier: SubscriptionTier, category: Option<ItemCategory>) -> Vec<CatalogEntry> {
    items_in(category)
        .into_iter()
        .map(|item| {
            let member_price = discounted_price(item.price, tier);
            CatalogEntry {
                item,
                member_price,
                discounted: member_price.amount < item.price.amount,
            }
        })
        .collect()
}
