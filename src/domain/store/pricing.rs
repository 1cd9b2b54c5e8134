//! Tier-based accessory pricing.

use rust_decimal::Decimal;

use super::{CartError, StoreItem};
use crate::domain::foundation::{Currency, Price};
use crate::domain::membership::{is_feature_available, Feature, SubscriptionTier};

/// Multiplier applied to discounted items (10% off).
pub const DISCOUNT_FACTOR: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

/// Price a member of `tier` pays for an item listed at `base`.
pub fn discounted_price(base: Price, tier: SubscriptionTier) -> Price {
    if is_feature_available(tier, Feature::StoreDiscount) {
        base.scaled(DISCOUNT_FACTOR)
    } else {
        base
    }
}

/// Sum of tier prices for `items`. Recomputed from the items on every call.
///
/// The sum is quoted in the first item's currency (USD when empty); any item
/// priced in another currency fails the whole total.
pub fn total<'a, I>(items: I, tier: SubscriptionTier) -> Result<Price, CartError>
where
    I: IntoIterator<Item = &'a StoreItem>,
{
    let mut prices = items.into_iter().map(|item| discounted_price(item.price, tier)).peekable();
    let currency = prices.peek().map_or(Currency::Usd, |price| price.currency);
    prices.try_fold(Price::zero(currency), |acc, price| {
        acc.checked_add(&price).ok_or(CartError::CurrencyMismatch {
            expected: acc.currency,
            found: price.currency,
        })
    })
}
