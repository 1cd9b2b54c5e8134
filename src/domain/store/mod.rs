//! Accessory store domain module.
//!
//! - `catalog` - static product list
//! - `pricing` - tier discount arithmetic
//! - `cart` - per-session cart with the Pro+ item cap

mod cart;
mod catalog;
mod pricing;

pub use cart::{AddOutcome, Cart, CartError, CartLine, DISCOUNT_ITEM_CAP};
pub use catalog::{catalog, find_item, items_in, ItemCategory, StoreItem};
pub use pricing::{discounted_price, total, DISCOUNT_FACTOR};
