//! Accessory store handlers.
//!
//! ## Commands
//! - Add an item to the cart
//! - Remove an item from the cart
//! - Clear the cart
//!
//! ## Queries
//! - Browse the catalog
//! - View the cart

mod cart;
mod catalog;

use thiserror::Error;

use crate::domain::store::CartError;

pub use cart::{
    AddToCartHandler, AddToCartResult, CartView, ClearCartHandler, RemoveFromCartHandler,
    ViewCartHandler,
};
pub use catalog::{browse_catalog, CatalogEntry};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("No store item with id '{0}'")]
    ItemNotFound(String),

    #[error(transparent)]
    Cart(#[from] CartError),
}
