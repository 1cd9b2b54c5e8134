//! Accessory store endpoints.
//!
//! - `GET /api/store/items` - catalog, tier-priced for signed-in callers
//! - `GET /api/store/cart` - caller's cart
//! - `POST /api/store/cart/items` - add an item
//! - `DELETE /api/store/cart/items/:item_id` - remove an item
//! - `DELETE /api/store/cart` - empty the cart

mod dto;
mod handlers;

use axum::{
    routing::{delete, get, post},
    Router,
};

pub use dto::{AddCartItemRequest, CatalogQuery};
pub use handlers::{add_cart_item, clear_cart, get_cart, list_items, remove_cart_item};

use super::AppState;

pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items))
        .route("/cart", get(get_cart).delete(clear_cart))
        .route("/cart/items", post(add_cart_item))
        .route("/cart/items/:item_id", delete(remove_cart_item))
}
