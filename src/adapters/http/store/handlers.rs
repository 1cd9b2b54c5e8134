use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    Json,
};

use super::super::error::ApiError;
use super::super::middleware::{OptionalSession, RequireSession};
use super::super::AppState;
use super::dto::{AddCartItemRequest, CatalogQuery};
use crate::application::{browse_catalog, AddToCartResult, CartView, CatalogEntry};
use crate::domain::membership::SubscriptionTier;

/// GET /api/store/items - guests see base prices.
pub async fn list_items(
    OptionalSession(session): OptionalSession,
    query: Result<Query<CatalogQuery>, QueryRejection>,
) -> Result<Json<Vec<CatalogEntry>>, ApiError> {
    let Query(query) = query?;
    let tier = session.map_or(SubscriptionTier::Free, |s| s.tier());
    Ok(Json(browse_catalog(tier, query.category)))
}

/// GET /api/store/cart
pub async fn get_cart(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
) -> Result<Json<CartView>, ApiError> {
    Ok(Json(state.view_cart_handler().handle(&session).await?))
}

/// POST /api/store/cart/items
pub async fn add_cart_item(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    payload: Result<Json<AddCartItemRequest>, JsonRejection>,
) -> Result<Json<AddToCartResult>, ApiError> {
    let Json(request) = payload?;
    let result = state
        .add_to_cart_handler()
        .handle(&session, &request.item_id)
        .await?;
    Ok(Json(result))
}

/// DELETE /api/store/cart/items/:item_id
pub async fn remove_cart_item(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    Path(item_id): Path<String>,
) -> Result<Json<CartView>, ApiError> {
    let cart = state
        .remove_from_cart_handler()
        .handle(&session, &item_id)
        .await?;
    Ok(Json(cart))
}

/// DELETE /api/store/cart
pub async fn clear_cart(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
) -> Result<Json<CartView>, ApiError> {
    Ok(Json(state.clear_cart_handler().handle(&session).await?))
}
