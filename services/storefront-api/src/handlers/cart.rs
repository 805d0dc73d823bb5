//! Cart handlers

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use solara_types::CartEntry;

use crate::error::ApiResult;
use crate::extractors::CurrentSession;
use crate::state::AppState;

/// Product payload posted to the cart
///
/// Clients send the full product object; only the id matters here. Extra
/// fields are accepted and ignored so the existence-only check never leaks
/// which payload fields the catalog actually carries.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub id: Option<String>,
}

/// Query parameters for the quantity update route
#[derive(Debug, Deserialize)]
pub struct QuantityParams {
    pub quantity: Option<String>,
}

/// GET /api/me/cart
pub async fn get_cart(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Json<Vec<CartEntry>> {
    Json(state.store.cart(&session))
}

/// POST /api/me/cart
///
/// Add the posted product to the cart. The body is optional: an absent or
/// unreadable payload maps to the same missing-product error as an absent id.
pub async fn add_to_cart(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    payload: Option<Json<ProductPayload>>,
) -> ApiResult<Json<Vec<CartEntry>>> {
    let product_id = payload.as_ref().and_then(|Json(p)| p.id.as_deref());
    let cart = state.store.add_to_cart(&session, product_id)?;
    Ok(Json(cart))
}

/// POST /api/me/cart/:productId
///
/// Set the quantity for a product, inserting it if absent.
pub async fn update_quantity(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(product_id): Path<String>,
    Query(params): Query<QuantityParams>,
) -> ApiResult<Json<Vec<CartEntry>>> {
    let cart = state
        .store
        .update_quantity(&session, &product_id, params.quantity.as_deref())?;
    Ok(Json(cart))
}

/// DELETE /api/me/cart/:productId
pub async fn remove_from_cart(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(product_id): Path<String>,
) -> ApiResult<Json<Vec<CartEntry>>> {
    let cart = state.store.remove_from_cart(&session, &product_id)?;
    Ok(Json(cart))
}
