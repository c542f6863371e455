use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use pizzahunt_catalog::PizzaItem;
use pizzahunt_order::{CartAggregate, CartItemPayload, CartLine, CartTotals};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&CartAggregate> for CartResponse {
    fn from(cart: &CartAggregate) -> Self {
        Self {
            lines: cart.lines().to_vec(),
            totals: cart.totals(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub id: u64,
}

/// The reduced view of a catalog item that the cart keeps
pub fn cart_payload(item: &PizzaItem) -> CartItemPayload {
    CartItemPayload {
        id: item.id,
        name: item.title.clone(),
        price: item.price,
        image: item.image.clone(),
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/cart", get(get_cart).delete(clear_cart))
        .route("/v1/cart/items", post(add_item))
        .route("/v1/cart/items/{id}", delete(remove_item))
        .route("/v1/cart/items/{id}/increase", post(increase_quantity))
        .route("/v1/cart/items/{id}/decrease", post(decrease_quantity))
}

/// GET /v1/cart
pub async fn get_cart(State(state): State<AppState>) -> Json<CartResponse> {
    let cart = state.cart.lock().await;
    Json(CartResponse::from(&*cart))
}

/// POST /v1/cart/items
/// Adds one unit of a catalog item at its current catalog price
pub async fn add_item(
    State(state): State<AppState>,
    Json(req): Json<AddItemRequest>,
) -> Result<Json<CartResponse>, AppError> {
    let item = state
        .catalog
        .item(req.id)
        .await
        .ok_or_else(|| AppError::NotFoundError(format!("Pizza {} is not on the menu", req.id)))?;

    let mut cart = state.cart.lock().await;
    cart.add_item(cart_payload(&item));

    Ok(Json(CartResponse::from(&*cart)))
}

/// POST /v1/cart/items/:id/increase
pub async fn increase_quantity(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<CartResponse> {
    let mut cart = state.cart.lock().await;
    cart.increase_quantity(id);
    Json(CartResponse::from(&*cart))
}

/// POST /v1/cart/items/:id/decrease
pub async fn decrease_quantity(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<CartResponse> {
    let mut cart = state.cart.lock().await;
    cart.decrease_quantity(id);
    Json(CartResponse::from(&*cart))
}

/// DELETE /v1/cart/items/:id
pub async fn remove_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<CartResponse> {
    let mut cart = state.cart.lock().await;
    cart.remove_item(id);
    Json(CartResponse::from(&*cart))
}

/// DELETE /v1/cart
pub async fn clear_cart(State(state): State<AppState>) -> Json<CartResponse> {
    let mut cart = state.cart.lock().await;
    cart.clear_cart();
    Json(CartResponse::from(&*cart))
}
