use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::cart::use_cases::remove_product::RemoveProductOutcome;

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    pub product_id: i64,
    pub quantity: u32,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub id: i64,
    /// Line items in insertion order, at most one per product
    pub products: Vec<CartItemResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id,
            products: cart.products.into_iter().map(Into::into).collect(),
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    pub product_id: i64,
    /// Units to add (default: 1)
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartItemRequest {
    /// New quantity for the line item, replaces the current one
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
pub struct RemoveCartItemResponse {
    pub cart: CartResponse,
    /// False when the cart held no line item for the product
    pub removed: bool,
}

impl From<RemoveProductOutcome> for RemoveCartItemResponse {
    fn from(outcome: RemoveProductOutcome) -> Self {
        Self {
            cart: outcome.cart.into(),
            removed: outcome.removed,
        }
    }
}
