use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::{Cart, CartItem};
use business::domain::errors::RepositoryError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemEntity {
    pub product_id: i64,
    pub quantity: u32,
}

impl From<CartItemEntity> for CartItem {
    fn from(item: CartItemEntity) -> Self {
        CartItem {
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

impl From<&CartItem> for CartItemEntity {
    fn from(item: &CartItem) -> Self {
        CartItemEntity {
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

/// Row of the `carts` table; line items live in a JSONB column.
#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub id: i64,
    pub products: Json<Vec<CartItemEntity>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartEntity {
    pub fn into_domain(self) -> Cart {
        Cart::from_repository(
            self.id,
            self.products.0.into_iter().map(CartItem::from).collect(),
            self.created_at,
            self.updated_at,
        )
    }
}

/// A cart as stored in the JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartDocument {
    pub id: i64,
    #[serde(default)]
    pub products: Vec<CartItemEntity>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl CartDocument {
    pub fn into_domain(self) -> Cart {
        Cart::from_repository(
            self.id,
            self.products.into_iter().map(CartItem::from).collect(),
            self.created_at,
            self.updated_at,
        )
    }

    pub fn from_domain(cart: &Cart) -> Self {
        Self {
            id: cart.id,
            products: cart.products.iter().map(CartItemEntity::from).collect(),
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        }
    }
}

/// Folds a rejected mutation into the store port's taxonomy. A missing line
/// item reads as `NotFound`; anything else means the caller skipped
/// validation.
pub(crate) fn mutation_error(error: CartError) -> RepositoryError {
    match error {
        CartError::ItemNotFound => RepositoryError::NotFound,
        CartError::Repository(e) => e,
        other => {
            tracing::error!(error = %other, "Cart mutation rejected by the store");
            RepositoryError::Persistence
        }
    }
}
