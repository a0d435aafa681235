use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub const DEFAULT_ITEM_QUANTITY: u32 = 1;

pub struct AddProductToCartParams {
    pub cart_id: i64,
    pub product_id: i64,
    /// Defaults to [`DEFAULT_ITEM_QUANTITY`].
    pub quantity: Option<u32>,
}

#[async_trait]
pub trait AddProductToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddProductToCartParams) -> Result<Cart, CartError>;
}
