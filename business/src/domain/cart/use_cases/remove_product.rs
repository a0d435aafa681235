use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct RemoveProductFromCartParams {
    pub cart_id: i64,
    pub product_id: i64,
}

/// The cart after removal, and whether a line item was actually removed.
/// Removing a product that is not in the cart is not an error.
#[derive(Debug, Clone)]
pub struct RemoveProductOutcome {
    pub cart: Cart,
    pub removed: bool,
}

#[async_trait]
pub trait RemoveProductFromCartUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RemoveProductFromCartParams,
    ) -> Result<RemoveProductOutcome, CartError>;
}
