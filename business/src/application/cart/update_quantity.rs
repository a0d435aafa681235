use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartMutation};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCartItemQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemQuantityUseCase for UpdateCartItemQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemQuantityParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Setting quantity of product {} in cart {} to {}",
            params.product_id, params.cart_id, params.quantity
        ));

        if params.quantity == 0 {
            return Err(CartError::QuantityInvalid);
        }

        // Tell a missing cart apart from a missing line item
        let cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;
        if cart.item(params.product_id).is_none() {
            return Err(CartError::ItemNotFound);
        }

        let (cart, _) = self
            .repository
            .mutate(
                params.cart_id,
                &CartMutation::SetQuantity {
                    product_id: params.product_id,
                    quantity: params.quantity,
                },
            )
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ItemNotFound,
                other => {
                    self.logger.error(&format!(
                        "Failed to update cart {}: {}",
                        params.cart_id, other
                    ));
                    CartError::Repository(other)
                }
            })?;

        Ok(cart)
    }
}
