use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartMutation;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_product::{
    RemoveProductFromCartParams, RemoveProductFromCartUseCase, RemoveProductOutcome,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct RemoveProductFromCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductFromCartUseCase for RemoveProductFromCartUseCaseImpl {
    async fn execute(
        &self,
        params: RemoveProductFromCartParams,
    ) -> Result<RemoveProductOutcome, CartError> {
        self.logger.info(&format!(
            "Removing product {} from cart {}",
            params.product_id, params.cart_id
        ));

        let (cart, removed) = self
            .repository
            .mutate(
                params.cart_id,
                &CartMutation::RemoveItem {
                    product_id: params.product_id,
                },
            )
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => {
                    self.logger.error(&format!(
                        "Failed to remove product from cart {}: {}",
                        params.cart_id, other
                    ));
                    CartError::Repository(other)
                }
            })?;

        if !removed {
            self.logger.debug(&format!(
                "Product {} was not in cart {}",
                params.product_id, params.cart_id
            ));
        }
        Ok(RemoveProductOutcome { cart, removed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{Cart, CartItem};
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get_all(&self) -> Result<Vec<Cart>, RepositoryError>;
            async fn get_by_id(&self, id: i64) -> Result<Cart, RepositoryError>;
            async fn create(&self) -> Result<Cart, RepositoryError>;
            async fn mutate(&self, id: i64, mutation: &CartMutation) -> Result<(Cart, bool), RepositoryError>;
            async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn cart_with(items: &[(i64, u32)]) -> Cart {
        let mut cart = Cart::empty(1);
        for (product_id, quantity) in items {
            cart.add_item(*product_id, *quantity).unwrap();
        }
        cart
    }

    fn repo_holding(cart: Cart) -> MockCartRepo {
        let mut mock = MockCartRepo::new();
        mock.expect_mutate().returning(move |_, mutation| {
            let mut cart = cart.clone();
            let changed = cart
                .apply(mutation)
                .map_err(|_| RepositoryError::NotFound)?;
            Ok((cart, changed))
        });
        mock
    }

    #[tokio::test]
    async fn should_remove_line_item_and_keep_others() {
        let use_case = RemoveProductFromCartUseCaseImpl {
            repository: Arc::new(repo_holding(cart_with(&[(1, 2), (2, 1)]))),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(RemoveProductFromCartParams {
                cart_id: 1,
                product_id: 1,
            })
            .await
            .unwrap();

        assert!(outcome.removed);
        assert_eq!(
            outcome.cart.products,
            vec![CartItem {
                product_id: 2,
                quantity: 1
            }]
        );
    }

    #[tokio::test]
    async fn should_return_unchanged_cart_when_product_absent() {
        let original = cart_with(&[(1, 2)]);
        let use_case = RemoveProductFromCartUseCaseImpl {
            repository: Arc::new(repo_holding(original.clone())),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(RemoveProductFromCartParams {
                cart_id: 1,
                product_id: 99,
            })
            .await
            .unwrap();

        assert!(!outcome.removed);
        assert_eq!(outcome.cart.products, original.products);
    }

    #[tokio::test]
    async fn should_return_not_found_when_cart_missing() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_mutate()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = RemoveProductFromCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveProductFromCartParams {
                cart_id: 5,
                product_id: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }
}
