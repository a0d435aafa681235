use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartMutation};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase, DEFAULT_ITEM_QUANTITY,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddProductToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductToCartUseCase for AddProductToCartUseCaseImpl {
    async fn execute(&self, params: AddProductToCartParams) -> Result<Cart, CartError> {
        let quantity = params.quantity.unwrap_or(DEFAULT_ITEM_QUANTITY);
        self.logger.info(&format!(
            "Adding {} x product {} to cart {}",
            quantity, params.product_id, params.cart_id
        ));

        if quantity == 0 {
            return Err(CartError::QuantityInvalid);
        }

        // Line items must reference an existing product
        self.product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        let (cart, _) = self
            .repository
            .mutate(
                params.cart_id,
                &CartMutation::AddItem {
                    product_id: params.product_id,
                    quantity,
                },
            )
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => {
                    self.logger.error(&format!(
                        "Failed to add product to cart {}: {}",
                        params.cart_id, other
                    ));
                    CartError::Repository(other)
                }
            })?;

        self.logger.info(&format!(
            "Cart {} now holds {} line items",
            cart.id,
            cart.products.len()
        ));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartItem;
    use crate::domain::product::model::{NewProduct, NewProductProps, Product, ProductPatch};
    use mockall::mock;
    use std::sync::Mutex;

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

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
            async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError>;
            async fn update(&self, id: i64, patch: &ProductPatch) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
        }
    }

    fn existing_product(id: i64) -> Product {
        NewProduct::new(NewProductProps {
            title: Some("Headphones".to_string()),
            description: Some("Closed back".to_string()),
            price: Some(89.0),
            code: Some(format!("HP-{}", id)),
            stock: Some(3),
            ..Default::default()
        })
        .unwrap()
        .into_product(id)
    }

    fn product_repo_with_any_product() -> Arc<dyn ProductRepository> {
        let mut mock = MockProductRepo::new();
        mock.expect_get_by_id()
            .returning(|id| Ok(existing_product(id)));
        Arc::new(mock)
    }

    /// A cart repository backed by one in-memory cart.
    fn stateful_cart_repo(cart: Cart) -> MockCartRepo {
        let state = Arc::new(Mutex::new(cart));
        let mut mock = MockCartRepo::new();
        mock.expect_mutate().returning(move |id, mutation| {
            let mut cart = state.lock().unwrap();
            if cart.id != id {
                return Err(RepositoryError::NotFound);
            }
            let changed = cart
                .apply(mutation)
                .map_err(|_| RepositoryError::NotFound)?;
            Ok((cart.clone(), changed))
        });
        mock
    }

    #[tokio::test]
    async fn should_merge_quantities_when_same_product_added_twice() {
        let use_case = AddProductToCartUseCaseImpl {
            repository: Arc::new(stateful_cart_repo(Cart::empty(1))),
            product_repository: product_repo_with_any_product(),
            logger: mock_logger(),
        };

        use_case
            .execute(AddProductToCartParams {
                cart_id: 1,
                product_id: 42,
                quantity: Some(2),
            })
            .await
            .unwrap();
        let cart = use_case
            .execute(AddProductToCartParams {
                cart_id: 1,
                product_id: 42,
                quantity: Some(3),
            })
            .await
            .unwrap();

        assert_eq!(
            cart.products,
            vec![CartItem {
                product_id: 42,
                quantity: 5
            }]
        );
    }

    #[tokio::test]
    async fn should_default_quantity_to_one() {
        let use_case = AddProductToCartUseCaseImpl {
            repository: Arc::new(stateful_cart_repo(Cart::empty(1))),
            product_repository: product_repo_with_any_product(),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddProductToCartParams {
                cart_id: 1,
                product_id: 7,
                quantity: None,
            })
            .await
            .unwrap();

        assert_eq!(cart.item(7).map(|i| i.quantity), Some(1));
    }

    #[tokio::test]
    async fn should_return_not_found_when_cart_missing() {
        let use_case = AddProductToCartUseCaseImpl {
            repository: Arc::new(stateful_cart_repo(Cart::empty(1))),
            product_repository: product_repo_with_any_product(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddProductToCartParams {
                cart_id: 999,
                product_id: 7,
                quantity: Some(1),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }

    #[tokio::test]
    async fn should_return_product_not_found_when_product_missing() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_mutate().never();
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = AddProductToCartUseCaseImpl {
            repository: Arc::new(cart_repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddProductToCartParams {
                cart_id: 1,
                product_id: 7,
                quantity: Some(1),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }

    #[tokio::test]
    async fn should_reject_zero_quantity() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_mutate().never();
        let mut product_repo = MockProductRepo::new();
        product_repo.expect_get_by_id().never();

        let use_case = AddProductToCartUseCaseImpl {
            repository: Arc::new(cart_repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddProductToCartParams {
                cart_id: 1,
                product_id: 7,
                quantity: Some(0),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::QuantityInvalid));
    }
}
