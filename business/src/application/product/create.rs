use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notification::event_bus::ProductEventBus;
use crate::domain::notification::model::ProductEvent;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub event_bus: Arc<dyn ProductEventBus>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "Adding product: {}",
            params.code.as_deref().unwrap_or("<no code>")
        ));

        let new_product = NewProduct::new(NewProductProps {
            title: params.title,
            description: params.description,
            price: params.price,
            code: params.code,
            stock: params.stock,
            category: params.category,
            status: params.status,
            thumbnails: params.thumbnails,
        })?;

        let product = self
            .repository
            .insert(new_product)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => ProductError::CodeDuplicated,
                other => {
                    self.logger
                        .error(&format!("Failed to persist new product: {}", other));
                    ProductError::Repository(other)
                }
            })?;

        let delivered = self
            .event_bus
            .publish(ProductEvent::ProductAdded(product.clone()));

        self.logger.info(&format!(
            "Product created with id: {} (notified {} subscribers)",
            product.id, delivered
        ));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ProductPatch;
    use crate::domain::product::value_objects::ProductStatus;
    use crate::domain::notification::event_bus::ProductEventSubscription;
    use mockall::mock;

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

    mock! {
        pub EventBus {}

        impl ProductEventBus for EventBus {
            fn publish(&self, event: ProductEvent) -> usize;
            fn subscribe(&self) -> Box<dyn ProductEventSubscription>;
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

    fn valid_params() -> CreateProductParams {
        CreateProductParams {
            title: Some("Espresso Machine".to_string()),
            description: Some("15 bar pump, steam wand".to_string()),
            price: Some(249.0),
            code: Some("ESP-15".to_string()),
            stock: Some(4),
            category: Some("kitchen".to_string()),
            status: None,
            thumbnails: vec![],
        }
    }

    #[tokio::test]
    async fn should_create_product_and_broadcast_when_fields_valid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .times(1)
            .returning(|new_product| Ok(new_product.into_product(1)));
        let mut mock_bus = MockEventBus::new();
        mock_bus
            .expect_publish()
            .withf(|event| matches!(event, ProductEvent::ProductAdded(p) if p.id == 1))
            .times(1)
            .returning(|_| 2);

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            event_bus: Arc::new(mock_bus),
            logger: mock_logger(),
        };

        let product = use_case.execute(valid_params()).await.unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.title, "Espresso Machine");
        assert_eq!(product.price, 249.0);
        assert_eq!(product.code, "ESP-15");
        assert_eq!(product.stock, 4);
        assert_eq!(product.category.as_deref(), Some("kitchen"));
        assert_eq!(product.status, ProductStatus::Active);
    }

    #[tokio::test]
    async fn should_reject_and_not_broadcast_when_required_field_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().never();
        let mut mock_bus = MockEventBus::new();
        mock_bus.expect_publish().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            event_bus: Arc::new(mock_bus),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                stock: None,
                ..valid_params()
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::StockRequired));
    }

    #[tokio::test]
    async fn should_return_code_duplicated_when_store_rejects_code() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::Duplicated));
        let mut mock_bus = MockEventBus::new();
        mock_bus.expect_publish().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            event_bus: Arc::new(mock_bus),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params()).await;

        assert!(matches!(result.unwrap_err(), ProductError::CodeDuplicated));
    }

    #[tokio::test]
    async fn should_surface_persistence_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::Persistence));
        let mut mock_bus = MockEventBus::new();
        mock_bus.expect_publish().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            event_bus: Arc::new(mock_bus),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params()).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::Persistence)
        ));
    }
}
