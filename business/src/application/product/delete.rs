use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notification::event_bus::ProductEventBus;
use crate::domain::notification::model::ProductEvent;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub event_bus: Arc<dyn ProductEventBus>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<bool, ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        let deleted = self.repository.delete(params.id).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to delete product {}: {}", params.id, e));
            ProductError::Repository(e)
        })?;

        if !deleted {
            self.logger
                .warn(&format!("Product {} did not exist", params.id));
            return Ok(false);
        }

        self.event_bus
            .publish(ProductEvent::ProductRemoved { id: params.id });

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProduct, Product, ProductPatch};
    use crate::domain::notification::event_bus::ProductEventSubscription;
    use mockall::mock;
    use mockall::predicate::eq;

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

    #[tokio::test]
    async fn should_delete_and_broadcast_removal_when_product_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(true));
        let mut mock_bus = MockEventBus::new();
        mock_bus
            .expect_publish()
            .with(eq(ProductEvent::ProductRemoved { id: 3 }))
            .times(1)
            .returning(|_| 1);

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            event_bus: Arc::new(mock_bus),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 3 }).await;

        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn should_return_false_without_broadcast_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_delete().returning(|_| Ok(false));
        let mut mock_bus = MockEventBus::new();
        mock_bus.expect_publish().never();

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            event_bus: Arc::new(mock_bus),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 99 }).await;

        assert!(!result.unwrap());
    }

    #[tokio::test]
    async fn should_surface_store_failure_as_error_not_false() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::Persistence));
        let mut mock_bus = MockEventBus::new();
        mock_bus.expect_publish().never();

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            event_bus: Arc::new(mock_bus),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 1 }).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::Persistence)
        ));
    }
}
