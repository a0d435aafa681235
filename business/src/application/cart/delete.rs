use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use crate::domain::logger::Logger;

pub struct DeleteCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCartUseCase for DeleteCartUseCaseImpl {
    async fn execute(&self, params: DeleteCartParams) -> Result<bool, CartError> {
        self.logger.info(&format!("Deleting cart: {}", params.id));

        let deleted = self.repository.delete(params.id).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to delete cart {}: {}", params.id, e));
            CartError::Repository(e)
        })?;

        if deleted {
            self.logger.info(&format!("Cart deleted: {}", params.id));
        } else {
            self.logger.warn(&format!("Cart {} did not exist", params.id));
        }
        Ok(deleted)
    }
}
