use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct DeleteProductParams {
    pub id: i64,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// `Ok(false)` means the product was already gone.
    async fn execute(&self, params: DeleteProductParams) -> Result<bool, ProductError>;
}
