use async_trait::async_trait;

use crate::domain::cart::errors::CartError;

pub struct DeleteCartParams {
    pub id: i64,
}

#[async_trait]
pub trait DeleteCartUseCase: Send + Sync {
    /// `Ok(false)` means the cart did not exist.
    async fn execute(&self, params: DeleteCartParams) -> Result<bool, CartError>;
}
