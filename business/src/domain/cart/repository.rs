use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Cart, CartMutation};

/// Store adapter for the cart collection.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Cart>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Cart, RepositoryError>;
    /// Persists a new empty cart and returns it with its assigned id.
    async fn create(&self) -> Result<Cart, RepositoryError>;
    /// Applies `mutation` to the stored cart in one read-modify-write and
    /// returns the resulting cart plus whether its line items changed.
    ///
    /// Fails with `NotFound` when the cart, or for `SetQuantity` the line
    /// item, does not exist.
    async fn mutate(
        &self,
        id: i64,
        mutation: &CartMutation,
    ) -> Result<(Cart, bool), RepositoryError>;
    /// Returns `false` when no cart had this id.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
