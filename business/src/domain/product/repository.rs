use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product, ProductPatch};

/// Store adapter for the product collection.
///
/// Implementations own id assignment and `code` uniqueness, and run every
/// mutation as one uninterrupted read-modify-write.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in store order.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    /// Persists a new product and returns it with its assigned id.
    async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError>;
    /// Merges `patch` onto the stored record and returns the merged record.
    async fn update(&self, id: i64, patch: &ProductPatch) -> Result<Product, RepositoryError>;
    /// Returns `false` when no product had this id.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
