use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, ProductPatch};
use business::domain::product::repository::ProductRepository;

use crate::file_store::JsonFileStore;

use super::entity::ProductEntity;

/// File mode: the product collection lives in one JSON array.
pub struct ProductRepositoryJson {
    store: JsonFileStore<ProductEntity>,
}

impl ProductRepositoryJson {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }
}

fn next_id(records: &[ProductEntity]) -> Result<i64, RepositoryError> {
    match records.iter().map(|p| p.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            tracing::error!(max_id = max, "Product id space exhausted");
            RepositoryError::Persistence
        }),
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryJson {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let records = self.store.load_all().await?;
        Ok(records.into_iter().map(ProductEntity::into_domain).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        self.store
            .load_all()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .map(ProductEntity::into_domain)
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let _guard = self.store.lock().await;
        let mut records = self.store.load_all().await?;

        if records.iter().any(|p| p.code == product.code) {
            return Err(RepositoryError::Duplicated);
        }

        let product = product.into_product(next_id(&records)?);
        records.push(ProductEntity::from_domain(&product));
        self.store.save_all(&records).await?;

        tracing::debug!(id = product.id, code = %product.code, "Product stored");
        Ok(product)
    }

    async fn update(&self, id: i64, patch: &ProductPatch) -> Result<Product, RepositoryError> {
        let _guard = self.store.lock().await;
        let mut records = self.store.load_all().await?;

        let index = records
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(code) = &patch.code
            && records.iter().any(|p| p.id != id && &p.code == code)
        {
            return Err(RepositoryError::Duplicated);
        }

        let mut product = records[index].clone().into_domain();
        product.apply(patch);
        records[index] = ProductEntity::from_domain(&product);
        self.store.save_all(&records).await?;

        Ok(product)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let _guard = self.store.lock().await;
        let mut records = self.store.load_all().await?;

        let before = records.len();
        records.retain(|p| p.id != id);
        if records.len() == before {
            return Ok(false);
        }

        self.store.save_all(&records).await?;
        Ok(true)
    }
}
