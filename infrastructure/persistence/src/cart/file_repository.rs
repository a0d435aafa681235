use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::cart::model::{Cart, CartMutation};
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use crate::file_store::JsonFileStore;

use super::entity::{CartDocument, mutation_error};

/// File mode: the cart collection lives in one JSON array.
pub struct CartRepositoryJson {
    store: JsonFileStore<CartDocument>,
}

impl CartRepositoryJson {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryJson {
    async fn get_all(&self) -> Result<Vec<Cart>, RepositoryError> {
        let documents = self.store.load_all().await?;
        Ok(documents.into_iter().map(CartDocument::into_domain).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Cart, RepositoryError> {
        self.store
            .load_all()
            .await?
            .into_iter()
            .find(|c| c.id == id)
            .map(CartDocument::into_domain)
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self) -> Result<Cart, RepositoryError> {
        let _guard = self.store.lock().await;
        let mut documents = self.store.load_all().await?;

        let id = match documents.iter().map(|c| c.id).max() {
            None => 1,
            Some(max) => max.checked_add(1).ok_or_else(|| {
                tracing::error!(max_id = max, "Cart id space exhausted");
                RepositoryError::Persistence
            })?,
        };
        let cart = Cart::empty(id);
        documents.push(CartDocument::from_domain(&cart));
        self.store.save_all(&documents).await?;

        tracing::debug!(id, "Cart stored");
        Ok(cart)
    }

    async fn mutate(
        &self,
        id: i64,
        mutation: &CartMutation,
    ) -> Result<(Cart, bool), RepositoryError> {
        let _guard = self.store.lock().await;
        let mut documents = self.store.load_all().await?;

        let index = documents
            .iter()
            .position(|c| c.id == id)
            .ok_or(RepositoryError::NotFound)?;

        let mut cart = documents[index].clone().into_domain();
        let changed = cart.apply(mutation).map_err(mutation_error)?;
        if changed {
            documents[index] = CartDocument::from_domain(&cart);
            self.store.save_all(&documents).await?;
        }

        Ok((cart, changed))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let _guard = self.store.lock().await;
        let mut documents = self.store.load_all().await?;

        let before = documents.len();
        documents.retain(|c| c.id != id);
        if documents.len() == before {
            return Ok(false);
        }

        self.store.save_all(&documents).await?;
        Ok(true)
    }
}
