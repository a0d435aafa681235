use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use business::domain::cart::model::{Cart, CartMutation};
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use crate::db::map_sqlx_error;

use super::entity::{CartEntity, CartItemEntity, mutation_error};

const CART_COLUMNS: &str = "id, products, created_at, updated_at";

/// Document-store mode: each cart is one row holding its line items as JSONB.
pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Cart>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartEntity>(&format!(
            "SELECT {CART_COLUMNS} FROM carts ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(CartEntity::into_domain).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Cart, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(&format!(
            "SELECT {CART_COLUMNS} FROM carts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn create(&self) -> Result<Cart, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(&format!(
            "INSERT INTO carts DEFAULT VALUES RETURNING {CART_COLUMNS}"
        ))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        tracing::debug!(id = entity.id, "Cart stored");
        Ok(entity.into_domain())
    }

    async fn mutate(
        &self,
        id: i64,
        mutation: &CartMutation,
    ) -> Result<(Cart, bool), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let mut cart = sqlx::query_as::<_, CartEntity>(&format!(
            "SELECT {CART_COLUMNS} FROM carts WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?
        .into_domain();

        let changed = cart.apply(mutation).map_err(mutation_error)?;
        if changed {
            let items: Vec<CartItemEntity> =
                cart.products.iter().map(CartItemEntity::from).collect();
            sqlx::query("UPDATE carts SET products = $2, updated_at = $3 WHERE id = $1")
                .bind(cart.id)
                .bind(Json(items))
                .bind(cart.updated_at)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok((cart, changed))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM carts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
