use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, ProductPatch};
use business::domain::product::repository::ProductRepository;

use crate::db::map_sqlx_error;

use super::entity::ProductEntity;

const PRODUCT_COLUMNS: &str =
    "id, title, description, price, code, stock, category, status, thumbnails, created_at, updated_at";

/// Document-store mode: ids come from the `BIGSERIAL` column and `code`
/// uniqueness from the `products_code_key` index.
pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(ProductEntity::into_domain).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            r#"INSERT INTO products (title, description, price, code, stock, category, status, thumbnails, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING {PRODUCT_COLUMNS}"#
        ))
        .bind(&product.title)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.code)
        .bind(product.stock)
        .bind(&product.category)
        .bind(product.status.to_string())
        .bind(&product.thumbnails)
        .bind(product.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        tracing::debug!(id = entity.id, code = %entity.code, "Product stored");
        Ok(entity.into_domain())
    }

    async fn update(&self, id: i64, patch: &ProductPatch) -> Result<Product, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let current = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        let mut product = current.into_domain();
        product.apply(patch);

        sqlx::query(
            r#"UPDATE products SET
                title = $2,
                description = $3,
                price = $4,
                code = $5,
                stock = $6,
                category = $7,
                status = $8,
                thumbnails = $9,
                updated_at = $10
            WHERE id = $1"#,
        )
        .bind(product.id)
        .bind(&product.title)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.code)
        .bind(product.stock)
        .bind(&product.category)
        .bind(product.status.to_string())
        .bind(&product.thumbnails)
        .bind(product.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(product)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
