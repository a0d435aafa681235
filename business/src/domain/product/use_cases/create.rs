use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductStatus;

#[derive(Debug, Clone, Default)]
pub struct CreateProductParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub code: Option<String>,
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub status: Option<ProductStatus>,
    pub thumbnails: Vec<String>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
