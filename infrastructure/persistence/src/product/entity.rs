use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductStatus;

/// Stored shape of a product, shared by the JSON file and the `products` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProductEntity {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub code: String,
    pub stock: i64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub thumbnails: Vec<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_status() -> String {
    ProductStatus::default().to_string()
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            code: self.code,
            stock: self.stock,
            category: self.category,
            status: self
                .status
                .parse::<ProductStatus>()
                .unwrap_or(ProductStatus::Active),
            thumbnails: self.thumbnails,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            code: product.code.clone(),
            stock: product.stock,
            category: product.category.clone(),
            status: product.status.to_string(),
            thumbnails: product.thumbnails.clone(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
