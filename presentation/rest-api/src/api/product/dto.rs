use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::{Product, ProductPatch};
use business::domain::product::pagination::PageResult;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::value_objects::ProductStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Enum)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatusDto {
    #[oai(rename = "active")]
    Active,
    #[oai(rename = "inactive")]
    Inactive,
}

impl From<ProductStatus> for ProductStatusDto {
    fn from(status: ProductStatus) -> Self {
        match status {
            ProductStatus::Active => ProductStatusDto::Active,
            ProductStatus::Inactive => ProductStatusDto::Inactive,
        }
    }
}

impl From<ProductStatusDto> for ProductStatus {
    fn from(dto: ProductStatusDto) -> Self {
        match dto {
            ProductStatusDto::Active => ProductStatus::Active,
            ProductStatusDto::Inactive => ProductStatus::Inactive,
        }
    }
}

/// Every field is optional on the wire so missing required fields are
/// reported with the product's own validation errors.
#[derive(Debug, Clone, Default, Object, Deserialize)]
pub struct CreateProductRequest {
    /// Product title (required, cannot be empty)
    pub title: Option<String>,
    /// Product description (required, cannot be empty)
    pub description: Option<String>,
    /// Unit price (required, non-negative)
    pub price: Option<f64>,
    /// Unique business code (required)
    pub code: Option<String>,
    /// Units in stock (required, non-negative)
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub status: Option<ProductStatusDto>,
    /// Image references
    #[serde(default)]
    #[oai(default)]
    pub thumbnails: Vec<String>,
}

impl From<CreateProductRequest> for CreateProductParams {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            price: request.price,
            code: request.code,
            stock: request.stock,
            category: request.category,
            status: request.status.map(Into::into),
            thumbnails: request.thumbnails,
        }
    }
}

/// Partial update: only supplied fields overwrite the stored product.
#[derive(Debug, Clone, Default, Object)]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub code: Option<String>,
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub status: Option<ProductStatusDto>,
    pub thumbnails: Option<Vec<String>>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(request: UpdateProductRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            price: request.price,
            code: request.code,
            stock: request.stock,
            category: request.category,
            status: request.status.map(Into::into),
            thumbnails: request.thumbnails,
        }
    }
}

#[derive(Debug, Clone, Object, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub code: String,
    pub stock: i64,
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub status: ProductStatusDto,
    pub thumbnails: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
            code: product.code,
            stock: product.stock,
            category: product.category,
            status: product.status.into(),
            thumbnails: product.thumbnails,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// One page of a product listing.
#[derive(Debug, Clone, Object)]
pub struct ProductPageResponse {
    pub docs: Vec<ProductResponse>,
    pub total_docs: u64,
    pub limit: u32,
    pub page: u32,
    pub total_pages: u32,
    pub has_prev_page: bool,
    pub has_next_page: bool,
    /// Previous page number, null on the first page
    pub prev_page: Option<u32>,
    /// Next page number, null on the last page
    pub next_page: Option<u32>,
}

impl From<PageResult<Product>> for ProductPageResponse {
    fn from(page: PageResult<Product>) -> Self {
        let page = page.map(ProductResponse::from);
        Self {
            docs: page.docs,
            total_docs: page.total_docs as u64,
            limit: page.limit,
            page: page.page,
            total_pages: page.total_pages,
            has_prev_page: page.has_prev_page,
            has_next_page: page.has_next_page,
            prev_page: page.prev_page,
            next_page: page.next_page,
        }
    }
}
