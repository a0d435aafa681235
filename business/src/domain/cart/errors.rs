#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.quantity_invalid")]
    QuantityInvalid,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
