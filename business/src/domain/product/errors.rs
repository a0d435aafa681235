#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.title_required")]
    TitleRequired,
    #[error("product.description_required")]
    DescriptionRequired,
    #[error("product.price_required")]
    PriceRequired,
    #[error("product.price_invalid")]
    PriceInvalid,
    #[error("product.code_required")]
    CodeRequired,
    #[error("product.stock_required")]
    StockRequired,
    #[error("product.stock_invalid")]
    StockInvalid,
    #[error("product.not_found")]
    NotFound,
    #[error("product.code_duplicated")]
    CodeDuplicated,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// True for the variants raised by field validation on create or update.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProductError::TitleRequired
                | ProductError::DescriptionRequired
                | ProductError::PriceRequired
                | ProductError::PriceInvalid
                | ProductError::CodeRequired
                | ProductError::StockRequired
                | ProductError::StockInvalid
        )
    }
}
