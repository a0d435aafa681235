use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::pagination::PageResult;
use crate::domain::product::query::ProductQuery;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_page::GetProductsPageUseCase;

pub struct GetProductsPageUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsPageUseCase for GetProductsPageUseCaseImpl {
    async fn execute(&self, query: ProductQuery) -> Result<PageResult<Product>, ProductError> {
        self.logger.debug(&format!(
            "Listing products: page {} limit {} sort {}",
            query.page.page, query.page.limit, query.sort
        ));

        let products = self.repository.get_all().await?;
        let page = query.run(products);

        self.logger.debug(&format!(
            "Page {}/{} with {} of {} products",
            page.page,
            page.total_pages,
            page.docs.len(),
            page.total_docs
        ));
        Ok(page)
    }
}
