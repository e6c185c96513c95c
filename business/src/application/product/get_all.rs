use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use crate::domain::product::value_objects::ProductFilter;
use crate::domain::shared::value_objects::PageRequest;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError> {
        let page = match (params.page, params.limit) {
            (Some(page), Some(limit)) => Some(PageRequest::new(page, limit)?),
            _ => None,
        };
        let filter = ProductFilter {
            category: params.category,
            page,
        };

        self.logger.info(&format!("Fetching products: {:?}", filter));
        let products = self.repository.get_all(&filter).await?;
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
