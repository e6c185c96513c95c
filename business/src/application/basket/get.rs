use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::enrich::current_product_name;
use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::{BasketLineView, BasketView};
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::get::{GetBasketParams, GetBasketUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct GetBasketUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBasketUseCase for GetBasketUseCaseImpl {
    async fn execute(&self, params: GetBasketParams) -> Result<BasketView, BasketError> {
        self.logger
            .debug(&format!("Fetching basket for user: {}", params.user_id));

        let Some(basket) = self.repository.find_by_user_id(&params.user_id).await? else {
            return Ok(BasketView::empty());
        };

        let mut items = Vec::with_capacity(basket.items.len());
        let mut total_amount = BigDecimal::zero();
        for item in &basket.items {
            match current_product_name(self.product_repository.as_ref(), item.product_id).await? {
                Some(name) => {
                    let line = BasketLineView::new(item, name);
                    total_amount += &line.line_total;
                    items.push(line);
                }
                None => self.logger.warn(&format!(
                    "Skipping basket line for deleted product: {}",
                    item.product_id
                )),
            }
        }

        Ok(BasketView {
            basket_id: Some(basket.id),
            items,
            total_amount,
        })
    }
}
