use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::{Basket, BasketLineView};
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::add_item::{AddBasketItemParams, AddBasketItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddBasketItemUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddBasketItemUseCase for AddBasketItemUseCaseImpl {
    async fn execute(&self, params: AddBasketItemParams) -> Result<BasketLineView, BasketError> {
        self.logger.info(&format!(
            "Adding {} x {} to basket of user: {}",
            params.quantity, params.product_id, params.user_id
        ));

        if params.quantity == 0 {
            return Err(BasketError::InvalidQuantity);
        }

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BasketError::ProductNotFound,
                other => BasketError::Repository(other),
            })?;

        if params.quantity > product.stock {
            self.logger.warn(&format!(
                "Insufficient stock for {}: requested {}, available {}",
                product.id, params.quantity, product.stock
            ));
            return Err(BasketError::InsufficientStock);
        }

        let mut basket = match self.repository.find_by_user_id(&params.user_id).await? {
            Some(basket) => basket,
            None => Basket::new(params.user_id),
        };

        let line = basket.add(product.id, params.quantity, product.price.clone())?;
        self.repository.save(&basket).await?;

        Ok(BasketLineView::new(&line, product.name))
    }
}
