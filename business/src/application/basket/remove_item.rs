use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::remove_item::{
    RemoveBasketItemParams, RemoveBasketItemUseCase,
};
use crate::domain::logger::Logger;

pub struct RemoveBasketItemUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveBasketItemUseCase for RemoveBasketItemUseCaseImpl {
    async fn execute(&self, params: RemoveBasketItemParams) -> Result<(), BasketError> {
        self.logger.info(&format!(
            "Removing {} from basket of user: {}",
            params.product_id, params.user_id
        ));

        let mut basket = self
            .repository
            .find_by_user_id(&params.user_id)
            .await?
            .ok_or(BasketError::BasketNotFound)?;

        basket.remove(params.product_id)?;
        self.repository.save(&basket).await?;
        Ok(())
    }
}
