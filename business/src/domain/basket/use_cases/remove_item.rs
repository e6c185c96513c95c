use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::basket::errors::BasketError;
use crate::domain::shared::value_objects::UserId;

pub struct RemoveBasketItemParams {
    pub user_id: UserId,
    pub product_id: Uuid,
}

#[async_trait]
pub trait RemoveBasketItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveBasketItemParams) -> Result<(), BasketError>;
}
