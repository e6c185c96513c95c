use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::BasketLineView;
use crate::domain::shared::value_objects::UserId;

pub struct AddBasketItemParams {
    pub user_id: UserId,
    pub product_id: Uuid,
    pub quantity: u32,
}

#[async_trait]
pub trait AddBasketItemUseCase: Send + Sync {
    async fn execute(&self, params: AddBasketItemParams) -> Result<BasketLineView, BasketError>;
}
