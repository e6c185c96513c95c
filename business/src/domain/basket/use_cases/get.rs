use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::BasketView;
use crate::domain::shared::value_objects::UserId;

pub struct GetBasketParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetBasketUseCase: Send + Sync {
    async fn execute(&self, params: GetBasketParams) -> Result<BasketView, BasketError>;
}
