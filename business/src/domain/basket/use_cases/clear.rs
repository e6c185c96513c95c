use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::shared::value_objects::UserId;

pub struct ClearBasketParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait ClearBasketUseCase: Send + Sync {
    async fn execute(&self, params: ClearBasketParams) -> Result<(), BasketError>;
}
