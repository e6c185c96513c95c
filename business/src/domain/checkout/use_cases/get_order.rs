use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::order::model::OrderView;
use crate::domain::shared::value_objects::UserId;

pub struct GetOrderParams {
    pub user_id: UserId,
    pub order_id: Uuid,
}

#[async_trait]
pub trait GetOrderUseCase: Send + Sync {
    async fn execute(&self, params: GetOrderParams) -> Result<OrderView, CheckoutError>;
}
