use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::order::model::OrdersPage;
use crate::domain::shared::value_objects::UserId;

pub struct GetUserOrdersParams {
    pub user_id: UserId,
    pub page: u32,
    pub limit: u32,
}

#[async_trait]
pub trait GetUserOrdersUseCase: Send + Sync {
    async fn execute(&self, params: GetUserOrdersParams) -> Result<OrdersPage, CheckoutError>;
}
