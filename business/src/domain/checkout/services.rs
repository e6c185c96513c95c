use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::order::value_objects::PaymentMethod;
use crate::domain::shared::value_objects::UserId;

pub struct PaymentRequest {
    pub user_id: UserId,
    pub basket_id: Uuid,
    pub amount: BigDecimal,
    pub method: PaymentMethod,
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("payment.declined")]
    Declined,
}

/// Charges the customer before an order is written.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, request: &PaymentRequest) -> Result<(), PaymentError>;
}
