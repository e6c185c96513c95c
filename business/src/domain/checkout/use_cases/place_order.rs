use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::order::model::OrderSummary;
use crate::domain::shared::value_objects::UserId;

pub struct ShippingAddressParams {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

pub struct CheckoutParams {
    pub user_id: UserId,
    pub shipping_address: ShippingAddressParams,
    pub payment_method: String,
}

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(&self, params: CheckoutParams) -> Result<OrderSummary, CheckoutError>;
}
