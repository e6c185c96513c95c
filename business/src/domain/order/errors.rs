#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("order.invalid_shipping_address")]
    InvalidShippingAddress,
    #[error("order.invalid_payment_method")]
    InvalidPaymentMethod,
}
