use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::shared::value_objects::PaginationError;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error(transparent)]
    InvalidOrder(#[from] OrderError),
    #[error(transparent)]
    InvalidPagination(#[from] PaginationError),
    #[error("checkout.empty_basket")]
    EmptyBasket,
    #[error("checkout.product_not_found: {0}")]
    ProductNotFound(Uuid),
    #[error("checkout.insufficient_stock: {0}")]
    InsufficientStock(String),
    #[error("checkout.payment_failed")]
    PaymentFailed,
    #[error("order.not_found")]
    OrderNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
