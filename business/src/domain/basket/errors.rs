#[derive(Debug, thiserror::Error)]
pub enum BasketError {
    #[error("basket.invalid_quantity")]
    InvalidQuantity,
    #[error("basket.product_not_found")]
    ProductNotFound,
    #[error("basket.insufficient_stock")]
    InsufficientStock,
    #[error("basket.not_found")]
    BasketNotFound,
    #[error("basket.item_not_found")]
    ItemNotInBasket,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
