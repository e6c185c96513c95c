use crate::domain::shared::value_objects::PaginationError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.negative_price")]
    NegativePrice,
    /// More than two decimal places or ten integer digits.
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.stock_out_of_range")]
    StockOutOfRange,
    #[error("product.invalid_image_url")]
    InvalidImageUrl,
    #[error("product.not_found")]
    NotFound,
    #[error(transparent)]
    InvalidPagination(#[from] PaginationError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
