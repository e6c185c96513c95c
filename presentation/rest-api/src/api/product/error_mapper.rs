use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{
    ErrorCode, ErrorResponse, INTERNAL_MESSAGE, IntoErrorResponse, error_response,
};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            ProductError::NameEmpty
            | ProductError::NegativePrice
            | ProductError::InvalidPrice
            | ProductError::StockOutOfRange
            | ProductError::InvalidImageUrl
            | ProductError::InvalidPagination(_) => {
                error_response(ErrorCode::Validation, self.to_string())
            }
            ProductError::NotFound => error_response(ErrorCode::NotFound, self.to_string()),
            ProductError::Repository(_) => {
                tracing::error!("Catalog request failed: {:?}", self);
                error_response(ErrorCode::Internal, INTERNAL_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_negative_price_to_validation_error() {
        let (status, body) = ProductError::NegativePrice.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.error.code, "VALIDATION_ERROR");
        assert_eq!(body.0.error.message, "product.negative_price");
    }

    #[test]
    fn should_map_unstorable_price_and_stock_to_validation_error() {
        let (price_status, price) = ProductError::InvalidPrice.into_error_response();
        let (stock_status, stock) = ProductError::StockOutOfRange.into_error_response();

        assert_eq!(price_status, StatusCode::BAD_REQUEST);
        assert_eq!(price.0.error.code, "VALIDATION_ERROR");
        assert_eq!(price.0.error.message, "product.invalid_price");
        assert_eq!(stock_status, StatusCode::BAD_REQUEST);
        assert_eq!(stock.0.error.message, "product.stock_out_of_range");
    }

    #[test]
    fn should_map_missing_product_to_not_found() {
        let (status, body) = ProductError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.error.code, "NOT_FOUND");
    }

    #[test]
    fn should_hide_repository_details() {
        let err = ProductError::Repository(RepositoryError::DatabaseError);

        let (status, body) = err.into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.error.message, INTERNAL_MESSAGE);
    }
}
