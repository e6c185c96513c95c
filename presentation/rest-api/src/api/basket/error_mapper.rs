use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::basket::errors::BasketError;

use crate::api::error::{
    ErrorCode, ErrorResponse, INTERNAL_MESSAGE, IntoErrorResponse, error_response,
};

impl IntoErrorResponse for BasketError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            BasketError::Repository(_) => {
                tracing::error!("Basket request failed: {:?}", self);
                error_response(ErrorCode::Internal, INTERNAL_MESSAGE)
            }
            // A missing product or basket is a rejected request here, not a 404.
            _ => error_response(ErrorCode::Validation, self.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_missing_line_to_validation_error() {
        let (status, body) = BasketError::ItemNotInBasket.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.error.code, "VALIDATION_ERROR");
        assert_eq!(body.0.error.message, "basket.item_not_found");
    }

    #[test]
    fn should_map_unknown_product_to_validation_error() {
        let (status, _) = BasketError::ProductNotFound.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_repository_failure_to_internal_error() {
        let (status, body) =
            BasketError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.error.code, "INTERNAL_ERROR");
    }
}
