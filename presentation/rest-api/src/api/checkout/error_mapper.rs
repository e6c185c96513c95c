use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;

use crate::api::error::{
    ErrorCode, ErrorResponse, INTERNAL_MESSAGE, IntoErrorResponse, error_response,
};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CheckoutError::InvalidOrder(_) | CheckoutError::InvalidPagination(_) => {
                error_response(ErrorCode::Validation, self.to_string())
            }
            CheckoutError::EmptyBasket
            | CheckoutError::ProductNotFound(_)
            | CheckoutError::InsufficientStock(_)
            | CheckoutError::PaymentFailed => error_response(ErrorCode::Checkout, self.to_string()),
            CheckoutError::OrderNotFound => error_response(ErrorCode::NotFound, self.to_string()),
            CheckoutError::Repository(_) => {
                tracing::error!("Checkout request failed: {:?}", self);
                error_response(ErrorCode::Internal, INTERNAL_MESSAGE)
            }
        }
    }
}
