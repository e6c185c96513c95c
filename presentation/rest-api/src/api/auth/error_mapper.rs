use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AuthError;

use crate::api::error::{
    ErrorCode, ErrorResponse, INTERNAL_MESSAGE, IntoErrorResponse, error_response,
};

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            AuthError::InvalidProfile(_) | AuthError::InvalidPassword => {
                error_response(ErrorCode::Validation, self.to_string())
            }
            AuthError::UsernameTaken | AuthError::EmailTaken => {
                error_response(ErrorCode::Conflict, self.to_string())
            }
            AuthError::InvalidCredentials => {
                error_response(ErrorCode::Unauthorized, self.to_string())
            }
            AuthError::HashingFailed | AuthError::TokenIssueFailed | AuthError::Repository(_) => {
                tracing::error!("Auth request failed: {:?}", self);
                error_response(ErrorCode::Internal, INTERNAL_MESSAGE)
            }
        }
    }
}
