use poem::http::StatusCode;
use poem::{IntoResponse, Response};
use poem_openapi::{Object, payload::Json};
use serde::Serialize;

/// Error taxonomy shared by every endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Validation,
    Conflict,
    Unauthorized,
    Checkout,
    NotFound,
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Validation => "VALIDATION_ERROR",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Checkout => "CHECKOUT_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Internal => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::Validation | ErrorCode::Checkout => StatusCode::BAD_REQUEST,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ErrorCode::Validation,
            StatusCode::UNAUTHORIZED => ErrorCode::Unauthorized,
            StatusCode::NOT_FOUND | StatusCode::METHOD_NOT_ALLOWED => ErrorCode::NotFound,
            StatusCode::CONFLICT => ErrorCode::Conflict,
            _ => ErrorCode::Internal,
        }
    }
}

#[derive(Object, Serialize, Debug, Clone)]
pub struct ErrorDetail {
    /// Taxonomy code, e.g. `VALIDATION_ERROR`
    pub code: String,
    /// Dotted message key, e.g. `basket.insufficient_stock`
    pub message: String,
}

#[derive(Object, Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Message sent for every 500; the cause is only logged.
pub const INTERNAL_MESSAGE: &str = "internal.unexpected_error";

pub fn error_response(
    code: ErrorCode,
    message: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        code.status(),
        Json(ErrorResponse {
            error: ErrorDetail {
                code: code.as_str().to_string(),
                message: message.into(),
            },
        }),
    )
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Wraps errors raised outside the handlers (bad payloads, failed bearer checks,
/// unknown routes) in the same envelope as handler errors.
pub async fn render_framework_error(err: poem::Error) -> Response {
    let status = err.status();
    let code = ErrorCode::from_status(status);
    let message = match code {
        ErrorCode::Unauthorized => "auth.unauthorized".to_string(),
        ErrorCode::NotFound => "route.not_found".to_string(),
        ErrorCode::Internal => {
            tracing::error!("Unhandled error: {}", err);
            INTERNAL_MESSAGE.to_string()
        }
        _ => err.to_string(),
    };

    let body = ErrorResponse {
        error: ErrorDetail {
            code: code.as_str().to_string(),
            message,
        },
    };
    (status, poem::web::Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pair_codes_with_statuses() {
        let (status, body) = error_response(ErrorCode::Checkout, "checkout.empty_basket");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.error.code, "CHECKOUT_ERROR");
        assert_eq!(body.0.error.message, "checkout.empty_basket");
        assert_eq!(ErrorCode::Conflict.status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn should_serialize_nested_envelope() {
        let (_, body) = error_response(ErrorCode::NotFound, "product.not_found");

        let json = serde_json::to_value(&body.0).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"error": {"code": "NOT_FOUND", "message": "product.not_found"}})
        );
    }

    #[tokio::test]
    async fn should_wrap_unauthorized_framework_error() {
        let err = poem::Error::from_status(StatusCode::UNAUTHORIZED);

        let response = render_framework_error(err).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = response.into_body().into_string().await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn should_hide_details_of_internal_errors() {
        let err = poem::Error::from_string(
            "connection refused at 10.0.0.5",
            StatusCode::INTERNAL_SERVER_ERROR,
        );

        let response = render_framework_error(err).await;

        let body = response.into_body().into_string().await.unwrap();
        assert!(!body.contains("10.0.0.5"));
        assert!(body.contains(INTERNAL_MESSAGE));
    }
}
