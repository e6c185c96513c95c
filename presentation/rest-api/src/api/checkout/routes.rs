use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::checkout::use_cases::get_order::{GetOrderParams, GetOrderUseCase};
use business::domain::checkout::use_cases::get_user_orders::{
    GetUserOrdersParams, GetUserOrdersUseCase,
};
use business::domain::checkout::use_cases::place_order::{CheckoutParams, CheckoutUseCase};
use business::domain::shared::value_objects::PageRequest;

use crate::api::checkout::dto::{
    CheckoutRequest, OrderResponse, OrderSummaryResponse, OrdersResponse,
};
use crate::api::error::{ErrorCode, ErrorResponse, IntoErrorResponse, error_response};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    checkout_use_case: Arc<dyn CheckoutUseCase>,
}

impl CheckoutApi {
    pub fn new(checkout_use_case: Arc<dyn CheckoutUseCase>) -> Self {
        Self { checkout_use_case }
    }
}

/// Turning the basket into a paid order
#[OpenApi]
impl CheckoutApi {
    /// Place an order
    ///
    /// Validates stock, charges the simulated payment gateway, records the order
    /// with the prices captured in the basket and empties the basket.
    #[oai(path = "/checkout", method = "post", tag = "ApiTags::Checkout")]
    async fn checkout(&self, auth: BearerAuth, body: Json<CheckoutRequest>) -> CheckoutResponse {
        let request = body.0;
        let params = CheckoutParams {
            user_id: auth.0.user_id,
            shipping_address: request.shipping_address.into(),
            payment_method: request.payment_method,
        };

        match self.checkout_use_case.execute(params).await {
            Ok(summary) => CheckoutResponse::Created(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CheckoutResponse::BadRequest(json),
                    _ => CheckoutResponse::InternalError(json),
                }
            }
        }
    }
}

pub struct OrdersApi {
    get_order_use_case: Arc<dyn GetOrderUseCase>,
    get_user_orders_use_case: Arc<dyn GetUserOrdersUseCase>,
}

impl OrdersApi {
    pub fn new(
        get_order_use_case: Arc<dyn GetOrderUseCase>,
        get_user_orders_use_case: Arc<dyn GetUserOrdersUseCase>,
    ) -> Self {
        Self {
            get_order_use_case,
            get_user_orders_use_case,
        }
    }
}

/// Order history of the authenticated user
#[OpenApi]
impl OrdersApi {
    /// List orders
    ///
    /// Newest first. `page` defaults to 1 and `limit` to 10 (max 100).
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn list_orders(
        &self,
        auth: BearerAuth,
        page: Query<Option<u32>>,
        limit: Query<Option<u32>>,
    ) -> ListOrdersResponse {
        let params = GetUserOrdersParams {
            user_id: auth.0.user_id,
            page: page.0.unwrap_or(PageRequest::DEFAULT_PAGE),
            limit: limit.0.unwrap_or(PageRequest::DEFAULT_LIMIT),
        };

        match self.get_user_orders_use_case.execute(params).await {
            Ok(orders) => ListOrdersResponse::Ok(Json(orders.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListOrdersResponse::BadRequest(json),
                    _ => ListOrdersResponse::InternalError(json),
                }
            }
        }
    }

    /// Get an order
    ///
    /// Orders belonging to other users are reported as not found.
    #[oai(path = "/orders/:order_id", method = "get", tag = "ApiTags::Orders")]
    async fn get_order(&self, auth: BearerAuth, order_id: Path<String>) -> GetOrderResponse {
        let Ok(order_id) = Uuid::parse_str(&order_id.0) else {
            let (_, json) = error_response(ErrorCode::Validation, "order.invalid_id");
            return GetOrderResponse::BadRequest(json);
        };

        let params = GetOrderParams {
            user_id: auth.0.user_id,
            order_id,
        };

        match self.get_order_use_case.execute(params).await {
            Ok(view) => GetOrderResponse::Ok(Json(view.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetOrderResponse::BadRequest(json),
                    404 => GetOrderResponse::NotFound(json),
                    _ => GetOrderResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutResponse {
    #[oai(status = 201)]
    Created(Json<OrderSummaryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<OrdersResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
