use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::basket::use_cases::add_item::{AddBasketItemParams, AddBasketItemUseCase};
use business::domain::basket::use_cases::clear::{ClearBasketParams, ClearBasketUseCase};
use business::domain::basket::use_cases::get::{GetBasketParams, GetBasketUseCase};
use business::domain::basket::use_cases::remove_item::{
    RemoveBasketItemParams, RemoveBasketItemUseCase,
};

use crate::api::basket::dto::{AddToBasketRequest, AddToBasketResponse, BasketResponse};
use crate::api::error::{ErrorCode, ErrorResponse, IntoErrorResponse, error_response};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct BasketApi {
    get_use_case: Arc<dyn GetBasketUseCase>,
    add_item_use_case: Arc<dyn AddBasketItemUseCase>,
    remove_item_use_case: Arc<dyn RemoveBasketItemUseCase>,
    clear_use_case: Arc<dyn ClearBasketUseCase>,
}

impl BasketApi {
    pub fn new(
        get_use_case: Arc<dyn GetBasketUseCase>,
        add_item_use_case: Arc<dyn AddBasketItemUseCase>,
        remove_item_use_case: Arc<dyn RemoveBasketItemUseCase>,
        clear_use_case: Arc<dyn ClearBasketUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            remove_item_use_case,
            clear_use_case,
        }
    }
}

/// The authenticated user's basket
#[OpenApi]
impl BasketApi {
    /// View basket
    ///
    /// Lines are enriched with the current product name; lines of deleted products are omitted.
    #[oai(path = "/basket", method = "get", tag = "ApiTags::Basket")]
    async fn get_basket(&self, auth: BearerAuth) -> GetBasketResponse {
        match self
            .get_use_case
            .execute(GetBasketParams {
                user_id: auth.0.user_id,
            })
            .await
        {
            Ok(view) => GetBasketResponse::Ok(Json(view.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetBasketResponse::InternalError(json)
            }
        }
    }

    /// Add a product
    ///
    /// Adding a product already in the basket increments its quantity.
    #[oai(path = "/basket/add", method = "post", tag = "ApiTags::Basket")]
    async fn add_item(
        &self,
        auth: BearerAuth,
        body: Json<AddToBasketRequest>,
    ) -> AddBasketItemResponse {
        let Ok(product_id) = Uuid::parse_str(&body.0.product_id) else {
            let (_, json) = error_response(ErrorCode::Validation, "basket.invalid_product_id");
            return AddBasketItemResponse::BadRequest(json);
        };

        let params = AddBasketItemParams {
            user_id: auth.0.user_id,
            product_id,
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(line) => AddBasketItemResponse::Ok(Json(AddToBasketResponse {
                basket_item: line.into(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddBasketItemResponse::BadRequest(json),
                    _ => AddBasketItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product
    #[oai(
        path = "/basket/remove/:product_id",
        method = "delete",
        tag = "ApiTags::Basket"
    )]
    async fn remove_item(
        &self,
        auth: BearerAuth,
        product_id: Path<String>,
    ) -> RemoveBasketItemResponse {
        let Ok(product_id) = Uuid::parse_str(&product_id.0) else {
            let (_, json) = error_response(ErrorCode::Validation, "basket.invalid_product_id");
            return RemoveBasketItemResponse::BadRequest(json);
        };

        let params = RemoveBasketItemParams {
            user_id: auth.0.user_id,
            product_id,
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(()) => RemoveBasketItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RemoveBasketItemResponse::BadRequest(json),
                    _ => RemoveBasketItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Empty the basket
    ///
    /// Idempotent; succeeds even when the user has no basket.
    #[oai(path = "/basket/clear", method = "delete", tag = "ApiTags::Basket")]
    async fn clear(&self, auth: BearerAuth) -> ClearBasketResponse {
        match self
            .clear_use_case
            .execute(ClearBasketParams {
                user_id: auth.0.user_id,
            })
            .await
        {
            Ok(()) => ClearBasketResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearBasketResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetBasketResponse {
    #[oai(status = 200)]
    Ok(Json<BasketResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddBasketItemResponse {
    #[oai(status = 200)]
    Ok(Json<AddToBasketResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveBasketItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearBasketResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
