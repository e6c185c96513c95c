use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::model::ProductProps;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::ProductPatch;

use crate::api::error::{ErrorCode, ErrorResponse, IntoErrorResponse, error_response};
use crate::api::product::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::api::tags::ApiTags;

const INVALID_ID: &str = "product.invalid_id";
const INVALID_PRICE: &str = "product.invalid_price";

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }

    async fn list(&self, params: GetAllProductsParams) -> ListProductsResponse {
        match self.get_all_use_case.execute(params).await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                ListProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListProductsResponse::BadRequest(json),
                    _ => ListProductsResponse::InternalError(json),
                }
            }
        }
    }
}

/// Product catalog
///
/// Public endpoints for browsing and managing the catalog.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// Newest first. Paging applies only when both `page` and `limit` are given.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        page: Query<Option<u32>>,
        limit: Query<Option<u32>>,
        category: Query<Option<String>>,
    ) -> ListProductsResponse {
        self.list(GetAllProductsParams {
            category: category.0,
            page: page.0,
            limit: limit.0,
        })
        .await
    }

    /// List products of a category
    #[oai(
        path = "/products/category/:category",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn list_by_category(&self, category: Path<String>) -> ListProductsResponse {
        self.list(GetAllProductsParams {
            category: Some(category.0),
            page: None,
            limit: None,
        })
        .await
    }

    /// Create a product
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let Ok(props) = ProductProps::try_from(body.0) else {
            let (_, json) = error_response(ErrorCode::Validation, INVALID_PRICE);
            return CreateProductResponse::BadRequest(json);
        };

        match self
            .create_use_case
            .execute(CreateProductParams { props })
            .await
        {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            let (_, json) = error_response(ErrorCode::Validation, INVALID_ID);
            return GetProductByIdResponse::BadRequest(json);
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Only the fields present in the body are changed.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            let (_, json) = error_response(ErrorCode::Validation, INVALID_ID);
            return UpdateProductResponse::BadRequest(json);
        };
        let Ok(patch) = ProductPatch::try_from(body.0) else {
            let (_, json) = error_response(ErrorCode::Validation, INVALID_PRICE);
            return UpdateProductResponse::BadRequest(json);
        };

        match self
            .update_use_case
            .execute(UpdateProductParams { id, patch })
            .await
        {
            Ok(_) => UpdateProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Baskets and orders referencing it keep their lines.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            let (_, json) = error_response(ErrorCode::Validation, INVALID_ID);
            return DeleteProductResponse::BadRequest(json);
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use serde_json::json;

    use business::domain::product::errors::ProductError;
    use business::domain::product::model::Product;

    use super::*;
    use crate::api::test_support::{app, token_service};

    mock! {
        Create {}
        #[async_trait]
        impl CreateProductUseCase for Create {
            async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        GetAll {}
        #[async_trait]
        impl GetAllProductsUseCase for GetAll {
            async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError>;
        }
    }

    mock! {
        GetById {}
        #[async_trait]
        impl GetProductByIdUseCase for GetById {
            async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        Update {}
        #[async_trait]
        impl UpdateProductUseCase for Update {
            async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        Delete {}
        #[async_trait]
        impl DeleteProductUseCase for Delete {
            async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
        }
    }

    struct Mocks {
        create: MockCreate,
        get_all: MockGetAll,
        get_by_id: MockGetById,
        update: MockUpdate,
        delete: MockDelete,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                create: MockCreate::new(),
                get_all: MockGetAll::new(),
                get_by_id: MockGetById::new(),
                update: MockUpdate::new(),
                delete: MockDelete::new(),
            }
        }

        fn client(self) -> TestClient<impl poem::Endpoint> {
            let api = ProductApi::new(
                Arc::new(self.create),
                Arc::new(self.get_all),
                Arc::new(self.get_by_id),
                Arc::new(self.update),
                Arc::new(self.delete),
            );
            TestClient::new(app(api, token_service()))
        }
    }

    #[tokio::test]
    async fn should_list_products_without_token() {
        let mut mocks = Mocks::new();
        mocks
            .get_all
            .expect_execute()
            .withf(|p| p.category.is_none() && p.page == Some(2) && p.limit == Some(5))
            .times(1)
            .returning(|_| Ok(vec![]));

        let resp = mocks.client().get("/products?page=2&limit=5").send().await;

        resp.assert_status_is_ok();
        resp.assert_json(json!([])).await;
    }

    #[tokio::test]
    async fn should_filter_by_category_path() {
        let mut mocks = Mocks::new();
        mocks
            .get_all
            .expect_execute()
            .withf(|p| p.category.as_deref() == Some("Jeans") && p.page.is_none())
            .times(1)
            .returning(|_| Ok(vec![]));

        let resp = mocks.client().get("/products/category/Jeans").send().await;

        resp.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_forward_only_present_fields_when_patching() {
        let mut mocks = Mocks::new();
        let id = Uuid::new_v4();
        mocks
            .update
            .expect_execute()
            .withf(move |p| p.id == id && p.patch.stock == Some(4) && p.patch.name.is_none())
            .times(1)
            .returning(|_| Err(ProductError::NotFound));

        let resp = mocks
            .client()
            .put(format!("/products/{}", id))
            .body_json(&json!({ "stock": 4 }))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_no_content_when_update_succeeds() {
        let mut mocks = Mocks::new();
        mocks.update.expect_execute().times(1).returning(|p| {
            let mut product = Product::new(ProductProps {
                name: "Classic White T-Shirt".to_string(),
                description: "Comfortable cotton t-shirt".to_string(),
                price: bigdecimal::BigDecimal::from(20),
                image_url: None,
                stock: 50,
                category: "T-Shirts".to_string(),
                size: "M".to_string(),
                color: "White".to_string(),
                material: "Cotton".to_string(),
                gender: "Unisex".to_string(),
                brand: "BasicWear".to_string(),
            })?;
            product.apply_patch(p.patch)?;
            Ok(product)
        });

        let resp = mocks
            .client()
            .put(format!("/products/{}", Uuid::new_v4()))
            .body_json(&json!({ "price": 24.5 }))
            .send()
            .await;

        resp.assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn should_reject_malformed_product_id() {
        let mut mocks = Mocks::new();
        mocks.delete.expect_execute().never();

        let resp = mocks.client().delete("/products/42").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        let error = json.value().object().get("error").object();
        error.get("code").assert_string("VALIDATION_ERROR");
        error.get("message").assert_string("product.invalid_id");
    }

    #[tokio::test]
    async fn should_reject_payload_missing_fields() {
        let mut mocks = Mocks::new();
        mocks.create.expect_execute().never();

        let resp = mocks
            .client()
            .post("/products")
            .body_json(&json!({ "name": "Hoodie" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        json.value()
            .object()
            .get("error")
            .object()
            .get("code")
            .assert_string("VALIDATION_ERROR");
    }
}
