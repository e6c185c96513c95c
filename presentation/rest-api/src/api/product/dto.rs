use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::{Product, ProductProps};
use business::domain::product::value_objects::ProductPatch;

use crate::api::money::{from_json_number, to_json_number};

/// Raised when a price is not a finite JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPrice;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    pub description: String,
    /// Unit price, zero or more
    pub price: f64,
    /// Absolute http(s) URL
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub stock: u32,
    pub category: String,
    pub size: String,
    pub color: String,
    pub material: String,
    pub gender: String,
    pub brand: String,
}

impl TryFrom<CreateProductRequest> for ProductProps {
    type Error = InvalidPrice;

    fn try_from(request: CreateProductRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            price: from_json_number(request.price).ok_or(InvalidPrice)?,
            name: request.name,
            description: request.description,
            image_url: request.image_url,
            stock: request.stock,
            category: request.category,
            size: request.size,
            color: request.color,
            material: request.material,
            gender: request.gender,
            brand: request.brand,
        })
    }
}

/// Only the fields present are changed.
#[derive(Debug, Clone, Default, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub stock: Option<u32>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub gender: Option<String>,
    pub brand: Option<String>,
}

impl TryFrom<UpdateProductRequest> for ProductPatch {
    type Error = InvalidPrice;

    fn try_from(request: UpdateProductRequest) -> Result<Self, Self::Error> {
        let price = match request.price {
            Some(value) => Some(from_json_number(value).ok_or(InvalidPrice)?),
            None => None,
        };

        Ok(Self {
            name: request.name,
            description: request.description,
            price,
            image_url: request.image_url,
            stock: request.stock,
            category: request.category,
            size: request.size,
            color: request.color,
            material: request.material,
            gender: request.gender,
            brand: request.brand,
        })
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub stock: u32,
    pub category: String,
    pub size: String,
    pub color: String,
    pub material: String,
    pub gender: String,
    pub brand: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            price: to_json_number(&product.price),
            name: product.name,
            description: product.description,
            image_url: product.image_url,
            stock: product.stock,
            category: product.category,
            size: product.size,
            color: product.color,
            material: product.material,
            gender: product.gender,
            brand: product.brand,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
