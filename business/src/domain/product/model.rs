use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Signed;
use url::Url;
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::ProductPatch;

/// Prices are stored as `NUMERIC(12, 2)`.
pub const PRICE_MAX_SCALE: i64 = 2;
pub const PRICE_MAX_INTEGER_DIGITS: u32 = 10;
/// Stock is stored as a signed 32-bit integer.
pub const MAX_STOCK: u32 = i32::MAX as u32;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
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

/// Catalog fields of a product, without identity or timestamps.
#[derive(Debug, Clone)]
pub struct ProductProps {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub stock: u32,
    pub category: String,
    pub size: String,
    pub color: String,
    pub material: String,
    pub gender: String,
    pub brand: String,
}

impl Product {
    pub fn new(props: ProductProps) -> Result<Self, ProductError> {
        validate_name(&props.name)?;
        validate_price(&props.price)?;
        validate_stock(props.stock)?;
        if let Some(image_url) = &props.image_url {
            validate_image_url(image_url)?;
        }

        let now = Utc::now();
        Ok(Self::from_repository(Uuid::new_v4(), props, now, now))
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        props: ProductProps,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: props.name,
            description: props.description,
            price: props.price,
            image_url: props.image_url,
            stock: props.stock,
            category: props.category,
            size: props.size,
            color: props.color,
            material: props.material,
            gender: props.gender,
            brand: props.brand,
            created_at,
            updated_at,
        }
    }

    /// Overwrites only the fields present in `patch`. Nothing changes when validation fails.
    pub fn apply_patch(&mut self, patch: ProductPatch) -> Result<(), ProductError> {
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }
        if let Some(price) = &patch.price {
            validate_price(price)?;
        }
        if let Some(stock) = patch.stock {
            validate_stock(stock)?;
        }
        if let Some(image_url) = &patch.image_url {
            validate_image_url(image_url)?;
        }

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(material) = patch.material {
            self.material = material;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }

        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    Ok(())
}

fn validate_price(price: &BigDecimal) -> Result<(), ProductError> {
    if price.is_negative() {
        return Err(ProductError::NegativePrice);
    }
    let (_, scale) = price.normalized().as_bigint_and_exponent();
    let ceiling = BigDecimal::from(10u64.pow(PRICE_MAX_INTEGER_DIGITS));
    if scale > PRICE_MAX_SCALE || *price >= ceiling {
        return Err(ProductError::InvalidPrice);
    }
    Ok(())
}

fn validate_stock(stock: u32) -> Result<(), ProductError> {
    if stock > MAX_STOCK {
        return Err(ProductError::StockOutOfRange);
    }
    Ok(())
}

fn validate_image_url(image_url: &str) -> Result<(), ProductError> {
    match Url::parse(image_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ProductError::InvalidImageUrl),
    }
}
