use bigdecimal::BigDecimal;

use crate::domain::shared::value_objects::PageRequest;

/// Partial update of a product. `None` leaves the stored value as it is.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub image_url: Option<String>,
    pub stock: Option<u32>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub gender: Option<String>,
    pub brand: Option<String>,
}

/// Catalog query: optional exact category match and optional paging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub page: Option<PageRequest>,
}

impl ProductFilter {
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            page: None,
        }
    }
}
