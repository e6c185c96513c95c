use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::basket::model::{Basket, BasketItem};
use business::domain::shared::value_objects::UserId;

/// One basket line inside the `items` JSONB document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketItemDocument {
    pub product_id: Uuid,
    pub quantity: u32,
    pub unit_price: BigDecimal,
}

impl From<&BasketItem> for BasketItemDocument {
    fn from(item: &BasketItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price: item.unit_price.clone(),
        }
    }
}

impl From<BasketItemDocument> for BasketItem {
    fn from(doc: BasketItemDocument) -> Self {
        Self {
            product_id: doc.product_id,
            quantity: doc.quantity,
            unit_price: doc.unit_price,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct BasketEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Json<Vec<BasketItemDocument>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BasketEntity {
    pub fn into_domain(self) -> Basket {
        Basket::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.items.0.into_iter().map(BasketItem::from).collect(),
            self.created_at,
            self.updated_at,
        )
    }

    pub fn items_document(basket: &Basket) -> Json<Vec<BasketItemDocument>> {
        Json(basket.items.iter().map(BasketItemDocument::from).collect())
    }
}
