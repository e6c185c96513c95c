use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, OrderItem};
use business::domain::order::value_objects::{OrderStatus, PaymentMethod, ShippingAddress};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDocument {
    pub product_id: Uuid,
    pub quantity: u32,
    pub unit_price: BigDecimal,
}

impl From<&OrderItem> for OrderItemDocument {
    fn from(item: &OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price: item.unit_price.clone(),
        }
    }
}

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Json<Vec<OrderItemDocument>>,
    pub total_amount: BigDecimal,
    pub status: String,
    pub shipping_address: Json<ShippingAddress>,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Result<Order, RepositoryError> {
        let status = self
            .status
            .parse::<OrderStatus>()
            .map_err(|_| RepositoryError::CorruptedDocument)?;
        let payment_method = PaymentMethod::new(self.payment_method)
            .map_err(|_| RepositoryError::CorruptedDocument)?;
        let items = self
            .items
            .0
            .into_iter()
            .map(|doc| OrderItem {
                product_id: doc.product_id,
                quantity: doc.quantity,
                unit_price: doc.unit_price,
            })
            .collect();

        Ok(Order::from_repository(
            self.id,
            UserId::new(self.user_id),
            items,
            self.total_amount,
            status,
            self.shipping_address.0,
            payment_method,
            self.created_at,
            self.updated_at,
        ))
    }

    pub fn items_document(order: &Order) -> Json<Vec<OrderItemDocument>> {
        Json(order.items.iter().map(OrderItemDocument::from).collect())
    }
}
