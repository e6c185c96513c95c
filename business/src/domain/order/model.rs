use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use super::value_objects::{OrderStatus, PaymentMethod, ShippingAddress};
use crate::domain::basket::model::BasketItem;
use crate::domain::shared::value_objects::UserId;

/// Shown for order lines whose product has since been removed from the catalog.
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";

/// Immutable snapshot of a basket line at checkout time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub quantity: u32,
    pub unit_price: BigDecimal,
}

impl From<&BasketItem> for OrderItem {
    fn from(item: &BasketItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price: item.unit_price.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total_amount: BigDecimal,
    pub status: OrderStatus,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Builds a paid order from basket lines; the total is summed from the captured prices.
    pub fn paid(
        user_id: UserId,
        lines: &[BasketItem],
        shipping_address: ShippingAddress,
        payment_method: PaymentMethod,
    ) -> Self {
        let items: Vec<OrderItem> = lines.iter().map(OrderItem::from).collect();
        let total_amount = items.iter().fold(BigDecimal::zero(), |acc, item| {
            acc + &item.unit_price * BigDecimal::from(item.quantity)
        });

        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            items,
            total_amount,
            status: OrderStatus::Paid,
            shipping_address,
            payment_method,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        items: Vec<OrderItem>,
        total_amount: BigDecimal,
        status: OrderStatus,
        shipping_address: ShippingAddress,
        payment_method: PaymentMethod,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            items,
            total_amount,
            status,
            shipping_address,
            payment_method,
            created_at,
            updated_at,
        }
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            order_id: self.id,
            total_amount: self.total_amount.clone(),
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub order_id: Uuid,
    pub total_amount: BigDecimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemView {
    pub product_id: Uuid,
    pub name: String,
    pub unit_price: BigDecimal,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderView {
    pub order_id: Uuid,
    pub total_amount: BigDecimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrdersPage {
    pub orders: Vec<OrderView>,
    pub pagination: PaginationInfo,
}
