use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::checkout::use_cases::place_order::ShippingAddressParams;
use business::domain::order::model::{
    OrderItemView, OrderSummary, OrderView, OrdersPage, PaginationInfo,
};

use crate::api::money::to_json_number;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShippingAddressDto {
    /// Up to 200 characters
    pub street: String,
    /// Up to 100 characters
    pub city: String,
    /// Up to 20 characters
    pub postal_code: String,
    /// Up to 100 characters
    pub country: String,
}

impl From<ShippingAddressDto> for ShippingAddressParams {
    fn from(dto: ShippingAddressDto) -> Self {
        Self {
            street: dto.street,
            city: dto.city,
            postal_code: dto.postal_code,
            country: dto.country,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub shipping_address: ShippingAddressDto,
    /// Free-form label such as `credit_card`, up to 50 characters
    pub payment_method: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct OrderSummaryResponse {
    pub order_id: String,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<OrderSummary> for OrderSummaryResponse {
    fn from(summary: OrderSummary) -> Self {
        Self {
            order_id: summary.order_id.to_string(),
            total_amount: to_json_number(&summary.total_amount),
            status: summary.status.to_string(),
            created_at: summary.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub product_id: String,
    /// Current catalog name, or `Unknown Product` once deleted
    pub name: String,
    /// Unit price paid
    pub price: f64,
    pub quantity: u32,
}

impl From<OrderItemView> for OrderItemResponse {
    fn from(item: OrderItemView) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            name: item.name,
            price: to_json_number(&item.unit_price),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: String,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemResponse>,
}

impl From<OrderView> for OrderResponse {
    fn from(view: OrderView) -> Self {
        Self {
            order_id: view.order_id.to_string(),
            total_amount: to_json_number(&view.total_amount),
            status: view.status.to_string(),
            created_at: view.created_at,
            items: view.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PaginationResponse {
    pub page: u32,
    pub limit: u32,
    /// All orders of the user, across pages
    pub total: u64,
}

impl From<PaginationInfo> for PaginationResponse {
    fn from(info: PaginationInfo) -> Self {
        Self {
            page: info.page,
            limit: info.limit,
            total: info.total,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrdersResponse {
    pub orders: Vec<OrderResponse>,
    pub pagination: PaginationResponse,
}

impl From<OrdersPage> for OrdersResponse {
    fn from(page: OrdersPage) -> Self {
        Self {
            orders: page.orders.into_iter().map(Into::into).collect(),
            pagination: page.pagination.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use business::domain::order::value_objects::OrderStatus;
    use std::str::FromStr;
    use uuid::Uuid;

    #[test]
    fn should_render_status_and_exact_total() {
        let summary = OrderSummary {
            order_id: Uuid::new_v4(),
            total_amount: BigDecimal::from_str("69.97").unwrap(),
            status: OrderStatus::Paid,
            created_at: Utc::now(),
        };

        let response = OrderSummaryResponse::from(summary);

        assert_eq!(response.status, "Paid");
        assert_eq!(response.total_amount, 69.97);
    }
}
