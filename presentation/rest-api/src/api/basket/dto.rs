use poem_openapi::Object;

use business::domain::basket::model::{BasketLineView, BasketView};

use crate::api::money::to_json_number;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddToBasketRequest {
    pub product_id: String,
    /// At least 1
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct BasketItemResponse {
    pub product_id: String,
    /// Current catalog name
    pub name: String,
    /// Unit price captured when the product was first added
    pub price: f64,
    pub quantity: u32,
    /// `price * quantity`
    pub total_price: f64,
}

impl From<BasketLineView> for BasketItemResponse {
    fn from(line: BasketLineView) -> Self {
        Self {
            product_id: line.product_id.to_string(),
            name: line.name,
            price: to_json_number(&line.unit_price),
            quantity: line.quantity,
            total_price: to_json_number(&line.line_total),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct BasketResponse {
    /// Empty when the user has never added anything
    pub basket_id: String,
    pub items: Vec<BasketItemResponse>,
    pub total_amount: f64,
}

impl From<BasketView> for BasketResponse {
    fn from(view: BasketView) -> Self {
        Self {
            basket_id: view.basket_id.map(|id| id.to_string()).unwrap_or_default(),
            items: view.items.into_iter().map(Into::into).collect(),
            total_amount: to_json_number(&view.total_amount),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddToBasketResponse {
    pub basket_item: BasketItemResponse,
}
