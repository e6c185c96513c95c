use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use super::errors::BasketError;
use crate::domain::shared::value_objects::UserId;

/// A basket line. `unit_price` is the catalog price captured when the product was first added.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketItem {
    pub product_id: Uuid,
    pub quantity: u32,
    pub unit_price: BigDecimal,
}

impl BasketItem {
    pub fn line_total(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }
}

#[derive(Debug, Clone)]
pub struct Basket {
    pub id: Uuid,
    pub user_id: UserId,
    pub items: Vec<BasketItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Basket {
    pub fn new(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        items: Vec<BasketItem>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            items,
            created_at,
            updated_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, product_id: Uuid) -> Option<&BasketItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    /// Merges into an existing line by incrementing its quantity, otherwise appends a new
    /// line priced at `unit_price`. Returns the resulting line.
    pub fn add(
        &mut self,
        product_id: Uuid,
        quantity: u32,
        unit_price: BigDecimal,
    ) -> Result<BasketItem, BasketError> {
        if quantity == 0 {
            return Err(BasketError::InvalidQuantity);
        }

        let position = match self
            .items
            .iter()
            .position(|item| item.product_id == product_id)
        {
            Some(position) => {
                let item = &mut self.items[position];
                item.quantity = item
                    .quantity
                    .checked_add(quantity)
                    .ok_or(BasketError::InvalidQuantity)?;
                position
            }
            None => {
                self.items.push(BasketItem {
                    product_id,
                    quantity,
                    unit_price,
                });
                self.items.len() - 1
            }
        };

        self.updated_at = Utc::now();
        Ok(self.items[position].clone())
    }

    /// Removes the line for `product_id`, keeping the other lines in order.
    pub fn remove(&mut self, product_id: Uuid) -> Result<BasketItem, BasketError> {
        let position = self
            .items
            .iter()
            .position(|item| item.product_id == product_id)
            .ok_or(BasketError::ItemNotInBasket)?;

        let removed = self.items.remove(position);
        self.updated_at = Utc::now();
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = Utc::now();
    }

    pub fn total(&self) -> BigDecimal {
        self.items
            .iter()
            .fold(BigDecimal::zero(), |acc, item| acc + item.line_total())
    }
}

/// A basket line enriched with the product's current display name.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketLineView {
    pub product_id: Uuid,
    pub name: String,
    pub unit_price: BigDecimal,
    pub quantity: u32,
    pub line_total: BigDecimal,
}

impl BasketLineView {
    pub fn new(item: &BasketItem, name: impl Into<String>) -> Self {
        Self {
            product_id: item.product_id,
            name: name.into(),
            unit_price: item.unit_price.clone(),
            quantity: item.quantity,
            line_total: item.line_total(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BasketView {
    /// `None` when the user has never added anything.
    pub basket_id: Option<Uuid>,
    pub items: Vec<BasketLineView>,
    pub total_amount: BigDecimal,
}

impl BasketView {
    pub fn empty() -> Self {
        Self {
            basket_id: None,
            items: Vec::new(),
            total_amount: BigDecimal::zero(),
        }
    }
}
