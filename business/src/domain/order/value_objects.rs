use serde::{Deserialize, Serialize};

use super::errors::OrderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::Paid => write!(f, "Paid"),
            OrderStatus::Shipped => write!(f, "Shipped"),
            OrderStatus::Delivered => write!(f, "Delivered"),
            OrderStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Paid" => Ok(OrderStatus::Paid),
            "Shipped" => Ok(OrderStatus::Shipped),
            "Delivered" => Ok(OrderStatus::Delivered),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

pub const STREET_MAX_LENGTH: usize = 200;
pub const CITY_MAX_LENGTH: usize = 100;
pub const POSTAL_CODE_MAX_LENGTH: usize = 20;
pub const COUNTRY_MAX_LENGTH: usize = 100;
pub const PAYMENT_METHOD_MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl ShippingAddress {
    pub fn new(
        street: String,
        city: String,
        postal_code: String,
        country: String,
    ) -> Result<Self, OrderError> {
        let fields = [
            (&street, STREET_MAX_LENGTH),
            (&city, CITY_MAX_LENGTH),
            (&postal_code, POSTAL_CODE_MAX_LENGTH),
            (&country, COUNTRY_MAX_LENGTH),
        ];
        if fields
            .iter()
            .any(|(value, max)| !is_filled_within(value, *max))
        {
            return Err(OrderError::InvalidShippingAddress);
        }

        Ok(Self {
            street,
            city,
            postal_code,
            country,
        })
    }
}

/// Free-form payment method label ("credit_card", "paypal", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod(String);

impl PaymentMethod {
    pub fn new(method: impl Into<String>) -> Result<Self, OrderError> {
        let method = method.into();
        if !is_filled_within(&method, PAYMENT_METHOD_MAX_LENGTH) {
            return Err(OrderError::InvalidPaymentMethod);
        }
        Ok(Self(method))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_filled_within(value: &str, max: usize) -> bool {
    !value.trim().is_empty() && value.chars().count() <= max
}
