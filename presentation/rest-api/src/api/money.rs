use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;

/// Money leaves the service as a JSON number.
pub fn to_json_number(amount: &BigDecimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

/// Parses a JSON number through its shortest decimal form, so `19.99` stays `19.99`.
pub fn from_json_number(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&value.to_string()).ok()
}
