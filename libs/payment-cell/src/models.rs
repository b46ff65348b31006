use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PaymentError;

/// Body of a payment intent request. `price` is in major units and may be a
/// JSON number or a numeric string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentIntentRequest {
    #[serde(default)]
    pub price: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PaymentIntentApiResponse {
    pub client_secret: Option<String>,
}

/// Largest charge the gateway accepts, in minor units.
pub const MAX_AMOUNT_MINOR: i64 = 99_999_999;

impl PaymentIntentRequest {
    /// The requested price in minor units.
    ///
    /// Rejected unless it is a finite number that rounds to at least one minor
    /// unit and stays within [`MAX_AMOUNT_MINOR`].
    pub fn amount(&self) -> Result<i64, PaymentError> {
        let price = match &self.price {
            None | Some(Value::Null) => {
                return Err(PaymentError::InvalidPrice("price is required".to_string()))
            }
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(_) => None,
        };

        let minor = match price {
            Some(p) if p.is_finite() => (p * 100.0).round(),
            _ => {
                return Err(PaymentError::InvalidPrice(
                    "price must be a positive number".to_string(),
                ))
            }
        };

        if minor < 1.0 {
            return Err(PaymentError::InvalidPrice(
                "price must be a positive number".to_string(),
            ));
        }
        if minor > MAX_AMOUNT_MINOR as f64 {
            return Err(PaymentError::InvalidPrice(format!(
                "price must not exceed {}",
                MAX_AMOUNT_MINOR as f64 / 100.0
            )));
        }

        Ok(minor as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn request(price: Value) -> PaymentIntentRequest {
        PaymentIntentRequest { price: Some(price) }
    }

    #[test]
    fn test_amount_accepts_numbers_and_numeric_strings() {
        assert_eq!(request(json!(45)).amount().unwrap(), 4500);
        assert_eq!(request(json!("19.99")).amount().unwrap(), 1999);
        assert_eq!(request(json!(" 7.5 ")).amount().unwrap(), 750);
        assert_eq!(request(json!(0.125)).amount().unwrap(), 13);
    }

    #[test]
    fn test_amount_rejects_bad_values() {
        assert_matches!(PaymentIntentRequest::default().amount(), Err(PaymentError::InvalidPrice(_)));
        assert_matches!(request(Value::Null).amount(), Err(PaymentError::InvalidPrice(_)));
        assert_matches!(request(json!(0)).amount(), Err(PaymentError::InvalidPrice(_)));
        assert_matches!(request(json!(-3)).amount(), Err(PaymentError::InvalidPrice(_)));
        assert_matches!(request(json!("abc")).amount(), Err(PaymentError::InvalidPrice(_)));
        assert_matches!(request(json!("NaN")).amount(), Err(PaymentError::InvalidPrice(_)));
        assert_matches!(request(json!("inf")).amount(), Err(PaymentError::InvalidPrice(_)));
        assert_matches!(request(json!([1])).amount(), Err(PaymentError::InvalidPrice(_)));
    }

    #[test]
    fn test_amount_below_one_minor_unit_rejected() {
        assert_matches!(request(json!(0.004)).amount(), Err(PaymentError::InvalidPrice(_)));
        assert_eq!(request(json!(0.005)).amount().unwrap(), 1);
    }

    #[test]
    fn test_amount_above_limit_rejected() {
        assert_eq!(request(json!(999_999.99)).amount().unwrap(), MAX_AMOUNT_MINOR);
        assert_matches!(request(json!(1_000_000)).amount(), Err(PaymentError::InvalidPrice(_)));
        assert_matches!(request(json!(1e300)).amount(), Err(PaymentError::InvalidPrice(_)));
    }
}
