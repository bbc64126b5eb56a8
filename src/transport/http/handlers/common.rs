use serde_json::{Number, Value as JsonValue};

use crate::domain::product::ProductSubmission;
use crate::transport::http::types::CreateProductRequest;

/// Coerces a scalar JSON value to text the way clients expect field binding
/// to behave: strings pass through, numbers and booleans stringify. Nulls
/// and composite values do not coerce.
pub fn coerce_text(v: &JsonValue) -> Option<String> {
    match v {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Coerces a scalar JSON value to a number: numbers pass through, numeric
/// strings parse (integers before floats, so `"5"` stays integral).
pub fn coerce_number(v: &JsonValue) -> Option<Number> {
    match v {
        JsonValue::Number(n) => Some(n.clone()),
        JsonValue::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                return Some(Number::from(i));
            }
            s.parse::<f64>().ok().and_then(Number::from_f64)
        }
        _ => None,
    }
}

/// Binds the raw request body into a domain submission. A field that fails
/// to coerce ends up absent, which validation then reports as a null value.
pub fn submission_from_request(request: &CreateProductRequest) -> ProductSubmission {
    ProductSubmission {
        name: request.name.as_ref().and_then(coerce_text),
        product_type: request.product_type.as_ref().and_then(coerce_text),
        inventory: request.inventory.as_ref().and_then(coerce_number),
        cost: request
            .cost
            .as_ref()
            .and_then(coerce_number)
            .and_then(|n| n.as_f64()),
    }
}
