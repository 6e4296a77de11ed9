use serde_json::Value;

use crate::shared::errors::{AppError, AppResult};

/// Parses a response body and accepts it only if it is a JSON array.
/// Items are returned untouched.
pub fn validate_response(raw_text: &str) -> AppResult<Vec<Value>> {
    match serde_json::from_str::<Value>(raw_text)? {
        Value::Array(items) => Ok(items),
        _ => Err(AppError::NotAnArray),
    }
}
