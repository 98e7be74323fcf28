use std::fs;

use anyhow::{Context, Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::app::utils::expand_path;

pub fn read_json(path: &str) -> Result<Value> {
    let path = expand_path(path);
    let text =
        fs::read_to_string(&path).with_context(|| format!("Failed to read file at path: {}", path))?;

    serde_json::from_str::<Value>(&text).with_context(|| format!("Invalid JSON in {}", path))
}

/// Deserializes every array element, skipping the ones that do not fit `T`.
/// An array with no usable element is an error.
pub fn parse_response_array<T>(data: Value, error_msg: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    match data {
        Value::Array(items) => {
            let total = items.len();
            let result: Vec<T> = items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect();

            if result.len() < total {
                tracing::warn!(
                    skipped = total - result.len(),
                    "skipped malformed snapshot entries"
                );
            }

            if result.is_empty() {
                Err(Error::msg(error_msg.to_string()))
            } else {
                Ok(result)
            }
        }
        _ => Err(Error::msg("Unexpected snapshot format: not an array")),
    }
}

pub fn parse_response_object<T>(data: Value, error_msg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .with_context(|| error_msg.to_string()),
        _ => Err(Error::msg("Unexpected snapshot format: not an object")),
    }
}
