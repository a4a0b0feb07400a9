//! JSON encode/decode wrappers over `serde_json`.
//!
//! Encoding drops object fields whose value is `null`; decoding ignores
//! unknown fields (the serde default for non-`deny_unknown_fields` types).

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Serializes `value` as compact JSON, omitting null object fields.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if `value` cannot be serialized.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(&to_value(value)?)?)
}

/// Serializes `value` as indented JSON, omitting null object fields.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if `value` cannot be serialized.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_value(value)?)?)
}

/// Deserializes `json` into `T`.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if `json` is malformed or does
/// not match `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    let mut value = serde_json::to_value(value)?;
    strip_nulls(&mut value);
    Ok(value)
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}
