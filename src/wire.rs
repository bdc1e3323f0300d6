//! Helpers for reading fields out of flat wire documents.

use crate::error::{Error, Result};
use serde_json::{Number, Value};

pub(crate) fn req_str<'a>(value: &'a Value, key: &str) -> Result<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| missing(key))
}

/// Missing, null, and empty-string fields all read as absent.
pub(crate) fn opt_str(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Required numeric field, returned as the raw wire number so re-encoding
/// keeps the original integer/float representation.
pub(crate) fn req_num(value: &Value, key: &str) -> Result<Number> {
    match value.get(key) {
        Some(Value::Number(n)) => Ok(n.clone()),
        _ => Err(missing(key)),
    }
}

pub(crate) fn req_i64(value: &Value, key: &str) -> Result<i64> {
    value
        .get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| missing(key))
}

pub(crate) fn opt_i64(value: &Value, key: &str) -> Option<i64> {
    value.get(key).and_then(Value::as_i64)
}

pub(crate) fn opt_obj<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| v.is_object())
}

pub(crate) fn req_obj<'a>(value: &'a Value, key: &str) -> Result<&'a Value> {
    opt_obj(value, key).ok_or_else(|| missing(key))
}

fn missing(key: &str) -> Error {
    Error::InvalidArgument(format!("Missing or invalid field: {}", key))
}
