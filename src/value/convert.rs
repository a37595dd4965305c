//! Conversion from parsed JSON into the value tree.
//!
//! Parsing raw JSON text is delegated to serde_json; this module is the seam
//! where its dynamic `serde_json::Value` becomes the closed [`Value`] sum
//! type the engine dispatches on.
//!
//! Numbers become [`Value::Int`] when exactly representable as i64 and
//! [`Value::Float`] otherwise. A number representable as neither (only
//! possible with serde_json's arbitrary-precision feature) is rejected with
//! [`HashError::UnsupportedNumber`] rather than silently approximated.

use std::collections::BTreeMap;

use super::types::Value;
use crate::error::{HashError, HashResult};

impl TryFrom<serde_json::Value> for Value {
    type Error = HashError;

    fn try_from(json: serde_json::Value) -> HashResult<Self> {
        from_json(&json)
    }
}

impl TryFrom<&serde_json::Value> for Value {
    type Error = HashError;

    fn try_from(json: &serde_json::Value) -> HashResult<Self> {
        from_json(json)
    }
}

/// Convert a serde_json value tree into a [`Value`] tree.
pub fn from_json(json: &serde_json::Value) -> HashResult<Value> {
    match json {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Err(HashError::UnsupportedNumber(n.to_string()))
            }
        }
        serde_json::Value::String(s) => Ok(Value::Str(s.clone())),
        serde_json::Value::Array(arr) => {
            let mut list = Vec::with_capacity(arr.len());
            for item in arr {
                list.push(from_json(item)?);
            }
            Ok(Value::List(list))
        }
        serde_json::Value::Object(obj) => {
            let mut dict = BTreeMap::new();
            for (key, item) in obj {
                dict.insert(key.clone(), from_json(item)?);
            }
            Ok(Value::Dict(dict))
        }
    }
}
