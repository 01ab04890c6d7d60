// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! JSON <-> [`Value`] conversion.
//!
//! JSON objects become plain `Object` instances. Going back, values JSON
//! cannot express are lowered: `undefined` and non-finite numbers become
//! `null`, functions and host objects become descriptive strings.

use serde_json::{Map, Number};
use thiserror::Error;

use crate::namespace::Namespace;
use crate::value::{BoxedPrimitive, ObjectValue, Value};

/// Conversion errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("namespace root must be a JSON object, got {0}")]
    RootNotObject(&'static str),

    #[error("number {0} is not representable as f64")]
    UnrepresentableNumber(String),
}

impl TryFrom<serde_json::Value> for Value {
    type Error = ConvertError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(
                n.as_f64()
                    .ok_or_else(|| ConvertError::UnrepresentableNumber(n.to_string()))?,
            ),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            serde_json::Value::Object(map) => Value::Object(object_from_map(map)?),
        })
    }
}

fn object_from_map(map: Map<String, serde_json::Value>) -> Result<ObjectValue, ConvertError> {
    let mut obj = ObjectValue::new();
    for (key, value) in map {
        obj.set(key, Value::try_from(value)?);
    }
    Ok(obj)
}

impl TryFrom<serde_json::Value> for Namespace {
    type Error = ConvertError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        match json {
            serde_json::Value::Object(map) => Ok(Namespace::new(object_from_map(map)?)),
            serde_json::Value::Null => Err(ConvertError::RootNotObject("null")),
            serde_json::Value::Bool(_) => Err(ConvertError::RootNotObject("boolean")),
            serde_json::Value::Number(_) => Err(ConvertError::RootNotObject("number")),
            serde_json::Value::String(_) => Err(ConvertError::RootNotObject("string")),
            serde_json::Value::Array(_) => Err(ConvertError::RootNotObject("array")),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Undefined | Value::Null => serde_json::Value::Null,
            Value::Bool(b) | Value::Boxed(BoxedPrimitive::Bool(b)) => serde_json::Value::Bool(*b),
            Value::Number(n) | Value::Boxed(BoxedPrimitive::Number(n)) => number_to_json(*n),
            Value::String(s) | Value::Boxed(BoxedPrimitive::String(s)) => {
                serde_json::Value::String(s.clone())
            }
            Value::Array(items) => serde_json::Value::Array(items.iter().map(Into::into).collect()),
            Value::Object(obj) => serde_json::Value::Object(
                obj.properties()
                    .map(|(k, v)| (k.to_string(), v.into()))
                    .collect(),
            ),
            Value::Function(f) => serde_json::Value::String(format!("[function {}]", f.name())),
            Value::Alien(h) => serde_json::Value::String(format!("[alien {}]", h.type_name())),
        }
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    // Whole numbers print without a trailing ".0".
    if n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 {
        return serde_json::Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_to_value() {
        let value = Value::try_from(json!({"a": [1, "two", null, true]})).unwrap();
        let a = value.property("a").and_then(Value::as_array).unwrap();
        assert_eq!(a[0], Value::Number(1.0));
        assert_eq!(a[1], Value::from("two"));
        assert_eq!(a[2], Value::Null);
        assert_eq!(a[3], Value::Bool(true));
        assert!(value.as_object().unwrap().class().is_base_object());
    }

    #[test]
    fn test_namespace_root_must_be_object() {
        assert!(Namespace::try_from(json!({"a": 1})).is_ok());
        assert_eq!(
            Namespace::try_from(json!([1])),
            Err(ConvertError::RootNotObject("array"))
        );
    }

    #[test]
    fn test_value_to_json() {
        let obj = ObjectValue::new().with("n", 5).with("half", 0.5).with("u", Value::Undefined);
        let json = serde_json::Value::from(&Value::from(obj));
        assert_eq!(json, json!({"n": 5, "half": 0.5, "u": null}));

        let nan = serde_json::Value::from(&Value::Number(f64::NAN));
        assert_eq!(nan, serde_json::Value::Null);
    }
}
