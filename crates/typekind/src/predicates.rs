// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Classification predicates.
//!
//! Boxed wrappers count as their primitive for the string, number and
//! boolean checks, matching how scripts treat `new Number(3)`.

use crate::class::{instance_of, BuiltinClass};
use crate::value::{is_script_whitespace, BoxedPrimitive, Value};

pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Boxed(BoxedPrimitive::String(_)))
}

/// Includes `NaN` and the infinities; see [`is_numeric_like`] for the
/// stricter check.
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_) | Value::Boxed(BoxedPrimitive::Number(_)))
}

pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Boxed(BoxedPrimitive::Bool(_)))
}

/// Host-environment object. Always false unless an embedder produces
/// [`Value::Alien`] values.
pub fn is_alien(value: &Value) -> bool {
    matches!(value, Value::Alien(_))
}

pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// Non-null composite: objects, arrays, functions, boxed wrappers and host
/// objects.
pub fn is_object(value: &Value) -> bool {
    matches!(
        value,
        Value::Object(_) | Value::Array(_) | Value::Function(_) | Value::Boxed(_) | Value::Alien(_)
    )
}

/// Values that commonly represent numbers.
///
/// ```
/// use typekind::{is_numeric_like, BoxedPrimitive, Value};
///
/// assert!(is_numeric_like(&Value::from(3)));
/// assert!(is_numeric_like(&Value::from("3")));
/// assert!(is_numeric_like(&Value::Boxed(BoxedPrimitive::String("3".into()))));
///
/// assert!(!is_numeric_like(&Value::from(f64::INFINITY)));
/// assert!(!is_numeric_like(&Value::from("foo")));
/// assert!(!is_numeric_like(&Value::from(true)));
/// assert!(!is_numeric_like(&Value::from("  ")));
/// ```
pub fn is_numeric_like(value: &Value) -> bool {
    // Booleans, null, blank strings and single-element arrays all coerce
    // to finite numbers.
    if is_null(value) || is_boolean(value) || is_array(value) {
        return false;
    }
    if !value.to_number().is_finite() {
        return false;
    }
    !value
        .to_display_string()
        .chars()
        .all(is_script_whitespace)
}

/// Any value of the language's own vocabulary: literals, boxed literals,
/// arrays, functions, `null`/`undefined` and `Error` instances.
pub fn is_built_in(value: &Value) -> bool {
    is_array(value)
        || is_function(value)
        || is_string(value)
        || is_number(value)
        || is_boolean(value)
        || value.is_nullish()
        || instance_of(value, &BuiltinClass::Error.into())
}

/// Object constructed by the base `Object` class itself (`{}` literals).
/// Dates, arrays and instances of user classes are excluded.
pub fn is_pure_object(value: &Value) -> bool {
    match value {
        Value::Object(obj) => obj.class().is_base_object(),
        _ => false,
    }
}
