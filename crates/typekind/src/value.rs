// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic script values.

use std::collections::HashMap;

use crate::class::{BuiltinClass, ClassRef};

/// A value of the scripting language, of unknown static type.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    // Primitives
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),

    // Composites
    Array(Vec<Value>),
    Function(FunctionValue),
    Object(ObjectValue),
    /// `new Number(3)`, `new String("x")`, `new Boolean(false)`.
    Boxed(BoxedPrimitive),

    /// Object handed over by the embedding environment.
    Alien(HostObject),
}

/// Primitive wrapped in an object.
#[derive(Debug, Clone, PartialEq)]
pub enum BoxedPrimitive {
    Bool(bool),
    Number(f64),
    String(String),
}

impl BoxedPrimitive {
    /// Unwrapped primitive.
    pub fn primitive(&self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(*n),
            Self::String(s) => Value::String(s.clone()),
        }
    }

    fn class(&self) -> BuiltinClass {
        match self {
            Self::Bool(_) => BuiltinClass::Boolean,
            Self::Number(_) => BuiltinClass::Number,
            Self::String(_) => BuiltinClass::String,
        }
    }
}

/// A callable. Every function carries its own prototype class, so any
/// function can be used on the right-hand side of `instanceof`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionValue {
    name: String,
    prototype: ClassRef,
}

impl FunctionValue {
    /// Plain function; its prototype is a fresh class named after it.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            prototype: ClassRef::declare(name.clone()),
            name,
        }
    }

    /// Constructor function for an existing class.
    pub fn constructor(class: ClassRef) -> Self {
        Self {
            name: class.name().to_string(),
            prototype: class,
        }
    }

    /// One of the language's built-in constructors (`Array`, `Number`, ...).
    pub fn builtin(class: BuiltinClass) -> Self {
        Self::constructor(ClassRef::Builtin(class))
    }

    /// Function name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class of the objects this function constructs.
    pub fn prototype(&self) -> &ClassRef {
        &self.prototype
    }

    /// `new f()` with no properties.
    pub fn construct(&self) -> ObjectValue {
        ObjectValue::with_class(self.prototype.clone())
    }
}

/// A composite with named properties.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectValue {
    class: ClassRef,
    properties: HashMap<String, Value>,
}

impl ObjectValue {
    /// Empty plain object (`{}`).
    pub fn new() -> Self {
        Self::with_class(ClassRef::object())
    }

    /// Empty instance of `class`.
    pub fn with_class(class: ClassRef) -> Self {
        Self {
            class,
            properties: HashMap::new(),
        }
    }

    /// Builder-style property insertion.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Constructing class.
    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    /// Get a property.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Get a mutable property.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.properties.get_mut(name)
    }

    /// Set a property, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(name.into(), value.into())
    }

    /// Remove a property.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.properties.remove(name)
    }

    /// Check if a property is present (even if its value is `undefined`).
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Iterate over properties.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if the object has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for ObjectValue {
    fn default() -> Self {
        Self::new()
    }
}

/// Opaque object owned by the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostObject {
    type_name: String,
}

impl HostObject {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    /// Host-side type name (diagnostics only).
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl Value {
    /// Check if value is `null` or `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Script truthiness.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Array(_)
            | Self::Function(_)
            | Self::Object(_)
            | Self::Boxed(_)
            | Self::Alien(_) => true,
        }
    }

    /// Result of the `typeof` operator.
    pub fn type_of(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Function(_) => "function",
            Self::Null | Self::Array(_) | Self::Object(_) | Self::Boxed(_) | Self::Alien(_) => {
                "object"
            }
        }
    }

    /// Class the value was constructed from, `None` for primitives and
    /// host objects.
    pub fn class(&self) -> Option<ClassRef> {
        match self {
            Self::Array(_) => Some(BuiltinClass::Array.into()),
            Self::Function(_) => Some(BuiltinClass::Function.into()),
            Self::Object(obj) => Some(obj.class().clone()),
            Self::Boxed(b) => Some(b.class().into()),
            Self::Undefined
            | Self::Null
            | Self::Bool(_)
            | Self::Number(_)
            | Self::String(_)
            | Self::Alien(_) => None,
        }
    }

    /// Plain property lookup; only objects have properties.
    pub fn property(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Object(obj) => obj.get(name),
            _ => None,
        }
    }

    /// Script `ToNumber` coercion.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined => f64::NAN,
            Self::Null => 0.0,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Number(n) => *n,
            Self::String(s) => string_to_number(s),
            Self::Boxed(b) => b.primitive().to_number(),
            Self::Array(_) => string_to_number(&self.to_display_string()),
            Self::Function(_) | Self::Object(_) | Self::Alien(_) => f64::NAN,
        }
    }

    /// Script `ToString` coercion.
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Undefined => "undefined".to_string(),
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => number_to_string(*n),
            Self::String(s) => s.clone(),
            Self::Boxed(b) => b.primitive().to_display_string(),
            Self::Array(items) => items
                .iter()
                .map(|item| {
                    if item.is_nullish() {
                        String::new()
                    } else {
                        item.to_display_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(","),
            Self::Function(f) => format!("function {}() {{ [code] }}", f.name()),
            Self::Object(_) => "[object Object]".to_string(),
            Self::Alien(h) => format!("[object {}]", h.type_name()),
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as object.
    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }
}

/// Whitespace accepted around numeric strings (`\s` plus the BOM).
pub(crate) fn is_script_whitespace(c: char) -> bool {
    // NEL is Unicode whitespace but not script whitespace.
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim_matches(is_script_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits
            .chars()
            .try_fold(0.0f64, |acc, c| {
                c.to_digit(radix)
                    .map(|d| acc * f64::from(radix) + f64::from(d))
            })
            .unwrap_or(f64::NAN);
    }

    // `str::parse` also accepts "inf" and "nan", which scripts do not.
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

// Conversion traits
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<ObjectValue> for Value {
    fn from(v: ObjectValue) -> Self {
        Self::Object(v)
    }
}

impl From<FunctionValue> for Value {
    fn from(v: FunctionValue) -> Self {
        Self::Function(v)
    }
}

impl From<BoxedPrimitive> for Value {
    fn from(v: BoxedPrimitive) -> Self {
        Self::Boxed(v)
    }
}

impl From<HostObject> for Value {
    fn from(v: HostObject) -> Self {
        Self::Alien(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::from(false).is_truthy());

        assert!(Value::from("0").is_truthy());
        assert!(Value::from(Vec::<Value>::new()).is_truthy());
        assert!(Value::from(ObjectValue::new()).is_truthy());
        assert!(Value::Boxed(BoxedPrimitive::Bool(false)).is_truthy());
    }

    #[test]
    fn test_string_to_number() {
        assert_eq!(Value::from("3").to_number(), 3.0);
        assert_eq!(Value::from("  -2.5e1 \n").to_number(), -25.0);
        assert_eq!(Value::from("0x1F").to_number(), 31.0);
        assert_eq!(Value::from("0b101").to_number(), 5.0);
        assert_eq!(Value::from(".5").to_number(), 0.5);
        assert_eq!(Value::from("").to_number(), 0.0);
        assert_eq!(Value::from("-Infinity").to_number(), f64::NEG_INFINITY);

        assert!(Value::from("foo").to_number().is_nan());
        assert!(Value::from("inf").to_number().is_nan());
        assert!(Value::from("nan").to_number().is_nan());
        assert!(Value::from("0x").to_number().is_nan());
        assert!(Value::from("1e").to_number().is_nan());

        assert_eq!(Value::from("\u{FEFF}\u{A0}3\u{2028}").to_number(), 3.0);
        assert!(Value::from("\u{85}3").to_number().is_nan());
    }

    #[test]
    fn test_other_to_number() {
        assert_eq!(Value::Null.to_number(), 0.0);
        assert_eq!(Value::from(true).to_number(), 1.0);
        assert!(Value::Undefined.to_number().is_nan());
        assert_eq!(Value::from(vec![7]).to_number(), 7.0);
        assert!(Value::from(vec![1, 2]).to_number().is_nan());
        assert_eq!(Value::Boxed(BoxedPrimitive::String("4".into())).to_number(), 4.0);
        assert!(Value::from(ObjectValue::new()).to_number().is_nan());
    }

    #[test]
    fn test_display_string() {
        assert_eq!(Value::from(3).to_display_string(), "3");
        assert_eq!(Value::from(3.5).to_display_string(), "3.5");
        assert_eq!(
            Value::from(vec![Value::from(1), Value::Null, Value::from("a")]).to_display_string(),
            "1,,a"
        );
        assert_eq!(Value::Number(f64::INFINITY).to_display_string(), "Infinity");
    }

    #[test]
    fn test_type_of_and_class() {
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::from(FunctionValue::new("f")).type_of(), "function");
        assert!(Value::from(1).class().is_none());
        assert_eq!(
            Value::from(vec![1]).class(),
            Some(ClassRef::Builtin(BuiltinClass::Array))
        );
    }

    #[test]
    fn test_object_properties() {
        let mut obj = ObjectValue::new().with("x", 10).with("y", 20);
        assert_eq!(obj.get("x").and_then(Value::as_f64), Some(10.0));
        assert!(obj.get("z").is_none());
        assert_eq!(obj.len(), 2);

        obj.set("x", "changed");
        assert_eq!(obj.get("x").and_then(Value::as_str), Some("changed"));
        assert!(obj.remove("y").is_some());
        assert!(!obj.contains("y"));
    }

    #[test]
    fn test_constructor_instances() {
        let point = FunctionValue::new("Point");
        let instance = point.construct();
        assert_eq!(instance.class(), point.prototype());
        assert!(!instance.class().is_base_object());
    }
}
