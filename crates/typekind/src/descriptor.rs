// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors accepted by [`Classifier::matches`](crate::Classifier::matches).
//!
//! A descriptor is a fixed tag (`"string"`, `"numeric"`, ...), the name of a
//! registered custom category, a constructor reference, or a list of
//! alternatives. Scripts pass descriptors as plain values; use
//! [`Descriptor::from_value`] to convert them.

use std::fmt;

use thiserror::Error;

use crate::class::ClassRef;
use crate::predicates;
use crate::registry::BoxError;
use crate::value::{BoxedPrimitive, Value};

/// Built-in descriptor tags. Parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedTag {
    Array,
    Function,
    String,
    Number,
    Numeric,
    Boolean,
    Object,
    PureObject,
    BuiltIn,
    Alien,
    Undefined,
    Null,
}

impl FixedTag {
    pub const ALL: [FixedTag; 12] = [
        Self::Array,
        Self::Function,
        Self::String,
        Self::Number,
        Self::Numeric,
        Self::Boolean,
        Self::Object,
        Self::PureObject,
        Self::BuiltIn,
        Self::Alien,
        Self::Undefined,
        Self::Null,
    ];

    /// Lower-case tag name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Function => "function",
            Self::String => "string",
            Self::Number => "number",
            Self::Numeric => "numeric",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::PureObject => "pureobject",
            Self::BuiltIn => "builtin",
            Self::Alien => "alien",
            Self::Undefined => "undefined",
            Self::Null => "null",
        }
    }

    /// Look up a tag by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(name))
    }

    /// Run the predicate this tag stands for.
    pub fn test(&self, value: &Value) -> bool {
        match self {
            Self::Array => predicates::is_array(value),
            Self::Function => predicates::is_function(value),
            Self::String => predicates::is_string(value),
            Self::Number => predicates::is_number(value),
            Self::Numeric => predicates::is_numeric_like(value),
            Self::Boolean => predicates::is_boolean(value),
            Self::Object => predicates::is_object(value),
            Self::PureObject => predicates::is_pure_object(value),
            Self::BuiltIn => predicates::is_built_in(value),
            Self::Alien => predicates::is_alien(value),
            Self::Undefined => predicates::is_undefined(value),
            Self::Null => predicates::is_null(value),
        }
    }
}

impl fmt::Display for FixedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Expected type of a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    /// Built-in tag.
    Tag(FixedTag),
    /// Name of a registered custom category (case-sensitive).
    Custom(String),
    /// Constructor reference, matched with `instanceof`.
    TypeRef(ClassRef),
    /// Matches if any alternative matches, tried in order.
    OneOf(Vec<Descriptor>),
    /// Legacy `"optional"` tag: matches `null`/`undefined` only.
    ///
    /// Deprecated: pass [`MatchOptions::optional`] instead. Matching against
    /// it records a deprecation notice.
    LegacyOptional,
}

impl Descriptor {
    /// Parse a string descriptor. Fixed tags are case-insensitive; any other
    /// name is taken as a custom category, spelled as given.
    pub fn parse(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("optional") {
            return Self::LegacyOptional;
        }
        match FixedTag::from_name(tag) {
            Some(fixed) => Self::Tag(fixed),
            None => Self::Custom(tag.to_string()),
        }
    }

    /// Constructor reference. The built-in `Array`, `Function`, `String`,
    /// `Number`, `Boolean` and `Object` constructors become their tags.
    pub fn type_ref(class: ClassRef) -> Self {
        match class.as_builtin().and_then(|b| b.as_fixed_tag()) {
            Some(tag) => Self::Tag(tag),
            None => Self::TypeRef(class),
        }
    }

    /// Alternatives.
    pub fn one_of(alternatives: impl IntoIterator<Item = Descriptor>) -> Self {
        Self::OneOf(alternatives.into_iter().collect())
    }

    /// Convert a descriptor passed as a script value.
    ///
    /// Accepts strings (boxed or not), `null`, functions (as constructor references) and
    /// arrays of those. Anything else is an invalid descriptor.
    pub fn from_value(value: &Value) -> Result<Self, MatchError> {
        match value {
            Value::String(tag) | Value::Boxed(BoxedPrimitive::String(tag)) => {
                Ok(Self::parse(tag))
            }
            Value::Null => Ok(Self::Tag(FixedTag::Null)),
            Value::Function(f) => Ok(Self::type_ref(f.prototype().clone())),
            Value::Array(items) => items
                .iter()
                .map(Self::from_value)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::OneOf),
            other => Err(MatchError::invalid(format!(
                "{} value `{}` is not a type descriptor",
                other.type_of(),
                other.to_display_string()
            ))),
        }
    }
}

impl From<FixedTag> for Descriptor {
    fn from(tag: FixedTag) -> Self {
        Self::Tag(tag)
    }
}

impl From<ClassRef> for Descriptor {
    fn from(class: ClassRef) -> Self {
        Self::type_ref(class)
    }
}

impl From<&str> for Descriptor {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl<T: Into<Descriptor>> From<Vec<T>> for Descriptor {
    fn from(alternatives: Vec<T>) -> Self {
        Self::one_of(alternatives.into_iter().map(Into::into))
    }
}

/// Options for [`Classifier::matches`](crate::Classifier::matches).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// `null` and `undefined` always match.
    pub optional: bool,
}

impl MatchOptions {
    /// Options with `optional` set.
    pub fn optional() -> Self {
        Self { optional: true }
    }
}

/// Broad class of a [`MatchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed something that is not a descriptor.
    Configuration,
    /// A custom predicate failed.
    Predicate,
}

/// Matching errors. Invalid descriptors are caller bugs and are never
/// treated as a plain mismatch.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid type descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("predicate for category '{category}' failed: {source}")]
    Predicate {
        category: String,
        #[source]
        source: BoxError,
    },
}

impl MatchError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidDescriptor(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDescriptor(_) => ErrorKind::Configuration,
            Self::Predicate { .. } => ErrorKind::Predicate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::BuiltinClass;
    use crate::value::FunctionValue;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Descriptor::parse("String"), Descriptor::Tag(FixedTag::String));
        assert_eq!(Descriptor::parse("PUREOBJECT"), Descriptor::Tag(FixedTag::PureObject));
        assert_eq!(Descriptor::parse("null"), Descriptor::Tag(FixedTag::Null));
        assert_eq!(Descriptor::parse("Optional"), Descriptor::LegacyOptional);
        assert_eq!(Descriptor::parse("Point"), Descriptor::Custom("Point".into()));
    }

    #[test]
    fn test_type_ref_normalises_builtins() {
        assert_eq!(
            Descriptor::type_ref(BuiltinClass::Number.into()),
            Descriptor::Tag(FixedTag::Number)
        );
        let date = ClassRef::from(BuiltinClass::Date);
        assert_eq!(Descriptor::type_ref(date.clone()), Descriptor::TypeRef(date));
    }

    #[test]
    fn test_from_value() {
        let d = Descriptor::from_value(&Value::from(vec![
            Value::from("string"),
            Value::from(FunctionValue::builtin(BuiltinClass::Boolean)),
            Value::Null,
        ]))
        .unwrap();
        assert_eq!(
            d,
            Descriptor::OneOf(vec![
                Descriptor::Tag(FixedTag::String),
                Descriptor::Tag(FixedTag::Boolean),
                Descriptor::Tag(FixedTag::Null),
            ])
        );
    }

    #[test]
    fn test_from_value_boxed_string_tag() {
        let boxed = Value::Boxed(BoxedPrimitive::String("Number".into()));
        assert_eq!(
            Descriptor::from_value(&boxed).unwrap(),
            Descriptor::Tag(FixedTag::Number)
        );
        assert!(Descriptor::from_value(&Value::Boxed(BoxedPrimitive::Number(1.0))).is_err());
    }

    #[test]
    fn test_from_value_rejects_non_descriptors() {
        let err = Descriptor::from_value(&Value::from(12345)).unwrap_err();
        assert!(matches!(err, MatchError::InvalidDescriptor(_)));
        assert_eq!(err.kind(), ErrorKind::Configuration);

        assert!(Descriptor::from_value(&Value::Undefined).is_err());
        assert!(Descriptor::from_value(&Value::from(vec![Value::from("string"), Value::from(true)]))
            .is_err());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(
            Descriptor::from(vec!["string", "number"]),
            Descriptor::OneOf(vec![
                Descriptor::Tag(FixedTag::String),
                Descriptor::Tag(FixedTag::Number)
            ])
        );
        assert_eq!(FixedTag::from_name("BuiltIn"), Some(FixedTag::BuiltIn));
        assert_eq!(FixedTag::from_name("nope"), None);
    }
}
