// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Category names produced by the classifier.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::descriptor::FixedTag;

/// Canonical type name of a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Array,
    Function,
    String,
    Number,
    Boolean,
    /// Host-provided object. Only produced when an embedder hands
    /// [`Value::Alien`](crate::Value::Alien) values in.
    Alien,
    Undefined,
    Object,
    /// Fallback when nothing matched or a custom predicate failed.
    Unknown,
    /// Name contributed by the custom registry.
    Custom(String),
}

impl Category {
    /// Names of the fixed categories.
    pub const FIXED_NAMES: [&'static str; 9] = [
        "array",
        "function",
        "string",
        "number",
        "boolean",
        "alien",
        "undefined",
        "object",
        "unknown",
    ];

    /// Canonical lower-case name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Array => "array",
            Self::Function => "function",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Alien => "alien",
            Self::Undefined => "undefined",
            Self::Object => "object",
            Self::Unknown => "unknown",
            Self::Custom(name) => name,
        }
    }

    /// Check if this category came from the custom registry.
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Check if `name` may not be used for a custom category.
    ///
    /// Besides the fixed category names this covers every descriptor tag,
    /// since a tag always wins over a custom name of the same spelling.
    /// Comparison is case-insensitive, like descriptor tags.
    pub fn is_reserved_name(name: &str) -> bool {
        let lower = name.to_ascii_lowercase();
        Self::FIXED_NAMES.contains(&lower.as_str())
            || FixedTag::from_name(&lower).is_some()
            || lower == "optional"
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Category::Number.to_string(), "number");
        assert_eq!(Category::Custom("point".into()).as_str(), "point");
        assert!(Category::Custom("point".into()).is_custom());
        assert!(!Category::Unknown.is_custom());
    }

    #[test]
    fn test_reserved_names() {
        assert!(Category::is_reserved_name("object"));
        assert!(Category::is_reserved_name("Unknown"));
        assert!(Category::is_reserved_name("numeric"));
        assert!(Category::is_reserved_name("PureObject"));
        assert!(Category::is_reserved_name("optional"));
        assert!(!Category::is_reserved_name("point"));
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&Category::Custom("point".into())).unwrap();
        assert_eq!(json, "\"point\"");
        let json = serde_json::to_string(&Category::Alien).unwrap();
        assert_eq!(json, "\"alien\"");
    }
}
