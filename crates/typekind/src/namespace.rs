// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dotted-path lookup in a global namespace object.
//!
//! ```
//! use typekind::{Namespace, ObjectValue, Value};
//!
//! let b = ObjectValue::new().with("c", 5);
//! let a = ObjectValue::new().with("b", b);
//! let ns = Namespace::new(ObjectValue::new().with("a", a)).with_alias("window");
//!
//! assert_eq!(ns.resolve_path("a.b.c"), Some(&Value::from(5)));
//! assert_eq!(ns.resolve_path("window.a.b.c"), Some(&Value::from(5)));
//! assert!(ns.resolve_path("a.x.c").is_none());
//! assert!(!ns.path_exists("window"));
//! ```

use crate::value::{ObjectValue, Value};

/// Root object plus the names under which it refers to itself
/// (`window`, `globalThis`, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Namespace {
    root: ObjectValue,
    aliases: Vec<String>,
}

/// Position reached while walking a path.
#[derive(Clone, Copy)]
enum Slot<'a> {
    Root,
    Value(&'a Value),
}

impl Slot<'_> {
    fn is_truthy(&self) -> bool {
        match self {
            Slot::Root => true,
            Slot::Value(v) => v.is_truthy(),
        }
    }
}

impl Namespace {
    pub fn new(root: ObjectValue) -> Self {
        Self {
            root,
            aliases: Vec::new(),
        }
    }

    /// Add a property name that resolves to the root itself.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn root(&self) -> &ObjectValue {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut ObjectValue {
        &mut self.root
    }

    /// Value at `path`, or `None` if a segment is missing, an intermediate
    /// segment is falsy, or the path leads back to the root.
    pub fn resolve_path(&self, path: &str) -> Option<&Value> {
        match self.walk(path)? {
            Slot::Value(value) => Some(value),
            Slot::Root => None,
        }
    }

    /// Check if `path` resolves to a truthy value other than the root.
    pub fn path_exists(&self, path: &str) -> bool {
        matches!(self.walk(path), Some(Slot::Value(value)) if value.is_truthy())
    }

    fn walk(&self, path: &str) -> Option<Slot<'_>> {
        let mut current = Slot::Root;
        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            let next = match current {
                Slot::Root if self.aliases.iter().any(|a| a == segment) => Slot::Root,
                Slot::Root => Slot::Value(self.root.get(segment)?),
                Slot::Value(value) => Slot::Value(value.property(segment)?),
            };
            // Stop at a falsy intermediate; never look through it.
            if segments.peek().is_some() && !next.is_truthy() {
                return None;
            }
            current = next;
        }
        Some(current)
    }
}

impl From<ObjectValue> for Namespace {
    fn from(root: ObjectValue) -> Self {
        Self::new(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Namespace {
        let c = ObjectValue::new().with("c", 5).with("zero", 0).with("empty", "");
        let a = ObjectValue::new().with("b", c).with("off", false);
        Namespace::new(ObjectValue::new().with("a", a)).with_alias("globalThis")
    }

    #[test]
    fn test_resolve_present_path() {
        let ns = sample();
        assert_eq!(ns.resolve_path("a.b.c"), Some(&Value::from(5)));
        assert!(ns.path_exists("a.b.c"));
        assert!(ns.path_exists("a"));
    }

    #[test]
    fn test_missing_segment() {
        let ns = sample();
        assert!(ns.resolve_path("a.x.c").is_none());
        assert!(!ns.path_exists("a.x.c"));
        assert!(ns.resolve_path("nope").is_none());
        assert!(ns.resolve_path("").is_none());
    }

    #[test]
    fn test_falsy_intermediate_stops_walk() {
        let ns = sample();
        assert!(ns.resolve_path("a.off.anything").is_none());
        assert!(ns.resolve_path("a.b.zero.x").is_none());
    }

    #[test]
    fn test_falsy_final_value() {
        let ns = sample();
        assert_eq!(ns.resolve_path("a.b.zero"), Some(&Value::from(0)));
        assert!(!ns.path_exists("a.b.zero"));
        assert!(!ns.path_exists("a.b.empty"));
    }

    #[test]
    fn test_root_alias() {
        let ns = sample();
        assert_eq!(ns.resolve_path("globalThis.a.b.c"), Some(&Value::from(5)));
        assert_eq!(
            ns.resolve_path("globalThis.globalThis.a.b.c"),
            Some(&Value::from(5))
        );
        assert!(ns.resolve_path("globalThis").is_none());
        assert!(!ns.path_exists("globalThis"));
        // Aliases only apply at the root.
        assert!(ns.resolve_path("a.globalThis").is_none());
    }

    #[test]
    fn test_non_object_intermediate() {
        let mut ns = sample();
        ns.root_mut().set("s", "text");
        assert!(ns.resolve_path("s.length").is_none());
    }
}
