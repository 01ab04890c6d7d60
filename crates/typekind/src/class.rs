// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Constructor handles and `instanceof` semantics.
//!
//! A [`ClassRef`] is what a script would call a constructor: either one of
//! the language's own built-in classes, or a class declared by script code.
//! User classes compare by identity, so two declarations with the same name
//! are still distinct types.

use std::fmt;
use std::sync::Arc;

use crate::descriptor::FixedTag;
use crate::value::Value;

/// Classes provided by the language itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinClass {
    Object,
    Array,
    Function,
    String,
    Number,
    Boolean,
    Error,
    Date,
    RegExp,
}

impl BuiltinClass {
    /// Constructor name as seen by scripts.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Object => "Object",
            Self::Array => "Array",
            Self::Function => "Function",
            Self::String => "String",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Error => "Error",
            Self::Date => "Date",
            Self::RegExp => "RegExp",
        }
    }

    /// Every built-in except `Object` derives directly from `Object`.
    pub fn parent(&self) -> Option<BuiltinClass> {
        match self {
            Self::Object => None,
            _ => Some(Self::Object),
        }
    }

    /// Fixed tag a built-in constructor stands for when used as a descriptor.
    ///
    /// `Number` used as a type matches primitive numbers too, exactly as the
    /// `"number"` tag does, so these constructors are not plain `instanceof`
    /// checks.
    pub fn as_fixed_tag(&self) -> Option<FixedTag> {
        match self {
            Self::Object => Some(FixedTag::Object),
            Self::Array => Some(FixedTag::Array),
            Self::Function => Some(FixedTag::Function),
            Self::String => Some(FixedTag::String),
            Self::Number => Some(FixedTag::Number),
            Self::Boolean => Some(FixedTag::Boolean),
            Self::Error | Self::Date | Self::RegExp => None,
        }
    }
}

/// A class declared by script code.
#[derive(Debug)]
pub struct UserClass {
    name: String,
    parent: ClassRef,
}

/// Handle to a constructor.
#[derive(Debug, Clone)]
pub enum ClassRef {
    Builtin(BuiltinClass),
    User(Arc<UserClass>),
}

impl ClassRef {
    /// The base `Object` class.
    pub fn object() -> Self {
        Self::Builtin(BuiltinClass::Object)
    }

    /// Declare a new class deriving from `Object`.
    pub fn declare(name: impl Into<String>) -> Self {
        Self::extend(name, &Self::object())
    }

    /// Declare a new class deriving from `parent`.
    pub fn extend(name: impl Into<String>, parent: &ClassRef) -> Self {
        Self::User(Arc::new(UserClass {
            name: name.into(),
            parent: parent.clone(),
        }))
    }

    /// Constructor name.
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(b) => b.name(),
            Self::User(u) => &u.name,
        }
    }

    /// Direct parent class, `None` only for `Object`.
    pub fn parent(&self) -> Option<ClassRef> {
        match self {
            Self::Builtin(b) => b.parent().map(Self::Builtin),
            Self::User(u) => Some(u.parent.clone()),
        }
    }

    /// Built-in class, if this is one.
    pub fn as_builtin(&self) -> Option<BuiltinClass> {
        match self {
            Self::Builtin(b) => Some(*b),
            Self::User(_) => None,
        }
    }

    /// Check if this class is exactly the base `Object` class.
    pub fn is_base_object(&self) -> bool {
        matches!(self, Self::Builtin(BuiltinClass::Object))
    }

    /// Check if `self` is `ancestor` or derives from it (reflexive).
    pub fn is_subclass_of(&self, ancestor: &ClassRef) -> bool {
        let mut current = Some(self.clone());
        while let Some(class) = current {
            if &class == ancestor {
                return true;
            }
            current = class.parent();
        }
        false
    }
}

impl PartialEq for ClassRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Builtin(a), Self::Builtin(b)) => a == b,
            (Self::User(a), Self::User(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for ClassRef {}

impl From<BuiltinClass> for ClassRef {
    fn from(b: BuiltinClass) -> Self {
        Self::Builtin(b)
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Script `instanceof`: walks the class chain of `value`.
///
/// Primitives, `undefined`, `null` and host objects are never instances.
pub fn instance_of(value: &Value, class: &ClassRef) -> bool {
    value
        .class()
        .is_some_and(|own| own.is_subclass_of(class))
}
