// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime type classification for dynamically-typed script values.
//!
//! Given an arbitrary [`Value`], find its category (array, function,
//! string, number, boolean, alien, undefined, object, or a custom category
//! registered by the caller), or check it against a type [`Descriptor`].
//!
//! # Features
//!
//! - **Classifier**: total category resolution, never fails
//! - **Custom categories**: ordered registry of named predicates, lock-free reads
//! - **Descriptor matching**: tags, constructor references and alternatives,
//!   with an `optional` escape hatch for `null`/`undefined`
//! - **Namespace lookup**: dotted paths against a global object
//! - **Configuration**: declarative custom categories from TOML
//!
//! # Example
//!
//! ```rust
//! use typekind::{Category, Classifier, Descriptor, MatchOptions, ObjectValue, Value};
//!
//! let classifier = Classifier::new();
//! classifier
//!     .registry()
//!     .register_fn("point", |v| v.property("x").is_some() && v.property("y").is_some())
//!     .unwrap();
//!
//! let point = Value::from(ObjectValue::new().with("x", 1).with("y", 2));
//! assert_eq!(classifier.classify(&point), Category::Custom("point".into()));
//! assert_eq!(classifier.classify(&Value::from("42")), Category::String);
//!
//! let descriptor = Descriptor::from(vec!["point", "null"]);
//! assert!(classifier.matches(&point, &descriptor, MatchOptions::default()).unwrap());
//! ```

pub mod category;
pub mod class;
pub mod classifier;
pub mod config;
pub mod convert;
pub mod deprecation;
pub mod descriptor;
pub mod namespace;
pub mod predicates;
pub mod registry;
pub mod value;

pub use category::Category;
pub use class::{instance_of, BuiltinClass, ClassRef};
pub use classifier::Classifier;
pub use config::{CategoryRule, ClassifierConfig, ConfigError};
pub use convert::ConvertError;
pub use deprecation::DeprecationNotice;
pub use descriptor::{Descriptor, ErrorKind, FixedTag, MatchError, MatchOptions};
pub use namespace::Namespace;
pub use predicates::{
    is_alien, is_array, is_boolean, is_built_in, is_function, is_null, is_number,
    is_numeric_like, is_object, is_pure_object, is_string, is_undefined,
};
pub use registry::{BoxError, CategoryPredicate, CategoryRegistry, RegistryError};
pub use value::{BoxedPrimitive, FunctionValue, HostObject, ObjectValue, Value};
