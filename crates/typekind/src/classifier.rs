// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Category resolution and descriptor matching.

use std::sync::Arc;

use crate::category::Category;
use crate::class::instance_of;
use crate::deprecation;
use crate::descriptor::{Descriptor, MatchError, MatchOptions};
use crate::predicates::{
    is_alien, is_array, is_boolean, is_function, is_number, is_object, is_string, is_undefined,
};
use crate::registry::{run_guarded, CategoryRegistry};
use crate::value::Value;

/// Value classifier bound to a custom category registry.
///
/// Cloning is cheap and clones share the registry.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    registry: Arc<CategoryRegistry>,
}

impl Classifier {
    /// Classifier with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier over an existing (possibly shared) registry.
    pub fn with_registry(registry: Arc<CategoryRegistry>) -> Self {
        Self { registry }
    }

    /// Custom category registry.
    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Shared handle to the registry.
    pub fn shared_registry(&self) -> Arc<CategoryRegistry> {
        Arc::clone(&self.registry)
    }

    /// Category of `value`.
    ///
    /// Fixed categories are checked first (array, function, string, number,
    /// boolean, alien), then custom categories in registration order, then
    /// undefined and object. Never fails: a custom predicate that errors or
    /// panics yields [`Category::Unknown`].
    pub fn classify(&self, value: &Value) -> Category {
        match self.try_classify(value) {
            Ok(category) => category,
            Err(err) => {
                log::debug!("[classify] {}; falling back to unknown", err);
                Category::Unknown
            }
        }
    }

    fn try_classify(&self, value: &Value) -> Result<Category, MatchError> {
        if is_array(value) {
            return Ok(Category::Array);
        }
        if is_function(value) {
            return Ok(Category::Function);
        }
        if is_string(value) {
            return Ok(Category::String);
        }
        if is_number(value) {
            return Ok(Category::Number);
        }
        if is_boolean(value) {
            return Ok(Category::Boolean);
        }
        if is_alien(value) {
            return Ok(Category::Alien);
        }

        for entry in self.registry.snapshot().iter() {
            let hit = run_guarded(&entry.name, entry.predicate.as_ref(), value).map_err(
                |source| MatchError::Predicate {
                    category: entry.name.clone(),
                    source,
                },
            )?;
            if hit {
                return Ok(Category::Custom(entry.name.clone()));
            }
        }

        if is_undefined(value) {
            return Ok(Category::Undefined);
        }
        if is_object(value) {
            return Ok(Category::Object);
        }
        Ok(Category::Unknown)
    }

    /// Legacy name of [`classify`](Self::classify).
    #[deprecated(note = "use Classifier::classify")]
    pub fn what_am_i(&self, value: &Value) -> Category {
        deprecation::deprecated("Classifier::what_am_i", "use Classifier::classify instead");
        self.classify(value)
    }

    /// Check `value` against `descriptor`.
    ///
    /// With `options.optional`, `null` and `undefined` match before the
    /// descriptor is even looked at. Lists match if any element matches;
    /// an empty list matches nothing. A custom predicate that errors or
    /// panics is reported as [`MatchError::Predicate`].
    ///
    /// ```
    /// use typekind::{Classifier, Descriptor, MatchOptions, Value};
    ///
    /// let classifier = Classifier::new();
    /// let either = Descriptor::from(vec!["string", "number"]);
    /// assert!(classifier.matches(&Value::from(12345), &either, MatchOptions::default()).unwrap());
    /// assert!(!classifier.matches(&Value::Null, &"object".into(), MatchOptions::default()).unwrap());
    /// assert!(classifier.matches(&Value::Null, &"object".into(), MatchOptions::optional()).unwrap());
    /// ```
    pub fn matches(
        &self,
        value: &Value,
        descriptor: &Descriptor,
        options: MatchOptions,
    ) -> Result<bool, MatchError> {
        if options.optional && value.is_nullish() {
            return Ok(true);
        }
        self.match_descriptor(value, descriptor)
    }

    /// Check `value` against a descriptor given as a script value.
    ///
    /// List elements are converted lazily, so an invalid element only fails
    /// the call if no earlier alternative matched.
    pub fn matches_value(
        &self,
        value: &Value,
        descriptor: &Value,
        options: MatchOptions,
    ) -> Result<bool, MatchError> {
        if options.optional && value.is_nullish() {
            return Ok(true);
        }
        self.match_dynamic(value, descriptor)
    }

    fn match_dynamic(&self, value: &Value, descriptor: &Value) -> Result<bool, MatchError> {
        match descriptor {
            Value::Array(alternatives) => {
                for alternative in alternatives {
                    if self.match_dynamic(value, alternative)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            single => self.match_descriptor(value, &Descriptor::from_value(single)?),
        }
    }

    fn match_descriptor(&self, value: &Value, descriptor: &Descriptor) -> Result<bool, MatchError> {
        match descriptor {
            Descriptor::OneOf(alternatives) => {
                for alternative in alternatives {
                    if self.match_descriptor(value, alternative)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Descriptor::Tag(tag) => Ok(tag.test(value)),
            Descriptor::Custom(name) => {
                let predicate = self.registry.find(name).ok_or_else(|| {
                    MatchError::invalid(format!("'{}' is not a registered category", name))
                })?;
                run_guarded(name, predicate.as_ref(), value).map_err(|source| {
                    MatchError::Predicate {
                        category: name.clone(),
                        source,
                    }
                })
            }
            Descriptor::TypeRef(class) => {
                match class.as_builtin().and_then(|b| b.as_fixed_tag()) {
                    Some(tag) => Ok(tag.test(value)),
                    None => Ok(instance_of(value, class)),
                }
            }
            Descriptor::LegacyOptional => {
                deprecation::deprecated(
                    "\"optional\" as a type descriptor",
                    "pass MatchOptions::optional() instead",
                );
                Ok(value.is_nullish())
            }
        }
    }
}
