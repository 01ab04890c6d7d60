// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Classifier configuration.
//!
//! Custom categories can be registered in code or declared in a TOML file:
//!
//! ```toml
//! [[category]]
//! name = "point"
//! kind = "pureobject"
//! required_keys = ["x", "y"]
//!
//! [[category]]
//! name = "shape"
//! class = "Shape"
//! ```
//!
//! Rules are registered in file order, which is the order the classifier
//! consults them in.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::Category;
use crate::classifier::Classifier;
use crate::descriptor::FixedTag;
use crate::registry::{BoxError, CategoryPredicate, CategoryRegistry, RegistryError};
use crate::value::Value;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Classifier configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Declarative custom categories.
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryRule>,
}

/// A custom category declared in configuration. A value belongs to it when
/// every given constraint holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Category name.
    pub name: String,

    /// Descriptor tag the value must satisfy (e.g. `"pureobject"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Properties the value must carry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_keys: Vec<String>,

    /// Name of the value's constructing class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl ClassifierConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Example configuration for `gen-config`.
    pub fn example() -> Self {
        Self {
            categories: vec![
                CategoryRule {
                    name: "point".to_string(),
                    kind: Some("pureobject".to_string()),
                    required_keys: vec!["x".to_string(), "y".to_string()],
                    class: None,
                },
                CategoryRule {
                    name: "date".to_string(),
                    kind: None,
                    required_keys: Vec::new(),
                    class: Some("Date".to_string()),
                },
            ],
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for rule in &self.categories {
            if rule.name.is_empty() {
                return Err(ConfigError::Invalid("category name is empty".to_string()));
            }
            if Category::is_reserved_name(&rule.name) {
                return Err(ConfigError::Invalid(format!(
                    "category '{}' uses a reserved name",
                    rule.name
                )));
            }
            if !seen.insert(rule.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "category '{}' is declared twice",
                    rule.name
                )));
            }
            if rule.kind.is_none() && rule.required_keys.is_empty() && rule.class.is_none() {
                return Err(ConfigError::Invalid(format!(
                    "category '{}' has no constraints and would match every value",
                    rule.name
                )));
            }
            rule.kind_tag()?;
        }
        Ok(())
    }

    /// Register every rule into `registry`, in order.
    pub fn apply(&self, registry: &CategoryRegistry) -> Result<(), ConfigError> {
        self.validate()?;
        for rule in &self.categories {
            registry.register(rule.name.clone(), RulePredicate::try_from(rule)?)?;
        }
        Ok(())
    }

    /// Classifier with every rule registered.
    pub fn build_classifier(&self) -> Result<Classifier, ConfigError> {
        let classifier = Classifier::new();
        self.apply(classifier.registry())?;
        Ok(classifier)
    }
}

impl CategoryRule {
    fn kind_tag(&self) -> Result<Option<FixedTag>, ConfigError> {
        match &self.kind {
            None => Ok(None),
            Some(kind) => FixedTag::from_name(kind).map(Some).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "category '{}': unknown kind '{}'",
                    self.name, kind
                ))
            }),
        }
    }
}

/// Predicate compiled from a [`CategoryRule`].
#[derive(Debug, Clone)]
pub struct RulePredicate {
    kind: Option<FixedTag>,
    required_keys: Vec<String>,
    class: Option<String>,
}

impl TryFrom<&CategoryRule> for RulePredicate {
    type Error = ConfigError;

    fn try_from(rule: &CategoryRule) -> Result<Self, Self::Error> {
        Ok(Self {
            kind: rule.kind_tag()?,
            required_keys: rule.required_keys.clone(),
            class: rule.class.clone(),
        })
    }
}

impl CategoryPredicate for RulePredicate {
    fn test(&self, value: &Value) -> Result<bool, BoxError> {
        if let Some(tag) = self.kind {
            if !tag.test(value) {
                return Ok(false);
            }
        }
        if let Some(class) = &self.class {
            if value.class().map_or(true, |c| c.name() != class.as_str()) {
                return Ok(false);
            }
        }
        if !self.required_keys.is_empty() {
            let Some(obj) = value.as_object() else {
                return Ok(false);
            };
            if !self.required_keys.iter().all(|k| obj.contains(k)) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::BuiltinClass;
    use crate::value::ObjectValue;

    #[test]
    fn test_parse_rules() {
        let config = ClassifierConfig::from_toml_str(
            r#"
            [[category]]
            name = "point"
            kind = "PureObject"
            required_keys = ["x", "y"]
            "#,
        )
        .unwrap();
        assert_eq!(config.categories.len(), 1);
        assert_eq!(config.categories[0].required_keys, vec!["x", "y"]);
    }

    #[test]
    fn test_empty_config() {
        let config = ClassifierConfig::from_toml_str("").unwrap();
        assert!(config.categories.is_empty());
    }

    #[test]
    fn test_validation_errors() {
        let reserved = r#"
            [[category]]
            name = "object"
            kind = "object"
        "#;
        assert!(matches!(
            ClassifierConfig::from_toml_str(reserved),
            Err(ConfigError::Invalid(_))
        ));

        let unconstrained = r#"
            [[category]]
            name = "everything"
        "#;
        assert!(ClassifierConfig::from_toml_str(unconstrained).is_err());

        let bad_kind = r#"
            [[category]]
            name = "thing"
            kind = "integer"
        "#;
        assert!(ClassifierConfig::from_toml_str(bad_kind).is_err());

        let duplicate = r#"
            [[category]]
            name = "thing"
            kind = "string"

            [[category]]
            name = "thing"
            kind = "number"
        "#;
        assert!(ClassifierConfig::from_toml_str(duplicate).is_err());
    }

    #[test]
    fn test_rule_predicate() {
        let rule = CategoryRule {
            name: "point".into(),
            kind: Some("pureobject".into()),
            required_keys: vec!["x".into(), "y".into()],
            class: None,
        };
        let predicate = RulePredicate::try_from(&rule).unwrap();

        let point = Value::from(ObjectValue::new().with("x", 1).with("y", 2));
        let partial = Value::from(ObjectValue::new().with("x", 1));
        assert!(predicate.test(&point).unwrap());
        assert!(!predicate.test(&partial).unwrap());
        assert!(!predicate.test(&Value::from(1)).unwrap());
    }

    #[test]
    fn test_class_rule() {
        let rule = CategoryRule {
            name: "date".into(),
            kind: None,
            required_keys: Vec::new(),
            class: Some("Date".into()),
        };
        let predicate = RulePredicate::try_from(&rule).unwrap();
        let date = Value::from(ObjectValue::with_class(BuiltinClass::Date.into()));
        assert!(predicate.test(&date).unwrap());
        assert!(!predicate.test(&Value::from(ObjectValue::new())).unwrap());
        assert!(!predicate.test(&Value::Null).unwrap());
    }

    #[test]
    fn test_example_round_trips() {
        let example = ClassifierConfig::example();
        let text = example.to_toml_string().unwrap();
        assert_eq!(ClassifierConfig::from_toml_str(&text).unwrap(), example);
    }

    #[test]
    fn test_build_classifier() {
        let classifier = ClassifierConfig::example().build_classifier().unwrap();
        assert_eq!(classifier.registry().names(), vec!["point", "date"]);
    }
}
