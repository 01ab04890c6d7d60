// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! typekind CLI
//!
//! Classify JSON values and check them against type descriptors.
//!
//! # Usage
//!
//! ```bash
//! # Category of a value
//! typekind classify '[1, 2]'
//!
//! # Descriptor match (comma-separated alternatives)
//! typekind match '12345' string,number
//! typekind match 'null' object --optional
//!
//! # Custom categories from a config file
//! typekind --config categories.toml classify '{"x": 1, "y": 2}'
//!
//! # Dotted path lookup in a JSON namespace
//! typekind resolve a.b.c --namespace globals.json
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use typekind::{is_numeric_like, Classifier, ClassifierConfig, Descriptor, MatchOptions, Namespace, Value};

/// Runtime type classification for script values
#[derive(Parser, Debug)]
#[command(name = "typekind")]
#[command(about = "Classify JSON values and check them against type descriptors")]
#[command(version)]
struct Args {
    /// Configuration file declaring custom categories
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the category of a JSON value
    Classify {
        /// JSON value (use - for stdin)
        value: String,
    },

    /// Check a JSON value against a descriptor
    Match {
        /// JSON value (use - for stdin)
        value: String,

        /// Comma-separated descriptor tags or custom category names
        descriptor: String,

        /// Treat null as always matching
        #[arg(long)]
        optional: bool,
    },

    /// Check whether a JSON value is numeric-like
    Numeric {
        /// JSON value (use - for stdin)
        value: String,
    },

    /// Resolve a dotted path in a JSON namespace document
    Resolve {
        /// Dotted path (e.g. a.b.c)
        path: String,

        /// JSON file used as the global namespace
        #[arg(short, long)]
        namespace: PathBuf,

        /// Print whether the path exists instead of its value
        #[arg(long)]
        exists: bool,
    },

    /// Generate example configuration file
    GenConfig {
        /// Output file path
        #[arg(short, long, default_value = "typekind.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let classifier = build_classifier(args.config.as_deref())?;

    match args.command {
        Commands::Classify { value } => {
            let value = parse_value(&value)?;
            println!("{}", classifier.classify(&value));
        }
        Commands::Match {
            value,
            descriptor,
            optional,
        } => {
            let value = parse_value(&value)?;
            let descriptor = parse_descriptor(&descriptor);
            tracing::debug!("Matching against {:?}", descriptor);
            let matched = classifier
                .matches(&value, &descriptor, MatchOptions { optional })
                .context("Descriptor check failed")?;
            println!("{}", matched);
        }
        Commands::Numeric { value } => {
            let value = parse_value(&value)?;
            println!("{}", is_numeric_like(&value));
        }
        Commands::Resolve {
            path,
            namespace,
            exists,
        } => {
            let namespace = load_namespace(&namespace)?;
            if exists {
                println!("{}", namespace.path_exists(&path));
            } else {
                let resolved = namespace
                    .resolve_path(&path)
                    .map_or(serde_json::Value::Null, serde_json::Value::from);
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            }
        }
        Commands::GenConfig { output } => {
            let content = ClassifierConfig::example().to_toml_string()?;
            std::fs::write(&output, content)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Example configuration written to {}", output.display());
        }
    }

    Ok(())
}

fn build_classifier(config: Option<&Path>) -> Result<Classifier> {
    match config {
        Some(path) => {
            let config = ClassifierConfig::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            tracing::info!(
                "Loaded {} custom categories from {}",
                config.categories.len(),
                path.display()
            );
            Ok(config.build_classifier()?)
        }
        None => Ok(Classifier::new()),
    }
}

fn parse_value(input: &str) -> Result<Value> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        input.to_string()
    };
    let json: serde_json::Value = serde_json::from_str(&text).context("Invalid JSON value")?;
    Ok(Value::try_from(json)?)
}

fn parse_descriptor(text: &str) -> Descriptor {
    let mut tags: Vec<Descriptor> = text
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(Descriptor::parse)
        .collect();
    if tags.len() == 1 {
        tags.remove(0)
    } else {
        Descriptor::OneOf(tags)
    }
}

fn load_namespace(path: &Path) -> Result<Namespace> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let json: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;
    Ok(Namespace::try_from(json)?.with_alias("globalThis"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use typekind::FixedTag;

    #[test]
    fn test_parse_descriptor() {
        assert_eq!(parse_descriptor("string"), Descriptor::Tag(FixedTag::String));
        assert_eq!(
            parse_descriptor("string, number"),
            Descriptor::OneOf(vec![
                Descriptor::Tag(FixedTag::String),
                Descriptor::Tag(FixedTag::Number),
            ])
        );
        assert_eq!(parse_descriptor(""), Descriptor::OneOf(vec![]));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("42").unwrap(), Value::Number(42.0));
        assert!(parse_value("{not json").is_err());
    }

    #[test]
    fn test_load_namespace() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"a": {"b": {"c": 5}}}"#).unwrap();

        let ns = load_namespace(file.path()).unwrap();
        assert_eq!(ns.resolve_path("a.b.c"), Some(&Value::Number(5.0)));
        assert!(ns.path_exists("globalThis.a.b"));
    }

    #[test]
    fn test_build_classifier_without_config() {
        let classifier = build_classifier(None).unwrap();
        assert!(classifier.registry().is_empty());
    }
}
