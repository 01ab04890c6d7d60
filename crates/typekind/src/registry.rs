// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Custom category registry.
//!
//! Callers extend classification with their own category names by
//! registering a predicate per name. Predicates are consulted in
//! registration order; re-registering a name swaps its predicate but keeps
//! its original position.
//!
//! Reads are lock-free: classification loads an immutable snapshot through
//! `ArcSwap`. Writers serialise on a mutex and publish a new snapshot, so a
//! classification running concurrently with a registration sees either the
//! old or the new entry list, never a partial one.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use thiserror::Error;

use crate::category::Category;
use crate::value::Value;

/// Error type returned by fallible predicates.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Test deciding whether a value belongs to a custom category.
///
/// Implemented for any `Fn(&Value) -> Result<bool, BoxError>`; use
/// [`CategoryRegistry::register_fn`] for infallible closures.
pub trait CategoryPredicate: Send + Sync {
    fn test(&self, value: &Value) -> Result<bool, BoxError>;
}

impl<F> CategoryPredicate for F
where
    F: Fn(&Value) -> Result<bool, BoxError> + Send + Sync,
{
    fn test(&self, value: &Value) -> Result<bool, BoxError> {
        self(value)
    }
}

/// Run `predicate` on `value`, turning a panic into an error.
pub(crate) fn run_guarded(
    name: &str,
    predicate: &dyn CategoryPredicate,
    value: &Value,
) -> Result<bool, BoxError> {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| predicate.test(value))) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            log::debug!("[registry] Predicate '{}' panicked: {}", name, message);
            Err(format!("predicate panicked: {}", message).into())
        }
    }
}

/// Registry mutation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("custom category name is empty")]
    EmptyName,

    #[error("'{0}' is a built-in category or descriptor tag and cannot be registered")]
    ReservedName(String),
}

#[derive(Clone)]
pub(crate) struct Entry {
    pub(crate) name: String,
    pub(crate) predicate: Arc<dyn CategoryPredicate>,
}

/// Ordered set of named custom predicates.
pub struct CategoryRegistry {
    entries: ArcSwap<Vec<Entry>>,
    writer: Mutex<()>,
}

impl CategoryRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: ArcSwap::from_pointee(Vec::new()),
            writer: Mutex::new(()),
        }
    }

    /// Register (or replace) the predicate for `name`.
    pub fn register<P>(&self, name: impl Into<String>, predicate: P) -> Result<(), RegistryError>
    where
        P: CategoryPredicate + 'static,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if Category::is_reserved_name(&name) {
            return Err(RegistryError::ReservedName(name));
        }

        let predicate: Arc<dyn CategoryPredicate> = Arc::new(predicate);
        let _guard = self.writer.lock();
        let mut next = Vec::clone(&self.entries.load());
        match next.iter_mut().find(|e| e.name == name) {
            Some(existing) => {
                log::trace!("[registry] replacing predicate for '{}'", name);
                existing.predicate = predicate;
            }
            None => {
                log::trace!("[registry] registering '{}'", name);
                next.push(Entry { name, predicate });
            }
        }
        self.entries.store(Arc::new(next));
        Ok(())
    }

    /// Register an infallible predicate.
    pub fn register_fn<F>(&self, name: impl Into<String>, predicate: F) -> Result<(), RegistryError>
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.register(name, move |value: &Value| -> Result<bool, BoxError> {
            Ok(predicate(value))
        })
    }

    /// Remove `name`. Returns `true` if it was registered.
    pub fn unregister(&self, name: &str) -> bool {
        let _guard = self.writer.lock();
        let current = self.entries.load();
        if !current.iter().any(|e| e.name == name) {
            return false;
        }
        let next: Vec<Entry> = current.iter().filter(|e| e.name != name).cloned().collect();
        self.entries.store(Arc::new(next));
        log::trace!("[registry] unregistered '{}'", name);
        true
    }

    /// Check if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.load().iter().any(|e| e.name == name)
    }

    /// Registered names in consultation order.
    pub fn names(&self) -> Vec<String> {
        self.entries.load().iter().map(|e| e.name.clone()).collect()
    }

    /// Number of registered categories.
    pub fn len(&self) -> usize {
        self.entries.load().len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.load().is_empty()
    }

    /// Current entry list.
    pub(crate) fn snapshot(&self) -> Arc<Vec<Entry>> {
        self.entries.load_full()
    }

    /// Predicate registered under `name`.
    pub(crate) fn find(&self, name: &str) -> Option<Arc<dyn CategoryPredicate>> {
        self.entries
            .load()
            .iter()
            .find(|e| e.name == name)
            .map(|e| Arc::clone(&e.predicate))
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CategoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryRegistry")
            .field("names", &self.names())
            .finish()
    }
}
