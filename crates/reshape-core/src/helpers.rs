//! Helper scope: the named-callable lookup table for a definition
//!
//! The helper scope is an explicit table built once per definition:
//! identifier to callable, resolved by name when a `Named` transform
//! dispatches. Helpers receive the scope itself
//! as their first argument so one helper can call another, which gives
//! `Named` and `Direct` transforms the same view of auxiliary behavior.
//!
//! Copyright (c) 2025 Reshape Team
//! Licensed under the Apache-2.0 license

use crate::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A named callable invocable with splatted positional arguments
pub type HelperFn = Arc<dyn Fn(&HelperScope, &[Value]) -> Result<Value> + Send + Sync>;

/// Lookup table from helper identifiers to callables, owned by one
/// definition and never shared with another
#[derive(Clone, Default)]
pub struct HelperScope {
    helpers: HashMap<String, HelperFn>,
}

impl HelperScope {
    /// Create an empty helper scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callable under a name, replacing any previous one
    pub fn register<F>(&mut self, name: impl Into<String>, helper: F)
    where
        F: Fn(&HelperScope, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.helpers.insert(name.into(), Arc::new(helper));
    }

    /// Look up a helper by name
    pub fn resolve(&self, name: &str) -> Option<&HelperFn> {
        self.helpers.get(name)
    }

    /// Whether a helper with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    /// Invoke a helper by name with positional arguments.
    ///
    /// This is the entry point for transforms that need auxiliary
    /// behavior; an unregistered name is a configuration mistake and
    /// fails fast with [`Error::UnknownHelper`].
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let helper = self.resolve(name).ok_or_else(|| Error::UnknownHelper {
            name: name.to_string(),
        })?;
        helper(self, args)
    }
}

impl fmt::Debug for HelperScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.helpers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("HelperScope").field("helpers", &names).finish()
    }
}
