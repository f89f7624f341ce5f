//! Rule data model: the tagged-variant unit of declaration
//!
//! A definition is an ordered sequence of these rules. `Transform` and
//! `DefaultValue` carry user callables, so their `Debug` impls are
//! written by hand.
//!
//! Copyright (c) 2025 Reshape Team
//! Licensed under the Apache-2.0 license

use crate::helpers::HelperScope;
use crate::path::KeyPath;
use crate::Result;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A transformation closure invoked with the resolved value as its one
/// argument, plus the definition's helper scope
pub type DirectFn = Arc<dyn Fn(&HelperScope, Value) -> Result<Value> + Send + Sync>;

/// A lazily evaluated default, called fresh on each conversion
pub type DefaultFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// Optional post-processing applied to resolved value(s) before writing
#[derive(Clone)]
pub enum Transform {
    /// Closure receiving the resolved value(s) literally as a single
    /// argument: the value itself for single-input rules, an array of
    /// the values for multi-input rules
    Direct(DirectFn),
    /// Identifier resolved against the definition's helper scope and
    /// invoked with the resolved value(s) splatted as positional
    /// arguments
    Named(String),
}

impl Transform {
    /// A direct transform from a closure
    pub fn direct<F>(f: F) -> Self
    where
        F: Fn(&HelperScope, Value) -> Result<Value> + Send + Sync + 'static,
    {
        Transform::Direct(Arc::new(f))
    }

    /// A named transform resolved through the helper scope
    pub fn named(name: impl Into<String>) -> Self {
        Transform::Named(name.into())
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Direct(_) => f.write_str("Direct(<fn>)"),
            Transform::Named(name) => write!(f, "Named({name:?})"),
        }
    }
}

/// Value written when a single-input source is absent.
///
/// Defaults bypass `via`: there is no extracted source value to
/// transform.
#[derive(Clone)]
pub enum DefaultValue {
    /// A literal value written as-is
    Literal(Value),
    /// A zero-argument producer, called fresh each conversion
    Lazy(DefaultFn),
}

impl DefaultValue {
    /// Materialize the default for one conversion
    pub fn resolve(&self) -> Value {
        match self {
            DefaultValue::Literal(value) => value.clone(),
            DefaultValue::Lazy(producer) => producer(),
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Literal(value) => write!(f, "Literal({value})"),
            DefaultValue::Lazy(_) => f.write_str("Lazy(<fn>)"),
        }
    }
}

/// One declarative instruction within a definition
#[derive(Debug, Clone)]
pub enum Rule {
    /// Derive one output location from one input location
    SingleInput {
        from: KeyPath,
        to: KeyPath,
        via: Option<Transform>,
        default: Option<DefaultValue>,
    },
    /// Derive one output location from several input locations,
    /// all-or-nothing
    MultiInput {
        from: Vec<KeyPath>,
        to: KeyPath,
        via: Option<Transform>,
    },
    /// Write a literal value unconditionally
    Insert { key: KeyPath, value: Value },
    /// Copy a key from input to output when present
    Passthrough { key: KeyPath },
}

impl Rule {
    /// The output location this rule writes to
    pub fn target(&self) -> &KeyPath {
        match self {
            Rule::SingleInput { to, .. } => to,
            Rule::MultiInput { to, .. } => to,
            Rule::Insert { key, .. } => key,
            Rule::Passthrough { key } => key,
        }
    }
}
