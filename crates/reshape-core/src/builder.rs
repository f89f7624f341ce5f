//! Declarative surface for building definitions
//!
//! Rules are declared through the free constructors [`input`],
//! [`input_multiple`], [`insert`] and [`passthrough`], optionally
//! refined with fluent setters (`via`, `default_value`, ...), and
//! appended to a [`DefinitionBuilder`] in declaration order. `build`
//! validates the declarations and freezes them into an immutable
//! [`Definition`].
//!
//! Copyright (c) 2025 Reshape Team
//! Licensed under the Apache-2.0 license

use crate::definition::Definition;
use crate::helpers::HelperScope;
use crate::path::KeyPath;
use crate::rule::{DefaultValue, Rule, Transform};
use crate::{Error, Result};
use serde_json::Value;
use std::sync::Arc;

/// Declare a single-input mapping from one location to another
pub fn input(from: impl Into<KeyPath>, to: impl Into<KeyPath>) -> InputRule {
    InputRule {
        from: from.into(),
        to: to.into(),
        via: None,
        default: None,
    }
}

/// Declare a multi-input mapping combining several locations into one
pub fn input_multiple<I, P>(from: I, to: impl Into<KeyPath>) -> MultiInputRule
where
    I: IntoIterator<Item = P>,
    P: Into<KeyPath>,
{
    MultiInputRule {
        from: from.into_iter().map(Into::into).collect(),
        to: to.into(),
        via: None,
    }
}

/// Declare a literal value written to the output unconditionally
pub fn insert(key: impl Into<KeyPath>, value: impl Into<Value>) -> Rule {
    Rule::Insert {
        key: key.into(),
        value: value.into(),
    }
}

/// Declare a key copied verbatim from input to output when present
pub fn passthrough(key: impl Into<KeyPath>) -> Rule {
    Rule::Passthrough { key: key.into() }
}

/// A single-input rule under construction
#[derive(Debug, Clone)]
pub struct InputRule {
    from: KeyPath,
    to: KeyPath,
    via: Option<Transform>,
    default: Option<DefaultValue>,
}

impl InputRule {
    /// Apply a transform to the resolved value
    pub fn via(mut self, transform: Transform) -> Self {
        self.via = Some(transform);
        self
    }

    /// Apply a named helper to the resolved value
    pub fn via_helper(self, name: impl Into<String>) -> Self {
        self.via(Transform::named(name))
    }

    /// Apply a closure to the resolved value
    pub fn via_fn<F>(self, f: F) -> Self
    where
        F: Fn(&HelperScope, Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.via(Transform::direct(f))
    }

    /// Write this literal when the source is absent.
    ///
    /// Defaults bypass `via`: there is no extracted value to transform.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(DefaultValue::Literal(value.into()));
        self
    }

    /// Write the producer's result when the source is absent, called
    /// fresh on each conversion
    pub fn default_with<F>(mut self, producer: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.default = Some(DefaultValue::Lazy(Arc::new(producer)));
        self
    }
}

impl From<InputRule> for Rule {
    fn from(rule: InputRule) -> Self {
        Rule::SingleInput {
            from: rule.from,
            to: rule.to,
            via: rule.via,
            default: rule.default,
        }
    }
}

/// A multi-input rule under construction
#[derive(Debug, Clone)]
pub struct MultiInputRule {
    from: Vec<KeyPath>,
    to: KeyPath,
    via: Option<Transform>,
}

impl MultiInputRule {
    /// Apply a transform to the resolved values
    pub fn via(mut self, transform: Transform) -> Self {
        self.via = Some(transform);
        self
    }

    /// Apply a named helper, invoked with the resolved values as
    /// positional arguments
    pub fn via_helper(self, name: impl Into<String>) -> Self {
        self.via(Transform::named(name))
    }

    /// Apply a closure, invoked once with an array of the resolved
    /// values
    pub fn via_fn<F>(self, f: F) -> Self
    where
        F: Fn(&HelperScope, Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.via(Transform::direct(f))
    }
}

impl From<MultiInputRule> for Rule {
    fn from(rule: MultiInputRule) -> Self {
        Rule::MultiInput {
            from: rule.from,
            to: rule.to,
            via: rule.via,
        }
    }
}

/// Builder accumulating rules and helpers for one definition
#[derive(Debug, Default)]
pub struct DefinitionBuilder {
    rules: Vec<Rule>,
    helpers: HelperScope,
}

impl DefinitionBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule, preserving declaration order
    pub fn rule(mut self, rule: impl Into<Rule>) -> Self {
        self.rules.push(rule.into());
        self
    }

    /// Shorthand for a plain single-input mapping
    pub fn input(self, from: impl Into<KeyPath>, to: impl Into<KeyPath>) -> Self {
        self.rule(input(from, to))
    }

    /// Shorthand for a multi-input mapping with the default space-join
    pub fn input_multiple<I, P>(self, from: I, to: impl Into<KeyPath>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<KeyPath>,
    {
        self.rule(input_multiple(from, to))
    }

    /// Shorthand for an unconditional literal insert
    pub fn insert(self, key: impl Into<KeyPath>, value: impl Into<Value>) -> Self {
        self.rule(insert(key, value))
    }

    /// Shorthand for a passthrough of one key
    pub fn passthrough(self, key: impl Into<KeyPath>) -> Self {
        self.rule(passthrough(key))
    }

    /// Register a named helper on this definition's scope
    pub fn helper<F>(mut self, name: impl Into<String>, helper: F) -> Self
    where
        F: Fn(&HelperScope, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.helpers.register(name, helper);
        self
    }

    /// Validate the declarations and freeze them into a definition.
    ///
    /// Rejected here: rules with empty key paths, multi-input rules
    /// with no sources, and `Named` transforms whose identifier is not
    /// registered on this builder.
    pub fn build(self) -> Result<Definition> {
        for (index, rule) in self.rules.iter().enumerate() {
            validate_rule(index, rule, &self.helpers)?;
        }
        Ok(Definition::new(self.rules, self.helpers))
    }
}

fn validate_rule(index: usize, rule: &Rule, helpers: &HelperScope) -> Result<()> {
    if rule.target().is_empty() {
        return Err(configuration(index, "output key path is empty"));
    }
    match rule {
        Rule::SingleInput { from, via, .. } => {
            if from.is_empty() {
                return Err(configuration(index, "input key path is empty"));
            }
            validate_via(index, via.as_ref(), helpers)
        }
        Rule::MultiInput { from, via, .. } => {
            if from.is_empty() {
                return Err(configuration(index, "multi-input rule has no sources"));
            }
            if from.iter().any(KeyPath::is_empty) {
                return Err(configuration(index, "input key path is empty"));
            }
            validate_via(index, via.as_ref(), helpers)
        }
        Rule::Insert { .. } | Rule::Passthrough { .. } => Ok(()),
    }
}

fn validate_via(index: usize, via: Option<&Transform>, helpers: &HelperScope) -> Result<()> {
    if let Some(Transform::Named(name)) = via {
        if !helpers.contains(name) {
            return Err(configuration(
                index,
                &format!("via references unregistered helper '{name}'"),
            ));
        }
    }
    Ok(())
}

fn configuration(index: usize, message: &str) -> Error {
    Error::Configuration {
        message: format!("rule #{index}: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rules_keep_declaration_order() {
        let definition = DefinitionBuilder::new()
            .insert("first", json!(1))
            .passthrough("second")
            .input("third", "third")
            .build()
            .unwrap();

        let targets: Vec<String> = definition
            .rules()
            .iter()
            .map(|rule| rule.target().to_string())
            .collect();
        assert_eq!(targets, ["first", "second", "third"]);
    }

    #[test]
    fn test_build_rejects_unregistered_helper() {
        let err = DefinitionBuilder::new()
            .rule(input("foo", "bar").via_helper("nope"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { message } if message.contains("nope")));
    }

    #[test]
    fn test_build_accepts_registered_helper() {
        let definition = DefinitionBuilder::new()
            .helper("upcase", |_, args| {
                Ok(json!(args[0].as_str().unwrap_or_default().to_uppercase()))
            })
            .rule(input("foo", "bar").via_helper("upcase"))
            .build();
        assert!(definition.is_ok());
    }

    #[test]
    fn test_build_rejects_empty_paths() {
        let empty: Vec<String> = vec![];
        let err = DefinitionBuilder::new()
            .input(empty, "to")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_build_rejects_sourceless_multi_input() {
        let sources: Vec<&str> = vec![];
        let err = DefinitionBuilder::new()
            .input_multiple(sources, "combined")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { message } if message.contains("no sources")));
    }
}
