//! Value combination and transform dispatch
//!
//! Given the resolved value(s) of a rule and its optional `Transform`,
//! produce the value to write. The dispatch branch is explicit on the
//! `Transform` variant, never inferred from argument arity.
//!
//! Copyright (c) 2025 Reshape Team
//! Licensed under the Apache-2.0 license

use crate::helpers::HelperScope;
use crate::rule::Transform;
use crate::{Error, Result};
use serde_json::Value;

/// Resolved input value(s) of one rule, tagged by rule kind
#[derive(Debug, Clone)]
pub(crate) enum Resolved {
    Single(Value),
    Multiple(Vec<Value>),
}

/// Combine resolved value(s) into the output value for a rule.
///
/// - No transform: a single value passes through unchanged; multiple
///   values are rendered as strings and joined with one ASCII space.
/// - `Direct`: the closure is called exactly once with one argument,
///   the value itself or an array of the multi-input values.
/// - `Named`: the helper is resolved by name and invoked with the
///   value(s) splatted as positional arguments. A lone non-array value
///   becomes a one-element argument list, so the same helper accepts
///   either one logical value or pre-split components.
pub(crate) fn combine(
    via: Option<&Transform>,
    helpers: &HelperScope,
    resolved: Resolved,
) -> Result<Value> {
    match (via, resolved) {
        (None, Resolved::Single(value)) => Ok(value),
        (None, Resolved::Multiple(values)) => {
            let joined = values.iter().map(render).collect::<Vec<_>>().join(" ");
            Ok(Value::String(joined))
        }
        (Some(Transform::Direct(f)), Resolved::Single(value)) => f(helpers, value),
        (Some(Transform::Direct(f)), Resolved::Multiple(values)) => {
            f(helpers, Value::Array(values))
        }
        (Some(Transform::Named(name)), resolved) => {
            let helper = helpers.resolve(name).ok_or_else(|| Error::UnknownHelper {
                name: name.clone(),
            })?;
            let args = splat(resolved);
            helper(helpers, &args)
        }
    }
}

/// Splat resolved value(s) into positional arguments for a named helper
fn splat(resolved: Resolved) -> Vec<Value> {
    match resolved {
        Resolved::Single(Value::Array(items)) => items,
        Resolved::Single(value) => vec![value],
        Resolved::Multiple(values) => values,
    }
}

/// Render a value for the default space-join of multi-input rules.
///
/// Strings render verbatim and null as the empty string; everything
/// else uses its JSON text.
fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
