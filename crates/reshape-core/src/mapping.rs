//! Input coercion: the "materialize as mapping" capability
//!
//! `convert` accepts anything implementing [`ToMapping`]. Plain JSON
//! objects and maps pass through; arbitrary user types opt in through
//! the [`Serialized`] adapter.
//!
//! Copyright (c) 2025 Reshape Team
//! Licensed under the Apache-2.0 license

use crate::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Types that behave as, or can be materialized into, a mapping
pub trait ToMapping {
    /// Produce the mapping the engine will read from.
    ///
    /// Called exactly once, up front, per conversion.
    fn to_mapping(self) -> Result<Map<String, Value>>;
}

impl ToMapping for Map<String, Value> {
    fn to_mapping(self) -> Result<Map<String, Value>> {
        Ok(self)
    }
}

impl ToMapping for &Map<String, Value> {
    fn to_mapping(self) -> Result<Map<String, Value>> {
        Ok(self.clone())
    }
}

impl ToMapping for Value {
    fn to_mapping(self) -> Result<Map<String, Value>> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(Error::NotAMapping {
                message: format!("expected a JSON object, got {}", value_kind(&other)),
                source: None,
            }),
        }
    }
}

impl ToMapping for &Value {
    fn to_mapping(self) -> Result<Map<String, Value>> {
        self.clone().to_mapping()
    }
}

/// Adapter materializing any `Serialize` type as a mapping
#[derive(Debug, Clone)]
pub struct Serialized<T>(pub T);

impl<T: Serialize> ToMapping for Serialized<T> {
    fn to_mapping(self) -> Result<Map<String, Value>> {
        serde_json::to_value(self.0)?.to_mapping()
    }
}

impl<T: Serialize> ToMapping for &Serialized<T> {
    fn to_mapping(self) -> Result<Map<String, Value>> {
        serde_json::to_value(&self.0)?.to_mapping()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
