//! Definitions: immutable rule registries with their helper scope
//!
//! A `Definition` owns the ordered rule sequence a builder froze plus
//! the helper scope its `Named` transforms resolve against. Each
//! definition's registry is independent: building one never touches
//! another, even within the same process. `convert` is a pure function
//! of the definition and its input, so one definition may serve many
//! threads concurrently.
//!
//! Copyright (c) 2025 Reshape Team
//! Licensed under the Apache-2.0 license

use crate::builder::DefinitionBuilder;
use crate::engine;
use crate::helpers::HelperScope;
use crate::mapping::ToMapping;
use crate::rule::Rule;
use crate::Result;
use serde_json::{Map, Value};

/// An immutable, ordered collection of rules describing one conversion
#[derive(Debug, Clone)]
pub struct Definition {
    rules: Vec<Rule>,
    helpers: HelperScope,
}

impl Definition {
    pub(crate) fn new(rules: Vec<Rule>, helpers: HelperScope) -> Self {
        Definition { rules, helpers }
    }

    /// Start declaring a new definition
    pub fn builder() -> DefinitionBuilder {
        DefinitionBuilder::new()
    }

    /// The rules in application order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The helper scope `Named` transforms resolve against
    pub fn helpers(&self) -> &HelperScope {
        &self.helpers
    }

    /// Convert an input into a freshly built output mapping.
    ///
    /// The input is coerced through [`ToMapping`] up front; rules then
    /// apply in declaration order. No state outlives the call.
    pub fn convert<M: ToMapping>(&self, input: M) -> Result<Map<String, Value>> {
        let input = input.to_mapping()?;
        engine::apply(&self.rules, &self.helpers, &input)
    }
}
