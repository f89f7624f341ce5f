//! Conversion engine: interpret a rule sequence against an input
//!
//! Rules apply in declaration order against a freshly built output
//! map; a later rule targeting the same path overwrites the earlier
//! write. Absent inputs are contractual, not errors: a single input
//! without a default omits its output key, a multi-input rule missing
//! any component is skipped whole, and an absent passthrough is a
//! no-op.
//!
//! Copyright (c) 2025 Reshape Team
//! Licensed under the Apache-2.0 license

use crate::dispatch::{combine, Resolved};
use crate::helpers::HelperScope;
use crate::path;
use crate::rule::Rule;
use crate::Result;
use serde_json::{Map, Value};

/// Apply a definition's rules to an input mapping
pub(crate) fn apply(
    rules: &[Rule],
    helpers: &HelperScope,
    input: &Map<String, Value>,
) -> Result<Map<String, Value>> {
    let mut output = Map::new();

    for rule in rules {
        match rule {
            Rule::Insert { key, value } => {
                path::insert(&mut output, key, value.clone());
            }
            Rule::Passthrough { key } => match path::lookup(input, key) {
                Some(value) => path::insert(&mut output, key, value.clone()),
                None => log::trace!("passthrough '{key}' skipped: key absent"),
            },
            Rule::SingleInput {
                from,
                to,
                via,
                default,
            } => match path::lookup(input, from) {
                Some(value) => {
                    let combined =
                        combine(via.as_ref(), helpers, Resolved::Single(value.clone()))?;
                    path::insert(&mut output, to, combined);
                }
                // defaults bypass via: nothing was extracted to transform
                None => match default {
                    Some(default) => path::insert(&mut output, to, default.resolve()),
                    None => log::trace!("input '{from}' absent: '{to}' omitted from output"),
                },
            },
            Rule::MultiInput { from, to, via } => {
                let mut values = Vec::with_capacity(from.len());
                let mut absent = None;
                for source in from {
                    match path::lookup(input, source) {
                        Some(value) => values.push(value.clone()),
                        None => {
                            absent = Some(source);
                            break;
                        }
                    }
                }
                if let Some(source) = absent {
                    // all-or-nothing: no partial output for this rule
                    log::trace!("input '{source}' absent: multi-input rule for '{to}' skipped");
                    continue;
                }
                let combined = combine(via.as_ref(), helpers, Resolved::Multiple(values))?;
                path::insert(&mut output, to, combined);
            }
        }
    }

    Ok(output)
}
