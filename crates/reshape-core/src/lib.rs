//! Reshape Core - Declarative engine for converting one associative
//! structure into another
//!
//! A [`Definition`] registers, once, the rules describing how each
//! output key derives from the input: single- and multi-input mappings
//! (possibly nested), verbatim inserts, and passthroughs. [`Definition::convert`]
//! then interprets those rules against any mapping-capable input and
//! builds a fresh output.
//!
//! # Main Components
//!
//! - **Error Handling**: crate-wide [`Error`]/[`Result`] using `thiserror`
//! - **Key Paths**: nested lookup and on-demand nested insertion
//! - **Rules and Builder**: the declarative surface for assembling definitions
//! - **Helper Scope**: named callables resolvable from `via` transforms
//! - **Conversion Engine**: ordered rule interpretation with the
//!   missing-input-means-missing-output contract
//!
//! # Example
//!
//! ```
//! use reshape_core::{input, input_multiple, Definition, Result};
//! use serde_json::json;
//!
//! fn example() -> Result<()> {
//!     let definition = Definition::builder()
//!         .helper("subtract", |_, args| {
//!             Ok(json!(args[0].as_i64().unwrap_or(0) - args[1].as_i64().unwrap_or(0)))
//!         })
//!         .rule(input("foo", "baz"))
//!         .rule(input_multiple(["num1", "num2"], "diff").via_helper("subtract"))
//!         .insert("bar", json!("bar"))
//!         .passthrough("flag")
//!         .build()?;
//!
//!     let output = definition.convert(json!({
//!         "foo": "bar",
//!         "num1": 100,
//!         "num2": 50,
//!     }))?;
//!
//!     assert_eq!(output["baz"], json!("bar"));
//!     assert_eq!(output["diff"], json!(50));
//!     assert_eq!(output["bar"], json!("bar"));
//!     assert!(!output.contains_key("flag"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod builder;
pub mod definition;
mod dispatch;
mod engine;
pub mod error;
pub mod helpers;
pub mod mapping;
pub mod path;
pub mod rule;

// Re-export main types for convenience
pub use builder::{input, input_multiple, insert, passthrough, DefinitionBuilder, InputRule, MultiInputRule};
pub use definition::Definition;
pub use error::{Error, Result};
pub use helpers::{HelperFn, HelperScope};
pub use mapping::{Serialized, ToMapping};
pub use path::KeyPath;
pub use rule::{DefaultFn, DefaultValue, DirectFn, Rule, Transform};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_end_to_end_smoke() {
        let definition = Definition::builder()
            .input("foo", "baz")
            .build()
            .unwrap();
        let output = definition.convert(json!({"foo": "bar"})).unwrap();
        assert_eq!(output.get("baz"), Some(&json!("bar")));
        assert_eq!(output.get("missing"), None);
    }
}
