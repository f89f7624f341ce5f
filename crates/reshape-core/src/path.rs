//! Key paths and nested lookup/insertion over mappings
//!
//! A `KeyPath` names a location inside an associative structure: either
//! a single key or an ordered sequence of keys descending through nested
//! objects. Lookup distinguishes "key absent" from "key present with a
//! null value"; insertion creates intermediate objects on demand.
//!
//! Copyright (c) 2025 Reshape Team
//! Licensed under the Apache-2.0 license

use serde_json::{Map, Value};
use std::fmt;

/// A possibly-nested location within a mapping
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Create a key path from its segments.
    ///
    /// An empty segment list is representable but names nothing;
    /// `DefinitionBuilder::build` rejects rules that carry one.
    pub fn new(segments: Vec<String>) -> Self {
        KeyPath(segments)
    }

    /// The ordered key segments of this path
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether this path has no segments
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl From<&str> for KeyPath {
    fn from(key: &str) -> Self {
        KeyPath(vec![key.to_string()])
    }
}

impl From<String> for KeyPath {
    fn from(key: String) -> Self {
        KeyPath(vec![key])
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for KeyPath {
    fn from(segments: [S; N]) -> Self {
        KeyPath(segments.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for KeyPath {
    fn from(segments: &[&str]) -> Self {
        KeyPath(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl<S: Into<String>> From<Vec<S>> for KeyPath {
    fn from(segments: Vec<S>) -> Self {
        KeyPath(segments.into_iter().map(Into::into).collect())
    }
}

/// Resolve a path inside a mapping.
///
/// Returns `None` when any link is absent or when descent hits a
/// non-object value mid-path. A stored null is `Some(&Value::Null)`:
/// presence is existence, not truthiness.
pub(crate) fn lookup<'a>(map: &'a Map<String, Value>, path: &KeyPath) -> Option<&'a Value> {
    let (first, rest) = path.segments().split_first()?;
    let mut current = map.get(first)?;
    for segment in rest {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Assign a value at a path inside a mapping, creating intermediate
/// objects as needed.
///
/// A non-object value encountered mid-path is overwritten with a fresh
/// object. Writes sharing a path prefix merge into the same
/// intermediate structure; the last write at a terminal path wins.
pub(crate) fn insert(map: &mut Map<String, Value>, path: &KeyPath, value: Value) {
    let Some((last, init)) = path.segments().split_last() else {
        return;
    };
    let mut current = map;
    for segment in init {
        let slot = current
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        // guaranteed object just above
        current = slot.as_object_mut().unwrap();
    }
    current.insert(last.clone(), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_display_joins_segments() {
        let path = KeyPath::from(["a", "b", "c"]);
        assert_eq!(path.to_string(), "a.b.c");
    }

    #[test]
    fn test_lookup_single_key() {
        let map = as_map(json!({"foo": "bar"}));
        assert_eq!(lookup(&map, &"foo".into()), Some(&json!("bar")));
        assert_eq!(lookup(&map, &"missing".into()), None);
    }

    #[test]
    fn test_lookup_null_is_present() {
        let map = as_map(json!({"foo": null}));
        assert_eq!(lookup(&map, &"foo".into()), Some(&Value::Null));
    }

    #[test]
    fn test_lookup_nested() {
        let map = as_map(json!({"a": {"b": {"c": 42}}}));
        assert_eq!(lookup(&map, &["a", "b", "c"].into()), Some(&json!(42)));
        assert_eq!(lookup(&map, &["a", "b"].into()), Some(&json!({"c": 42})));
        assert_eq!(lookup(&map, &["a", "x", "c"].into()), None);
    }

    #[test]
    fn test_lookup_through_non_object_is_absent() {
        let map = as_map(json!({"a": "scalar"}));
        assert_eq!(lookup(&map, &["a", "b"].into()), None);
    }

    #[test]
    fn test_lookup_empty_path() {
        let map = as_map(json!({"a": 1}));
        assert_eq!(lookup(&map, &KeyPath::new(vec![])), None);
    }

    #[test]
    fn test_insert_single_key_overwrites() {
        let mut map = Map::new();
        insert(&mut map, &"foo".into(), json!(1));
        insert(&mut map, &"foo".into(), json!(2));
        assert_eq!(Value::Object(map), json!({"foo": 2}));
    }

    #[test]
    fn test_insert_nested_creates_intermediates() {
        let mut map = Map::new();
        insert(&mut map, &["a", "b", "c"].into(), json!("deep"));
        assert_eq!(Value::Object(map), json!({"a": {"b": {"c": "deep"}}}));
    }

    #[test]
    fn test_insert_merges_shared_prefix() {
        let mut map = Map::new();
        insert(&mut map, &["a", "b"].into(), json!(1));
        insert(&mut map, &["a", "c"].into(), json!(2));
        assert_eq!(Value::Object(map), json!({"a": {"b": 1, "c": 2}}));
    }

    #[test]
    fn test_insert_overwrites_non_object_intermediate() {
        let mut map = as_map(json!({"a": "scalar"}));
        insert(&mut map, &["a", "b"].into(), json!(1));
        assert_eq!(Value::Object(map), json!({"a": {"b": 1}}));
    }
}
