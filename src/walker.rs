//! walker.rs - Recursive traversal of nested key-value structures.
//!
//! Structures are `serde_json::Value` trees. The walker applies string-level
//! matching to every string leaf, reporting dirty leaves by dotted path
//! ("a.b.2"), and rewrites dirty leaves through the masker while preserving
//! container shape.
//!
//! Rewriting is resolve-then-replace: dirty paths are computed against the
//! original value (pure), then applied to a mutable clone by descending each
//! path. This keeps the traversal free of aliasing concerns.
//!
//! License: MIT OR APACHE 2.0

use serde_json::Value;

use crate::masker;
use crate::matcher::CompiledWords;

/// Finds the dotted paths of every dirty string leaf in `value`,
/// depth-first.
///
/// Sequence indices are stringified and treated exactly like mapping keys.
/// Non-string, non-container scalars are inert. A scalar at the root has no
/// path and yields nothing; use the string-level API for bare strings.
pub fn find_dirty_paths(value: &Value, words: &CompiledWords) -> Vec<String> {
    let mut paths = Vec::new();
    walk(value, None, words, &mut paths);
    paths
}

fn walk(value: &Value, prefix: Option<&str>, words: &CompiledWords, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                visit(key, child, prefix, words, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                visit(&index.to_string(), child, prefix, words, out);
            }
        }
        _ => {}
    }
}

fn visit(key: &str, child: &Value, prefix: Option<&str>, words: &CompiledWords, out: &mut Vec<String>) {
    let path = match prefix {
        Some(p) => format!("{p}.{key}"),
        None => key.to_string(),
    };
    match child {
        Value::Object(_) | Value::Array(_) => walk(child, Some(&path), words, out),
        Value::String(s) if words.contains_match(s) => out.push(path),
        _ => {}
    }
}

/// Returns true iff the structure contains at least one dirty string leaf.
pub fn is_dirty_value(value: &Value, words: &CompiledWords) -> bool {
    match value {
        Value::Object(map) => map.values().any(|v| is_dirty_value(v, words)),
        Value::Array(items) => items.iter().any(|v| is_dirty_value(v, words)),
        Value::String(s) => words.contains_match(s),
        _ => false,
    }
}

/// Returns a copy of `value` with every dirty string leaf rewritten through
/// the masker. Container shape, key identities, and clean leaves are
/// preserved exactly.
pub fn clean_value(value: &Value, words: &CompiledWords, replace_with: &str) -> Value {
    let mut cleaned = value.clone();
    for path in find_dirty_paths(value, words) {
        if let Some(slot) = resolve_path_mut(&mut cleaned, &path) {
            if let Value::String(s) = slot {
                *slot = Value::String(masker::clean_string(s, words, replace_with));
            }
        }
    }
    cleaned
}

/// Descends a dotted path into `root`, yielding the leaf slot. Array
/// segments must parse as indices; anything else resolves to `None`.
fn resolve_path_mut<'a>(root: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get_mut(segment)?,
            Value::Array(items) => items.get_mut(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
