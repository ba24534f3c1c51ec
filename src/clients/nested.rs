//! Read-only traversal of nested JSON objects and arrays.
//!
//! API responses are walked with a path of [`Key`]s instead of fixed
//! structs, since only a couple of deeply nested fields are ever used.

use std::fmt;

use serde_json::Value;

use crate::clients::errors::{Error, Result};

/// One step into a JSON document: an object key or an array index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Name(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Key::Name(name)
    }
}

impl From<usize> for Key<'_> {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => write!(f, "{name}"),
            Key::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Check that every key of `path` resolves inside `container`.
///
/// Objects must contain the next key by name, arrays must contain the next
/// index. Any other value, a missing key or an out of range index ends the
/// walk with `false`. An empty path is always `true`.
#[must_use]
pub fn nested_keys_exist(container: &Value, path: &[Key<'_>]) -> bool {
    let Some((head, rest)) = path.split_first() else {
        return true;
    };
    let next = match (container, head) {
        (Value::Object(map), Key::Name(name)) => map.get(*name),
        (Value::Array(items), Key::Index(index)) => items.get(*index),
        _ => None,
    };
    next.is_some_and(|value| nested_keys_exist(value, rest))
}

/// Value at the end of `path`, if the whole path exists
#[must_use]
pub fn lookup<'v>(container: &'v Value, path: &[Key<'_>]) -> Option<&'v Value> {
    if !nested_keys_exist(container, path) {
        return None;
    }
    path.iter().try_fold(container, |value, key| match key {
        Key::Name(name) => value.get(*name),
        Key::Index(index) => value.get(*index),
    })
}

/// Like [`lookup`], but a missing path is a shape error naming the path
pub fn require<'v>(container: &'v Value, path: &[Key<'_>]) -> Result<&'v Value> {
    lookup(container, path).ok_or_else(|| Error::MissingField(display_path(path)))
}

/// Text value at `path`. Numbers are accepted and rendered as text, since
/// Last.fm returns counts as strings on some endpoints and numbers on others.
pub fn require_text(container: &Value, path: &[Key<'_>]) -> Result<String> {
    match require(container, path)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(Error::MissingField(display_path(path))),
    }
}

/// Dotted form of a path, e.g. `toptracks.track[0].name`
pub fn display_path(path: &[Key<'_>]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
        .replace(".[", "[")
}
