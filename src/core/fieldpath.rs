//! core::fieldpath
//!
//! Dotted field-path editing over generic JSON documents.
//!
//! # Design
//!
//! A [`Paved`] wraps a `serde_json::Value` and lets callers write scalar
//! values at dotted locations like `spec.replicaCount`. Intermediate
//! objects are created on demand, so a parameter's field paths always
//! resolve inside the template's base object.
//!
//! Paths address object members only. Array indexing is not supported;
//! nothing in the trait templates this tool consumes uses it.

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors from path parsing and document edits.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    /// The path was empty or contained an empty segment (`a..b`, `a.`).
    #[error("invalid field path {0:?}")]
    InvalidPath(String),

    /// An intermediate segment resolved to a non-object value.
    #[error("field path {path:?}: {segment:?} is not an object")]
    NotAnObject { path: String, segment: String },
}

/// Split a dotted path into segments, rejecting empty ones.
fn parse_path(path: &str) -> Result<Vec<&str>, PathError> {
    if path.is_empty() {
        return Err(PathError::InvalidPath(path.to_string()));
    }
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(PathError::InvalidPath(path.to_string()));
    }
    Ok(segments)
}

/// A JSON document paved for field-path edits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paved {
    root: Value,
}

impl Paved {
    /// Pave an existing document. Non-object roots are replaced with an
    /// empty object; the trait templates this tool decodes always carry an
    /// object skeleton.
    pub fn new(root: Value) -> Self {
        let root = match root {
            Value::Object(_) => root,
            _ => Value::Object(Map::new()),
        };
        Self { root }
    }

    /// Write a string value at `path`.
    pub fn set_string(&mut self, path: &str, value: &str) -> Result<(), PathError> {
        self.set_value(path, Value::String(value.to_string()))
    }

    /// Write a numeric value at `path`.
    ///
    /// The value is stored as a JSON number in f64 form. Integer-typed
    /// trait parameters are written through this method, matching the
    /// behavior pinned in the bind regression tests.
    pub fn set_number(&mut self, path: &str, value: f64) -> Result<(), PathError> {
        let number = serde_json::Number::from_f64(value)
            .ok_or_else(|| PathError::InvalidPath(path.to_string()))?;
        self.set_value(path, Value::Number(number))
    }

    /// Read the value at `path`, if present.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let segments = parse_path(path).ok()?;
        let mut current = &self.root;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Consume the paved document, yielding the underlying value.
    pub fn into_value(self) -> Value {
        self.root
    }

    /// Borrow the underlying value.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    fn set_value(&mut self, path: &str, value: Value) -> Result<(), PathError> {
        let segments = parse_path(path)?;
        let (leaf, parents) = segments.split_last().expect("parse_path yields >= 1");

        let mut current = &mut self.root;
        for segment in parents {
            let map = current
                .as_object_mut()
                .ok_or_else(|| PathError::NotAnObject {
                    path: path.to_string(),
                    segment: segment.to_string(),
                })?;
            let entry = map
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                return Err(PathError::NotAnObject {
                    path: path.to_string(),
                    segment: segment.to_string(),
                });
            }
            current = entry;
        }

        let map = current
            .as_object_mut()
            .ok_or_else(|| PathError::NotAnObject {
                path: path.to_string(),
                segment: leaf.to_string(),
            })?;
        map.insert(leaf.to_string(), value);
        Ok(())
    }
}

/// Validate that `path` parses as a dotted field path.
pub fn validate(path: &str) -> Result<(), PathError> {
    parse_path(path).map(|_| ())
}
