//! The property value union.
//!
//! A closed sum type rather than an open "any": the renderer matches on it
//! exhaustively, so adding a case is a compile-visible change everywhere.

use std::fmt;

use serde::Serialize;

use crate::error::{ModelError, ModelResult};
use crate::set::PropertySet;

/// A property value: one scalar kind, a string list, or a nested set.
///
/// `T` is the caller's opaque tag type; it appears here only because a
/// nested [`PropertySet`] carries tags of its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    String(String),
    Int(i64),
    Bool(bool),
    StringList(Vec<String>),
    Set(PropertySet<T>),
}

/// The shape of a [`Value`], used in conflict error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueKind {
    String,
    Int,
    Bool,
    StringList,
    Set,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Int => write!(f, "integer"),
            Self::Bool => write!(f, "boolean"),
            Self::StringList => write!(f, "string list"),
            Self::Set => write!(f, "property set"),
        }
    }
}

impl<T> Value<T> {
    /// The shape of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Int(_) => ValueKind::Int,
            Self::Bool(_) => ValueKind::Bool,
            Self::StringList(_) => ValueKind::StringList,
            Self::Set(_) => ValueKind::Set,
        }
    }

    /// True for the scalar and list cases, false for nested sets.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Self::Set(_))
    }

    /// Convert a dynamic JSON value into a property value.
    ///
    /// Mapping: string → string, integer → integer, bool → boolean,
    /// array of strings → string list, object → nested set with fields in
    /// document order. Null, floats, integers outside `i64`, and arrays
    /// with non-string elements have no property shape and fail with
    /// [`ModelError::UnsupportedValueShape`].
    ///
    /// `name` is the property name the value is destined for; it is used
    /// only for error context.
    pub fn from_json(name: &str, json: &serde_json::Value) -> ModelResult<Self> {
        match json {
            serde_json::Value::String(s) => Ok(Self::String(s.clone())),
            serde_json::Value::Bool(b) => Ok(Self::Bool(*b)),
            serde_json::Value::Number(n) => {
                n.as_i64().map(Self::Int).ok_or_else(|| unsupported(name, format!("number {n}")))
            }
            serde_json::Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        serde_json::Value::String(s) => list.push(s.clone()),
                        other => {
                            return Err(unsupported(name, format!("list element {other}")));
                        }
                    }
                }
                Ok(Self::StringList(list))
            }
            serde_json::Value::Object(fields) => {
                let mut set = PropertySet::new();
                for (field, value) in fields {
                    set.add_entry(field.clone(), Self::from_json(field, value)?, None)?;
                }
                Ok(Self::Set(set))
            }
            serde_json::Value::Null => Err(unsupported(name, "null".to_string())),
        }
    }
}

fn unsupported(name: &str, found: String) -> ModelError {
    ModelError::UnsupportedValueShape {
        name: name.to_string(),
        found,
    }
}

impl<T> From<&str> for Value<T> {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl<T> From<String> for Value<T> {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T> From<i64> for Value<T> {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl<T> From<i32> for Value<T> {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl<T> From<bool> for Value<T> {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T> From<Vec<String>> for Value<T> {
    fn from(items: Vec<String>) -> Self {
        Self::StringList(items)
    }
}

impl<T> From<&[&str]> for Value<T> {
    fn from(items: &[&str]) -> Self {
        Self::StringList(items.iter().map(|s| s.to_string()).collect())
    }
}

impl<T> From<PropertySet<T>> for Value<T> {
    fn from(set: PropertySet<T>) -> Self {
        Self::Set(set)
    }
}
