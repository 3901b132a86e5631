//! Model error types.
//!
//! Every error here is programmer-error class: a generator violated the
//! usage contract of the tree. Errors surface at the offending call site
//! and are never retried.

use serde::Serialize;
use thiserror::Error;

use crate::value::ValueKind;

/// Errors raised by property-tree construction and merging.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ModelError {
    /// A scalar or list was inserted under a name that already exists in
    /// the same property set.
    #[error("duplicate property {name:?} in property set")]
    DuplicateProperty { name: String },

    /// A merge collided with an incompatible existing value: any collision
    /// involving a scalar is fatal, even when the values are equal.
    #[error("conflicting property {name:?}: cannot merge {incoming} into existing {existing}")]
    ConflictingProperty {
        name: String,
        existing: ValueKind,
        incoming: ValueKind,
    },

    /// A source value has no mapping onto the scalar/list/set union
    /// (e.g. a JSON null, float, or mixed-type array).
    #[error("unsupported value shape for property {name:?}: {found}")]
    UnsupportedValueShape { name: String, found: String },
}

/// Model result type alias.
pub type ModelResult<T> = Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_property() {
        let err = ModelError::DuplicateProperty {
            name: "jars".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate property \"jars\" in property set");

        let err = ModelError::ConflictingProperty {
            name: "sub".to_string(),
            existing: ValueKind::String,
            incoming: ValueKind::Set,
        };
        assert_eq!(
            err.to_string(),
            "conflicting property \"sub\": cannot merge property set into existing string"
        );

        let err = ModelError::UnsupportedValueShape {
            name: "version".to_string(),
            found: "number 1.5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported value shape for property \"version\": number 1.5"
        );
    }

    #[test]
    fn test_error_serializes_to_json() {
        let err = ModelError::DuplicateProperty {
            name: "x".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("DuplicateProperty"));
        assert!(json.contains("\"x\""));
    }
}
