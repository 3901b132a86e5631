//! Ordered property-tree model for build-module generation.
//!
//! ```text
//! insertion / record folding → PropertySet → transform passes → bpgen-render
//! ```
//!
//! This crate defines the tree itself and every operation that mutates or
//! rewrites it. A generator builds a [`PropertySet`] through direct
//! insertion ([`PropertySet::add_property`]), typed-record folding
//! ([`Record`]), or dynamic JSON folding ([`PropertySet::merge_json`]);
//! zero or more [`Transformation`] passes then rebuild the tree; the
//! rendering crate serializes the result.
//!
//! Property sets are generic over an opaque tag type `T`: one optional tag
//! per property, carried through merges, rewritable by transform passes,
//! never interpreted here.

mod error;
mod module;
mod record;
mod set;
mod transform;
mod value;

pub use error::{ModelError, ModelResult};
pub use module::{BlueprintFile, Module};
pub use record::{FieldValue, Record};
pub use set::PropertySet;
pub use transform::{Identity, Transformation};
pub use value::{Value, ValueKind};
