//! Typed-record folding.
//!
//! A [`Record`] is the structural view of a typed value: it enumerates its
//! *present* fields with a name and a shape. Optional fields are `Option`s
//! in the implementing type and are simply not enumerated when unset, so
//! an absent optional never reaches the tree (and never renders as empty).
//! Record fields carry no tags.

use crate::error::ModelResult;
use crate::set::PropertySet;
use crate::value::Value;

/// One present field of a record.
///
/// Scalars and lists are owned; a nested record is borrowed so the
/// enumeration stays cheap and recursion happens during folding.
pub enum FieldValue<'a> {
    String(String),
    Int(i64),
    Bool(bool),
    StringList(Vec<String>),
    Record(&'a dyn Record),
}

/// The structural contract a merge source must satisfy: enumerate present
/// fields in declaration order.
///
/// Implementations list each set field once; field names must be unique
/// within one record.
pub trait Record {
    fn fields(&self) -> Vec<(&str, FieldValue<'_>)>;
}

/// Convert a record into a fresh property set, recursively.
///
/// A record that enumerates the same field name twice is a usage error and
/// fails the same way a duplicate insertion does.
pub(crate) fn record_to_set<T>(record: &dyn Record) -> ModelResult<PropertySet<T>> {
    let mut set = PropertySet::new();
    for (name, field) in record.fields() {
        let value = match field {
            FieldValue::String(s) => Value::String(s),
            FieldValue::Int(i) => Value::Int(i),
            FieldValue::Bool(b) => Value::Bool(b),
            FieldValue::StringList(items) => Value::StringList(items),
            FieldValue::Record(nested) => Value::Set(record_to_set(nested)?),
        };
        set.add_entry(name.to_string(), value, None)?;
    }
    Ok(set)
}
