//! The ordered property set.
//!
//! Names are unique within a set; insertion order is preserved through
//! merge and transform, and it is the rendering order. Lookup is linear:
//! sets hold a handful of module properties, not bulk data.

use crate::error::{ModelError, ModelResult};
use crate::record::{record_to_set, Record};
use crate::value::{Value, ValueKind};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Entry<T> {
    pub(crate) name: String,
    pub(crate) value: Value<T>,
    pub(crate) tag: Option<T>,
}

/// An ordered mapping from property name to [`Value`], each entry carrying
/// an optional opaque tag of type `T`.
///
/// Built empty, mutated only through the insertion and merge operations
/// below, and rewritten (into a fresh set) by transform passes. Every
/// nested set is exclusively owned by its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySet<T = ()> {
    entries: Vec<Entry<T>>,
}

impl<T> PropertySet<T> {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Number of properties in this set (not counting nested contents).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if this set has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if `name` exists in this set.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Look up a property value. Absent names yield `None`.
    pub fn value(&self, name: &str) -> Option<&Value<T>> {
        self.find(name).map(|i| &self.entries[i].value)
    }

    /// Look up a property tag. Absent names and untagged properties both
    /// yield `None`; use [`PropertySet::contains`] to tell them apart.
    pub fn tag(&self, name: &str) -> Option<&T> {
        self.find(name).and_then(|i| self.entries[i].tag.as_ref())
    }

    /// Iterate entries as `(name, value, tag)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value<T>, Option<&T>)> {
        self.entries.iter().map(|e| (e.name.as_str(), &e.value, e.tag.as_ref()))
    }

    /// Insert a property without a tag.
    ///
    /// Scalar and list values must not collide with an existing name
    /// ([`ModelError::DuplicateProperty`]). A [`Value::Set`] source instead
    /// merges into an existing nested set under the same name; see
    /// [`PropertySet::merge_set`] for the collision rules.
    pub fn add_property(&mut self, name: impl Into<String>, value: impl Into<Value<T>>) -> ModelResult<()> {
        self.add_entry(name.into(), value.into(), None)
    }

    /// Insert a property with a tag. Same rules as
    /// [`PropertySet::add_property`]; when a set source merges into an
    /// existing set, the existing entry keeps its own tag.
    pub fn add_property_with_tag(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value<T>>,
        tag: T,
    ) -> ModelResult<()> {
        self.add_entry(name.into(), value.into(), Some(tag))
    }

    /// Get-or-create a nested set under `name`.
    ///
    /// Idempotent: if `name` already holds a set, that set is returned; if
    /// it holds anything else the call fails with
    /// [`ModelError::ConflictingProperty`].
    pub fn add_set(&mut self, name: impl Into<String>) -> ModelResult<&mut PropertySet<T>> {
        let name = name.into();
        let index = match self.find(&name) {
            Some(i) => {
                if !matches!(self.entries[i].value, Value::Set(_)) {
                    return Err(ModelError::ConflictingProperty {
                        name,
                        existing: self.entries[i].value.kind(),
                        incoming: ValueKind::Set,
                    });
                }
                i
            }
            None => {
                self.entries.push(Entry {
                    name,
                    value: Value::Set(PropertySet::new()),
                    tag: None,
                });
                self.entries.len() - 1
            }
        };
        let Value::Set(set) = &mut self.entries[index].value else {
            unreachable!("entry at {index} was just checked or created as a set");
        };
        Ok(set)
    }

    /// Fold a typed record under `name` via the merge algorithm: unset
    /// optional fields are skipped, nested records become nested sets, and
    /// an existing set under `name` is merged into rather than replaced.
    pub fn add_record(&mut self, name: impl Into<String>, record: &dyn Record) -> ModelResult<()> {
        let set = record_to_set(record)?;
        self.add_entry(name.into(), Value::Set(set), None)
    }

    /// Fold a JSON value under `name`; see [`Value::from_json`] for the
    /// shape mapping.
    pub fn add_json(&mut self, name: impl Into<String>, json: &serde_json::Value) -> ModelResult<()> {
        let name = name.into();
        let value = Value::from_json(&name, json)?;
        self.add_entry(name, value, None)
    }

    /// Merge the fields of a JSON object directly into this set, one
    /// property per field, via the merge algorithm. The whole object is
    /// converted and validated before anything is applied, so a failed
    /// merge leaves this set untouched. Non-object values have no
    /// top-level mapping and fail with
    /// [`ModelError::UnsupportedValueShape`].
    pub fn merge_json(&mut self, json: &serde_json::Value) -> ModelResult<()> {
        match Value::from_json("<root>", json)? {
            Value::Set(source) => self.merge_set(source),
            _ => Err(ModelError::UnsupportedValueShape {
                name: "<root>".to_string(),
                found: format!("top-level {json}"),
            }),
        }
    }

    /// Merge another set into this one, in place.
    ///
    /// Disjoint names append in the source's order; names held as sets on
    /// both sides merge recursively; any collision involving a scalar or
    /// list is [`ModelError::ConflictingProperty`], even for equal values.
    /// The merge is validated in full before anything is applied, so a
    /// failed merge leaves this set untouched.
    pub fn merge_set(&mut self, source: PropertySet<T>) -> ModelResult<()> {
        self.check_merge(&source)?;
        self.apply_merge(source);
        Ok(())
    }

    pub(crate) fn add_entry(&mut self, name: String, value: Value<T>, tag: Option<T>) -> ModelResult<()> {
        match self.find(&name) {
            None => {
                self.entries.push(Entry { name, value, tag });
                Ok(())
            }
            Some(index) => match value {
                Value::Set(source) => match &mut self.entries[index].value {
                    Value::Set(existing) => existing.merge_set(source),
                    other => Err(ModelError::ConflictingProperty {
                        name,
                        existing: other.kind(),
                        incoming: ValueKind::Set,
                    }),
                },
                _ => Err(ModelError::DuplicateProperty { name }),
            },
        }
    }

    pub(crate) fn push_entry(&mut self, entry: Entry<T>) {
        self.entries.push(entry);
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    fn check_merge(&self, source: &PropertySet<T>) -> ModelResult<()> {
        for entry in &source.entries {
            if let Some(existing) = self.value(&entry.name) {
                match (existing, &entry.value) {
                    (Value::Set(target), Value::Set(sub)) => target.check_merge(sub)?,
                    (existing, incoming) => {
                        return Err(ModelError::ConflictingProperty {
                            name: entry.name.clone(),
                            existing: existing.kind(),
                            incoming: incoming.kind(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    // Infallible after check_merge: the only surviving collisions are
    // set-on-set, which recurse.
    fn apply_merge(&mut self, source: PropertySet<T>) {
        for entry in source.entries {
            match self.find(&entry.name) {
                None => self.entries.push(entry),
                Some(index) => {
                    if let (Value::Set(target), Value::Set(sub)) =
                        (&mut self.entries[index].value, entry.value)
                    {
                        target.apply_merge(sub);
                    }
                }
            }
        }
    }
}

impl<T> Default for PropertySet<T> {
    fn default() -> Self {
        Self::new()
    }
}
