//! Transform passes: visitor-driven rewrites of a property tree.
//!
//! A pass never mutates the input tree; it rebuilds a new one from the
//! visitor's decisions, so callers can keep the original. Surviving
//! entries keep their insertion order.

use crate::set::{Entry, PropertySet};
use crate::value::Value;

/// A caller-supplied rewrite, invoked at three points during a depth-first
/// walk. Every hook defaults to the identity, so implementations override
/// only what they need. Returning `None` deletes the entry.
pub trait Transformation<T> {
    /// Rewrite a leaf (scalar or list) property.
    fn transform_property(
        &self,
        _name: &str,
        value: Value<T>,
        tag: Option<T>,
    ) -> Option<(Value<T>, Option<T>)> {
        Some((value, tag))
    }

    /// Rewrite a nested set before its contents are visited. Returning
    /// `None` deletes the set and skips its contents entirely.
    fn transform_set_before_contents(
        &self,
        _name: &str,
        set: PropertySet<T>,
        tag: Option<T>,
    ) -> Option<(PropertySet<T>, Option<T>)> {
        Some((set, tag))
    }

    /// Rewrite a nested set after its contents have been visited and the
    /// set rebuilt. A set emptied by child deletions is kept unless this
    /// hook deletes it; emptiness filtering is a pass decision, not an
    /// engine default.
    fn transform_set_after_contents(
        &self,
        _name: &str,
        set: PropertySet<T>,
        tag: Option<T>,
    ) -> Option<(PropertySet<T>, Option<T>)> {
        Some((set, tag))
    }
}

/// The do-nothing pass: every hook keeps its input.
pub struct Identity;

impl<T> Transformation<T> for Identity {}

impl<T: Clone> PropertySet<T> {
    /// Apply a transform pass to this set, producing a new tree.
    ///
    /// Depth-first: [`Transformation::transform_set_before_contents`] and
    /// [`Transformation::transform_property`] fire pre-order,
    /// [`Transformation::transform_set_after_contents`] post-order. The
    /// receiver is left untouched.
    pub fn transformed<X>(&self, transformation: &X) -> PropertySet<T>
    where
        X: Transformation<T> + ?Sized,
    {
        let mut result = PropertySet::new();
        for (name, value, tag) in self.iter() {
            match value {
                Value::Set(subset) => {
                    let Some((subset, tag)) = transformation.transform_set_before_contents(
                        name,
                        subset.clone(),
                        tag.cloned(),
                    ) else {
                        continue;
                    };
                    let rebuilt = subset.transformed(transformation);
                    let Some((subset, tag)) =
                        transformation.transform_set_after_contents(name, rebuilt, tag)
                    else {
                        continue;
                    };
                    result.push_entry(Entry {
                        name: name.to_string(),
                        value: Value::Set(subset),
                        tag,
                    });
                }
                leaf => {
                    let Some((value, tag)) =
                        transformation.transform_property(name, leaf.clone(), tag.cloned())
                    else {
                        continue;
                    };
                    result.push_entry(Entry {
                        name: name.to_string(),
                        value,
                        tag,
                    });
                }
            }
        }
        result
    }
}
