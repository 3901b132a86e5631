//! Module and file assembly.
//!
//! A generated file is an ordered list of module definitions, each a
//! module type name plus one root property set. No dependency graph and
//! no snapshot packaging live here; this is just the shape the renderer
//! consumes.

use crate::set::PropertySet;
use crate::transform::Transformation;

/// One module definition: a module type (e.g. `java_import`) and its
/// properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Module<T = ()> {
    module_type: String,
    properties: PropertySet<T>,
}

impl<T> Module<T> {
    /// Create an empty module of the given type.
    pub fn new(module_type: impl Into<String>) -> Self {
        Self {
            module_type: module_type.into(),
            properties: PropertySet::new(),
        }
    }

    pub fn module_type(&self) -> &str {
        &self.module_type
    }

    pub fn properties(&self) -> &PropertySet<T> {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertySet<T> {
        &mut self.properties
    }
}

impl<T: Clone> Module<T> {
    /// Apply a transform pass to this module's root property set,
    /// producing a new module.
    pub fn transformed<X>(&self, transformation: &X) -> Module<T>
    where
        X: Transformation<T> + ?Sized,
    {
        Module {
            module_type: self.module_type.clone(),
            properties: self.properties.transformed(transformation),
        }
    }
}

/// An ordered collection of module definitions, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct BlueprintFile<T = ()> {
    modules: Vec<Module<T>>,
}

impl<T> BlueprintFile<T> {
    pub fn new() -> Self {
        Self { modules: Vec::new() }
    }

    /// Append a module. Order of addition is order of emission.
    pub fn add_module(&mut self, module: Module<T>) {
        self.modules.push(module);
    }

    pub fn modules(&self) -> &[Module<T>] {
        &self.modules
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }
}

impl<T: Clone> BlueprintFile<T> {
    /// Apply a transform pass to every module, producing a new file.
    pub fn transformed<X>(&self, transformation: &X) -> BlueprintFile<T>
    where
        X: Transformation<T> + ?Sized,
    {
        BlueprintFile {
            modules: self.modules.iter().map(|m| m.transformed(transformation)).collect(),
        }
    }
}

impl<T> Default for BlueprintFile<T> {
    fn default() -> Self {
        Self::new()
    }
}
