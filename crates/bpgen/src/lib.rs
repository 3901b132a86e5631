//! Build-module generation core.
//!
//! ```text
//! insertion / record folding → PropertySet → transform passes → text
//! ```
//!
//! A generator assembles [`Module`]s into a [`BlueprintFile`], optionally
//! rewrites them with [`Transformation`] passes, and renders the result to
//! the canonical module-definition text form. [`generate`] runs the whole
//! pipeline; the pieces are re-exported for callers that need only one
//! stage.
//!
//! ```
//! use bpgen::{generate, BlueprintFile, Module};
//!
//! let mut module: Module = Module::new("java_import");
//! module.properties_mut().add_property("name", "mylib").unwrap();
//! module.properties_mut().add_property("jars", &["mylib.jar"][..]).unwrap();
//!
//! let mut file = BlueprintFile::new();
//! file.add_module(module);
//!
//! let text = generate(&file, &[]);
//! assert_eq!(text, "java_import {\n    name: \"mylib\",\n    jars: [\"mylib.jar\"],\n}\n");
//! ```

pub use bpgen_model::{
    BlueprintFile, FieldValue, Identity, ModelError, ModelResult, Module, PropertySet, Record,
    Transformation, Value, ValueKind,
};
pub use bpgen_render::{fingerprint, render_file, render_module, render_set, Contents};

/// Run transform passes in order over every module, then render the file.
///
/// The input file is left untouched; passes rebuild the trees.
pub fn generate<T: Clone>(file: &BlueprintFile<T>, passes: &[&dyn Transformation<T>]) -> String {
    let mut file = file.clone();
    for pass in passes {
        file = file.transformed(*pass);
    }
    render_file(&file)
}
