//! Tree-to-text rendering.
//!
//! One leaf renders as `name: <value>,`; a nested set as `name: {` …
//! `},` one indentation step deeper. Every property gets a trailing
//! comma, including the last. Iteration order is the tree's insertion
//! order, so identical trees always render to identical bytes.

use bpgen_model::{BlueprintFile, Module, PropertySet, Value};

use crate::contents::Contents;

/// Render a property set's contents at the top level (no surrounding
/// braces).
pub fn render_set<T>(set: &PropertySet<T>) -> String {
    let mut contents = Contents::new();
    write_set_contents(&mut contents, set);
    contents.into_string()
}

/// Render one module definition: `module_type { ... }`.
pub fn render_module<T>(module: &Module<T>) -> String {
    let mut contents = Contents::new();
    write_module(&mut contents, module);
    contents.into_string()
}

/// Render a whole file: module definitions in order, separated by one
/// blank line.
pub fn render_file<T>(file: &BlueprintFile<T>) -> String {
    let mut contents = Contents::new();
    for (i, module) in file.modules().iter().enumerate() {
        if i > 0 {
            contents.blank_line();
        }
        write_module(&mut contents, module);
    }
    contents.into_string()
}

fn write_module<T>(contents: &mut Contents, module: &Module<T>) {
    contents.push_line(&format!("{} {{", module.module_type()));
    contents.indent();
    write_set_contents(contents, module.properties());
    contents.dedent();
    contents.push_line("}");
}

fn write_set_contents<T>(contents: &mut Contents, set: &PropertySet<T>) {
    for (name, value, _tag) in set.iter() {
        match value {
            Value::String(s) => contents.push_line(&format!("{name}: {},", quote(s))),
            Value::Int(i) => contents.push_line(&format!("{name}: {i},")),
            Value::Bool(b) => contents.push_line(&format!("{name}: {b},")),
            Value::StringList(items) => {
                contents.push_line(&format!("{name}: {},", string_list(items)));
            }
            Value::Set(subset) => {
                contents.push_line(&format!("{name}: {{"));
                contents.indent();
                write_set_contents(contents, subset);
                contents.dedent();
                contents.push_line("},");
            }
        }
    }
}

/// Bracketed, comma-separated, quoted sequence; `[]` when empty.
fn string_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| quote(s)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Double-quote a string, escaping embedded quotes and backslashes.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
