//! Serializer for bpgen property trees.
//!
//! Renders a (possibly transformed) property tree to the canonical
//! module-definition text form:
//!
//! ```text
//! java_import {
//!     name: "mylib",
//!     jars: ["mylib.jar"],
//!     sub: {
//!         visible: true,
//!     },
//! }
//! ```
//!
//! Output is deterministic and byte-stable for identical input trees, so
//! downstream tooling can diff snapshots; [`fingerprint`] digests the
//! rendered text for cheap comparison. Tags are build-time metadata and
//! are never rendered.

mod contents;
mod fingerprint;
mod render;

pub use contents::Contents;
pub use fingerprint::fingerprint;
pub use render::{render_file, render_module, render_set};
