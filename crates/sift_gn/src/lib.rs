//! Text-level scanning of GN build-description documents.
//!
//! Everything in this crate operates on document text: balanced-brace block
//! extraction after a marker, target-declaration scanning, bracketed-list
//! field extraction, comment stripping, path normalization, and discovery
//! of `BUILD.gn` documents in a tree. No build semantics live here; the
//! graph builder in `sift_graph` assembles the scanned pieces into records.

#![warn(missing_docs)]

pub mod block;
pub mod decl;
pub mod fields;
pub mod path;
pub mod scan;

pub use block::extract_block;
pub use decl::{scan_declarations, DeclKind, Declaration};
pub use fields::{list_field, scalar_assignments, strip_comments};
pub use path::{normalize_all, normalize_path, SOURCE_ROOT_PLACEHOLDER};
pub use scan::{discover_build_files, files_under};
