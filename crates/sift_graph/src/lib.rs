//! Target graph construction for the sift change-impact analyzer.
//!
//! Aggregates the declarations scanned by `sift_gn` into target and group
//! records, resolves dependency entries into expanded file lists, and
//! computes the one-level header closures impact analysis compares against.

#![warn(missing_docs)]

pub mod builder;
pub mod headers;
pub mod record;

pub use builder::{BuildGraph, GraphBuilder};
pub use headers::HeaderCache;
pub use record::{GroupRecord, TargetRecord};
