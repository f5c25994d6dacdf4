//! Shared foundational types for the sift change-impact analyzer.
//!
//! This crate provides the target-id type (`directory:name`) and the
//! path-string helpers used across the GN scanner, graph builder, and
//! impact analyzer.

#![warn(missing_docs)]

pub mod paths;
pub mod target_id;

pub use paths::{gn_join, has_separator, is_header, parent_dir, HEADER_SUFFIX};
pub use target_id::TargetId;
