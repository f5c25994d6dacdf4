//! Change-impact analysis over a built target graph.
//!
//! Consumes the change-description document and the migration-override
//! document, intersects the changed-file set against every target record's
//! derived sets, and produces a verdict: the impacted target list, the
//! unconditional-rebuild sentinel, or the baseline smoke-test target. The
//! full target and group documents are written on every run regardless of
//! the verdict.

#![warn(missing_docs)]

pub mod analyzer;
pub mod changes;
pub mod overrides;
pub mod report;

pub use analyzer::{decide, Verdict};
pub use changes::{ChangeDocument, ChangeSet};
pub use overrides::MigrationOverrides;
pub use report::{write_reports, ReportError};
