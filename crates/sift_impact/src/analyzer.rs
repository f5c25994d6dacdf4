//! The change-impact decision rule.
//!
//! A target is impacted when the changed-file set intersects any of its
//! eight derived sets: sources, expanded deps, include files, configs, and
//! the four header closures. The analyzer always terminates with a
//! printable verdict; there is no error path.

use std::collections::HashSet;

use sift_common::{is_header, TargetId};
use sift_config::ImpactConfig;
use sift_graph::{BuildGraph, TargetRecord};

use crate::changes::ChangeSet;
use crate::overrides::MigrationOverrides;

/// The outcome of one impact query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The listed targets must be re-run, in record order.
    Impacted(Vec<TargetId>),
    /// Impact cannot be attributed; everything must be re-run.
    RebuildAll,
    /// Nothing attributable was touched; run the baseline smoke test.
    Baseline,
}

impl Verdict {
    /// Renders the single output line for this verdict.
    pub fn render(&self, impact: &ImpactConfig) -> String {
        match self {
            Verdict::Impacted(targets) => targets
                .iter()
                .map(TargetId::as_str)
                .collect::<Vec<_>>()
                .join(" "),
            Verdict::RebuildAll => impact.rebuild_marker.clone(),
            Verdict::Baseline => impact.default_target.clone(),
        }
    }
}

/// Decides which targets the change set impacts.
///
/// A change attributed to anything other than exactly the configured
/// subsystem short-circuits to [`Verdict::RebuildAll`]: this graph cannot
/// attribute changes outside the one subsystem it was built from, so it
/// trades precision for safety. With an empty impacted list, a changed
/// header falls back to the rebuild sentinel (header closures are one
/// level deep and may under-approximate) and anything else falls back to
/// the baseline target.
pub fn decide(
    graph: &BuildGraph,
    changes: &ChangeSet,
    overrides: &MigrationOverrides,
    impact: &ImpactConfig,
) -> Verdict {
    if changes.subsystems.len() != 1 || changes.subsystems[0] != impact.subsystem {
        return Verdict::RebuildAll;
    }

    let changed: HashSet<&str> = changes.files.iter().map(String::as_str).collect();
    let impacted: Vec<TargetId> = graph
        .targets
        .iter()
        .filter(|target| touches(target, &changed) && !overrides.is_adapting(&target.target_id))
        .map(|target| target.target_id.clone())
        .collect();

    if !impacted.is_empty() {
        return Verdict::Impacted(impacted);
    }
    if changes.files.iter().any(|file| is_header(file)) {
        Verdict::RebuildAll
    } else {
        Verdict::Baseline
    }
}

/// Whether the changed-file set intersects any of the record's derived sets.
fn touches(target: &TargetRecord, changed: &HashSet<&str>) -> bool {
    target.sources.iter().any(|f| changed.contains(f.as_str()))
        || target.deps.iter().any(|f| changed.contains(f.as_str()))
        || target.includes.iter().any(|f| changed.contains(f.as_str()))
        || target.configs.iter().any(|f| changed.contains(f.as_str()))
        || target
            .source_headers
            .iter()
            .any(|h| changed.contains(h.as_str()))
        || target
            .dep_headers
            .iter()
            .any(|h| changed.contains(h.as_str()))
        || target
            .include_headers
            .iter()
            .any(|h| changed.contains(h.as_str()))
        || target
            .config_headers
            .iter()
            .any(|h| changed.contains(h.as_str()))
}
