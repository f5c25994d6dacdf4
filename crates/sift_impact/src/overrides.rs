//! The migration-override document.
//!
//! Lists target ids known to be mid-migration ("adapting") — excluded from
//! impact output even when touched — and ids already fully migrated
//! ("adapted", informational).

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use sift_common::TargetId;

/// Target-id allow/exclude lists loaded from the override document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MigrationOverrides {
    /// Targets already fully migrated.
    #[serde(default)]
    pub adapted_test_targets: BTreeSet<TargetId>,
    /// Targets mid-migration; never reported as impacted.
    #[serde(default)]
    pub adapting_test_targets: BTreeSet<TargetId>,
}

impl MigrationOverrides {
    /// Loads the override document; any read or decode failure yields
    /// empty sets.
    pub fn load(path: &str) -> Self {
        let content = std::fs::read_to_string(Path::new(path)).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Whether the target is excluded from impact output.
    pub fn is_adapting(&self, id: &TargetId) -> bool {
        self.adapting_test_targets.contains(id)
    }
}
