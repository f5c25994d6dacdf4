//! Ingestion of the change-description document.
//!
//! The document maps change-entry keys to records carrying an optional
//! subsystem name and a per-operation file map. The flattened change set
//! joins every file onto the configured source root; a rename contributes
//! both endpoints of its pair.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use sift_common::gn_join;

/// The change-description document as written by the review tooling.
pub type ChangeDocument = BTreeMap<String, ChangeEntry>;

/// One change entry: an optional subsystem name plus changed files, keyed
/// by operation kind.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeEntry {
    /// Human-readable subsystem the change was attributed to.
    #[serde(default)]
    pub name: Option<String>,
    /// Changed files grouped by operation.
    #[serde(default)]
    pub changed_file_list: ChangedFiles,
}

/// Per-operation file lists of one change entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangedFiles {
    /// Newly added files.
    #[serde(default)]
    pub added: Vec<String>,
    /// Renames; each inner list holds the old and new path.
    #[serde(default)]
    pub rename: Vec<Vec<String>>,
    /// Modified files.
    #[serde(default)]
    pub modified: Vec<String>,
    /// Deleted files.
    #[serde(default)]
    pub deleted: Vec<String>,
}

/// The flattened change set the impact analysis runs against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Changed file paths, joined onto the source root.
    pub files: Vec<String>,
    /// Distinct subsystem names referenced, in first-seen order.
    pub subsystems: Vec<String>,
}

impl ChangeSet {
    /// Loads and flattens a change-description document.
    ///
    /// An unreadable or undecodable document yields an empty change set;
    /// the short-circuit in the decision rule then reports the rebuild
    /// sentinel rather than an error.
    pub fn load(path: &str, source_root: &str) -> Self {
        let content = std::fs::read_to_string(Path::new(path)).unwrap_or_default();
        let document: ChangeDocument = serde_json::from_str(&content).unwrap_or_default();
        Self::from_document(&document, source_root)
    }

    /// Flattens an already-parsed document.
    pub fn from_document(document: &ChangeDocument, source_root: &str) -> Self {
        let mut files = Vec::new();
        let mut subsystems: Vec<String> = Vec::new();

        for entry in document.values() {
            if let Some(name) = &entry.name {
                if !subsystems.iter().any(|s| s == name) {
                    subsystems.push(name.clone());
                }
            }
            let changed = &entry.changed_file_list;
            for file in &changed.added {
                files.push(gn_join(source_root, file));
            }
            for pair in &changed.rename {
                for file in pair {
                    files.push(gn_join(source_root, file));
                }
            }
            for file in &changed.modified {
                files.push(gn_join(source_root, file));
            }
            for file in &changed.deleted {
                files.push(gn_join(source_root, file));
            }
        }

        Self { files, subsystems }
    }
}
