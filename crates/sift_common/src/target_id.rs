//! The `directory:name` identifier for build targets.

use serde::{Deserialize, Serialize};

use crate::paths::gn_join;

/// Identifies one build target as `directory:name`.
///
/// The id is the unique key of a target across the whole graph: the
/// directory of the declaring document joined with the declared name.
/// Dependency entries in build descriptions use the same shape, so ids
/// compare directly against normalized dep strings.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
    /// Builds an id from a declaring directory and a target name.
    pub fn new(dir: &str, name: &str) -> Self {
        Self(format!("{dir}:{name}"))
    }

    /// Wraps an already-formed id string.
    ///
    /// Collapses a `/:` produced by joining a directory onto a dep entry
    /// that starts its own `:name` suffix (as group deps do).
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into().replace("/:", ":"))
    }

    /// The directory portion (everything before the first `:`).
    ///
    /// An id without a `:` is treated as all directory.
    pub fn dir(&self) -> &str {
        match self.0.find(':') {
            Some(idx) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// The target name (everything after the first `:`), if present.
    pub fn name(&self) -> Option<&str> {
        self.0.find(':').map(|idx| &self.0[idx + 1..])
    }

    /// The id as a plain string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the build-description document declaring this target.
    pub fn build_file(&self) -> String {
        gn_join(self.dir(), "BUILD.gn")
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}
