//! Target and group records.
//!
//! Serialized field names keep the wire format downstream consumers of the
//! output documents already parse (`test_target`, `source_list`, ...).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sift_common::TargetId;

/// One build target: a test binary or a source set.
///
/// A record is created once per matched declaration. The parse pass fills
/// everything except `deps` expansion and `dep_headers`; the resolve pass
/// replaces `deps` with the expanded file list and computes `dep_headers`,
/// after which the record is never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRecord {
    /// Unique id: declaring directory + `:` + declared name.
    #[serde(rename = "test_target")]
    pub target_id: TargetId,
    /// Normalized source paths; the declaring document path comes last.
    #[serde(rename = "source_list")]
    pub sources: Vec<String>,
    /// Dependency entries. After the resolve pass this is the expanded
    /// list: dep source files plus each dep's build-description document.
    #[serde(rename = "deps_list")]
    pub deps: Vec<String>,
    /// Every file under each declared include directory.
    #[serde(rename = "includes_list")]
    pub includes: Vec<String>,
    /// Normalized config entries.
    #[serde(rename = "configs_list")]
    pub configs: Vec<String>,
    /// Header names directly included by the source list.
    #[serde(rename = "source_h")]
    pub source_headers: BTreeSet<String>,
    /// Header names directly included by the expanded dependency list.
    #[serde(rename = "dep_h")]
    pub dep_headers: BTreeSet<String>,
    /// Header names directly included by the include-dir file list.
    #[serde(rename = "includes_h")]
    pub include_headers: BTreeSet<String>,
    /// Header names directly included by the config entries.
    #[serde(rename = "configs_h")]
    pub config_headers: BTreeSet<String>,
}

/// An aggregation target: a name and its normalized dep ids, nothing else.
///
/// Groups are written to the group document for downstream consumers; the
/// impact analysis itself does not consume them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    /// Unique id: declaring directory + `:` + declared name.
    #[serde(rename = "group_name")]
    pub group_id: TargetId,
    /// Normalized dep ids (`dir:name` form).
    #[serde(rename = "deps_list")]
    pub deps: Vec<TargetId>,
}
