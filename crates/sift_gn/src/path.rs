//! Normalization of path entries found in build descriptions.

use sift_common::{gn_join, has_separator};

/// Placeholder token substituted with the configured source root.
pub const SOURCE_ROOT_PLACEHOLDER: &str = "$ace_root";

/// Normalizes one raw list entry from a build description.
///
/// The entry is trimmed and stripped of surrounding quotes. A bare name
/// (no `/`) is joined onto the declaring document's directory; anything
/// else is used as-is apart from [`SOURCE_ROOT_PLACEHOLDER`] substitution.
pub fn normalize_path(raw: &str, base_dir: &str, source_root: &str) -> String {
    let s = raw.trim().trim_matches('"');
    if !has_separator(s) {
        gn_join(base_dir, s)
    } else {
        s.replace(SOURCE_ROOT_PLACEHOLDER, source_root)
    }
}

/// Normalizes every entry of a list field against the same base.
pub fn normalize_all(raw: &[String], base_dir: &str, source_root: &str) -> Vec<String> {
    raw.iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| normalize_path(s, base_dir, source_root))
        .collect()
}
