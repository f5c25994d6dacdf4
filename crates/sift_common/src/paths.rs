//! Helpers for the `/`-separated path strings used in build descriptions.
//!
//! Build-graph entries are plain strings as they appear in `BUILD.gn`
//! documents and in the JSON output, not OS paths. Only the code that
//! actually opens files converts them to [`std::path::Path`].

/// Suffix identifying a header file.
pub const HEADER_SUFFIX: &str = ".h";

/// Returns true if the path names a header file.
pub fn is_header(path: &str) -> bool {
    path.ends_with(HEADER_SUFFIX)
}

/// Returns true if the string contains a path separator.
///
/// A bare name (no separator) is resolved relative to the declaring
/// document's directory; anything else is used as-is.
pub fn has_separator(s: &str) -> bool {
    s.contains('/')
}

/// Joins a name onto a base directory with a `/` separator.
///
/// An empty base yields the name unchanged; a base with a trailing `/`
/// does not produce a doubled separator.
pub fn gn_join(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else if base.ends_with('/') {
        format!("{base}{name}")
    } else {
        format!("{base}/{name}")
    }
}

/// Returns the directory portion of a path (everything before the last
/// `/`), or an empty string if there is none.
pub fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}
