//! Discovery walks over the build tree.
//!
//! Paths are produced as `/`-joined strings extending the root string the
//! walk started from, so they line up with the identifiers used in build
//! descriptions. Unreadable directories and non-UTF-8 names are skipped,
//! never errors.

use std::path::Path;

use sift_common::gn_join;

/// Name of the build-description documents the walk collects.
const BUILD_FILE_NAME: &str = "BUILD.gn";

/// Recursively collects every `BUILD.gn` document under `root`, sorted.
pub fn discover_build_files(root: &str) -> Vec<String> {
    let mut found = Vec::new();
    walk(root, &mut |dir, name| {
        if name == BUILD_FILE_NAME {
            found.push(gn_join(dir, name));
        }
    });
    found.sort();
    found
}

/// Recursively collects every file under `dir`, sorted.
///
/// Used to expand declared include directories into concrete file lists.
pub fn files_under(dir: &str) -> Vec<String> {
    let mut found = Vec::new();
    walk(dir, &mut |parent, name| {
        found.push(gn_join(parent, name));
    });
    found.sort();
    found
}

/// Depth-first walk invoking `visit(dir, file_name)` for every plain file.
fn walk(dir: &str, visit: &mut dyn FnMut(&str, &str)) {
    let entries = match std::fs::read_dir(Path::new(dir)) {
        Ok(entries) => entries,
        Err(_) => return,
    };
    let mut names: Vec<(String, bool)> = entries
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let is_dir = entry.file_type().ok()?.is_dir();
            let name = entry.file_name().into_string().ok()?;
            Some((name, is_dir))
        })
        .collect();
    names.sort();

    for (name, is_dir) in names {
        if is_dir {
            walk(&gn_join(dir, &name), visit);
        } else {
            visit(dir, &name);
        }
    }
}
