//! Memoized one-level header closure per file.
//!
//! For each file the cache holds the set of header names it directly
//! references via `#include "x.h"` or `#include <x.h>` lines, restricted to
//! names ending in `.h`. One level only: headers are not expanded through
//! the headers they themselves include. Entries are immutable once computed
//! and never invalidated within a run; an unreadable file caches an empty
//! set and is not retried.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Lazily populated map from file path to its directly included headers.
#[derive(Debug, Default)]
pub struct HeaderCache {
    entries: HashMap<String, BTreeSet<String>>,
    reads: usize,
}

impl HeaderCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the header set for `path`, reading and parsing the file on
    /// first use and serving the memoized set afterwards.
    pub fn headers_of(&mut self, path: &str) -> &BTreeSet<String> {
        if !self.entries.contains_key(path) {
            self.reads += 1;
            let content = std::fs::read_to_string(Path::new(path)).unwrap_or_default();
            self.entries.insert(path.to_string(), parse_includes(&content));
        }
        &self.entries[path]
    }

    /// Union of the header sets of every file in `paths`.
    pub fn union_of(&mut self, paths: &[String]) -> BTreeSet<String> {
        let mut union = BTreeSet::new();
        for path in paths {
            union.extend(self.headers_of(path).iter().cloned());
        }
        union
    }

    /// Number of file reads performed so far. Lets tests observe that
    /// repeated lookups are served from the cache.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

/// Extracts the header names referenced by include directives in `content`.
fn parse_includes(content: &str) -> BTreeSet<String> {
    content.lines().filter_map(include_target).collect()
}

/// Parses one line as an include directive, returning the referenced name
/// if it ends in `.h`.
fn include_target(line: &str) -> Option<String> {
    let rest = line.trim_start().strip_prefix("#include")?;
    let rest = rest.trim_start();
    let (open, close) = match rest.as_bytes().first()? {
        b'"' => ('"', '"'),
        b'<' => ('<', '>'),
        _ => return None,
    };
    let inner = rest.strip_prefix(open)?;
    let end = inner.find(close)?;
    let name = &inner[..end];
    sift_common::is_header(name).then(|| name.to_string())
}
