//! Aggregation of scanned declarations into the full target graph.
//!
//! The builder makes one pass over the build tree: load the per-type
//! dependency table from the template document, scan every `BUILD.gn` for
//! test targets and groups, pick up source sets from the shared build file,
//! then resolve dependency entries into expanded file lists and their
//! header closures. All accumulation state is owned here; nothing is
//! global and nothing is mutated after `build` returns.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use sift_common::{parent_dir, TargetId};
use sift_config::ScanConfig;
use sift_gn::{
    discover_build_files, extract_block, files_under, list_field, normalize_all,
    scalar_assignments, scan_declarations, DeclKind, Declaration,
};

use crate::headers::HeaderCache;
use crate::record::{GroupRecord, TargetRecord};

/// The condition values the template document is probed for.
const TEMPLATE_KINDS: [&str; 3] = ["components", "new", "pipeline"];

/// The fully built target graph.
#[derive(Debug, Default)]
pub struct BuildGraph {
    /// Every test-target and source-set record, in scan order.
    pub targets: Vec<TargetRecord>,
    /// Every group record, in scan order.
    pub groups: Vec<GroupRecord>,
}

impl BuildGraph {
    /// Looks up a record by target id.
    pub fn target(&self, id: &str) -> Option<&TargetRecord> {
        self.targets.iter().find(|t| t.target_id.as_str() == id)
    }
}

/// Builds a [`BuildGraph`] from a build-description tree.
pub struct GraphBuilder {
    scan: ScanConfig,
    type_deps: HashMap<String, Vec<String>>,
    targets: Vec<TargetRecord>,
    groups: Vec<GroupRecord>,
    headers: HeaderCache,
}

impl GraphBuilder {
    /// Creates a builder for the configured tree.
    pub fn new(scan: ScanConfig) -> Self {
        Self {
            scan,
            type_deps: HashMap::new(),
            targets: Vec::new(),
            groups: Vec::new(),
            headers: HeaderCache::new(),
        }
    }

    /// Runs the full pass and returns the finished graph.
    pub fn build(mut self) -> BuildGraph {
        self.load_type_deps();

        for path in discover_build_files(&self.scan.root_dir) {
            let content = read_or_empty(&path);
            self.add_document(&path, &content);
        }

        let shared = self.scan.shared_build_file.clone();
        let content = read_or_empty(&shared);
        self.add_source_sets(&shared, &content);

        self.resolve();

        BuildGraph {
            targets: self.targets,
            groups: self.groups,
        }
    }

    /// Populates the per-type dependency table from the template document.
    ///
    /// For each known kind, the block after `if (type == "<kind>")` is
    /// extracted and its `deps` lists collected. An unreadable template
    /// leaves the table empty.
    fn load_type_deps(&mut self) {
        let content = read_or_empty(&self.scan.template_file);
        let base = parent_dir(&self.scan.template_file).to_string();
        for kind in TEMPLATE_KINDS {
            let marker = format!("if (type == \"{kind}\")");
            let deps = match extract_block(&content, &marker) {
                Some(block) => self.normalized_list(block, "deps", &base),
                None => Vec::new(),
            };
            self.type_deps.insert(kind.to_string(), deps);
        }
    }

    /// Records every test-target and group declaration in one document.
    fn add_document(&mut self, path: &str, content: &str) {
        for decl in scan_declarations(content) {
            match decl.kind {
                DeclKind::AceTest | DeclKind::OhosTest => self.add_test_target(path, &decl),
                DeclKind::Group => self.add_group(path, &decl),
                DeclKind::SourceSet => {}
            }
        }
    }

    /// Records the source-set declarations of the shared build document.
    fn add_source_sets(&mut self, path: &str, content: &str) {
        for decl in scan_declarations(content) {
            if decl.kind == DeclKind::SourceSet {
                self.add_test_target(path, &decl);
            }
        }
    }

    fn add_test_target(&mut self, path: &str, decl: &Declaration) {
        let base = parent_dir(path).to_string();

        let mut sources = self.normalized_list(&decl.body, "sources", &base);
        sources.push(path.to_string());

        let mut deps = self.normalized_list(&decl.body, "deps", &base);
        let configs = self.normalized_list(&decl.body, "configs", &base);

        let include_dirs = self.normalized_list(&decl.body, "include_dirs", &base);
        let includes: Vec<String> = include_dirs.iter().flat_map(|d| files_under(d)).collect();

        let source_headers = self.headers.union_of(&sources);
        let include_headers = self.headers.union_of(&includes);
        let config_headers = self.headers.union_of(&configs);

        // Only the short form pulls template deps in via `type = "<kind>"`.
        if decl.kind == DeclKind::AceTest {
            for kind in scalar_assignments(&decl.body, "type") {
                if let Some(extra) = self.type_deps.get(&kind) {
                    deps.extend(extra.iter().cloned());
                }
            }
        }

        self.targets.push(TargetRecord {
            target_id: TargetId::new(&base, &decl.name),
            sources,
            deps,
            includes,
            configs,
            source_headers,
            dep_headers: BTreeSet::new(),
            include_headers,
            config_headers,
        });
    }

    fn add_group(&mut self, path: &str, decl: &Declaration) {
        let base = parent_dir(path).to_string();
        let deps = self
            .normalized_list(&decl.body, "deps", &base)
            .into_iter()
            .map(TargetId::from_raw)
            .collect();
        self.groups.push(GroupRecord {
            group_id: TargetId::new(&base, &decl.name),
            deps,
        });
    }

    /// Extracts and normalizes one list field against a base directory.
    fn normalized_list(&self, body: &str, field: &str, base: &str) -> Vec<String> {
        normalize_all(&list_field(body, field), base, &self.scan.source_root)
    }

    /// Replaces each record's dep entries with the expanded dependency
    /// list and computes its dependency header closure.
    ///
    /// Per dep entry: the source list of the record whose id matches
    /// (first-seen order, deduplicated) plus the dep's own build-description
    /// document path. A dep with no matching record contributes only the
    /// document path.
    fn resolve(&mut self) {
        let sources_by_id: HashMap<String, Vec<String>> = self
            .targets
            .iter()
            .map(|t| (t.target_id.as_str().to_string(), t.sources.clone()))
            .collect();

        for index in 0..self.targets.len() {
            let mut expanded = Vec::new();
            let mut seen = BTreeSet::new();
            for dep in &self.targets[index].deps {
                let dep_id = TargetId::from_raw(dep.as_str());
                if let Some(sources) = sources_by_id.get(dep_id.as_str()) {
                    for source in sources {
                        if seen.insert(source.clone()) {
                            expanded.push(source.clone());
                        }
                    }
                }
                let build_file = dep_id.build_file();
                if seen.insert(build_file.clone()) {
                    expanded.push(build_file);
                }
            }
            let dep_headers = self.headers.union_of(&expanded);
            let target = &mut self.targets[index];
            target.deps = expanded;
            target.dep_headers = dep_headers;
        }
    }
}

/// Reads a document, treating any failure as empty content.
fn read_or_empty(path: &str) -> String {
    std::fs::read_to_string(Path::new(path)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Writes `content` at `rel` under the tempdir, creating parents.
    fn write(tmp: &TempDir, rel: &str, content: &str) {
        let path = tmp.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn scan_config(tmp: &TempDir) -> ScanConfig {
        let root = tmp.path().to_str().unwrap().to_string();
        ScanConfig {
            root_dir: root.clone(),
            source_root: root.clone(),
            template_file: format!("{root}/templates/ace_unittest.gni"),
            shared_build_file: format!("{root}/shared/BUILD.gn"),
        }
    }

    #[test]
    fn single_target_sources_in_order() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp,
            "ui/BUILD.gn",
            "ace_unittest(\"foo_test\") {\n  sources = [\"a.cpp\", \"b.cpp\"]\n}\n",
        );
        let graph = GraphBuilder::new(scan_config(&tmp)).build();
        assert_eq!(graph.targets.len(), 1);

        let root = tmp.path().to_str().unwrap();
        let target = &graph.targets[0];
        assert_eq!(target.target_id.as_str(), format!("{root}/ui:foo_test"));
        // Declaration-relative paths, declaring document appended last.
        assert_eq!(
            target.sources,
            vec![
                format!("{root}/ui/a.cpp"),
                format!("{root}/ui/b.cpp"),
                format!("{root}/ui/BUILD.gn"),
            ]
        );
    }

    #[test]
    fn source_headers_computed_at_parse_time() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "ui/foo.cpp", "#include \"foo.h\"\n#include <base.h>\n");
        write(
            &tmp,
            "ui/BUILD.gn",
            "ohos_unittest(\"foo_test\") {\n  sources = [\"foo.cpp\"]\n}\n",
        );
        let graph = GraphBuilder::new(scan_config(&tmp)).build();
        let target = &graph.targets[0];
        assert!(target.source_headers.contains("foo.h"));
        assert!(target.source_headers.contains("base.h"));
    }

    #[test]
    fn type_assignment_pulls_template_deps() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp,
            "templates/ace_unittest.gni",
            "if (type == \"components\") {\n  deps = [\"$ace_root/frameworks:base\"]\n}\n\
             if (type == \"new\") {\n  deps = [\"$ace_root/core:new_base\"]\n}\n\
             if (type == \"pipeline\") {\n  deps = []\n}\n",
        );
        write(
            &tmp,
            "ui/BUILD.gn",
            "ace_unittest(\"foo_test\") {\n  type = \"components\"\n  sources = [\"foo.cpp\"]\n}\n",
        );
        let graph = GraphBuilder::new(scan_config(&tmp)).build();
        let root = tmp.path().to_str().unwrap();
        let target = &graph.targets[0];
        // The template dep resolves to no record, so expansion keeps only
        // its build-description document.
        assert!(target
            .deps
            .contains(&format!("{root}/frameworks/BUILD.gn")));
    }

    #[test]
    fn plain_form_ignores_type_assignment() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp,
            "templates/ace_unittest.gni",
            "if (type == \"components\") {\n  deps = [\"$ace_root/frameworks:base\"]\n}\n",
        );
        write(
            &tmp,
            "ui/BUILD.gn",
            "ohos_unittest(\"foo_test\") {\n  type = \"components\"\n}\n",
        );
        let graph = GraphBuilder::new(scan_config(&tmp)).build();
        assert!(graph.targets[0].deps.is_empty());
    }

    #[test]
    fn unknown_type_kind_contributes_nothing() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp,
            "ui/BUILD.gn",
            "ace_unittest(\"foo_test\") {\n  type = \"exotic\"\n}\n",
        );
        let graph = GraphBuilder::new(scan_config(&tmp)).build();
        assert!(graph.targets[0].deps.is_empty());
    }

    #[test]
    fn dep_on_sibling_target_expands_to_its_sources() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().to_str().unwrap().to_string();
        write(
            &tmp,
            "base/BUILD.gn",
            "ohos_unittest(\"base_test\") {\n  sources = [\"base.cpp\"]\n}\n",
        );
        write(
            &tmp,
            "ui/BUILD.gn",
            &format!(
                "ohos_unittest(\"ui_test\") {{\n  deps = [\"{root}/base:base_test\"]\n}}\n"
            ),
        );
        let graph = GraphBuilder::new(scan_config(&tmp)).build();
        let ui = graph.target(&format!("{root}/ui:ui_test")).unwrap();
        assert_eq!(
            ui.deps,
            vec![
                format!("{root}/base/base.cpp"),
                format!("{root}/base/BUILD.gn"),
            ]
        );
    }

    #[test]
    fn unresolvable_dep_keeps_only_build_document() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp,
            "ui/BUILD.gn",
            "ohos_unittest(\"ui_test\") {\n  deps = [\"third_party/googletest:gtest\"]\n}\n",
        );
        let graph = GraphBuilder::new(scan_config(&tmp)).build();
        assert_eq!(
            graph.targets[0].deps,
            vec!["third_party/googletest/BUILD.gn".to_string()]
        );
    }

    #[test]
    fn dep_headers_cover_dep_sources() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().to_str().unwrap().to_string();
        write(&tmp, "base/base.cpp", "#include \"base_impl.h\"\n");
        write(
            &tmp,
            "base/BUILD.gn",
            "ohos_unittest(\"base_test\") {\n  sources = [\"base.cpp\"]\n}\n",
        );
        write(
            &tmp,
            "ui/BUILD.gn",
            &format!(
                "ohos_unittest(\"ui_test\") {{\n  deps = [\"{root}/base:base_test\"]\n}}\n"
            ),
        );
        let graph = GraphBuilder::new(scan_config(&tmp)).build();
        let ui = graph.target(&format!("{root}/ui:ui_test")).unwrap();
        assert!(ui.dep_headers.contains("base_impl.h"));
    }

    #[test]
    fn groups_recorded_with_collapsed_ids() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp,
            "ui/BUILD.gn",
            "group(\"unittests\") {\n  deps = [\":foo_test\", \"a/b:bar_test\"]\n}\n",
        );
        let graph = GraphBuilder::new(scan_config(&tmp)).build();
        assert_eq!(graph.groups.len(), 1);

        let root = tmp.path().to_str().unwrap();
        let group = &graph.groups[0];
        assert_eq!(group.group_id.as_str(), format!("{root}/ui:unittests"));
        assert_eq!(group.deps[0].as_str(), format!("{root}/ui:foo_test"));
        assert_eq!(group.deps[1].as_str(), "a/b:bar_test");
    }

    #[test]
    fn include_dirs_expand_to_files() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().to_str().unwrap().to_string();
        write(&tmp, "ui/inc/api.h", "#include \"detail.h\"\n");
        write(
            &tmp,
            "ui/BUILD.gn",
            &format!(
                "ohos_unittest(\"ui_test\") {{\n  include_dirs = [\"{root}/ui/inc\"]\n}}\n"
            ),
        );
        let graph = GraphBuilder::new(scan_config(&tmp)).build();
        let target = &graph.targets[0];
        assert_eq!(target.includes, vec![format!("{root}/ui/inc/api.h")]);
        assert!(target.include_headers.contains("detail.h"));
    }

    #[test]
    fn source_sets_come_from_shared_document_only() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp,
            "ui/BUILD.gn",
            "ohos_source_set(\"ignored\") {\n  sources = [\"x.cpp\"]\n}\n",
        );
        write(
            &tmp,
            "shared/BUILD.gn",
            "ohos_source_set(\"base_set\") {\n  sources = [\"y.cpp\"]\n}\n",
        );
        let graph = GraphBuilder::new(scan_config(&tmp)).build();
        let root = tmp.path().to_str().unwrap();
        let ids: Vec<_> = graph
            .targets
            .iter()
            .map(|t| t.target_id.as_str().to_string())
            .collect();
        assert_eq!(ids, vec![format!("{root}/shared:base_set")]);
    }

    #[test]
    fn empty_tree_builds_empty_graph() {
        let tmp = TempDir::new().unwrap();
        let graph = GraphBuilder::new(scan_config(&tmp)).build();
        assert!(graph.targets.is_empty());
        assert!(graph.groups.is_empty());
    }

    #[test]
    fn missing_template_leaves_type_table_empty() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp,
            "ui/BUILD.gn",
            "ace_unittest(\"t\") {\n  type = \"components\"\n}\n",
        );
        let graph = GraphBuilder::new(scan_config(&tmp)).build();
        assert!(graph.targets[0].deps.is_empty());
    }
}
