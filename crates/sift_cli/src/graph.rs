//! `sift graph` — build the target graph and write the output documents.
//!
//! Useful for downstream consumers that want the full graph without an
//! impact query.

use sift_impact::write_reports;

use crate::pipeline::{build_graph, resolve_config};
use crate::GlobalArgs;

/// Runs the `sift graph` command.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let graph = build_graph(&config, global);

    write_reports(&graph, &config.output)?;
    if !global.quiet {
        eprintln!(
            "   Wrote {} target(s) to {}, {} group(s) to {}",
            graph.targets.len(),
            config.output.targets,
            graph.groups.len(),
            config.output.groups
        );
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn graph_writes_documents() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().to_str().unwrap().to_string();
        fs::create_dir_all(tmp.path().join("tree/ui")).unwrap();
        fs::write(
            tmp.path().join("tree/ui/BUILD.gn"),
            "group(\"unittests\") {\n  deps = [\":foo_test\"]\n}\n",
        )
        .unwrap();
        let config_path = tmp.path().join("sift.toml");
        fs::write(
            &config_path,
            format!(
                "[scan]\nroot_dir = \"{root}/tree\"\nsource_root = \"{root}/tree\"\n\
                 [output]\ntargets = \"{root}/targets.json\"\ngroups = \"{root}/groups.json\"\n"
            ),
        )
        .unwrap();

        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: Some(config_path.to_str().unwrap().to_string()),
        };
        assert_eq!(run(&global).unwrap(), 0);
        assert!(tmp.path().join("targets.json").exists());

        let groups: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(tmp.path().join("groups.json")).unwrap())
                .unwrap();
        assert_eq!(groups[0]["group_name"], format!("{root}/tree/ui:unittests"));
    }
}
