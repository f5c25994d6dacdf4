//! Shared helpers for CLI commands: configuration resolution and the
//! graph-building step with progress reporting.

use std::path::Path;

use sift_config::AnalyzerConfig;
use sift_graph::{BuildGraph, GraphBuilder};

use crate::GlobalArgs;

/// Default configuration file name looked up in the working directory.
const CONFIG_FILE_NAME: &str = "sift.toml";

/// Resolves the effective configuration.
///
/// An explicit `--config` path wins and must parse; otherwise a
/// `sift.toml` in the working directory is used if present; otherwise the
/// built-in defaults apply.
pub fn resolve_config(global: &GlobalArgs) -> Result<AnalyzerConfig, Box<dyn std::error::Error>> {
    if let Some(ref path) = global.config {
        return Ok(sift_config::load_config(Path::new(path))?);
    }
    let local = Path::new(CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(sift_config::load_config(local)?);
    }
    Ok(AnalyzerConfig::default())
}

/// Builds the target graph, reporting progress to stderr.
pub fn build_graph(config: &AnalyzerConfig, global: &GlobalArgs) -> BuildGraph {
    if !global.quiet {
        eprintln!("   Scanning {}", config.scan.root_dir);
    }
    let graph = GraphBuilder::new(config.scan.clone()).build();
    if global.verbose {
        eprintln!(
            "   Parsed {} target(s), {} group(s)",
            graph.targets.len(),
            graph.groups.len()
        );
    }
    graph
}
