//! `sift analyze` — the full change-impact pipeline.
//!
//! 1. Resolve configuration (`--config`, `./sift.toml`, or defaults)
//! 2. Scan the build tree into the target graph
//! 3. Load the change description and migration overrides
//! 4. Print the verdict line on stdout
//! 5. Write the target and group documents

use sift_impact::{decide, write_reports, ChangeSet, MigrationOverrides};

use crate::pipeline::{build_graph, resolve_config};
use crate::{AnalyzeArgs, GlobalArgs};

/// Runs the `sift analyze` command.
///
/// Analysis always produces a printable verdict; only configuration and
/// report-write failures are errors.
pub fn run(args: &AnalyzeArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let graph = build_graph(&config, global);

    let change_info = args
        .change_info
        .as_deref()
        .unwrap_or(&config.impact.change_info);
    let changes = ChangeSet::load(change_info, &config.scan.source_root);
    if global.verbose {
        eprintln!(
            "   {} changed file(s), {} subsystem(s)",
            changes.files.len(),
            changes.subsystems.len()
        );
    }

    let overrides = MigrationOverrides::load(&config.impact.overrides);
    let verdict = decide(&graph, &changes, &overrides, &config.impact);

    println!("{}", verdict.render(&config.impact));

    write_reports(&graph, &config.output)?;
    if global.verbose {
        eprintln!(
            "   Wrote {} and {}",
            config.output.targets, config.output.groups
        );
    }

    Ok(0)
}
