//! sift CLI — change-impact test selection for GN build trees.
//!
//! Provides `sift analyze` for the full pipeline (scan the build tree,
//! ingest the change description, print the impacted-target line, write the
//! graph documents) and `sift graph` for writing the graph documents alone.

#![warn(missing_docs)]

mod analyze;
mod graph;
mod pipeline;

use std::process;

use clap::{Parser, Subcommand};

/// sift — selects the unit tests a change actually impacts.
#[derive(Parser, Debug)]
#[command(name = "sift", version, about = "Change-impact test selection for GN build trees")]
pub struct Cli {
    /// Suppress all output except the verdict line and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Report per-phase counts while running.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `sift.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full change-impact analysis.
    Analyze(AnalyzeArgs),
    /// Build the target graph and write the output documents only.
    Graph,
}

/// Arguments for the `sift analyze` subcommand.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Path of the change-description document (overrides the config).
    #[arg(long)]
    pub change_info: Option<String>,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress progress output.
    pub quiet: bool,
    /// Whether to print per-phase counts.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Analyze(ref args) => analyze::run(args, &global),
        Command::Graph => graph::run(&global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
