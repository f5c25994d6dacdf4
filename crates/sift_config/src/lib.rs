//! Parsing and validation of `sift.toml` analyzer configuration files.
//!
//! Every field is optional; the defaults are the paths and names the
//! analyzer has historically been run with, so a tree without a
//! `sift.toml` still analyzes out of the box.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{AnalyzerConfig, ImpactConfig, OutputConfig, ScanConfig};
