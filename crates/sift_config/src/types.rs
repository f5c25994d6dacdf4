//! Configuration types deserialized from `sift.toml`.

use serde::Deserialize;

/// The top-level analyzer configuration parsed from `sift.toml`.
///
/// All sections and fields are optional; defaults match the paths the
/// analyzer has historically used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzerConfig {
    /// Build-tree scanning settings.
    #[serde(default)]
    pub scan: ScanConfig,
    /// Change-impact decision settings.
    #[serde(default)]
    pub impact: ImpactConfig,
    /// Output document paths.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings for locating and scanning the build-description tree.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Root directory walked for `BUILD.gn` documents.
    #[serde(default = "default_root_dir")]
    pub root_dir: String,
    /// Value substituted for the `$ace_root` placeholder in paths.
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Template document providing the per-type dependency lists.
    #[serde(default = "default_template_file")]
    pub template_file: String,
    /// Build document additionally parsed for source-set declarations.
    #[serde(default = "default_shared_build_file")]
    pub shared_build_file: String,
}

/// Settings for the change-impact decision.
#[derive(Debug, Clone, Deserialize)]
pub struct ImpactConfig {
    /// Path of the change-description document.
    #[serde(default = "default_change_info")]
    pub change_info: String,
    /// Path of the migration-override document.
    #[serde(default = "default_overrides")]
    pub overrides: String,
    /// The single subsystem name this graph can attribute changes to.
    #[serde(default = "default_subsystem")]
    pub subsystem: String,
    /// Sentinel printed when impact cannot be attributed.
    #[serde(default = "default_rebuild_marker")]
    pub rebuild_marker: String,
    /// Baseline smoke-test target printed when nothing is impacted.
    #[serde(default = "default_target")]
    pub default_target: String,
}

/// Paths of the two documents written at the end of every run.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the full target-record document.
    #[serde(default = "default_targets_out")]
    pub targets: String,
    /// Path of the full group-record document.
    #[serde(default = "default_groups_out")]
    pub groups: String,
}

fn default_root_dir() -> String {
    "foundation/arkui/ace_engine".to_string()
}

fn default_source_root() -> String {
    "foundation/arkui/ace_engine".to_string()
}

fn default_template_file() -> String {
    "foundation/arkui/ace_engine/test/unittest/ace_unittest.gni".to_string()
}

fn default_shared_build_file() -> String {
    "foundation/arkui/ace_engine/test/unittest/BUILD.gn".to_string()
}

fn default_change_info() -> String {
    "change_info.json".to_string()
}

fn default_overrides() -> String {
    "developtools/integration_verification/tools/gated_check_in/ace_engine.json".to_string()
}

fn default_subsystem() -> String {
    "arkui_ace_engine".to_string()
}

fn default_rebuild_marker() -> String {
    "TDDarkui_ace_engine".to_string()
}

fn default_target() -> String {
    "foundation/arkui/ace_engine/test/unittest/adapter/ohos/entrance:container_test".to_string()
}

fn default_targets_out() -> String {
    "test_targets.json".to_string()
}

fn default_groups_out() -> String {
    "groups.json".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            source_root: default_source_root(),
            template_file: default_template_file(),
            shared_build_file: default_shared_build_file(),
        }
    }
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            change_info: default_change_info(),
            overrides: default_overrides(),
            subsystem: default_subsystem(),
            rebuild_marker: default_rebuild_marker(),
            default_target: default_target(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            targets: default_targets_out(),
            groups: default_groups_out(),
        }
    }
}
