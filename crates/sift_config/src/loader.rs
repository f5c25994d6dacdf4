//! Configuration file loading and validation.

use std::path::Path;

use crate::error::ConfigError;
use crate::types::AnalyzerConfig;

/// Loads and validates a `sift.toml` configuration file.
pub fn load_config(config_path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let content = std::fs::read_to_string(config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `sift.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<AnalyzerConfig, ConfigError> {
    let config: AnalyzerConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that fields the analyzer cannot run without are non-empty.
fn validate_config(config: &AnalyzerConfig) -> Result<(), ConfigError> {
    if config.scan.root_dir.is_empty() {
        return Err(ConfigError::MissingField("scan.root_dir".to_string()));
    }
    if config.impact.subsystem.is_empty() {
        return Err(ConfigError::MissingField("impact.subsystem".to_string()));
    }
    if config.impact.rebuild_marker.is_empty() {
        return Err(ConfigError::MissingField(
            "impact.rebuild_marker".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_gives_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.scan.root_dir, "foundation/arkui/ace_engine");
        assert_eq!(config.impact.change_info, "change_info.json");
    }

    #[test]
    fn parse_partial_override() {
        let toml = r#"
[scan]
root_dir = "src/ui"
source_root = "src/ui"

[impact]
subsystem = "ui_core"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.scan.root_dir, "src/ui");
        assert_eq!(config.scan.source_root, "src/ui");
        assert_eq!(config.impact.subsystem, "ui_core");
        // Untouched sections keep defaults
        assert_eq!(config.impact.rebuild_marker, "TDDarkui_ace_engine");
        assert_eq!(config.output.targets, "test_targets.json");
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[scan]
root_dir = "tree"
source_root = "tree"
template_file = "tree/test/templates.gni"
shared_build_file = "tree/test/BUILD.gn"

[impact]
change_info = "changes.json"
overrides = "overrides.json"
subsystem = "ui"
rebuild_marker = "REBUILD_ALL"
default_target = "tree/test:smoke"

[output]
targets = "out/targets.json"
groups = "out/groups.json"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.scan.template_file, "tree/test/templates.gni");
        assert_eq!(config.impact.rebuild_marker, "REBUILD_ALL");
        assert_eq!(config.impact.default_target, "tree/test:smoke");
        assert_eq!(config.output.groups, "out/groups.json");
    }

    #[test]
    fn empty_root_dir_errors() {
        let toml = "[scan]\nroot_dir = \"\"\n";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn empty_subsystem_errors() {
        let toml = "[impact]\nsubsystem = \"\"\n";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn empty_rebuild_marker_errors() {
        let toml = "[impact]\nrebuild_marker = \"\"\n";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn io_error_from_nonexistent_file() {
        let err = load_config(Path::new("/nonexistent/sift.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
