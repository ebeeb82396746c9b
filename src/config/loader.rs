//! Configuration loader and resolver
//!
//! Two stages:
//! 1. [`load_config_file`] reads the optional `project_config.json` from the
//!    project directory, falling back to `analysis_summary.json` (written by
//!    analysis tooling, same schema) when the former is absent. No file →
//!    empty configuration. Malformed file → fatal parse error with location,
//!    so a partially-applied document is never merged.
//! 2. [`resolve`] performs the field-level total merge into a
//!    [`ProjectConfig`], substituting a computed default for every absent
//!    field and synthesizing a description entry for every scanned image.

use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::config::defaults::DefaultProvider;
use crate::config::schema::{ProjectConfig, ProjectConfigFile, VizOverride};
use crate::error::ConfigError;
use crate::scan::ProjectAssets;

/// Configuration filename looked up inside the project directory.
pub const CONFIG_FILE_NAME: &str = "project_config.json";

/// Fallback configuration filename, written by analysis tooling.
pub const SUMMARY_FILE_NAME: &str = "analysis_summary.json";

/// Loads the project configuration from a project directory, if present.
///
/// `project_config.json` takes precedence; `analysis_summary.json` is
/// consulted only when the former is absent. Whichever file is selected is
/// held to the same rule: malformed JSON is fatal, with no fallback to the
/// other file.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the selected file cannot be read or does
/// not parse as valid JSON. No file at all is `Ok(None)`, not an error.
pub fn load_config_file(dir: &Path) -> Result<Option<ProjectConfigFile>, ConfigError> {
    for name in [CONFIG_FILE_NAME, SUMMARY_FILE_NAME] {
        let path = dir.join(name);
        if path.exists() {
            return parse_config_file(&path).map(Some);
        }
    }

    debug!(dir = %dir.display(), "no configuration file, using defaults");
    Ok(None)
}

fn parse_config_file(path: &Path) -> Result<ProjectConfigFile, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let file: ProjectConfigFile =
        serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })?;

    debug!(path = %path.display(), "loaded configuration file");
    Ok(file)
}

/// Resolves a loaded (possibly absent) configuration into a total
/// [`ProjectConfig`].
///
/// Merge semantics are field-level override: a file that supplies only
/// `title` still receives computed defaults for every other field, generated
/// from that custom title rather than the supplied one. Visualization
/// overrides whose key matches no scanned image are dropped with a warning.
#[must_use]
pub fn resolve(
    file: Option<ProjectConfigFile>,
    title: &str,
    assets: &ProjectAssets,
    defaults: &DefaultProvider,
) -> ProjectConfig {
    let file = file.unwrap_or_default();

    let title = file
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| title.to_string());

    let mut overrides = file.visualization_descriptions.unwrap_or_default();
    for key in overrides.keys() {
        if !assets.images.iter().any(|img| &img.key == key) {
            warn!(key = %key, "visualization description matches no scanned image, dropping");
        }
    }

    // Total over the scanned assets, in scan order.
    let mut visualizations: IndexMap<String, VizOverride> = IndexMap::new();
    for image in &assets.images {
        let entry = overrides
            .swap_remove(&image.key)
            .unwrap_or_else(|| VizOverride {
                title: DefaultProvider::viz_title(&image.stem),
                description: defaults.viz_description.clone(),
            });
        visualizations.insert(image.key.clone(), entry);
    }

    ProjectConfig {
        description: file
            .description
            .unwrap_or_else(|| defaults.description_for(&title)),
        summary: file.summary.unwrap_or_else(|| defaults.summary_for(&title)),
        tech_stack: file.tech_stack.unwrap_or_default(),
        insights: file.insights.unwrap_or_default(),
        key_insights: file.key_insights.unwrap_or_default(),
        technical_implementation: file.technical_implementation.unwrap_or_default(),
        business_value: file.business_value.unwrap_or_default(),
        project_links: file.project_links.unwrap_or_default(),
        visualizations,
        title,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{ScanRules, scan_project};
    use std::fs;
    use tempfile::TempDir;

    fn assets_with(images: &[&str]) -> ProjectAssets {
        let tmp = TempDir::new().unwrap();
        for name in images {
            fs::write(tmp.path().join(name), b"x").unwrap();
        }
        scan_project(tmp.path(), &ScanRules::default()).unwrap()
    }

    #[test]
    fn test_missing_file_is_none() {
        let tmp = TempDir::new().unwrap();
        assert!(load_config_file(tmp.path()).unwrap().is_none());
    }

    #[test]
    fn test_summary_file_used_when_config_absent() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(SUMMARY_FILE_NAME),
            r#"{"title": "From Summary"}"#,
        )
        .unwrap();

        let file = load_config_file(tmp.path()).unwrap().unwrap();
        assert_eq!(file.title.as_deref(), Some("From Summary"));
    }

    #[test]
    fn test_config_file_takes_precedence_over_summary() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"{"title": "From Config"}"#,
        )
        .unwrap();
        fs::write(
            tmp.path().join(SUMMARY_FILE_NAME),
            r#"{"title": "From Summary"}"#,
        )
        .unwrap();

        let file = load_config_file(tmp.path()).unwrap().unwrap();
        assert_eq!(file.title.as_deref(), Some("From Config"));
    }

    #[test]
    fn test_malformed_summary_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(SUMMARY_FILE_NAME), "{broken").unwrap();

        let err = load_config_file(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_malformed_config_does_not_fall_back_to_summary() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "{broken").unwrap();
        fs::write(
            tmp.path().join(SUMMARY_FILE_NAME),
            r#"{"title": "From Summary"}"#,
        )
        .unwrap();

        let err = load_config_file(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "{not json").unwrap();

        let err = load_config_file(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_parse_error_reports_location() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "{\n  \"title\": oops\n}").unwrap();

        match load_config_file(tmp.path()).unwrap_err() {
            ConfigError::ParseError { line, .. } => assert_eq!(line, 2),
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_object_is_fully_defaulted() {
        let assets = assets_with(&["trend.png", "summary.png"]);
        let file: ProjectConfigFile = serde_json::from_str("{}").unwrap();
        let config = resolve(Some(file), "Sales Review", &assets, &DefaultProvider::default());

        assert_eq!(config.title, "Sales Review");
        assert!(config.description.contains("Sales Review"));
        assert!(config.summary.contains("Sales Review"));
        assert!(config.tech_stack.is_empty());
        assert!(config.insights.is_empty());
        assert!(config.key_insights.is_empty());
        assert!(config.technical_implementation.is_empty());
        assert!(config.business_value.items.is_empty());
        assert!(config.project_links.is_empty());
        assert_eq!(config.visualizations.len(), 2);
    }

    #[test]
    fn test_no_file_equals_empty_file() {
        let assets = assets_with(&["trend.png"]);
        let defaults = DefaultProvider::default();
        let from_none = resolve(None, "T", &assets, &defaults);
        let from_empty = resolve(Some(ProjectConfigFile::default()), "T", &assets, &defaults);

        assert_eq!(from_none.title, from_empty.title);
        assert_eq!(from_none.description, from_empty.description);
        assert_eq!(from_none.visualizations.len(), from_empty.visualizations.len());
    }

    #[test]
    fn test_custom_title_drives_generated_fields() {
        let assets = assets_with(&[]);
        let file: ProjectConfigFile =
            serde_json::from_str(r#"{"title": "Custom Title"}"#).unwrap();
        let config = resolve(Some(file), "Folder Name", &assets, &DefaultProvider::default());

        assert_eq!(config.title, "Custom Title");
        assert!(config.description.contains("Custom Title"));
        assert!(!config.description.contains("Folder Name"));
        assert!(config.summary.contains("Custom Title"));
    }

    #[test]
    fn test_blank_title_falls_back_to_supplied() {
        let assets = assets_with(&[]);
        let file: ProjectConfigFile = serde_json::from_str(r#"{"title": "  "}"#).unwrap();
        let config = resolve(Some(file), "Supplied", &assets, &DefaultProvider::default());
        assert_eq!(config.title, "Supplied");
    }

    #[test]
    fn test_viz_override_applied_and_defaults_synthesized() {
        let assets = assets_with(&["trend.png", "summary.png"]);
        let file: ProjectConfigFile = serde_json::from_str(
            r#"{"visualization_descriptions": {
                "trend": {"title": "Usage Trend", "description": "<p>Custom.</p>"}
            }}"#,
        )
        .unwrap();
        let config = resolve(Some(file), "T", &assets, &DefaultProvider::default());

        assert_eq!(config.visualizations["trend"].title, "Usage Trend");
        assert_eq!(config.visualizations["trend"].description, "<p>Custom.</p>");
        assert_eq!(config.visualizations["summary"].title, "Summary");
    }

    #[test]
    fn test_unknown_viz_keys_dropped() {
        let assets = assets_with(&["trend.png"]);
        let file: ProjectConfigFile = serde_json::from_str(
            r#"{"visualization_descriptions": {
                "ghost": {"title": "G", "description": "g"}
            }}"#,
        )
        .unwrap();
        let config = resolve(Some(file), "T", &assets, &DefaultProvider::default());

        assert_eq!(config.visualizations.len(), 1);
        assert!(!config.visualizations.contains_key("ghost"));
    }

    #[test]
    fn test_visualizations_follow_scan_order() {
        let assets = assets_with(&["zeta.png", "alpha.png"]);
        let config = resolve(None, "T", &assets, &DefaultProvider::default());
        let keys: Vec<_> = config.visualizations.keys().cloned().collect();
        assert_eq!(keys, ["alpha", "zeta"]);
    }
}
