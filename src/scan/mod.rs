//! Asset scanner
//!
//! Inspects a project directory and classifies its direct children into
//! visualization images, an optional interactive dashboard document, and an
//! optional README. Classification is filename-driven; the match rules live
//! in [`ScanRules`] as data so new extensions or patterns are configuration,
//! not code changes.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::ScanError;

// ============================================================================
// Scan Rules
// ============================================================================

/// Filename classification rules for project asset scanning.
#[derive(Debug, Clone)]
pub struct ScanRules {
    /// Extensions (lowercase, no dot) classified as visualization images.
    pub image_extensions: Vec<String>,

    /// Case-insensitive substring marking a dashboard document.
    pub dashboard_marker: String,

    /// Extensions (lowercase, no dot) denoting a hypertext document.
    pub dashboard_extensions: Vec<String>,

    /// Case-insensitive literal README filename.
    pub readme_name: String,
}

impl Default for ScanRules {
    fn default() -> Self {
        Self {
            image_extensions: ["png", "jpg", "jpeg", "gif", "svg"]
                .map(String::from)
                .to_vec(),
            dashboard_marker: "dashboard".to_string(),
            dashboard_extensions: ["html", "htm"].map(String::from).to_vec(),
            readme_name: "README.md".to_string(),
        }
    }
}

impl ScanRules {
    fn is_image(&self, name: &str) -> bool {
        extension_of(name)
            .is_some_and(|ext| self.image_extensions.iter().any(|e| e == &ext))
    }

    fn is_dashboard(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.dashboard_marker)
            && extension_of(name)
                .is_some_and(|ext| self.dashboard_extensions.iter().any(|e| e == &ext))
    }

    fn is_readme(&self, name: &str) -> bool {
        name.eq_ignore_ascii_case(&self.readme_name)
    }
}

/// Lowercased extension of a filename, if any.
fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
}

// ============================================================================
// Project Assets
// ============================================================================

/// One discovered visualization image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    /// Full path to the image file.
    pub path: PathBuf,

    /// Filename including extension.
    pub file_name: String,

    /// Filename without extension.
    pub stem: String,

    /// Short key derived from the stem: lowercased, separators stripped,
    /// disambiguated against earlier keys in scan order.
    pub key: String,
}

/// Immutable result of scanning a project directory.
///
/// Built once per generation run and consumed read-only downstream.
#[derive(Debug, Clone, Default)]
pub struct ProjectAssets {
    /// Visualization images, sorted by filename.
    pub images: Vec<ImageAsset>,

    /// Interactive dashboard document, if one was found.
    pub dashboard: Option<PathBuf>,

    /// README file, if one was found.
    pub readme: Option<PathBuf>,
}

// ============================================================================
// Scanning
// ============================================================================

/// Scans a project directory and classifies its files.
///
/// Images are sorted by filename before key assignment: raw directory
/// listings are not ordering-stable across platforms, and both the output
/// document and key disambiguation depend on a canonical order.
///
/// # Errors
///
/// Returns a [`ScanError`] if the path does not exist, is not a directory,
/// or cannot be read. A bad path is never an empty asset set.
pub fn scan_project(dir: &Path, rules: &ScanRules) -> Result<ProjectAssets, ScanError> {
    let metadata = std::fs::metadata(dir).map_err(|_| ScanError::NotFound {
        path: dir.to_path_buf(),
    })?;

    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|source| ScanError::Unreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut file_names: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ScanError::Unreadable {
            path: dir.to_path_buf(),
            source,
        })?;
        let is_file = entry
            .file_type()
            .map_err(|source| ScanError::Unreadable {
                path: entry.path(),
                source,
            })?
            .is_file();
        if !is_file {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => file_names.push(name),
            Err(raw) => {
                warn!(file = ?raw, "skipping file with non-UTF-8 name");
            }
        }
    }
    file_names.sort_unstable();

    let mut assets = ProjectAssets::default();
    let mut seen_keys: Vec<String> = Vec::new();

    for name in &file_names {
        if rules.is_image(name) {
            let stem = Path::new(name)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(name)
                .to_string();
            let key = disambiguate(&image_key(&stem), &seen_keys);
            seen_keys.push(key.clone());
            debug!(file = %name, key = %key, "classified visualization image");
            assets.images.push(ImageAsset {
                path: dir.join(name),
                file_name: name.clone(),
                stem,
                key,
            });
        } else if assets.dashboard.is_none() && rules.is_dashboard(name) {
            debug!(file = %name, "classified dashboard document");
            assets.dashboard = Some(dir.join(name));
        } else if assets.readme.is_none() && rules.is_readme(name) {
            debug!(file = %name, "classified README");
            assets.readme = Some(dir.join(name));
        }
    }

    info!(
        images = assets.images.len(),
        dashboard = assets.dashboard.is_some(),
        readme = assets.readme.is_some(),
        "scanned project directory"
    );

    Ok(assets)
}

/// Derives the short key for an image stem: lowercased with every
/// non-alphanumeric character (underscores, hyphens, spaces, dots) stripped.
#[must_use]
pub fn image_key(stem: &str) -> String {
    stem.to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Resolves key collisions by appending a numeric disambiguator (`2`, `3`,
/// …) to the second and later occurrences, in stable scan order.
fn disambiguate(key: &str, seen: &[String]) -> String {
    if !seen.iter().any(|k| k == key) {
        return key.to_string();
    }
    let mut n = 2;
    loop {
        let candidate = format!("{key}{n}");
        if !seen.iter().any(|k| k == &candidate) {
            return candidate;
        }
        n += 1;
    }
}

// ============================================================================
// Tests
// ============================================================================
