//! Visualization description binder
//!
//! Joins the scanned images with the resolved configuration into the ordered
//! sequence the renderer consumes. The renderer performs no further lookups;
//! everything it needs per visualization is in one [`VizBinding`].

use std::path::Path;

use crate::config::schema::ProjectConfig;
use crate::page::slug::anchor_id;
use crate::scan::ProjectAssets;

/// One render-ready visualization: image reference, display texts, and the
/// anchor id wiring its thumbnail to its overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VizBinding {
    /// Image key (unique within the page).
    pub key: String,

    /// DOM/anchor identifier for the overlay.
    pub anchor: String,

    /// Image `src` attribute, relative to the output document.
    pub src: String,

    /// Display title.
    pub title: String,

    /// Rich-text description.
    pub description: String,
}

/// Binds each scanned image, in scan order, to its display title and
/// description from the resolved configuration.
///
/// The lookup cannot miss: the resolver guarantees the visualization mapping
/// is total over the scanned assets.
#[must_use]
pub fn bind(assets: &ProjectAssets, config: &ProjectConfig, project_dir: &Path) -> Vec<VizBinding> {
    assets
        .images
        .iter()
        .map(|image| {
            let entry = &config.visualizations[&image.key];
            VizBinding {
                key: image.key.clone(),
                anchor: anchor_id(&image.key),
                src: relative_src(project_dir, &image.file_name),
                title: entry.title.clone(),
                description: entry.description.clone(),
            }
        })
        .collect()
}

/// Builds the image `src` path: the generated page lives one level below the
/// repository root, so assets are addressed as `../<project dir>/<file>`.
fn relative_src(project_dir: &Path, file_name: &str) -> String {
    let dir = project_dir.display().to_string();
    let dir = dir.trim_end_matches('/');
    format!("../{dir}/{file_name}")
}
