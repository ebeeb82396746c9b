//! Page renderer
//!
//! Builds the HTML fragments for every configured section, substitutes them
//! into the fixed template, and writes the finished document exactly once.
//! The whole page is assembled in memory; generation either produces the
//! full document or fails before any output file is created.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::schema::{IconCard, ProjectConfig, ProjectLink, TitledItem};
use crate::error::RenderError;
use crate::page::bind::VizBinding;
use crate::page::escape::escape_html;
use crate::page::template::{PAGE_TEMPLATE, substitute};
use crate::scan::ProjectAssets;

/// Suffix appended to the slug to form the output filename.
pub const OUTPUT_SUFFIX: &str = "-project.html";

/// Fixed dashboard section heading.
const DASHBOARD_TITLE: &str = "Interactive Analysis Dashboard";

/// Fixed dashboard section description.
const DASHBOARD_DESCRIPTION: &str = "An interactive dashboard combining all analyses into a \
     single, explorable interface.";

/// Regex extracting the source title from a previously generated page.
static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!-- foliogen:title (.*?) -->").expect("valid regex"));

// ============================================================================
// Rendered Page
// ============================================================================

/// The final output artifact: one complete HTML document plus the identity
/// needed for collision checking.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Canonical slug derived from the title.
    pub slug: String,

    /// Output filename (`<slug>-project.html`).
    pub file_name: String,

    /// Source title the page was generated from.
    pub title: String,

    /// Complete document contents.
    pub html: String,
}

/// Entry in the embedded JSON data block read by the overlay script.
#[derive(Debug, Serialize)]
struct VizDataEntry<'a> {
    title: &'a str,
    image: &'a str,
    description: &'a str,
}

// ============================================================================
// Rendering
// ============================================================================

/// Renders the complete project page.
///
/// # Errors
///
/// Returns a [`RenderError`] only for template invariant violations, which
/// indicate a renderer/template mismatch rather than bad input.
pub fn render(
    config: &ProjectConfig,
    bindings: &[VizBinding],
    assets: &ProjectAssets,
    slug: &str,
) -> Result<RenderedPage, RenderError> {
    // A title with no alphanumeric characters slugs to nothing; the page
    // still needs a filename.
    let slug = if slug.is_empty() { "untitled" } else { slug };

    let viz_data = viz_data_json(bindings)?;

    let values: Vec<(&str, String)> = vec![
        ("SOURCE_TITLE", escape_html(&config.title)),
        ("PROJECT_TITLE", escape_html(&config.title)),
        ("PROJECT_DESCRIPTION", escape_html(&config.description)),
        ("TECH_STACK", tech_stack_html(&config.tech_stack)),
        ("INSIGHT_CARDS", insight_cards_html(config)),
        ("PROJECT_SUMMARY", escape_html(&config.summary)),
        ("KEY_INSIGHTS", icon_cards_html(&config.key_insights)),
        ("VISUALIZATIONS", viz_cards_html(bindings)),
        ("DASHBOARD_TITLE", DASHBOARD_TITLE.to_string()),
        ("DASHBOARD_DESCRIPTION", DASHBOARD_DESCRIPTION.to_string()),
        ("DASHBOARD_LINK", dashboard_link(assets)),
        ("PROJECT_LINKS", project_links_html(&config.project_links, assets)),
        (
            "TECHNICAL_IMPLEMENTATION",
            titled_items_html(&config.technical_implementation),
        ),
        ("BUSINESS_VALUE_TITLE", escape_html(&config.business_value.title)),
        ("BUSINESS_VALUE_ITEMS", icon_cards_html(&config.business_value.items)),
        ("VIZ_OVERLAYS", overlays_html(bindings)),
        ("VISUALIZATION_DATA", viz_data),
    ];

    let html = substitute(PAGE_TEMPLATE, &values)?;

    debug!(slug = %slug, visualizations = bindings.len(), "rendered page");

    Ok(RenderedPage {
        slug: slug.to_string(),
        file_name: format!("{slug}{OUTPUT_SUFFIX}"),
        title: config.title.clone(),
        html,
    })
}

/// Writes the rendered page into the output directory.
///
/// The existing file, if any, must carry a generator marker recording the
/// same source title; anything else is a fatal collision and the existing
/// file is left untouched. A matching marker means an idempotent rerun.
///
/// # Errors
///
/// Returns a [`RenderError`] on collision or on I/O failure.
pub fn write_page(page: &RenderedPage, out_dir: &Path) -> Result<PathBuf, RenderError> {
    let path = out_dir.join(&page.file_name);

    if path.exists() {
        let existing = std::fs::read_to_string(&path)?;
        let marker = MARKER_RE
            .captures(&existing)
            .map(|caps| caps[1].to_string());

        match marker {
            Some(ref title) if title == &escape_html(&page.title) => {
                debug!(path = %path.display(), "regenerating page for same title");
            }
            Some(title) => {
                return Err(RenderError::OutputCollision {
                    path,
                    existing: format!("title \"{title}\""),
                    title: page.title.clone(),
                });
            }
            None => {
                return Err(RenderError::OutputCollision {
                    path,
                    existing: "a file without a generator marker".to_string(),
                    title: page.title.clone(),
                });
            }
        }
    }

    std::fs::create_dir_all(out_dir)?;
    std::fs::write(&path, &page.html)?;

    info!(path = %path.display(), "wrote project page");
    Ok(path)
}

// ============================================================================
// Fragment Builders
// ============================================================================

fn tech_stack_html(tech_stack: &[String]) -> String {
    tech_stack
        .iter()
        .map(|tech| format!(r#"<span class="tech-item">{}</span>"#, escape_html(tech)))
        .collect()
}

fn insight_cards_html(config: &ProjectConfig) -> String {
    config
        .insights
        .iter()
        .map(|insight| {
            format!(
                r#"<div class="insight-card"><h3>{}</h3><p>{}</p></div>"#,
                escape_html(&insight.value),
                escape_html(&insight.label)
            )
        })
        .collect()
}

fn icon_cards_html(cards: &[IconCard]) -> String {
    cards
        .iter()
        .map(|card| {
            format!(
                concat!(
                    r#"<div class="insight-card">"#,
                    r#"<i class="{icon}"></i>"#,
                    "<h3>{title}</h3>",
                    "<p>{description}</p>",
                    "</div>"
                ),
                icon = escape_html(&card.icon),
                title = escape_html(&card.title),
                description = escape_html(&card.description),
            )
        })
        .collect()
}

fn titled_items_html(items: &[TitledItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"<div class="insight-card"><h3>{}</h3><p>{}</p></div>"#,
                escape_html(&item.title),
                escape_html(&item.description)
            )
        })
        .collect()
}

fn viz_cards_html(bindings: &[VizBinding]) -> String {
    bindings
        .iter()
        .map(|viz| {
            format!(
                concat!(
                    r#"<div class="viz-card" data-overlay="{anchor}">"#,
                    r#"<img src="{src}" alt="{title}">"#,
                    r#"<div class="viz-card-content">"#,
                    "<h3>{title}</h3>",
                    r#"<div class="expand-hint"><i class="fas fa-expand-arrows-alt"></i> Click to expand</div>"#,
                    "</div>",
                    "</div>"
                ),
                anchor = viz.anchor,
                src = escape_html(&viz.src),
                title = escape_html(&viz.title),
            )
        })
        .collect()
}

fn overlays_html(bindings: &[VizBinding]) -> String {
    bindings
        .iter()
        .map(|viz| {
            format!(
                concat!(
                    r#"<div class="viz-overlay" id="{anchor}" aria-hidden="true">"#,
                    r#"<div class="viz-overlay-content">"#,
                    r#"<button class="viz-overlay-close" data-close="{anchor}">&times;</button>"#,
                    r#"<img src="{src}" alt="{title}">"#,
                    "<h3>{title}</h3>",
                    r#"<div class="viz-overlay-description">{description}</div>"#,
                    "</div>",
                    "</div>"
                ),
                anchor = viz.anchor,
                src = escape_html(&viz.src),
                title = escape_html(&viz.title),
                // Rich text by contract, inserted verbatim.
                description = viz.description,
            )
        })
        .collect()
}

fn dashboard_link(assets: &ProjectAssets) -> String {
    assets
        .dashboard
        .as_ref()
        .map_or_else(|| "#".to_string(), |path| relative_href(path))
}

fn project_links_html(links: &[ProjectLink], assets: &ProjectAssets) -> String {
    let mut html: String = links
        .iter()
        .map(|link| {
            let style = link
                .style
                .as_ref()
                .map_or_else(String::new, |s| format!(r#" style="{}""#, escape_html(s)));
            format!(
                concat!(
                    r#"<a href="{url}" class="dashboard-link" target="_blank"{style}>"#,
                    r#"<i class="{icon}"></i>"#,
                    "{text}",
                    "</a>"
                ),
                url = escape_html(&link.url),
                style = style,
                icon = escape_html(&link.icon),
                text = escape_html(&link.text),
            )
        })
        .collect();

    if let Some(readme) = &assets.readme {
        html.push_str(&format!(
            concat!(
                r#"<a href="{url}" class="dashboard-link" target="_blank">"#,
                r#"<i class="fas fa-book"></i>"#,
                "Documentation",
                "</a>"
            ),
            url = escape_html(&relative_href(readme)),
        ));
    }

    html
}

/// Embedded JSON map for the overlay script, in visualization order.
fn viz_data_json(bindings: &[VizBinding]) -> Result<String, RenderError> {
    let data: IndexMap<&str, VizDataEntry<'_>> = bindings
        .iter()
        .map(|viz| {
            (
                viz.key.as_str(),
                VizDataEntry {
                    title: &viz.title,
                    image: &viz.src,
                    description: &viz.description,
                },
            )
        })
        .collect();

    serde_json::to_string_pretty(&data).map_err(|e| RenderError::Io(std::io::Error::other(e)))
}

/// Asset path relative to the output document (one level below the root).
fn relative_href(path: &Path) -> String {
    format!("../{}", path.display())
}

// ============================================================================
// Tests
// ============================================================================
