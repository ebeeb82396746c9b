//! Configuration schema types
//!
//! Two layers: [`ProjectConfigFile`] is the raw, everything-optional shape
//! deserialized from `project_config.json`, and [`ProjectConfig`] is the
//! resolved, fully-populated configuration consumed by the renderer. The
//! resolver's field-level merge is the only way to build a [`ProjectConfig`],
//! so "field absent → apply default" is a total, type-checked operation
//! instead of ad hoc dictionary lookups.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Raw File Schema
// ============================================================================

/// Raw `project_config.json` contents.
///
/// Every field is optional; unknown fields are ignored for forward
/// compatibility. Field names match the JSON written by project authors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProjectConfigFile {
    /// Page title override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// One-line project description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Technology/tool names shown as badges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,

    /// Headline metric cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<Vec<InsightStat>>,

    /// Longer project summary paragraph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Key-insight cards with icons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_insights: Option<Vec<IconCard>>,

    /// Technical implementation cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_implementation: Option<Vec<TitledItem>>,

    /// Business value block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_value: Option<BusinessValue>,

    /// External project links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_links: Option<Vec<ProjectLink>>,

    /// Per-image title/description overrides, keyed by image key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visualization_descriptions: Option<IndexMap<String, VizOverride>>,
}

/// A headline metric: a value and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightStat {
    /// Metric value (e.g. "127,579").
    pub value: String,

    /// Metric label (e.g. "Data Points Processed").
    pub label: String,
}

/// A card with an icon, title, and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconCard {
    /// Icon class (e.g. "fas fa-chart-line").
    #[serde(default)]
    pub icon: String,

    /// Card title.
    pub title: String,

    /// Card body text.
    pub description: String,
}

/// A card with a title and description, no icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledItem {
    /// Card title.
    pub title: String,

    /// Card body text.
    pub description: String,
}

/// Business value section: a heading plus icon cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessValue {
    /// Section heading (e.g. "For Data-Driven Organizations").
    #[serde(default)]
    pub title: String,

    /// Value proposition cards.
    #[serde(default)]
    pub items: Vec<IconCard>,
}

/// An external link rendered as a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    /// Link text.
    pub text: String,

    /// Icon class.
    #[serde(default)]
    pub icon: String,

    /// Link target URL.
    pub url: String,

    /// Optional inline style override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// Per-visualization display override.
///
/// The description is rich text and is inserted into the page verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VizOverride {
    /// Display title for the visualization.
    pub title: String,

    /// Rich-text description shown in the overlay.
    pub description: String,
}

// ============================================================================
// Resolved Configuration
// ============================================================================

/// The resolved, fully-populated project configuration.
///
/// Invariants maintained by the resolver:
/// - `title` is non-empty;
/// - `visualizations` has exactly one entry per scanned image key, in scan
///   order, and no entry for a key the scanner did not produce.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Page title.
    pub title: String,

    /// One-line project description.
    pub description: String,

    /// Technology/tool names shown as badges.
    pub tech_stack: Vec<String>,

    /// Headline metric cards.
    pub insights: Vec<InsightStat>,

    /// Longer project summary paragraph.
    pub summary: String,

    /// Key-insight cards with icons.
    pub key_insights: Vec<IconCard>,

    /// Technical implementation cards.
    pub technical_implementation: Vec<TitledItem>,

    /// Business value block (empty title and items when not configured).
    pub business_value: BusinessValue,

    /// External project links.
    pub project_links: Vec<ProjectLink>,

    /// Title/description per image key, total over the scanned assets.
    pub visualizations: IndexMap<String, VizOverride>,
}

// ============================================================================
// Tests
// ============================================================================
