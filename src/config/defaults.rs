//! Default text provider
//!
//! The templates used to fill configuration fields a project author did not
//! supply. An explicit passed-in value rather than module-level constants,
//! so batch generation of many projects in one process shares no state.

/// Provider of generated default texts for unresolved configuration fields.
#[derive(Debug, Clone)]
pub struct DefaultProvider {
    /// Template for the one-line description; `{title}` is substituted.
    pub description_template: String,

    /// Template for the summary paragraph; `{title}` is substituted.
    pub summary_template: String,

    /// Placeholder description for visualizations without an override.
    pub viz_description: String,
}

impl Default for DefaultProvider {
    fn default() -> Self {
        Self {
            description_template:
                "{title}: a data analysis and visualization project.".to_string(),
            summary_template: "{title} examines the underlying dataset and presents the \
                 results as a set of focused visualizations."
                .to_string(),
            viz_description:
                "<p>This visualization presents key findings from the analysis.</p>".to_string(),
        }
    }
}

impl DefaultProvider {
    /// Generated description for a project title.
    #[must_use]
    pub fn description_for(&self, title: &str) -> String {
        self.description_template.replace("{title}", title)
    }

    /// Generated summary for a project title.
    #[must_use]
    pub fn summary_for(&self, title: &str) -> String {
        self.summary_template.replace("{title}", title)
    }

    /// Humanized display title for an image stem: underscores and hyphens
    /// become spaces, each word is title-cased.
    #[must_use]
    pub fn viz_title(stem: &str) -> String {
        stem.replace(['_', '-'], " ")
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().collect::<String>() + chars.as_str()
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
