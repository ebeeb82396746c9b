//! Page template and substitution engine
//!
//! Performs single-pass `{{NAME}}` placeholder substitution into the fixed
//! page template. Placeholders are not user-extensible: a value without a
//! placeholder, or a placeholder without a value, is an internal invariant
//! violation surfaced as a [`RenderError`].

use regex::Regex;
use std::sync::LazyLock;

use crate::error::RenderError;

/// Regex for detecting placeholders that survived substitution.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Z][A-Z0-9_]*)\}\}").expect("valid regex"));

/// The fixed project page template.
///
/// Markup mirrors the hand-authored portfolio shell: same stylesheet, same
/// card classes, and the shared `script.js` that implements the overlay
/// toggle and modal navigation.
pub const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <!-- foliogen:title {{SOURCE_TITLE}} -->
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{PROJECT_TITLE}} - Data Analysis Portfolio</title>
    <link rel="stylesheet" href="styles.css">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css">
</head>
<body>
    <main class="project-page">
        <section class="project-hero">
            <h1>{{PROJECT_TITLE}}</h1>
            <p class="project-description">{{PROJECT_DESCRIPTION}}</p>
            <div class="tech-stack">{{TECH_STACK}}</div>
        </section>

        <section class="project-insights">
            <div class="insight-grid">{{INSIGHT_CARDS}}</div>
        </section>

        <section class="project-summary">
            <h2>Project Overview</h2>
            <p>{{PROJECT_SUMMARY}}</p>
            <div class="insight-grid">{{KEY_INSIGHTS}}</div>
        </section>

        <section class="project-visualizations">
            <h2>Visualizations</h2>
            <div class="viz-grid">{{VISUALIZATIONS}}</div>
        </section>

        <section class="project-dashboard">
            <h2>{{DASHBOARD_TITLE}}</h2>
            <p>{{DASHBOARD_DESCRIPTION}}</p>
            <div class="dashboard-links">
                <a href="{{DASHBOARD_LINK}}" class="dashboard-link" target="_blank">
                    <i class="fas fa-chart-line"></i>
                    Open Dashboard
                </a>
                {{PROJECT_LINKS}}
            </div>
        </section>

        <section class="project-technical">
            <h2>Technical Implementation</h2>
            <div class="insight-grid">{{TECHNICAL_IMPLEMENTATION}}</div>
        </section>

        <section class="project-value">
            <h2>{{BUSINESS_VALUE_TITLE}}</h2>
            <div class="value-grid">{{BUSINESS_VALUE_ITEMS}}</div>
        </section>
    </main>

    {{VIZ_OVERLAYS}}

    <script id="viz-data" type="application/json">
{{VISUALIZATION_DATA}}
    </script>
    <script src="script.js"></script>
</body>
</html>
"#;

/// Substitutes every `(name, value)` pair into the template.
///
/// The template is walked once and values are spliced in between
/// placeholder matches; substituted values are never re-scanned, so
/// configured text may contain `{{...}}` (or any other bytes) and passes
/// through verbatim.
///
/// # Errors
///
/// Returns a [`RenderError`] if the template contains a placeholder with no
/// supplied value, or a supplied value names a placeholder the template
/// lacks. Both indicate a template/renderer mismatch, not bad user input.
pub fn substitute(template: &str, values: &[(&str, String)]) -> Result<String, RenderError> {
    let mut page = String::with_capacity(template.len());
    let mut used: Vec<&str> = Vec::with_capacity(values.len());
    let mut last = 0;

    for m in PLACEHOLDER_RE.find_iter(template) {
        let name = &template[m.start() + 2..m.end() - 2];

        let Some((name, value)) = values.iter().find(|(n, _)| *n == name) else {
            return Err(RenderError::UnresolvedPlaceholder {
                name: name.to_string(),
            });
        };

        page.push_str(&template[last..m.start()]);
        page.push_str(value);
        if !used.contains(name) {
            used.push(*name);
        }
        last = m.end();
    }
    page.push_str(&template[last..]);

    for (name, _) in values {
        if !used.contains(name) {
            return Err(RenderError::MissingPlaceholder {
                name: (*name).to_string(),
            });
        }
    }

    Ok(page)
}
