mod common;

use common::{ProjectFixture, assert_exit_code, stdout_of};

// ============================================================================
// end-to-end generation
// ============================================================================

#[test]
fn sales_review_scenario() {
    let fixture = ProjectFixture::new();
    fixture.add_file("trend.png", "png").add_file("summary.png", "png");

    let output = fixture.generate("Sales Review");
    let stdout = stdout_of(&output);
    assert!(
        stdout.contains("sales-review-project.html"),
        "stdout should print the output path: {stdout}"
    );

    let page = fixture.read_page("sales-review");
    assert!(page.contains("<h1>Sales Review</h1>"));
    assert!(page.contains(r#"id="viz-trend""#));
    assert!(page.contains(r#"id="viz-summary""#));
    assert!(page.contains("<h3>Trend</h3>"));
    assert!(page.contains("<h3>Summary</h3>"));
    // Placeholder descriptions synthesized for both images
    assert!(page.contains("key findings from the analysis"));
}

#[test]
fn generation_is_idempotent() {
    let fixture = ProjectFixture::new();
    fixture.add_file("trend.png", "png");

    assert!(fixture.generate("Sales Review").status.success());
    let first = fixture.read_page("sales-review");

    assert!(fixture.generate("Sales Review").status.success());
    let second = fixture.read_page("sales-review");

    assert_eq!(first, second, "reruns must be byte-identical");
}

#[test]
fn visualizations_sorted_by_filename() {
    let fixture = ProjectFixture::new();
    // Created in anti-sorted order; the page must not care.
    fixture
        .add_file("zeta.png", "png")
        .add_file("midway.png", "png")
        .add_file("alpha.png", "png");

    assert!(fixture.generate("Ordering").status.success());
    let page = fixture.read_page("ordering");

    let alpha = page.find(r#"id="viz-alpha""#).unwrap();
    let midway = page.find(r#"id="viz-midway""#).unwrap();
    let zeta = page.find(r#"id="viz-zeta""#).unwrap();
    assert!(alpha < midway && midway < zeta);
}

#[test]
fn dashboard_and_readme_links() {
    let fixture = ProjectFixture::new();
    fixture
        .add_file("usage_dashboard.html", "<html></html>")
        .add_file("README.md", "# docs");

    assert!(fixture.generate("Linked").status.success());
    let page = fixture.read_page("linked");

    assert!(page.contains("usage_dashboard.html"));
    assert!(page.contains("Documentation"));
    assert!(!page.contains(r##"href="#""##), "dashboard link should be real");
}

// ============================================================================
// configuration resolution
// ============================================================================

#[test]
fn config_overrides_take_precedence() {
    let fixture = ProjectFixture::new();
    fixture.add_file("trend.png", "png").add_config(
        r#"{
            "title": "Custom Title",
            "tech_stack": ["Rust", "Pandas"],
            "visualization_descriptions": {
                "trend": {"title": "Usage Trend", "description": "<p>Ten-year decline.</p>"}
            }
        }"#,
    );

    assert!(fixture.generate("Folder Name").status.success());
    let page = fixture.read_page("custom-title");

    assert!(page.contains("<h1>Custom Title</h1>"));
    assert!(page.contains("Usage Trend"));
    assert!(page.contains("<p>Ten-year decline.</p>"));
    assert!(page.contains("Rust"));
    // Generated description derives from the custom title, not the CLI title
    assert!(page.contains("Custom Title: a data analysis"));
    assert!(!page.contains("Folder Name"));
}

#[test]
fn empty_config_gets_full_defaults() {
    let fixture = ProjectFixture::new();
    fixture.add_file("monthly_totals.png", "png").add_config("{}");

    assert!(fixture.generate("Defaults Run").status.success());
    let page = fixture.read_page("defaults-run");

    assert!(page.contains("<h1>Defaults Run</h1>"));
    assert!(page.contains("<h3>Monthly Totals</h3>"));
}

#[test]
fn summary_file_feeds_page_when_config_absent() {
    let fixture = ProjectFixture::new();
    fixture
        .add_file("trend.png", "png")
        .add_file("analysis_summary.json", r#"{"title": "Quarterly Summary"}"#);

    assert!(fixture.generate("Ignored").status.success());
    let page = fixture.read_page("quarterly-summary");
    assert!(page.contains("<h1>Quarterly Summary</h1>"));
}

#[test]
fn malformed_config_aborts_without_output() {
    let fixture = ProjectFixture::new();
    fixture.add_file("trend.png", "png").add_config("{\"title\": }");

    let output = fixture.generate("Broken Config");
    assert_exit_code(&output, 2);
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("parse error"),
        "stderr should carry the parse diagnostic"
    );
    assert!(
        !fixture.output_page("broken-config").exists(),
        "no output may be written after a config failure"
    );
}

#[test]
fn empty_title_rejected() {
    let fixture = ProjectFixture::new();
    fixture.add_file("trend.png", "png");

    let output = fixture.generate("");
    assert_exit_code(&output, 64);
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("title"),
        "stderr should name the title problem"
    );
    assert!(
        !fixture.output_page("untitled").exists(),
        "no output may be written for an empty title"
    );
}

#[test]
fn whitespace_only_title_rejected() {
    let fixture = ProjectFixture::new();
    fixture.add_file("trend.png", "png");

    let output = fixture.generate("   ");
    assert_exit_code(&output, 64);
    assert!(!fixture.output_page("untitled").exists());
}

#[test]
fn config_title_satisfies_empty_cli_title() {
    let fixture = ProjectFixture::new();
    fixture
        .add_file("trend.png", "png")
        .add_config(r#"{"title": "From Config"}"#);

    assert!(fixture.generate("").status.success());
    let page = fixture.read_page("from-config");
    assert!(page.contains("<h1>From Config</h1>"));
}

#[test]
fn missing_project_dir_aborts() {
    let fixture = ProjectFixture::new();
    std::fs::remove_dir(&fixture.project_dir).unwrap();

    let output = fixture.generate("Ghost");
    assert_exit_code(&output, 3);
    assert!(!fixture.output_page("ghost").exists());
}

// ============================================================================
// collision handling
// ============================================================================

#[test]
fn colliding_slugs_from_different_titles_rejected() {
    let fixture = ProjectFixture::new();

    assert!(fixture.generate("Alpha Beta").status.success());
    let original = fixture.read_page("alpha-beta");

    let output = fixture.generate("alpha-beta");
    assert_exit_code(&output, 4);
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("collision"),
        "stderr should explain the collision"
    );

    // First page untouched
    assert_eq!(fixture.read_page("alpha-beta"), original);
}

#[test]
fn foreign_file_at_output_path_rejected() {
    let fixture = ProjectFixture::new();
    std::fs::create_dir_all(&fixture.output_dir).unwrap();
    std::fs::write(
        fixture.output_page("handmade"),
        "<html>do not clobber</html>",
    )
    .unwrap();

    let output = fixture.generate("Handmade");
    assert_exit_code(&output, 4);
    assert_eq!(
        std::fs::read_to_string(fixture.output_page("handmade")).unwrap(),
        "<html>do not clobber</html>"
    );
}

// ============================================================================
// key disambiguation
// ============================================================================

#[test]
fn colliding_image_keys_get_disambiguators() {
    let fixture = ProjectFixture::new();
    fixture
        .add_file("usage-trend.png", "png")
        .add_file("usage_trend.png", "png");

    assert!(fixture.generate("Keys").status.success());
    let page = fixture.read_page("keys");

    assert!(page.contains(r#"id="viz-usagetrend""#));
    assert!(page.contains(r#"id="viz-usagetrend2""#));
}
