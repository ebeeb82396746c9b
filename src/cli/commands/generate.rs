//! Project page generation command handler.
//!
//! Orchestrates the pipeline: scan → resolve → bind → render → write.
//! Each stage consumes only the stages before it; any failure aborts the
//! whole run before the output file is created.

use tracing::info;

use crate::cli::args::GenerateArgs;
use crate::config::defaults::DefaultProvider;
use crate::config::loader;
use crate::error::FoliogenError;
use crate::page::bind::bind;
use crate::page::render::{render, write_page};
use crate::page::slug::slug;
use crate::scan::{ScanRules, scan_project};

/// Execute `generate`.
///
/// # Errors
///
/// Returns an error if the resolved title is empty, the project directory
/// cannot be scanned, the configuration file is malformed, rendering
/// violates a template invariant, or the output path collides with a page
/// generated from a different title.
pub fn run(args: &GenerateArgs) -> Result<(), FoliogenError> {
    let rules = ScanRules::default();
    let defaults = DefaultProvider::default();

    let assets = scan_project(&args.project_dir, &rules)?;
    let config_file = loader::load_config_file(&args.project_dir)?;
    let config = loader::resolve(config_file, &args.title, &assets, &defaults);

    // Neither the CLI nor the configuration file supplied a usable title.
    if config.title.trim().is_empty() {
        return Err(FoliogenError::EmptyTitle);
    }

    let page_slug = slug(&config.title);
    let bindings = bind(&assets, &config, &args.project_dir);

    info!(
        title = %config.title,
        slug = %page_slug,
        visualizations = bindings.len(),
        "generating project page"
    );

    let page = render(&config, &bindings, &assets, &page_slug)?;
    let path = write_page(&page, &args.output)?;

    println!("{}", path.display());
    Ok(())
}
