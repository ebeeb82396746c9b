//! Project directory inspection command handler.
//!
//! Scans a project directory and parses its configuration file without
//! generating anything, so authors can see what a `generate` run would pick
//! up and catch malformed configuration early.

use serde_json::json;

use crate::cli::args::{CheckArgs, OutputFormat};
use crate::config::loader;
use crate::error::FoliogenError;
use crate::scan::{ScanRules, scan_project};

/// Execute `check`.
///
/// # Errors
///
/// Returns an error if the project directory cannot be scanned or the
/// configuration file is present but malformed (same failure modes as
/// `generate`, without the write).
pub fn run(args: &CheckArgs) -> Result<(), FoliogenError> {
    let assets = scan_project(&args.project_dir, &ScanRules::default())?;
    let config_file = loader::load_config_file(&args.project_dir)?;

    match args.format {
        OutputFormat::Human => {
            println!("project directory: {}", args.project_dir.display());
            println!("visualizations:    {}", assets.images.len());
            for image in &assets.images {
                println!("  {} (key: {})", image.file_name, image.key);
            }
            println!(
                "dashboard:         {}",
                assets
                    .dashboard
                    .as_ref()
                    .map_or_else(|| "none".to_string(), |p| p.display().to_string())
            );
            println!(
                "readme:            {}",
                assets
                    .readme
                    .as_ref()
                    .map_or_else(|| "none".to_string(), |p| p.display().to_string())
            );
            println!(
                "configuration:     {}",
                if config_file.is_some() {
                    "present, valid"
                } else {
                    "absent (defaults apply)"
                }
            );
        }
        OutputFormat::Json => {
            let report = json!({
                "project_dir": args.project_dir.display().to_string(),
                "images": assets
                    .images
                    .iter()
                    .map(|img| json!({"file": img.file_name, "key": img.key}))
                    .collect::<Vec<_>>(),
                "dashboard": assets.dashboard.as_ref().map(|p| p.display().to_string()),
                "readme": assets.readme.as_ref().map(|p| p.display().to_string()),
                "config_present": config_file.is_some(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
