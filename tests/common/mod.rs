//! Shared integration-test harness for running the `foliogen` binary against
//! fixture project directories.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Runs the `foliogen` binary with the given arguments and waits for exit.
#[allow(clippy::missing_panics_doc)]
pub fn run_foliogen(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_foliogen");
    Command::new(bin)
        .args(args)
        .arg("--quiet")
        .output()
        .expect("failed to spawn foliogen")
}

/// A fixture project directory plus a separate output directory.
pub struct ProjectFixture {
    /// Root tempdir holding both directories; removed on drop.
    pub root: TempDir,
    /// Project directory handed to `generate`/`check`.
    pub project_dir: PathBuf,
    /// Output directory handed to `generate --output`.
    pub output_dir: PathBuf,
}

impl ProjectFixture {
    /// Creates an empty project fixture.
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        let root = TempDir::new().expect("tempdir");
        let project_dir = root.path().join("project");
        let output_dir = root.path().join("website");
        std::fs::create_dir(&project_dir).expect("project dir");
        Self {
            root,
            project_dir,
            output_dir,
        }
    }

    /// Writes a small file into the project directory.
    #[allow(clippy::missing_panics_doc)]
    pub fn add_file(&self, name: &str, contents: &str) -> &Self {
        std::fs::write(self.project_dir.join(name), contents).expect("write fixture file");
        self
    }

    /// Writes `project_config.json` into the project directory.
    pub fn add_config(&self, json: &str) -> &Self {
        self.add_file("project_config.json", json)
    }

    /// Runs `foliogen generate` for this fixture.
    #[allow(clippy::missing_panics_doc)]
    pub fn generate(&self, title: &str) -> Output {
        run_foliogen(&[
            "generate",
            title,
            self.project_dir.to_str().expect("utf-8 path"),
            "--output",
            self.output_dir.to_str().expect("utf-8 path"),
        ])
    }

    /// Path of the page that `generate` would produce for a slug.
    pub fn output_page(&self, slug: &str) -> PathBuf {
        self.output_dir.join(format!("{slug}-project.html"))
    }

    /// Reads a generated page to a string.
    #[allow(clippy::missing_panics_doc)]
    pub fn read_page(&self, slug: &str) -> String {
        std::fs::read_to_string(self.output_page(slug)).expect("read generated page")
    }
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Asserts that a process failed with the given exit code.
#[allow(clippy::missing_panics_doc)]
pub fn assert_exit_code(output: &Output, expected: i32) {
    assert_eq!(
        output.status.code(),
        Some(expected),
        "unexpected exit code; stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Asserts success and returns stdout as a string.
#[allow(clippy::missing_panics_doc)]
pub fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "command failed; stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Convenience for fixtures that do not need an output dir.
pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}
