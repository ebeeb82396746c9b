//! Error types for `foliogen`
//!
//! One error enum per pipeline stage (scan, configuration, render), an
//! aggregate top-level error, and the process exit code mapping.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `foliogen` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (malformed `project_config.json`)
    pub const CONFIG_ERROR: i32 = 2;

    /// Input error (project directory missing or unreadable, I/O failure)
    pub const INPUT_ERROR: i32 = 3;

    /// Output collision (existing page derived from a different title)
    pub const COLLISION_ERROR: i32 = 4;

    /// Template invariant violation (placeholder missing or unresolved)
    pub const TEMPLATE_ERROR: i32 = 5;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `foliogen` operations.
///
/// Aggregates all stage-specific errors and provides a unified interface
/// for error reporting and exit code mapping.
#[derive(Debug, Error)]
pub enum FoliogenError {
    /// Asset scanning error
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Configuration loading error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Page rendering or output error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Resolved project title is empty
    #[error("project title must not be empty")]
    EmptyTitle,
}

impl FoliogenError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Scan(_) | Self::Io(_) => ExitCode::INPUT_ERROR,
            Self::EmptyTitle => ExitCode::USAGE_ERROR,
            Self::Render(e) => match e {
                RenderError::OutputCollision { .. } => ExitCode::COLLISION_ERROR,
                RenderError::MissingPlaceholder { .. }
                | RenderError::UnresolvedPlaceholder { .. } => ExitCode::TEMPLATE_ERROR,
                RenderError::Io(_) => ExitCode::INPUT_ERROR,
            },
        }
    }
}

// ============================================================================
// Scan Errors
// ============================================================================

/// Asset scanning errors.
///
/// A missing or unreadable project directory is always fatal; the scanner
/// never silently produces an empty asset set.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Project directory does not exist
    #[error("project directory not found: {path}")]
    NotFound {
        /// Path that was scanned
        path: PathBuf,
    },

    /// Path exists but is not a directory
    #[error("not a directory: {path}")]
    NotADirectory {
        /// Path that was scanned
        path: PathBuf,
    },

    /// Directory exists but cannot be read
    #[error("cannot read project directory {path}: {source}")]
    Unreadable {
        /// Path that was scanned
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading errors.
///
/// A missing `project_config.json` is not an error. A present-but-malformed
/// one aborts the run: a partially-applied configuration risks producing a
/// misleading page.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing failed
    #[error("parse error in {path} at line {line}, column {column}: {message}")]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred
        line: usize,
        /// Column number where the error occurred
        column: usize,
        /// Error message from the parser
        message: String,
    },

    /// Configuration file exists but cannot be read
    #[error("cannot read configuration file {path}: {source}")]
    Unreadable {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Page rendering and output errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The renderer supplied a value for a placeholder the template lacks.
    /// Internal invariant violation, not a user-recoverable condition.
    #[error("internal template error: placeholder {{{{{name}}}}} not found in template")]
    MissingPlaceholder {
        /// Placeholder name
        name: String,
    },

    /// A placeholder survived substitution.
    /// Internal invariant violation, not a user-recoverable condition.
    #[error("internal template error: placeholder {{{{{name}}}}} left unresolved")]
    UnresolvedPlaceholder {
        /// Placeholder name
        name: String,
    },

    /// The output path already holds a page derived from a different title.
    #[error(
        "output collision: {path} already exists and was generated from {existing} (refusing to overwrite with \"{title}\")"
    )]
    OutputCollision {
        /// Output path that already exists
        path: PathBuf,
        /// Description of the existing file's origin
        existing: String,
        /// Title of the current invocation
        title: String,
    },

    /// I/O error while writing the output document
    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `foliogen` operations.
pub type Result<T> = std::result::Result<T, FoliogenError>;

// ============================================================================
// Tests
// ============================================================================
