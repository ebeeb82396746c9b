//! Slug and identity derivation
//!
//! The slug is the canonical URL/filename-safe identifier derived from the
//! human-readable title; anchor ids wire each thumbnail to its overlay.

/// Fixed prefix for per-visualization DOM/anchor identifiers.
pub const ANCHOR_PREFIX: &str = "viz-";

/// Derives the canonical slug for a title.
///
/// # Rules
/// 1. Lowercase the entire string
/// 2. Collapse every run of non-alphanumeric characters to a single hyphen
/// 3. Trim leading/trailing hyphens
///
/// The function is pure and idempotent: `slug(slug(x)) == slug(x)`.
#[must_use]
pub fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    out
}

/// Derives the DOM/anchor identifier for an image key.
///
/// Keys are already unique per scan-time disambiguation, so prefixed ids
/// cannot collide within a page.
#[must_use]
pub fn anchor_id(key: &str) -> String {
    format!("{ANCHOR_PREFIX}{key}")
}
