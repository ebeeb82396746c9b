//! HTML escaping for substituted text
//!
//! Titles, labels, and other plain-text configuration values are escaped
//! before substitution. Rich-text visualization descriptions are inserted
//! verbatim by design; they are authored HTML.

/// Escapes the five HTML-significant characters in text content.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
