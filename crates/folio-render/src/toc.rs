/*
 * toc.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Heading outline extraction from rendered HTML.
 */

//! Heading outline extraction for sidebar navigation.
//!
//! Parses heading elements (`h2`-`h6`) from the final HTML fragment in
//! document order and produces an ordered outline. Entry ids come from
//! the element's `id` attribute when present; otherwise `heading-{index}`
//! is synthesized from the entry's 0-based position among extracted
//! headings. Note that this fallback is an independent id space from the
//! 1-based scheme the heading-id transform assigns - the two must not be
//! assumed equal.
//!
//! The outline is only meaningful when the document carried a
//! `tableOfContents` placeholder; without it (or with zero headings) the
//! extractor yields an empty list and the consumer renders nothing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HEADING_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<h([2-6])([^>]*)>(.*?)</h[2-6]>").expect("Invalid regex pattern for headings")
});

static ID_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bid="([^"]*)""#).expect("Invalid regex pattern for id"));

static ANY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid regex pattern for tags"));

/// A single entry in the heading outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// Anchor id for linking (e.g., "heading-1")
    pub id: String,

    /// Heading depth (2-6 for extracted entries)
    pub level: u8,

    /// Heading text with inline markup stripped and entities unescaped
    pub text: String,
}

/// Extract the heading outline from a rendered HTML fragment.
///
/// `had_toc_placeholder` reflects whether the source document contained a
/// `tableOfContents` node; when false the outline is omitted entirely.
pub fn extract_headings(html: &str, had_toc_placeholder: bool) -> Vec<HeadingEntry> {
    if !had_toc_placeholder {
        return Vec::new();
    }

    HEADING_TAG
        .captures_iter(html)
        .enumerate()
        .map(|(index, caps)| {
            let level: u8 = caps
                .get(1)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(2);
            let attrs = caps.get(2).map_or("", |m| m.as_str());
            let inner = caps.get(3).map_or("", |m| m.as_str());

            let id = ID_ATTR
                .captures(attrs)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| format!("heading-{index}"));

            HeadingEntry {
                id,
                level,
                text: unescape_html(&ANY_TAG.replace_all(inner, "")),
            }
        })
        .collect()
}

/// Reverse the writer's entity escaping for plain-text heading titles.
fn unescape_html(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
