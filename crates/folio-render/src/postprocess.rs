/*
 * postprocess.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Image attribute post-processing over rendered HTML.
 */

//! Image attribute post-processing.
//!
//! The base writer emits `<img>` tags without presentation attributes:
//! alignment, author-set width, and custom classes augment the base tag
//! rather than replacing it. This pass walks the rendered HTML, looks
//! each `<img>` up in the document tree by its `src`, and merges in:
//!
//! - alignment → CSS classes (`left` → `mr-auto block`, `center` →
//!   `mx-auto block`, `right` → `ml-auto block`)
//! - width → `max-width: {width}px` inline style
//! - custom class string → appended verbatim
//!
//! Matching is first-image-in-document-order by `src`. When several
//! image nodes share a `src`, every rendered tag with that `src` gets
//! the first node's attributes; see DESIGN.md for why this ambiguity is
//! kept. Tags whose `src` has no matching node (a drawer image extracted
//! earlier, for instance) pass through unmodified.
//!
//! The pass is plain string processing over the fragment, so it runs
//! identically in any environment; no DOM is involved.

use folio_doctree::{Doc, Image, Node};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::html_writer::{alignment_classes, escape_html};

static IMG_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<img\b[^>]*>").expect("Invalid regex pattern for img tags"));

static SRC_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bsrc="([^"]*)""#).expect("Invalid regex pattern for src"));

static CLASS_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bclass="([^"]*)""#).expect("Invalid regex pattern for class"));

static STYLE_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bstyle="([^"]*)""#).expect("Invalid regex pattern for style"));

/// Apply presentation attributes from the document tree to every `<img>`
/// tag in the rendered HTML. Returns the input unchanged when no tag has
/// a matching image node.
pub fn apply_image_attributes(html: &str, doc: &Doc) -> String {
    IMG_TAG
        .replace_all(html, |caps: &Captures| {
            let tag = &caps[0];
            let Some(src) = SRC_ATTR
                .captures(tag)
                .map(|c| c.get(1).map_or("", |m| m.as_str()).to_string())
            else {
                return tag.to_string();
            };

            match find_image_by_src(doc, &src) {
                Some(image) => merge_image_attrs(tag, image),
                None => tag.to_string(),
            }
        })
        .into_owned()
}

/// Find the first image node in pre-order with the given rendered `src`.
///
/// `src` is the attribute value as it appears in the HTML, i.e. in
/// escaped form; node sources are escaped before comparing.
fn find_image_by_src<'a>(doc: &'a Doc, src: &str) -> Option<&'a Image> {
    fn search<'a>(nodes: &'a [Node], src: &str) -> Option<&'a Image> {
        for node in nodes {
            if let Node::Image(img) = node {
                if escape_html(&img.src) == src {
                    return Some(img);
                }
            }
            if let Some(found) = search(node.children(), src) {
                return Some(found);
            }
        }
        None
    }
    search(&doc.content, src)
}

/// Merge alignment classes, max-width, and the custom class string into
/// an existing `<img>` tag.
fn merge_image_attrs(tag: &str, image: &Image) -> String {
    let mut classes: Vec<String> = Vec::new();
    if let Some(align) = image.align {
        classes.extend(alignment_classes(align).split_whitespace().map(String::from));
    }
    if let Some(custom) = &image.class {
        classes.extend(custom.split_whitespace().map(String::from));
    }

    let style = image.width.map(|w| format!("max-width: {w}px"));

    if classes.is_empty() && style.is_none() {
        return tag.to_string();
    }

    let mut tag = tag.to_string();
    if !classes.is_empty() {
        tag = merge_classes(&tag, &classes);
    }
    if let Some(style) = style {
        tag = merge_style(&tag, &style);
    }
    tag
}

/// Append class tokens to an existing `class` attribute, or insert one.
/// Tokens already present are not repeated.
fn merge_classes(tag: &str, classes: &[String]) -> String {
    if let Some(caps) = CLASS_ATTR.captures(tag) {
        // Existing attribute text is already in escaped form; only the
        // new tokens need escaping.
        let escaped: Vec<String> = classes.iter().map(|c| escape_html(c)).collect();
        let existing = caps.get(1).map_or("", |m| m.as_str());
        let mut merged: Vec<&str> = existing.split_whitespace().collect();
        for class in &escaped {
            if !merged.contains(&class.as_str()) {
                merged.push(class);
            }
        }
        let replacement = format!("class=\"{}\"", merged.join(" "));
        return CLASS_ATTR
            .replace(tag, regex::NoExpand(&replacement))
            .into_owned();
    }
    insert_attr(tag, "class", &classes.join(" "))
}

/// Append a CSS declaration to an existing `style` attribute, or insert
/// one. A declaration already present verbatim is not repeated.
fn merge_style(tag: &str, declaration: &str) -> String {
    if let Some(caps) = STYLE_ATTR.captures(tag) {
        let existing = caps.get(1).map_or("", |m| m.as_str());
        if existing
            .split(';')
            .any(|part| part.trim() == declaration.trim())
        {
            return tag.to_string();
        }
        let merged = format!("{}; {}", existing.trim_end_matches([';', ' ']), declaration);
        let replacement = format!("style=\"{merged}\"");
        return STYLE_ATTR
            .replace(tag, regex::NoExpand(&replacement))
            .into_owned();
    }
    insert_attr(tag, "style", declaration)
}

/// Insert a new attribute before the tag's closing bracket.
fn insert_attr(tag: &str, name: &str, value: &str) -> String {
    let insert_at = tag.rfind('>').unwrap_or(tag.len());
    format!(
        "{} {name}=\"{}\"{}",
        &tag[..insert_at],
        escape_html(value),
        &tag[insert_at..]
    )
}
