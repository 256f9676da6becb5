/*
 * content.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Content accessors over page blocks.
 */

//! Content accessors over page blocks.
//!
//! Blog pages spread their content across blocks: one holds the
//! rich-text document under `content.text`, another the main image under
//! `content.image.content`, another the author list under
//! `content.authors`. These helpers locate those blocks by shape rather
//! than by name, since the CMS does not guarantee block naming across
//! sites.

use crate::page::{Block, Page};
use folio_doctree::{Doc, DocError, Node};
use serde_json::Value;

/// The first block whose `content.text` is an object - the main
/// rich-text content block.
pub fn content_block(page: &Page) -> Option<&Block> {
    page.blocks
        .iter()
        .find(|block| block.content.get("text").is_some_and(Value::is_object))
}

/// Parse a block's `content.text` field into a document.
pub fn rich_text(block: &Block) -> Result<Doc, DocError> {
    match block.content.get("text") {
        Some(text) => Doc::from_value(text),
        None => Err(DocError::NotADocument(String::new())),
    }
}

/// The page's main (hero) image URL.
///
/// Prefers a block with a non-empty `content.image.content` URL; falls
/// back to the first top-level image node in the rich-text content.
pub fn main_image_url(page: &Page) -> Option<String> {
    let from_block = page.blocks.iter().find_map(|block| {
        block
            .content
            .get("image")
            .and_then(|image| image.get("content"))
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(String::from)
    });
    if from_block.is_some() {
        return from_block;
    }

    let doc = rich_text(content_block(page)?).ok()?;
    doc.content.iter().find_map(|node| match node {
        Node::Image(img) if !img.src.is_empty() => Some(img.src.clone()),
        _ => None,
    })
}

/// Author names from the first block carrying a `content.authors` array.
pub fn authors(page: &Page) -> Vec<String> {
    page.blocks
        .iter()
        .find_map(|block| block.content.get("authors").and_then(Value::as_array))
        .map(|list| {
            list.iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Category from the page's public metadata, if set.
pub fn category(page: &Page) -> Option<String> {
    page.public_metadata
        .get("category")
        .and_then(Value::as_str)
        .map(String::from)
}

/// Whether the page is flagged as featured in its public metadata.
pub fn is_featured(page: &Page) -> bool {
    page.public_metadata
        .get("is_featured")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
