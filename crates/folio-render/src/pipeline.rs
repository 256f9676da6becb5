/*
 * pipeline.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * End-to-end render pipeline orchestration.
 */

//! End-to-end render pipeline orchestration.
//!
//! [`render_document`] wires the standard stages together: extraction
//! transforms, heading-id assignment, HTML writing, image-attribute
//! post-processing, and heading extraction. Each invocation is a pure,
//! request-scoped computation over the input document; concurrent
//! renders share no mutable state.

use folio_doctree::{Doc, DrawerAttrs};
use serde::Serialize;

use crate::Result;
use crate::html_writer;
use crate::postprocess::apply_image_attributes;
use crate::toc::{HeadingEntry, extract_headings};
use crate::transform::{RenderContext, TransformPipeline};
use crate::transforms::{
    DrawerExtractTransform, HeadingIdTransform, HeroImageTransform, TocPlaceholderTransform,
};

/// Configuration for a document render.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Main/hero image URL from the page's metadata block. When the same
    /// URL is duplicated inline in the content, the first inline
    /// occurrence is suppressed.
    pub hero_image_url: Option<String>,
}

/// Everything a render produces.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOutput {
    /// UTF-8 HTML fragment, ready for injection into a content area.
    pub html: String,

    /// Ordered heading outline; empty unless the document carried a TOC
    /// placeholder and at least one heading survived rendering.
    pub headings: Vec<HeadingEntry>,

    /// Drawer extracted from the content stream, if the document had one.
    pub drawer: Option<DrawerAttrs>,

    /// Whether the document carried a `tableOfContents` placeholder.
    pub had_toc_placeholder: bool,
}

/// Build the standard transform pipeline.
pub fn build_pipeline() -> TransformPipeline {
    let mut pipeline = TransformPipeline::new();
    pipeline.push(Box::new(DrawerExtractTransform));
    pipeline.push(Box::new(TocPlaceholderTransform));
    pipeline.push(Box::new(HeroImageTransform));
    pipeline.push(Box::new(HeadingIdTransform));
    pipeline
}

/// Render a document through the full pipeline.
pub fn render_document(doc: &Doc, config: &RenderConfig) -> Result<RenderOutput> {
    let mut ctx = RenderContext::new(config.hero_image_url.clone());
    let doc = build_pipeline().execute(doc.clone(), &mut ctx)?;

    let html = html_writer::render(&doc)?;
    let html = apply_image_attributes(&html, &doc);
    let headings = extract_headings(&html, ctx.had_toc_placeholder);

    tracing::debug!(
        bytes = html.len(),
        headings = headings.len(),
        drawer = ctx.drawer.is_some(),
        "Rendered document"
    );

    Ok(RenderOutput {
        html,
        headings,
        drawer: ctx.drawer,
        had_toc_placeholder: ctx.had_toc_placeholder,
    })
}
