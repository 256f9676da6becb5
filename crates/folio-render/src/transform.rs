/*
 * transform.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document transformation pipeline infrastructure.
 */

//! Document transformation pipeline infrastructure.
//!
//! This module provides the core abstractions for tree transformations:
//!
//! - [`DocTransform`] - The trait implemented by all transformations
//! - [`TransformPipeline`] - Ordered collection of transforms to execute
//! - [`RenderContext`] - Side products collected while transforming
//!
//! Transforms run in a flat, ordered sequence (insertion order). Each
//! transform is pure with respect to the tree: it consumes a [`Doc`] and
//! returns a new one, which keeps the stages composable and testable in
//! isolation. Anything a transform pulls out of the stream (an extracted
//! drawer, the TOC placeholder flag) is recorded on the context instead.

use crate::Result;
use folio_doctree::{Doc, DrawerAttrs};

/// Trait for document transformations.
///
/// Transforms reshape the document tree ahead of HTML rendering. They
/// must be `Send + Sync` to support parallel rendering of multiple
/// documents.
pub trait DocTransform: Send + Sync {
    /// Human-readable name for this transform.
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &str;

    /// Apply the transformation, returning the new tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformation fails.
    fn apply(&self, doc: Doc, ctx: &mut RenderContext) -> Result<Doc>;
}

/// Per-render state shared across pipeline stages.
///
/// The context is the only channel for data that leaves the content
/// stream during transformation; the tree itself flows by value from
/// stage to stage.
#[derive(Debug, Default)]
pub struct RenderContext {
    /// Out-of-band hero image URL from the page's metadata block, if any.
    pub hero_image_url: Option<String>,

    /// Drawer pulled out of the content stream, rendered independently.
    pub drawer: Option<DrawerAttrs>,

    /// Whether the document carried a `tableOfContents` placeholder node.
    pub had_toc_placeholder: bool,
}

impl RenderContext {
    pub fn new(hero_image_url: Option<String>) -> Self {
        Self {
            hero_image_url,
            ..Default::default()
        }
    }
}

/// A pipeline of document transforms to execute in order.
///
/// Transforms run in insertion order.
#[derive(Default)]
pub struct TransformPipeline {
    transforms: Vec<Box<dyn DocTransform>>,
}

impl TransformPipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Add a transform to the pipeline.
    ///
    /// Transforms run in the order they are added.
    pub fn push(&mut self, transform: Box<dyn DocTransform>) {
        self.transforms.push(transform);
    }

    /// Get the number of transforms in the pipeline.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Check if the pipeline is empty.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Execute all transforms in insertion order.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. Execution stops on error.
    pub fn execute(&self, mut doc: Doc, ctx: &mut RenderContext) -> Result<Doc> {
        for transform in &self.transforms {
            tracing::debug!(transform = transform.name(), "Running transform");
            doc = transform.apply(doc, ctx)?;
        }

        Ok(doc)
    }

    /// List the names of all transforms in execution order.
    ///
    /// Useful for debugging and logging.
    pub fn transform_names(&self) -> Vec<&str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    impl DocTransform for Noop {
        fn name(&self) -> &str {
            "noop"
        }

        fn apply(&self, doc: Doc, _ctx: &mut RenderContext) -> Result<Doc> {
            Ok(doc)
        }
    }

    #[test]
    fn test_pipeline_runs_in_insertion_order() {
        let mut pipeline = TransformPipeline::new();
        assert!(pipeline.is_empty());
        pipeline.push(Box::new(Noop));
        pipeline.push(Box::new(Noop));
        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.transform_names(), vec!["noop", "noop"]);

        let mut ctx = RenderContext::new(None);
        let doc = pipeline.execute(Doc::default(), &mut ctx).unwrap();
        assert!(doc.content.is_empty());
    }
}
