//! Rich text rendering pipeline for Folio
//!
//! This crate turns editor-authored rich text documents into HTML
//! fragments suitable for direct injection into a page's content area,
//! plus the side products the surrounding site needs: an ordered heading
//! outline for sidebar navigation and any extracted drawer illustration.
//!
//! # Architecture
//!
//! The pipeline is organized around these key types:
//!
//! - [`DocTransform`] - Pure tree-to-tree transformation stage
//! - [`TransformPipeline`] - Ordered collection of transforms to execute
//! - [`RenderContext`] - Side products collected while transforming
//! - [`RenderOutput`] - Everything a render produces
//!
//! Control flow for [`render_document`]: drawer extraction → TOC
//! placeholder removal → hero-image dedup → heading-id assignment →
//! HTML write → image-attribute post-process → heading extraction.
//! Every stage is a pure function over the previous stage's output, so
//! concurrent renders of different documents share no mutable state.

pub mod error;
pub mod html_writer;
pub mod pipeline;
pub mod postprocess;
pub mod toc;
pub mod transform;
pub mod transforms;

// Re-export commonly used types
pub use error::{RenderError, Result};
pub use pipeline::{RenderConfig, RenderOutput, render_document};
pub use toc::{HeadingEntry, extract_headings};
pub use transform::{DocTransform, RenderContext, TransformPipeline};
pub use transforms::{
    DrawerExtractTransform, HeadingIdTransform, HeroImageTransform, TocPlaceholderTransform,
};
