/*
 * mod.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document transform implementations.
 */

//! Document transform implementations.
//!
//! Each transform lives in its own module and implements the
//! [`DocTransform`](crate::transform::DocTransform) trait. They run in
//! this order in the standard pipeline:
//!
//! 1. [`DrawerExtractTransform`] - pull the drawer out of the stream
//! 2. [`TocPlaceholderTransform`] - remove TOC placeholders, record flag
//! 3. [`HeroImageTransform`] - suppress a duplicated hero image
//! 4. [`HeadingIdTransform`] - assign deterministic heading ids

pub mod drawer;
pub mod heading_ids;
pub mod hero_image;
pub mod toc_placeholder;

pub use drawer::DrawerExtractTransform;
pub use heading_ids::HeadingIdTransform;
pub use hero_image::HeroImageTransform;
pub use toc_placeholder::TocPlaceholderTransform;
