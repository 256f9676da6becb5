/*
 * hero_image.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that suppresses a hero image duplicated inline.
 */

//! Hero image duplicate suppression.
//!
//! Blog pages show a main ("hero") image above the article, sourced from
//! a separate metadata block. Authors often paste the same image into the
//! article body as well, which would display it twice. When the hero URL
//! appears more than once among image nodes in the content tree, this
//! transform removes exactly the first occurrence in document order; a
//! single occurrence is assumed intentional and left untouched.
//!
//! A top-level paragraph whose only child was the removed image is
//! dropped entirely afterwards.

use crate::Result;
use crate::transform::{DocTransform, RenderContext};
use folio_doctree::{Doc, Node};

/// Transform that removes the first inline duplicate of the hero image.
pub struct HeroImageTransform;

impl DocTransform for HeroImageTransform {
    fn name(&self) -> &str {
        "hero-image-dedup"
    }

    fn apply(&self, doc: Doc, ctx: &mut RenderContext) -> Result<Doc> {
        let Some(url) = ctx.hero_image_url.clone() else {
            return Ok(doc);
        };

        let mut occurrences = 0usize;
        doc.walk(&mut |node| {
            if let Node::Image(img) = node {
                if img.src == url {
                    occurrences += 1;
                }
            }
        });
        if occurrences < 2 {
            return Ok(doc);
        }

        tracing::debug!(url = %url, occurrences, "Removing duplicated hero image");
        Ok(remove_first_image(doc, &url))
    }
}

/// Remove the first image with the given `src` from the top-level stream
/// (directly or inside a top-level paragraph), then drop paragraphs the
/// removal left empty.
fn remove_first_image(doc: Doc, url: &str) -> Doc {
    let mut removed = false;
    let content: Vec<Node> = doc
        .content
        .into_iter()
        .filter_map(|node| match node {
            Node::Image(img) if !removed && img.src == url => {
                removed = true;
                None
            }
            Node::Paragraph(mut para) if !removed => {
                para.content.retain(|child| {
                    if removed {
                        return true;
                    }
                    if matches!(child, Node::Image(img) if img.src == url) {
                        removed = true;
                        return false;
                    }
                    true
                });
                if para.content.is_empty() {
                    None
                } else {
                    Some(Node::Paragraph(para))
                }
            }
            other => Some(other),
        })
        .collect();

    Doc { content }
}
