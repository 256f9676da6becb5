/*
 * toc_placeholder.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that removes tableOfContents placeholder nodes.
 */

//! TOC placeholder removal.
//!
//! The `tableOfContents` node is a marker, not content: the outline is
//! rendered by a separate sidebar component driven off the final heading
//! list. This transform removes every placeholder from the top-level
//! stream and records on the context whether one was present, which is
//! what tells the outline consumer to render at all.

use crate::Result;
use crate::transform::{DocTransform, RenderContext};
use folio_doctree::{Doc, Node};

/// Transform that removes TOC placeholder nodes and records their presence.
pub struct TocPlaceholderTransform;

impl DocTransform for TocPlaceholderTransform {
    fn name(&self) -> &str {
        "toc-placeholder"
    }

    fn apply(&self, doc: Doc, ctx: &mut RenderContext) -> Result<Doc> {
        let before = doc.content.len();
        let content: Vec<Node> = doc
            .content
            .into_iter()
            .filter(|node| !matches!(node, Node::TableOfContents(_)))
            .collect();

        if content.len() != before {
            ctx.had_toc_placeholder = true;
        }
        Ok(Doc { content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_doctree::{Paragraph, TableOfContents};

    #[test]
    fn test_removes_placeholder_and_sets_flag() {
        let doc = Doc {
            content: vec![
                Node::TableOfContents(TableOfContents {}),
                Node::Paragraph(Paragraph::default()),
            ],
        };

        let mut ctx = RenderContext::new(None);
        let doc = TocPlaceholderTransform.apply(doc, &mut ctx).unwrap();

        assert_eq!(doc.content.len(), 1);
        assert!(ctx.had_toc_placeholder);
    }

    #[test]
    fn test_flag_stays_false_without_placeholder() {
        let doc = Doc {
            content: vec![Node::Paragraph(Paragraph::default())],
        };

        let mut ctx = RenderContext::new(None);
        TocPlaceholderTransform.apply(doc, &mut ctx).unwrap();
        assert!(!ctx.had_toc_placeholder);
    }
}
