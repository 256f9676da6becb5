/*
 * drawer.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that extracts the drawer node from the content stream.
 */

//! Drawer extraction.
//!
//! The collapsible drawer illustration is authored inline but rendered by
//! a dedicated component outside the article body. This transform scans
//! the top-level content stream, removes drawer nodes, and surfaces the
//! first one's attrs on the render context. The drawer is never
//! re-inserted into the HTML stream.

use crate::Result;
use crate::transform::{DocTransform, RenderContext};
use folio_doctree::{Doc, Node};

/// Transform that pulls the drawer node out of the content stream.
pub struct DrawerExtractTransform;

impl DocTransform for DrawerExtractTransform {
    fn name(&self) -> &str {
        "drawer-extract"
    }

    fn apply(&self, doc: Doc, ctx: &mut RenderContext) -> Result<Doc> {
        let mut kept = Vec::with_capacity(doc.content.len());
        for node in doc.content {
            match node {
                Node::Drawer(drawer) => {
                    if ctx.drawer.is_none() {
                        ctx.drawer = Some(drawer.attrs);
                    } else {
                        tracing::debug!("Discarding additional drawer node");
                    }
                }
                other => kept.push(other),
            }
        }
        Ok(Doc { content: kept })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_doctree::{Drawer, DrawerAttrs, Paragraph};

    #[test]
    fn test_extracts_single_drawer() {
        let attrs = DrawerAttrs {
            src: "https://cdn.example.com/diagram.png".to_string(),
            title: Some("How it works".to_string()),
            ..Default::default()
        };
        let doc = Doc {
            content: vec![
                Node::Paragraph(Paragraph::default()),
                Node::Drawer(Drawer {
                    attrs: attrs.clone(),
                }),
            ],
        };

        let mut ctx = RenderContext::new(None);
        let doc = DrawerExtractTransform.apply(doc, &mut ctx).unwrap();

        assert_eq!(doc.content.len(), 1);
        assert!(!doc.content.iter().any(|n| matches!(n, Node::Drawer(_))));
        assert_eq!(ctx.drawer, Some(attrs));
    }

    #[test]
    fn test_no_drawer_is_fine() {
        let doc = Doc {
            content: vec![Node::Paragraph(Paragraph::default())],
        };

        let mut ctx = RenderContext::new(None);
        let doc = DrawerExtractTransform.apply(doc, &mut ctx).unwrap();

        assert_eq!(doc.content.len(), 1);
        assert_eq!(ctx.drawer, None);
    }

    #[test]
    fn test_first_drawer_wins() {
        let first = DrawerAttrs {
            src: "first.png".to_string(),
            ..Default::default()
        };
        let second = DrawerAttrs {
            src: "second.png".to_string(),
            ..Default::default()
        };
        let doc = Doc {
            content: vec![
                Node::Drawer(Drawer {
                    attrs: first.clone(),
                }),
                Node::Drawer(Drawer { attrs: second }),
            ],
        };

        let mut ctx = RenderContext::new(None);
        let doc = DrawerExtractTransform.apply(doc, &mut ctx).unwrap();

        assert!(doc.content.is_empty());
        assert_eq!(ctx.drawer, Some(first));
    }
}
