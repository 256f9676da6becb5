/*
 * heading_ids.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that assigns deterministic ids to heading nodes.
 */

//! Heading id assignment.
//!
//! Visits every node in pre-order and gives the n-th heading (1-based,
//! counted across the whole document) the id `heading-{n}`. The pass is
//! idempotent: ids that already match the deterministic scheme are left
//! alone, and an id that differs from the computed one is overwritten.
//! This can renumber headings when earlier ones are added or removed; no
//! stability guarantee is made for previously shared anchor links.
//!
//! Only heading attrs change; every other node passes through untouched.

use crate::Result;
use crate::transform::{DocTransform, RenderContext};
use folio_doctree::{Doc, Node, Nodes};

/// Transform that assigns `heading-{n}` ids to heading nodes.
pub struct HeadingIdTransform;

impl DocTransform for HeadingIdTransform {
    fn name(&self) -> &str {
        "heading-ids"
    }

    fn apply(&self, doc: Doc, _ctx: &mut RenderContext) -> Result<Doc> {
        Ok(assign_heading_ids(doc))
    }
}

/// Assign deterministic ids to all heading nodes, returning the new tree.
pub fn assign_heading_ids(doc: Doc) -> Doc {
    let mut ordinal = 0u32;
    Doc {
        content: visit(doc.content, &mut ordinal),
    }
}

fn visit(nodes: Nodes, ordinal: &mut u32) -> Nodes {
    nodes
        .into_iter()
        .map(|node| match node {
            Node::Heading(mut heading) => {
                *ordinal += 1;
                let id = format!("heading-{ordinal}");
                if heading.id.as_deref() != Some(&id) {
                    heading.id = Some(id);
                }
                heading.content = visit(heading.content, ordinal);
                Node::Heading(heading)
            }
            Node::Paragraph(mut n) => {
                n.content = visit(n.content, ordinal);
                Node::Paragraph(n)
            }
            Node::BulletList(mut n) => {
                n.content = visit(n.content, ordinal);
                Node::BulletList(n)
            }
            Node::OrderedList(mut n) => {
                n.content = visit(n.content, ordinal);
                Node::OrderedList(n)
            }
            Node::ListItem(mut n) => {
                n.content = visit(n.content, ordinal);
                Node::ListItem(n)
            }
            Node::TaskList(mut n) => {
                n.content = visit(n.content, ordinal);
                Node::TaskList(n)
            }
            Node::TaskItem(mut n) => {
                n.content = visit(n.content, ordinal);
                Node::TaskItem(n)
            }
            Node::Blockquote(mut n) => {
                n.content = visit(n.content, ordinal);
                Node::Blockquote(n)
            }
            other => other,
        })
        .collect()
}
