/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::mark::Mark;
use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A rich text document. The root of every editor document is a node of
/// type `doc`; only `doc` may appear as root.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Doc {
    pub content: Nodes,
}

impl Doc {
    /// Visit every node in the document in pre-order.
    pub fn walk(&self, f: &mut impl FnMut(&Node)) {
        for node in &self.content {
            node.walk(f);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Paragraph(Paragraph),
    Heading(Heading),
    Text(Text),
    Image(Image),
    BulletList(BulletList),
    OrderedList(OrderedList),
    ListItem(ListItem),
    TaskList(TaskList),
    TaskItem(TaskItem),
    CodeBlock(CodeBlock),
    Blockquote(Blockquote),
    HorizontalRule(HorizontalRule),
    HardBreak(HardBreak),

    /// Collapsible inline illustration. Extracted from the content stream
    /// before rendering and shown by a dedicated component; renders as the
    /// empty string if it reaches the writer.
    Drawer(Drawer),

    /// Marker indicating the author wants an auto-generated outline
    /// rendered alongside the article. Removed before rendering.
    TableOfContents(TableOfContents),

    /// Any node type this crate does not recognize. Skipped by the writer.
    Unknown(Unknown),
}

pub type Nodes = Vec<Node>;

impl Node {
    /// Visit this node and its descendants in pre-order.
    pub fn walk(&self, f: &mut impl FnMut(&Node)) {
        f(self);
        for child in self.children() {
            child.walk(f);
        }
    }

    /// The node's ordered children, empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Paragraph(n) => &n.content,
            Node::Heading(n) => &n.content,
            Node::BulletList(n) => &n.content,
            Node::OrderedList(n) => &n.content,
            Node::ListItem(n) => &n.content,
            Node::TaskList(n) => &n.content,
            Node::TaskItem(n) => &n.content,
            Node::CodeBlock(n) => &n.content,
            Node::Blockquote(n) => &n.content,
            Node::Unknown(n) => &n.content,
            Node::Text(_)
            | Node::Image(_)
            | Node::HorizontalRule(_)
            | Node::HardBreak(_)
            | Node::Drawer(_)
            | Node::TableOfContents(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    pub text_align: Option<String>,
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading depth, clamped to 1-6 at parse time.
    pub level: u8,
    /// Stable identifier assigned by the heading-id transform, if any.
    pub id: Option<String>,
    pub text_align: Option<String>,
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
    /// Inline formatting, order-significant: the first mark wraps closest
    /// to the text.
    pub marks: Vec<Mark>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: Option<String>,
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub align: Option<Align>,
    /// Custom class string authored in the CMS, applied verbatim by the
    /// image attribute post-processor.
    pub class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BulletList {
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderedList {
    pub start: Option<u32>,
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListItem {
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskList {
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskItem {
    pub checked: bool,
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Blockquote {
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HorizontalRule {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HardBreak {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawer {
    pub attrs: DrawerAttrs,
}

/// Attributes of a drawer node, preserved through extraction so the
/// collapsible-image component can render it independently.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DrawerAttrs {
    pub src: String,
    pub alt: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub align: Option<Align>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableOfContents {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Unknown {
    /// The unrecognized `type` discriminator, kept for diagnostics.
    pub kind: String,
    pub attrs: LinkedHashMap<String, Value>,
    pub content: Nodes,
}

/// Horizontal alignment of an image within the content column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    /// Parse an editor alignment value. Anything unrecognized is `None`.
    pub fn parse(s: &str) -> Option<Align> {
        match s {
            "left" => Some(Align::Left),
            "center" => Some(Align::Center),
            "right" => Some(Align::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}
