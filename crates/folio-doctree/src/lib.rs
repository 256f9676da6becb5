//! Rich text document tree for Folio.
//!
//! This crate defines the typed document model for editor-authored rich
//! text as stored by the CMS: a tree of [`Node`]s rooted at a [`Doc`],
//! with order-significant [`Mark`]s on text leaves.
//!
//! Documents arrive as JSON produced by a rich-text editor. Parsing is
//! deliberately permissive: missing `attrs`, `content`, or `marks` default
//! to empty, wrong-typed attribute values degrade to `None`, and node or
//! mark types this crate does not recognize become explicit
//! [`Node::Unknown`] / [`Mark::Unknown`] variants rather than
//! deserialization failures.

pub mod json;
pub mod mark;
pub mod node;

pub use json::{DocError, RawMark, RawNode};
pub use mark::{Link, Mark, TextStyle};
pub use node::{
    Align, Blockquote, BulletList, CodeBlock, Doc, Drawer, DrawerAttrs, HardBreak, Heading,
    HorizontalRule, Image, ListItem, Node, Nodes, OrderedList, Paragraph, TableOfContents,
    TaskItem, TaskList, Text, Unknown,
};
