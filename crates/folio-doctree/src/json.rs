/*
 * json.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * JSON reader for editor documents.
 */

//! JSON reader for editor documents.
//!
//! Editor JSON is a uniform shape: every node is an object with a `type`
//! string and optional `attrs`, `content`, `text`, and `marks`. This
//! module deserializes that shape into an untyped [`RawNode`] layer and
//! then converts it into the typed tree, funneling unrecognized types
//! into [`Node::Unknown`] / [`Mark::Unknown`] instead of failing.
//!
//! Attribute reads are permissive throughout: a missing or wrong-typed
//! attribute degrades to its default, never to an error. The only hard
//! errors are malformed JSON and a root whose type is not `doc`.

use crate::mark::{Link, Mark, TextStyle};
use crate::node::{
    Align, Blockquote, BulletList, CodeBlock, Doc, Drawer, DrawerAttrs, HardBreak, Heading,
    HorizontalRule, Image, ListItem, Node, OrderedList, Paragraph, TableOfContents, TaskItem,
    TaskList, Text, Unknown,
};
use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocError {
    #[error("expected a `doc` root node, found `{0}`")]
    NotADocument(String),

    #[error("malformed document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The untyped wire shape of an editor node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawNode {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub attrs: LinkedHashMap<String, Value>,
    #[serde(default)]
    pub content: Vec<RawNode>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub marks: Vec<RawMark>,
}

/// The untyped wire shape of an editor mark.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMark {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub attrs: LinkedHashMap<String, Value>,
}

impl Doc {
    /// Parse a document from an already-deserialized JSON value.
    pub fn from_value(value: &Value) -> Result<Doc, DocError> {
        let raw: RawNode = serde_json::from_value(value.clone())?;
        Doc::from_raw(raw)
    }

    /// Parse a document from a JSON string.
    pub fn from_json(s: &str) -> Result<Doc, DocError> {
        let raw: RawNode = serde_json::from_str(s)?;
        Doc::from_raw(raw)
    }

    fn from_raw(raw: RawNode) -> Result<Doc, DocError> {
        if raw.kind != "doc" {
            return Err(DocError::NotADocument(raw.kind));
        }
        Ok(Doc {
            content: raw.content.into_iter().map(Node::from_raw).collect(),
        })
    }
}

impl Node {
    /// Convert a raw node into its typed form.
    pub fn from_raw(raw: RawNode) -> Node {
        let RawNode {
            kind,
            attrs,
            content,
            text,
            marks,
        } = raw;
        let children = |content: Vec<RawNode>| -> Vec<Node> {
            content.into_iter().map(Node::from_raw).collect()
        };

        match kind.as_str() {
            "paragraph" => Node::Paragraph(Paragraph {
                text_align: attr_str(&attrs, "textAlign"),
                content: children(content),
            }),
            "heading" => Node::Heading(Heading {
                level: attr_u32(&attrs, "level").unwrap_or(1).clamp(1, 6) as u8,
                id: attr_str(&attrs, "id"),
                text_align: attr_str(&attrs, "textAlign"),
                content: children(content),
            }),
            "text" => Node::Text(Text {
                text: text.unwrap_or_default(),
                marks: marks.into_iter().map(Mark::from_raw).collect(),
            }),
            "image" => Node::Image(Image {
                src: attr_str(&attrs, "src").unwrap_or_default(),
                alt: attr_str(&attrs, "alt"),
                title: attr_str(&attrs, "title"),
                width: attr_u32(&attrs, "width"),
                height: attr_u32(&attrs, "height"),
                align: attr_str(&attrs, "align").as_deref().and_then(Align::parse),
                class: attr_str(&attrs, "class"),
            }),
            "bulletList" => Node::BulletList(BulletList {
                content: children(content),
            }),
            "orderedList" => Node::OrderedList(OrderedList {
                start: attr_u32(&attrs, "start"),
                content: children(content),
            }),
            "listItem" => Node::ListItem(ListItem {
                content: children(content),
            }),
            "taskList" => Node::TaskList(TaskList {
                content: children(content),
            }),
            "taskItem" => Node::TaskItem(TaskItem {
                checked: attr_bool(&attrs, "checked"),
                content: children(content),
            }),
            "codeBlock" => Node::CodeBlock(CodeBlock {
                language: attr_str(&attrs, "language"),
                content: children(content),
            }),
            "blockquote" => Node::Blockquote(Blockquote {
                content: children(content),
            }),
            "horizontalRule" => Node::HorizontalRule(HorizontalRule {}),
            "hardBreak" => Node::HardBreak(HardBreak {}),
            "drawer" => Node::Drawer(Drawer {
                attrs: DrawerAttrs {
                    src: attr_str(&attrs, "src").unwrap_or_default(),
                    alt: attr_str(&attrs, "alt"),
                    width: attr_u32(&attrs, "width"),
                    height: attr_u32(&attrs, "height"),
                    align: attr_str(&attrs, "align").as_deref().and_then(Align::parse),
                    title: attr_str(&attrs, "title"),
                },
            }),
            "tableOfContents" => Node::TableOfContents(TableOfContents {}),
            _ => Node::Unknown(Unknown {
                kind,
                attrs,
                content: children(content),
            }),
        }
    }
}

impl Mark {
    /// Convert a raw mark into its typed form.
    pub fn from_raw(raw: RawMark) -> Mark {
        let RawMark { kind, attrs } = raw;
        match kind.as_str() {
            "bold" => Mark::Bold,
            "italic" => Mark::Italic,
            "underline" => Mark::Underline,
            "strike" => Mark::Strike,
            "superscript" => Mark::Superscript,
            "subscript" => Mark::Subscript,
            "highlight" => Mark::Highlight,
            "code" => Mark::Code,
            "link" => Mark::Link(Link {
                href: attr_str(&attrs, "href").unwrap_or_default(),
                target: attr_str(&attrs, "target"),
                rel: attr_str(&attrs, "rel"),
            }),
            "textStyle" => Mark::TextStyle(TextStyle {
                color: attr_str(&attrs, "color"),
                font_family: attr_str(&attrs, "fontFamily"),
            }),
            _ => Mark::Unknown(kind),
        }
    }
}

fn attr_str(attrs: &LinkedHashMap<String, Value>, key: &str) -> Option<String> {
    match attrs.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

// Editors are inconsistent about numeric attributes: widths arrive as
// numbers or as numeric strings depending on how they were authored.
fn attr_u32(attrs: &LinkedHashMap<String, Value>, key: &str) -> Option<u32> {
    match attrs.get(key) {
        Some(Value::Number(n)) => n.as_u64().map(|n| n as u32),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

fn attr_bool(attrs: &LinkedHashMap<String, Value>, key: &str) -> bool {
    matches!(attrs.get(key), Some(Value::Bool(true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_basic_document() {
        let doc = Doc::from_value(&json!({
            "type": "doc",
            "content": [
                {"type": "heading", "attrs": {"level": 2},
                 "content": [{"type": "text", "text": "Intro"}]},
                {"type": "paragraph",
                 "content": [{"type": "text", "text": "Hello"}]}
            ]
        }))
        .unwrap();

        assert_eq!(doc.content.len(), 2);
        match &doc.content[0] {
            Node::Heading(h) => {
                assert_eq!(h.level, 2);
                assert_eq!(h.id, None);
            }
            other => panic!("expected heading, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_doc_root() {
        let err = Doc::from_value(&json!({"type": "paragraph"})).unwrap_err();
        assert!(matches!(err, DocError::NotADocument(kind) if kind == "paragraph"));
    }

    #[test]
    fn test_unknown_node_type_is_preserved() {
        let doc = Doc::from_value(&json!({
            "type": "doc",
            "content": [{"type": "customWidget", "attrs": {"foo": 1},
                         "content": [{"type": "text", "text": "inner"}]}]
        }))
        .unwrap();

        match &doc.content[0] {
            Node::Unknown(u) => {
                assert_eq!(u.kind, "customWidget");
                assert_eq!(u.content.len(), 1);
            }
            other => panic!("expected unknown, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_default() {
        // No attrs, no content, no text anywhere: parses to empty shapes.
        let doc = Doc::from_value(&json!({
            "type": "doc",
            "content": [{"type": "paragraph"}, {"type": "heading"}]
        }))
        .unwrap();

        match &doc.content[1] {
            Node::Heading(h) => assert_eq!(h.level, 1),
            other => panic!("expected heading, got {:?}", other),
        }
    }

    #[test]
    fn test_image_attrs_are_coerced() {
        let doc = Doc::from_value(&json!({
            "type": "doc",
            "content": [{"type": "image", "attrs": {
                "src": "https://cdn.example.com/a.png",
                "width": "480",
                "align": "center",
                "class": "rounded shadow"
            }}]
        }))
        .unwrap();

        match &doc.content[0] {
            Node::Image(img) => {
                assert_eq!(img.width, Some(480));
                assert_eq!(img.align, Some(Align::Center));
                assert_eq!(img.class.as_deref(), Some("rounded shadow"));
                assert_eq!(img.height, None);
            }
            other => panic!("expected image, got {:?}", other),
        }
    }

    #[test]
    fn test_marks_and_unknown_marks() {
        let doc = Doc::from_value(&json!({
            "type": "doc",
            "content": [{"type": "paragraph", "content": [
                {"type": "text", "text": "styled", "marks": [
                    {"type": "bold"},
                    {"type": "link", "attrs": {"href": "https://example.com"}},
                    {"type": "wavy"}
                ]}
            ]}]
        }))
        .unwrap();

        let Node::Paragraph(p) = &doc.content[0] else {
            panic!("expected paragraph");
        };
        let Node::Text(t) = &p.content[0] else {
            panic!("expected text");
        };
        assert_eq!(t.marks.len(), 3);
        assert_eq!(t.marks[0], Mark::Bold);
        assert!(matches!(&t.marks[1], Mark::Link(l) if l.href == "https://example.com"));
        assert!(matches!(&t.marks[2], Mark::Unknown(k) if k == "wavy"));
    }

    #[test]
    fn test_drawer_attrs_preserved() {
        let doc = Doc::from_value(&json!({
            "type": "doc",
            "content": [{"type": "drawer", "attrs": {
                "src": "https://cdn.example.com/diagram.png",
                "alt": "Diagram",
                "width": 800,
                "height": 600,
                "align": "center",
                "title": "Architecture"
            }}]
        }))
        .unwrap();

        match &doc.content[0] {
            Node::Drawer(d) => {
                assert_eq!(d.attrs.src, "https://cdn.example.com/diagram.png");
                assert_eq!(d.attrs.title.as_deref(), Some("Architecture"));
                assert_eq!(d.attrs.width, Some(800));
            }
            other => panic!("expected drawer, got {:?}", other),
        }
    }
}
