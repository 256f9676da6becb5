/*
 * mark.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};

/// An inline formatting descriptor applied to a text leaf.
///
/// Marks are order-significant: when a text leaf carries several marks,
/// the writer wraps the escaped text in mark order, first mark innermost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strike,
    Superscript,
    Subscript,
    Highlight,
    Code,
    Link(Link),
    TextStyle(TextStyle),

    /// Any mark type this crate does not recognize. Wraps nothing.
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub target: Option<String>,
    pub rel: Option<String>,
}

/// Inline character styling from the editor's text-style extensions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: Option<String>,
    pub font_family: Option<String>,
}

impl TextStyle {
    /// True when no styling survives; the writer emits no wrapper then.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.font_family.is_none()
    }
}
