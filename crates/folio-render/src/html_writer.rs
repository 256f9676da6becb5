/*
 * html_writer.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * HTML writer for rich text document trees.
 */

//! HTML writer for rich text document trees.
//!
//! Converts a [`Doc`] into an HTML fragment string. Dispatch is an
//! exhaustive match over [`Node`]; each node type maps to a fixed
//! serialization rule. Text leaves emit HTML-escaped content wrapped by
//! their marks in mark order, first mark innermost.
//!
//! The output is a fragment for direct injection into a page's content
//! area: no surrounding `<html>`/`<body>`, no inter-block newlines.
//! Rendering is a pure function; identical trees yield byte-identical
//! HTML.
//!
//! `Drawer` and `TableOfContents` nodes are filtered out before this
//! stage; if one reaches the writer anyway it renders as the empty
//! string. Unknown node types are skipped the same way, never fatal.

use std::io::{self, Write};

use folio_doctree::{Align, Doc, Image, Mark, Node, Text};

/// Render a document to an HTML fragment string.
pub fn render(doc: &Doc) -> io::Result<String> {
    let mut buf = Vec::new();
    write(doc, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Main entry point: render a document to HTML.
pub fn write<W: Write>(doc: &Doc, buf: &mut W) -> io::Result<()> {
    write_nodes(&doc.content, buf)
}

/// Write a sequence of nodes to HTML.
pub fn write_nodes<W: Write>(nodes: &[Node], buf: &mut W) -> io::Result<()> {
    for node in nodes {
        write_node(node, buf)?;
    }
    Ok(())
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Write a single node to HTML.
fn write_node<W: Write>(node: &Node, buf: &mut W) -> io::Result<()> {
    match node {
        Node::Paragraph(para) => {
            write!(buf, "<p")?;
            write_text_align(&para.text_align, buf)?;
            write!(buf, ">")?;
            write_nodes(&para.content, buf)?;
            write!(buf, "</p>")?;
        }
        Node::Heading(heading) => {
            write!(buf, "<h{}", heading.level)?;
            if let Some(id) = &heading.id {
                write!(buf, " id=\"{}\"", escape_html(id))?;
            }
            write_text_align(&heading.text_align, buf)?;
            write!(buf, ">")?;
            write_nodes(&heading.content, buf)?;
            write!(buf, "</h{}>", heading.level)?;
        }
        Node::Text(text) => {
            write_text(text, buf)?;
        }
        Node::Image(image) => {
            write_image(image, buf)?;
        }
        Node::BulletList(list) => {
            write!(buf, "<ul>")?;
            write_nodes(&list.content, buf)?;
            write!(buf, "</ul>")?;
        }
        Node::OrderedList(list) => {
            write!(buf, "<ol")?;
            if let Some(start) = list.start {
                if start != 1 {
                    write!(buf, " start=\"{start}\"")?;
                }
            }
            write!(buf, ">")?;
            write_nodes(&list.content, buf)?;
            write!(buf, "</ol>")?;
        }
        Node::ListItem(item) => {
            write!(buf, "<li>")?;
            write_nodes(&item.content, buf)?;
            write!(buf, "</li>")?;
        }
        Node::TaskList(list) => {
            write!(buf, "<ul data-type=\"taskList\">")?;
            write_nodes(&list.content, buf)?;
            write!(buf, "</ul>")?;
        }
        Node::TaskItem(item) => {
            write!(buf, "<li data-checked=\"{}\">", item.checked)?;
            write!(buf, "<input type=\"checkbox\"")?;
            if item.checked {
                write!(buf, " checked=\"checked\"")?;
            }
            write!(buf, " disabled=\"disabled\">")?;
            write_nodes(&item.content, buf)?;
            write!(buf, "</li>")?;
        }
        Node::CodeBlock(block) => {
            write!(buf, "<pre><code")?;
            if let Some(language) = &block.language {
                write!(buf, " class=\"language-{}\"", escape_html(language))?;
            }
            write!(buf, ">")?;
            // Code content is plain text; marks do not apply inside a
            // code block.
            for child in &block.content {
                if let Node::Text(text) = child {
                    write!(buf, "{}", escape_html(&text.text))?;
                }
            }
            write!(buf, "</code></pre>")?;
        }
        Node::Blockquote(quote) => {
            write!(buf, "<blockquote>")?;
            write_nodes(&quote.content, buf)?;
            write!(buf, "</blockquote>")?;
        }
        Node::HorizontalRule(_) => {
            write!(buf, "<hr>")?;
        }
        Node::HardBreak(_) => {
            write!(buf, "<br>")?;
        }

        // Extracted before rendering; render as empty string, never error.
        Node::Drawer(_) | Node::TableOfContents(_) => {}

        Node::Unknown(unknown) => {
            tracing::debug!(kind = %unknown.kind, "Skipping unsupported node type");
        }
    }

    Ok(())
}

/// Write a text leaf, wrapping the escaped content in its marks.
///
/// Marks wrap in array order: the first mark ends up innermost, so
/// `[bold, italic]` produces `<em><strong>text</strong></em>`.
fn write_text<W: Write>(text: &Text, buf: &mut W) -> io::Result<()> {
    let mut html = escape_html(&text.text);
    for mark in &text.marks {
        html = wrap_mark(mark, html);
    }
    write!(buf, "{html}")
}

fn wrap_mark(mark: &Mark, inner: String) -> String {
    match mark {
        Mark::Bold => format!("<strong>{inner}</strong>"),
        Mark::Italic => format!("<em>{inner}</em>"),
        Mark::Underline => format!("<u>{inner}</u>"),
        Mark::Strike => format!("<s>{inner}</s>"),
        Mark::Superscript => format!("<sup>{inner}</sup>"),
        Mark::Subscript => format!("<sub>{inner}</sub>"),
        Mark::Highlight => format!("<mark>{inner}</mark>"),
        Mark::Code => format!("<code>{inner}</code>"),
        Mark::Link(link) => {
            let mut tag = format!("<a href=\"{}\"", escape_html(&link.href));
            if let Some(target) = &link.target {
                tag.push_str(&format!(" target=\"{}\"", escape_html(target)));
            }
            if let Some(rel) = &link.rel {
                tag.push_str(&format!(" rel=\"{}\"", escape_html(rel)));
            }
            format!("{tag}>{inner}</a>")
        }
        Mark::TextStyle(style) => {
            if style.is_empty() {
                return inner;
            }
            let mut css = Vec::new();
            if let Some(color) = &style.color {
                css.push(format!("color: {}", escape_html(color)));
            }
            if let Some(font) = &style.font_family {
                css.push(format!("font-family: {}", escape_html(font)));
            }
            format!("<span style=\"{}\">{inner}</span>", css.join("; "))
        }
        Mark::Unknown(_) => inner,
    }
}

fn write_image<W: Write>(image: &Image, buf: &mut W) -> io::Result<()> {
    write!(buf, "<img src=\"{}\"", escape_html(&image.src))?;
    if let Some(alt) = &image.alt {
        write!(buf, " alt=\"{}\"", escape_html(alt))?;
    }
    if let Some(title) = &image.title {
        write!(buf, " title=\"{}\"", escape_html(title))?;
    }
    if let Some(width) = image.width {
        write!(buf, " width=\"{width}\"")?;
    }
    if let Some(height) = image.height {
        write!(buf, " height=\"{height}\"")?;
    }
    write!(buf, ">")
}

fn write_text_align<W: Write>(align: &Option<String>, buf: &mut W) -> io::Result<()> {
    if let Some(align) = align {
        write!(buf, " style=\"text-align: {}\"", escape_html(align))?;
    }
    Ok(())
}

// Alignment classes are used by the image attribute post-processor, not
// the base writer, but they belong with the rest of the serialization
// rules.
/// CSS classes applied for an image alignment value.
pub fn alignment_classes(align: Align) -> &'static str {
    match align {
        Align::Left => "mr-auto block",
        Align::Center => "mx-auto block",
        Align::Right => "ml-auto block",
    }
}
