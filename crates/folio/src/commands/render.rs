/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Render command implementation
 */

//! Render command implementation.
//!
//! Renders a rich-text document to an HTML fragment. The input is either
//! a bare editor document (`{"type": "doc", ...}`) or a whole CMS page
//! (`{"title": ..., "blocks": [...]}`); for a page, the rich-text block
//! is located by name or by shape and the page's main image URL feeds the
//! hero-image dedup stage.

use std::fs;
use std::io::Read;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use folio_cms::{Page, content_block, find_block_by_name, main_image_url, rich_text};
use folio_doctree::Doc;
use folio_render::{RenderConfig, render_document};

/// Arguments for the render command
#[derive(Debug)]
pub struct RenderArgs {
    /// Input file path, '-' or None for stdin
    pub input: Option<String>,
    /// Output file path, None for stdout
    pub output: Option<String>,
    /// Page block name to render
    pub block: Option<String>,
    /// Hero image URL override
    pub hero_image: Option<String>,
    /// Emit full render output as JSON
    pub json: bool,
}

/// Execute the render command
pub fn execute(args: RenderArgs) -> Result<()> {
    let source = read_input(args.input.as_deref())?;
    let value: serde_json::Value =
        serde_json::from_str(&source).context("Input is not valid JSON")?;

    let (doc, page_hero) = load_document(&value, args.block.as_deref())?;

    let config = RenderConfig {
        hero_image_url: args.hero_image.or(page_hero),
    };
    let output = render_document(&doc, &config)?;
    info!(
        bytes = output.html.len(),
        headings = output.headings.len(),
        "Render complete"
    );

    let rendered = if args.json {
        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        json
    } else {
        let mut html = output.html;
        html.push('\n');
        html
    };

    match args.output {
        Some(path) => {
            fs::write(&path, rendered).with_context(|| format!("Failed to write {path}"))?
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Resolve the document to render from the input JSON, plus the page's
/// main image URL when the input is a page.
fn load_document(
    value: &serde_json::Value,
    block_name: Option<&str>,
) -> Result<(Doc, Option<String>)> {
    // A bare editor document.
    if value.get("type").and_then(|t| t.as_str()) == Some("doc") {
        debug!("Input is a bare editor document");
        return Ok((Doc::from_value(value)?, None));
    }

    if value.get("blocks").is_none() {
        bail!("Input is neither an editor document nor a CMS page");
    }

    let page: Page = serde_json::from_value(value.clone()).context("Malformed CMS page")?;
    let block = match block_name {
        Some(name) => find_block_by_name(&page.blocks, name)
            .with_context(|| format!("Page has no block named '{name}'"))?,
        None => content_block(&page).context("Page has no rich-text content block")?,
    };
    debug!(block = %block.name, "Rendering page block");

    let doc = rich_text(block).context("Block has no parsable rich-text content")?;
    Ok((doc, main_image_url(&page)))
}

fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        Some("-") | None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {path}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_bare_document() {
        let value = json!({"type": "doc", "content": []});
        let (doc, hero) = load_document(&value, None).unwrap();
        assert!(doc.content.is_empty());
        assert!(hero.is_none());
    }

    #[test]
    fn test_load_page_block_by_name() {
        let value = json!({
            "title": "Post",
            "blocks": [
                {"name": "MainImage",
                 "content": {"image": {"content": "https://cdn.example.com/hero.jpg"}}},
                {"name": "MainContent",
                 "content": {"text": {"type": "doc", "content": []}}}
            ]
        });

        let (_, hero) = load_document(&value, Some("MainContent")).unwrap();
        assert_eq!(hero.as_deref(), Some("https://cdn.example.com/hero.jpg"));
        assert!(load_document(&value, Some("Missing")).is_err());
    }

    #[test]
    fn test_rejects_unrecognized_input() {
        assert!(load_document(&json!({"hello": "world"}), None).is_err());
    }
}
