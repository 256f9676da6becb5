/*
 * test_pipeline.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * End-to-end tests for the document render pipeline.
 *
 * Run with: cargo test --test test_pipeline
 */

use folio_doctree::Doc;
use folio_render::{RenderConfig, render_document};
use serde_json::json;

fn render_value(value: serde_json::Value, config: &RenderConfig) -> folio_render::RenderOutput {
    let doc = Doc::from_value(&value).expect("valid document");
    render_document(&doc, config).expect("render succeeds")
}

#[test]
fn test_heading_id_assignment_and_outline() {
    let output = render_value(
        json!({
            "type": "doc",
            "content": [
                {"type": "tableOfContents"},
                {"type": "heading", "attrs": {"level": 2},
                 "content": [{"type": "text", "text": "Intro"}]},
                {"type": "paragraph",
                 "content": [{"type": "text", "text": "Hello"}]}
            ]
        }),
        &RenderConfig::default(),
    );

    assert_eq!(output.html, "<h2 id=\"heading-1\">Intro</h2><p>Hello</p>");
    assert!(output.had_toc_placeholder);
    assert_eq!(output.headings.len(), 1);
    assert_eq!(output.headings[0].id, "heading-1");
    assert_eq!(output.headings[0].level, 2);
    assert_eq!(output.headings[0].text, "Intro");
}

#[test]
fn test_outline_omitted_without_placeholder() {
    let output = render_value(
        json!({
            "type": "doc",
            "content": [
                {"type": "heading", "attrs": {"level": 2},
                 "content": [{"type": "text", "text": "Intro"}]}
            ]
        }),
        &RenderConfig::default(),
    );

    assert!(!output.had_toc_placeholder);
    assert!(output.headings.is_empty());
    // The heading itself still renders with its id.
    assert_eq!(output.html, "<h2 id=\"heading-1\">Intro</h2>");
}

#[test]
fn test_outline_count_matches_rendered_headings() {
    let output = render_value(
        json!({
            "type": "doc",
            "content": [
                {"type": "tableOfContents"},
                {"type": "heading", "attrs": {"level": 2},
                 "content": [{"type": "text", "text": "One"}]},
                {"type": "heading", "attrs": {"level": 3},
                 "content": [{"type": "text", "text": "Two"}]},
                {"type": "heading", "attrs": {"level": 4},
                 "content": [{"type": "text", "text": "Three"}]}
            ]
        }),
        &RenderConfig::default(),
    );

    assert_eq!(output.headings.len(), 3);
    let levels: Vec<u8> = output.headings.iter().map(|h| h.level).collect();
    assert_eq!(levels, vec![2, 3, 4]);
}

#[test]
fn test_drawer_is_extracted_not_rendered() {
    let output = render_value(
        json!({
            "type": "doc",
            "content": [
                {"type": "paragraph",
                 "content": [{"type": "text", "text": "Body"}]},
                {"type": "drawer", "attrs": {
                    "src": "https://cdn.example.com/diagram.png",
                    "alt": "Diagram",
                    "width": 800,
                    "title": "Architecture"
                }}
            ]
        }),
        &RenderConfig::default(),
    );

    assert_eq!(output.html, "<p>Body</p>");
    let drawer = output.drawer.expect("drawer extracted");
    assert_eq!(drawer.src, "https://cdn.example.com/diagram.png");
    assert_eq!(drawer.title.as_deref(), Some("Architecture"));
    assert_eq!(drawer.width, Some(800));
}

#[test]
fn test_hero_image_duplicate_is_suppressed() {
    let hero = "https://cdn.example.com/hero.jpg";
    let content = json!({
        "type": "doc",
        "content": [
            {"type": "paragraph",
             "content": [{"type": "image", "attrs": {"src": hero}}]},
            {"type": "paragraph",
             "content": [{"type": "text", "text": "Article text"}]},
            {"type": "paragraph",
             "content": [{"type": "image", "attrs": {"src": hero}}]}
        ]
    });

    let deduped = render_value(
        content.clone(),
        &RenderConfig {
            hero_image_url: Some(hero.to_string()),
        },
    );
    assert_eq!(deduped.html.matches("<img").count(), 1);

    // A single inline occurrence is assumed intentional and kept.
    let single = render_value(
        json!({
            "type": "doc",
            "content": [
                {"type": "paragraph",
                 "content": [{"type": "image", "attrs": {"src": hero}}]}
            ]
        }),
        &RenderConfig {
            hero_image_url: Some(hero.to_string()),
        },
    );
    assert_eq!(single.html.matches("<img").count(), 1);

    // Without a hero URL nothing is removed.
    let untouched = render_value(content, &RenderConfig::default());
    assert_eq!(untouched.html.matches("<img").count(), 2);
}

#[test]
fn test_image_presentation_attributes_applied() {
    let output = render_value(
        json!({
            "type": "doc",
            "content": [
                {"type": "paragraph", "content": [
                    {"type": "image", "attrs": {
                        "src": "https://cdn.example.com/a.png",
                        "alt": "A",
                        "align": "center",
                        "width": 480,
                        "class": "rounded"
                    }}
                ]}
            ]
        }),
        &RenderConfig::default(),
    );

    insta::assert_snapshot!(
        output.html,
        @r#"<p><img src="https://cdn.example.com/a.png" alt="A" width="480" class="mx-auto block rounded" style="max-width: 480px"></p>"#
    );
}

#[test]
fn test_render_is_pure() {
    let doc = Doc::from_value(&json!({
        "type": "doc",
        "content": [
            {"type": "tableOfContents"},
            {"type": "heading", "attrs": {"level": 2},
             "content": [{"type": "text", "text": "Same"}]},
            {"type": "paragraph", "content": [
                {"type": "text", "text": "twice", "marks": [{"type": "bold"}]}
            ]}
        ]
    }))
    .expect("valid document");

    let first = render_document(&doc, &RenderConfig::default()).expect("render");
    let second = render_document(&doc, &RenderConfig::default()).expect("render");
    assert_eq!(first.html, second.html);
    assert_eq!(first.headings, second.headings);
}

#[test]
fn test_unknown_nodes_never_fail_a_render() {
    let output = render_value(
        json!({
            "type": "doc",
            "content": [
                {"type": "mysteryEmbed", "attrs": {"payload": {"deep": true}}},
                {"type": "paragraph",
                 "content": [{"type": "text", "text": "still here"}]}
            ]
        }),
        &RenderConfig::default(),
    );

    assert_eq!(output.html, "<p>still here</p>");
}
