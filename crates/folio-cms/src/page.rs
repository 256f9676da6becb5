/*
 * page.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named, typed unit of structured content returned by the backend for
/// a given page (e.g., "Header", "Team", "MainContent").
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub block_type: String,
    /// Type-specific content, opaque except for well-known fields.
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub order: i64,
}

/// A page as returned by the CMS backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    /// Plain-text excerpt/summary.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub page_type: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub public_metadata: Value,
}

/// Find the first block with the given name. Linear scan, array order.
pub fn find_block_by_name<'a>(blocks: &'a [Block], name: &str) -> Option<&'a Block> {
    blocks.iter().find(|block| block.name == name)
}

/// Find the first block of the given type. Linear scan, array order.
pub fn find_block_by_type<'a>(blocks: &'a [Block], block_type: &str) -> Option<&'a Block> {
    blocks.iter().find(|block| block.block_type == block_type)
}

/// All blocks of the given type, in array order.
pub fn blocks_by_type<'a>(blocks: &'a [Block], block_type: &str) -> Vec<&'a Block> {
    blocks
        .iter()
        .filter(|block| block.block_type == block_type)
        .collect()
}
