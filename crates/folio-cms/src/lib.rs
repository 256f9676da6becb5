//! CMS page and block model for Folio.
//!
//! The backend returns pages as `{title, slug, blocks[]}` where each
//! block carries `{id, name, type, content, order}`; `content` is
//! type-specific JSON, opaque here except for the rich-text field the
//! render pipeline consumes. This crate models that shape permissively
//! (missing fields default, never raise) and provides the first-match
//! lookup helpers and content accessors the page layer depends on.
//!
//! A missing block is an ordinary `None`, not an error: pages degrade to
//! placeholder UI states rather than crashing when the CMS omits a block.

pub mod content;
pub mod page;

pub use content::{authors, category, content_block, is_featured, main_image_url, rich_text};
pub use page::{Block, Page, blocks_by_type, find_block_by_name, find_block_by_type};
