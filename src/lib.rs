//! leafmark: markdown text to HTML node conversion
//!
//! This crate turns markdown text into typed pieces that render as HTML:
//! - [`inline`]: tokenizes one run of text into [`TextFragment`]s (links,
//!   images, bold, italic, code)
//! - [`block`]: splits a document on blank lines and classifies each block
//! - [`node`]: a two-variant node tree (leaf or parent) that fragments
//!   convert into, rendered by [`render`]
//!
//! # Design Principles
//! - No regex: byte-level scanning for link and image syntax
//! - Malformed markdown never fails: it degrades to plain text or paragraphs
//! - Pure functions: no shared state, safe to call from many threads
//!
//! Combining classified blocks into one document tree is left to the
//! caller.

pub mod block;
pub mod cursor;
pub mod error;
pub mod escape;
pub mod inline;
pub mod limits;
pub mod node;
pub mod range;
pub mod render;

// Re-export primary types
pub use block::{Block, BlockType, classify_block, parse_blocks, segment_into_blocks};
pub use error::{Error, Result};
pub use inline::{TextFragment, TextKind, text_to_fragments};
pub use node::{Attributes, LeafNode, Node, ParentNode, fragment_to_node};
pub use range::Range;
pub use render::HtmlWriter;

/// Rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Escape leaf values and attribute values. Off by default, which
    /// writes them verbatim.
    pub escape_html: bool,
}

/// Convert one run of inline markdown to HTML.
///
/// Each fragment becomes a leaf node and the rendered leaves are
/// concatenated. No block wrapper is added.
///
/// # Example
/// ```
/// let html = leafmark::inline_to_html("A [link](https://e.com) and **bold**").unwrap();
/// assert_eq!(html, "A <a href=\"https://e.com\">link</a> and <b>bold</b>");
/// ```
pub fn inline_to_html(text: &str) -> Result<String> {
    inline_to_html_with_options(text, &Options::default())
}

/// Convert one run of inline markdown to HTML with options.
pub fn inline_to_html_with_options(text: &str, options: &Options) -> Result<String> {
    let mut writer = HtmlWriter::with_capacity(*options, text.len() + text.len() / 4);
    for fragment in text_to_fragments(text) {
        writer.write_node(&fragment_to_node(&fragment)?)?;
    }
    Ok(writer.into_string())
}
