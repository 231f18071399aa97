//! Block-level segmentation and classification.
//!
//! A document is split on blank lines into blocks, then each block is
//! assigned a [`BlockType`]:
//! - Code fences
//! - Unordered and ordered lists
//! - ATX headings
//! - Quotes
//! - Paragraphs

mod classify;
mod kind;
mod segment;

pub use classify::{classify_block, heading_level};
pub use kind::{Block, BlockType};
pub use segment::segment_into_blocks;

/// Segment a document and classify every block.
///
/// Blocks are independent of each other, so callers may process the result
/// in any order.
pub fn parse_blocks(document: &str) -> Vec<Block<'_>> {
    segment_into_blocks(document)
        .into_iter()
        .map(|text| Block {
            kind: classify_block(text),
            text,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blocks() {
        let doc = "# Title\n\nSome text\n\n- a\n- b\n\n```\ncode\n```";
        let kinds: Vec<_> = parse_blocks(doc).iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockType::Heading,
                BlockType::Paragraph,
                BlockType::UnorderedList,
                BlockType::Code,
            ]
        );
    }

    #[test]
    fn test_parse_blocks_keeps_text() {
        let blocks = parse_blocks("> quoted\n> lines");
        assert_eq!(
            blocks,
            vec![Block {
                kind: BlockType::Quote,
                text: "> quoted\n> lines",
            }]
        );
    }
}
