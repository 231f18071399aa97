//! Block classification.
//!
//! Checks run in a fixed order and the first match wins:
//! code fence, unordered list, ordered list, heading, quote, paragraph.
//! A list or quote whose first line matches but a later line does not is a
//! paragraph, never a partial list.

use crate::limits;

use super::kind::BlockType;

const FENCE: &str = "```";

/// Classify a single block.
///
/// # Example
/// ```
/// use leafmark::block::{classify_block, BlockType};
///
/// assert_eq!(classify_block("1. a\n2. b\n3. c"), BlockType::OrderedList);
/// assert_eq!(classify_block("1. a\n3. b"), BlockType::Paragraph);
/// ```
pub fn classify_block(block: &str) -> BlockType {
    let kind = classify(block);
    log::trace!("classified block as {kind}: {block:?}");
    kind
}

fn classify(block: &str) -> BlockType {
    if is_code_fence(block) {
        return BlockType::Code;
    }

    let first_line = first_line(block);

    if is_unordered_item(first_line) {
        return if block.split('\n').all(is_unordered_item) {
            BlockType::UnorderedList
        } else {
            BlockType::Paragraph
        };
    }

    if ordered_marker(first_line) == Some(1) {
        let sequential = block
            .split('\n')
            .zip(1u32..)
            .all(|(line, n)| ordered_marker(line) == Some(n));
        return if sequential {
            BlockType::OrderedList
        } else {
            BlockType::Paragraph
        };
    }

    if heading_level(first_line).is_some() {
        return BlockType::Heading;
    }

    if is_quote_line(first_line) {
        return if block.split('\n').all(is_quote_line) {
            BlockType::Quote
        } else {
            BlockType::Paragraph
        };
    }

    BlockType::Paragraph
}

/// Heading level (1-6) of a block's first line, if it is an ATX heading.
pub fn heading_level(block: &str) -> Option<u8> {
    let line = first_line(block);
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > limits::MAX_HEADING_LEVEL {
        return None;
    }
    (line.as_bytes().get(hashes) == Some(&b' ')).then_some(hashes as u8)
}

#[inline]
fn first_line(block: &str) -> &str {
    block.split('\n').next().unwrap_or(block)
}

#[inline]
fn is_code_fence(block: &str) -> bool {
    block.starts_with(FENCE) && block.ends_with(FENCE)
}

#[inline]
fn is_unordered_item(line: &str) -> bool {
    line.starts_with("- ")
}

#[inline]
fn is_quote_line(line: &str) -> bool {
    line.starts_with("> ")
}

/// Parse the number of an ordered list marker `{n}. ` at the start of `line`.
///
/// The number must be written in plain decimal without leading zeros.
fn ordered_marker(line: &str) -> Option<u32> {
    let bytes = line.as_bytes();
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || digits > limits::MAX_LIST_MARKER_DIGITS {
        return None;
    }
    if digits > 1 && bytes[0] == b'0' {
        return None;
    }
    if !bytes[digits..].starts_with(b". ") {
        return None;
    }
    line[..digits].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code() {
        assert_eq!(classify_block("```\nhello\n```"), BlockType::Code);
        assert_eq!(classify_block("``````"), BlockType::Code);
        assert_eq!(classify_block("```\n- a\n- b\n```"), BlockType::Code);
        assert_eq!(classify_block("```\nunclosed"), BlockType::Paragraph);
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(classify_block("- a\n- b\n- c"), BlockType::UnorderedList);
        assert_eq!(classify_block("- a\n-b"), BlockType::Paragraph);
        assert_eq!(classify_block("- a\n# b"), BlockType::Paragraph);
        assert_eq!(classify_block("-a"), BlockType::Paragraph);
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(classify_block("1. a\n2. b\n3. c"), BlockType::OrderedList);
        assert_eq!(classify_block("1. a\n3. b"), BlockType::Paragraph);
        assert_eq!(classify_block("2. a\n3. b"), BlockType::Paragraph);
        assert_eq!(classify_block("1. a\n1. b"), BlockType::Paragraph);
        assert_eq!(classify_block("1.a"), BlockType::Paragraph);
    }

    #[test]
    fn test_long_ordered_list() {
        let block = (1..=12)
            .map(|n| format!("{n}. item"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(classify_block(&block), BlockType::OrderedList);
    }

    #[test]
    fn test_ordered_marker() {
        assert_eq!(ordered_marker("1. x"), Some(1));
        assert_eq!(ordered_marker("42. x"), Some(42));
        assert_eq!(ordered_marker("01. x"), None);
        assert_eq!(ordered_marker("1) x"), None);
        assert_eq!(ordered_marker("1."), None);
        assert_eq!(ordered_marker("1234567890. x"), None);
    }

    #[test]
    fn test_heading() {
        assert_eq!(classify_block("# Title"), BlockType::Heading);
        assert_eq!(classify_block("###### Six"), BlockType::Heading);
        assert_eq!(classify_block("####### Seven"), BlockType::Paragraph);
        assert_eq!(classify_block("#NoSpace"), BlockType::Paragraph);
        assert_eq!(classify_block("## Title\nmore text"), BlockType::Heading);
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("# a"), Some(1));
        assert_eq!(heading_level("### a\nb"), Some(3));
        assert_eq!(heading_level("###### a"), Some(6));
        assert_eq!(heading_level("####### a"), None);
        assert_eq!(heading_level("plain"), None);
    }

    #[test]
    fn test_ordered_list_not_heading() {
        assert_eq!(classify_block("1. # not a heading"), BlockType::OrderedList);
    }

    #[test]
    fn test_quote() {
        assert_eq!(classify_block("> a\n> b"), BlockType::Quote);
        assert_eq!(classify_block("> a\nb"), BlockType::Paragraph);
        assert_eq!(classify_block(">a"), BlockType::Paragraph);
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(classify_block("Just some text"), BlockType::Paragraph);
    }
}
