//! Document segmentation on blank lines.

use memchr::memchr;

/// Split a document into blocks separated by blank lines.
///
/// Leading and trailing newlines are ignored, and two or more consecutive
/// newlines separate blocks. Each block is trimmed of surrounding
/// whitespace and blocks left empty are dropped.
///
/// # Example
/// ```
/// use leafmark::block::segment_into_blocks;
///
/// assert_eq!(segment_into_blocks("A\n\nB\n\n\nC"), vec!["A", "B", "C"]);
/// ```
pub fn segment_into_blocks(document: &str) -> Vec<&str> {
    let doc = document.trim_matches('\n');
    let bytes = doc.as_bytes();
    let mut blocks = Vec::new();
    let mut block_start = 0;
    let mut pos = 0;

    while let Some(i) = memchr(b'\n', &bytes[pos..]) {
        let newline = pos + i;
        let mut run_end = newline;
        while run_end < bytes.len() && bytes[run_end] == b'\n' {
            run_end += 1;
        }

        if run_end - newline >= 2 {
            push_block(&mut blocks, &doc[block_start..newline]);
            block_start = run_end;
        }
        pos = run_end;
    }
    push_block(&mut blocks, &doc[block_start..]);

    blocks
}

#[inline]
fn push_block<'a>(blocks: &mut Vec<&'a str>, raw: &'a str) {
    let block = raw.trim();
    if !block.is_empty() {
        blocks.push(block);
    }
}
