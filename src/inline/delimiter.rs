//! Literal delimiter splitting.
//!
//! A delimiter such as `**` or `` ` `` is matched as a literal substring.
//! Occurrences inside one plain fragment pair up left to right: text between
//! the first and second occurrence is styled, between the second and third
//! is plain again, and so on.

use memchr::memmem;

use crate::error::{Error, Result};

use super::fragment::{TextFragment, TextKind};

/// Split plain fragments on `delimiter`, styling every other piece as `kind`.
///
/// Non-plain fragments pass through unchanged. Empty pieces are dropped, so
/// no empty fragment is ever produced from plain text. An odd number of
/// delimiter occurrences in any one fragment fails with
/// [`Error::UnmatchedDelimiter`].
///
/// # Example
/// ```
/// use leafmark::inline::{split_by_delimiter, TextFragment, TextKind};
///
/// let out = split_by_delimiter(&[TextFragment::plain("a `b` c")], "`", TextKind::Code).unwrap();
/// assert_eq!(out[1], TextFragment::code("b"));
/// ```
pub fn split_by_delimiter(
    fragments: &[TextFragment],
    delimiter: &str,
    kind: TextKind,
) -> Result<Vec<TextFragment>> {
    if delimiter.is_empty() {
        log::warn!("ignoring empty delimiter for {kind}");
        return Ok(fragments.to_vec());
    }

    let finder = memmem::Finder::new(delimiter);
    let mut out = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if !fragment.is_plain() {
            out.push(fragment.clone());
            continue;
        }

        let text = fragment.text.as_str();
        let pieces = split_pieces(text, &finder, delimiter.len());

        if pieces.len() % 2 == 0 {
            return Err(Error::UnmatchedDelimiter {
                delimiter: delimiter.to_owned(),
            });
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            let piece_kind = if i % 2 == 0 { TextKind::PlainText } else { kind };
            out.push(TextFragment::new(piece, piece_kind));
        }
    }

    Ok(out)
}

/// Split on every non-overlapping occurrence, like `str::split`.
fn split_pieces<'a>(text: &'a str, finder: &memmem::Finder<'_>, delim_len: usize) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for pos in finder.find_iter(text.as_bytes()) {
        pieces.push(&text[last..pos]);
        last = pos + delim_len;
    }
    pieces.push(&text[last..]);
    pieces
}
