//! Inline tokenizer for markdown text.
//!
//! Turns one run of text into an ordered sequence of [`TextFragment`]s in
//! fixed phases:
//! 1. Links: `[label](url)`
//! 2. Images: `![alt](url)`
//! 3. Delimiters, in order: `**` bold, `_` italic, `*` italic, `` ` `` code
//!
//! Text inside a link label or a styled piece is never re-tokenized. If any
//! delimiter in phase 3 is unmatched, all delimiter styling is abandoned and
//! the result of phase 2 is returned as is.

mod delimiter;
pub mod fragment;
mod links;

pub use delimiter::split_by_delimiter;
pub use fragment::{TextFragment, TextKind};
pub use links::{
    LinkMatch, extract_images, extract_links, find_images, find_links, split_by_image,
    split_by_link,
};

use crate::error::Result;

/// Delimiters applied in phase 3, in order.
pub const DELIMITERS: [(&str, TextKind); 4] = [
    ("**", TextKind::Bold),
    ("_", TextKind::Italic),
    ("*", TextKind::Italic),
    ("`", TextKind::Code),
];

/// Tokenize a run of markdown text into fragments.
///
/// Empty input yields no fragments. Malformed emphasis never fails: the
/// fragments degrade to unstyled text instead.
///
/// # Example
/// ```
/// use leafmark::inline::{text_to_fragments, TextFragment};
///
/// let fragments = text_to_fragments("This is **bold** text");
/// assert_eq!(
///     fragments,
///     vec![
///         TextFragment::plain("This is "),
///         TextFragment::bold("bold"),
///         TextFragment::plain(" text"),
///     ]
/// );
/// ```
pub fn text_to_fragments(text: &str) -> Vec<TextFragment> {
    if text.is_empty() {
        return Vec::new();
    }

    let fragments = split_by_link(&[TextFragment::plain(text)]);
    let fragments = split_by_image(&fragments);

    match apply_delimiters(&fragments) {
        Ok(styled) => styled,
        Err(err) => {
            log::debug!("{err}; leaving inline text unstyled");
            fragments
        }
    }
}

/// Run every delimiter split in order, stopping at the first failure.
fn apply_delimiters(fragments: &[TextFragment]) -> Result<Vec<TextFragment>> {
    let mut current = fragments.to_vec();
    for (delimiter, kind) in DELIMITERS {
        current = split_by_delimiter(&current, delimiter, kind)?;
    }
    Ok(current)
}
