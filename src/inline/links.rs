//! Link and image extraction.
//!
//! Handles:
//! - Links: `[label](url)`
//! - Images: `![alt](url)`
//!
//! Labels may not contain `[` or `]` and URLs may not contain `(` or `)`.
//! Either may be empty. No whitespace is allowed between `]` and `(`, or
//! between `!` and `[`. Anything that does not match stays plain text.
//!
//! Splitting rebuilds the syntax of each extracted pair and cuts the text at
//! the first remaining occurrence of it, so a link whose exact text also sits
//! inside an earlier image is cut out of that image.

use crate::cursor::Cursor;
use crate::Range;

use super::fragment::{TextFragment, TextKind};

/// A matched link or image in a source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkMatch {
    /// The whole syntax, from `[` (or `!` for images) through `)`.
    pub span: Range,
    /// Label text between the brackets.
    pub label: Range,
    /// URL between the parentheses.
    pub url: Range,
}

/// Find all link occurrences, left to right and non-overlapping.
///
/// A `[` immediately preceded by `!` starts an image, never a link.
pub fn find_links(text: &str) -> Vec<LinkMatch> {
    scan(text, false)
}

/// Find all image occurrences, left to right and non-overlapping.
pub fn find_images(text: &str) -> Vec<LinkMatch> {
    scan(text, true)
}

/// Extract `(label, url)` pairs for every link in `text`.
///
/// # Example
/// ```
/// use leafmark::inline::extract_links;
///
/// let pairs = extract_links("see [docs](https://docs.rs) and ![logo](logo.png)");
/// assert_eq!(pairs, vec![("docs", "https://docs.rs")]);
/// ```
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    pairs(text, find_links(text))
}

/// Extract `(alt, url)` pairs for every image in `text`.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    pairs(text, find_images(text))
}

/// Split plain text fragments around link syntax.
///
/// Non-plain fragments pass through unchanged. Empty text between matches
/// is dropped.
pub fn split_by_link(fragments: &[TextFragment]) -> Vec<TextFragment> {
    split_by_syntax(fragments, TextKind::Link, extract_links)
}

/// Split plain text fragments around image syntax.
pub fn split_by_image(fragments: &[TextFragment]) -> Vec<TextFragment> {
    split_by_syntax(fragments, TextKind::Image, extract_images)
}

fn pairs(text: &str, matches: Vec<LinkMatch>) -> Vec<(&str, &str)> {
    matches
        .into_iter()
        .map(|m| (m.label.slice_str(text), m.url.slice_str(text)))
        .collect()
}

fn scan(text: &str, image: bool) -> Vec<LinkMatch> {
    let opener = if image { b'!' } else { b'[' };
    let mut matches = Vec::new();
    let mut cursor = Cursor::new(text);

    while cursor.seek(opener) {
        if !image && cursor.peek_back() == Some(b'!') {
            cursor.bump();
            continue;
        }

        match match_at(text, cursor.offset(), image) {
            Some(m) => {
                cursor = Cursor::new_at(text, m.span.end_usize());
                matches.push(m);
            }
            None => cursor.bump(),
        }
    }

    matches
}

/// Try to match the full syntax starting at `start`.
fn match_at(text: &str, start: usize, image: bool) -> Option<LinkMatch> {
    let mut cursor = Cursor::new_at(text, start);

    if image && !cursor.eat(b'!') {
        return None;
    }
    if !cursor.eat(b'[') {
        return None;
    }
    let label = cursor.take_until(b']', b'[')?;
    if !cursor.eat(b'(') {
        return None;
    }
    let url = cursor.take_until(b')', b'(')?;

    Some(LinkMatch {
        span: Range::try_from_usize(start, cursor.offset())?,
        label,
        url,
    })
}

fn split_by_syntax(
    fragments: &[TextFragment],
    kind: TextKind,
    extract: fn(&str) -> Vec<(&str, &str)>,
) -> Vec<TextFragment> {
    let mut out = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if !fragment.is_plain() {
            out.push(fragment.clone());
            continue;
        }

        let text = fragment.text.as_str();
        let pairs = extract(text);
        if pairs.is_empty() {
            out.push(fragment.clone());
            continue;
        }

        let mut remaining = text;
        for (label, url) in pairs {
            let syntax = match kind {
                TextKind::Image => format!("![{label}]({url})"),
                _ => format!("[{label}]({url})"),
            };
            let Some((before, after)) = remaining.split_once(syntax.as_str()) else {
                continue;
            };
            push_plain(&mut out, before);
            out.push(TextFragment::with_url(label, kind, url));
            remaining = after;
        }
        push_plain(&mut out, remaining);
    }

    out
}

#[inline]
fn push_plain(out: &mut Vec<TextFragment>, text: &str) {
    if !text.is_empty() {
        out.push(TextFragment::plain(text));
    }
}
