//! Byte cursor for scanning markdown text.
//!
//! All markdown punctuation recognized by this crate is ASCII, so scanning
//! bytes never splits a multi-byte character at a reported position.

use crate::Range;

/// A cursor for byte-by-byte scanning of a string.
///
/// # Example
/// ```
/// use leafmark::cursor::Cursor;
///
/// let mut cursor = Cursor::new("Hello, World!");
///
/// assert_eq!(cursor.peek(), Some(b'H'));
/// assert!(cursor.seek(b'W'));
/// assert_eq!(cursor.offset(), 7);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `input`.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    /// Create a cursor starting at a byte offset.
    #[inline]
    pub fn new_at(input: &'a str, offset: usize) -> Self {
        debug_assert!(offset <= input.len());
        Self {
            input: input.as_bytes(),
            pos: offset,
        }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Peek the byte just before the cursor.
    #[inline]
    pub fn peek_back(&self) -> Option<u8> {
        self.pos.checked_sub(1).map(|p| self.input[p])
    }

    /// Advance by one byte, stopping at the end of input.
    #[inline]
    pub fn bump(&mut self) {
        self.pos = (self.pos + 1).min(self.input.len());
    }

    /// Check if the current byte equals `b`.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Consume `b` if it is the current byte.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.at(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Move to the next occurrence of `needle` at or after the cursor.
    /// Returns `false` (and moves to EOF) if there is none.
    #[inline]
    pub fn seek(&mut self, needle: u8) -> bool {
        match memchr::memchr(needle, self.remaining_slice()) {
            Some(i) => {
                self.pos += i;
                true
            }
            None => {
                self.pos = self.input.len();
                false
            }
        }
    }

    /// Consume bytes up to `close`, failing if `forbidden` appears first.
    ///
    /// On success the cursor sits just past `close` and the range of the
    /// consumed content (excluding `close`) is returned. On failure, or if
    /// the range would end past the 4 GiB offset limit, the cursor is left
    /// where it was.
    #[inline]
    pub fn take_until(&mut self, close: u8, forbidden: u8) -> Option<Range> {
        let rest = self.remaining_slice();
        let i = memchr::memchr2(close, forbidden, rest)?;
        if rest[i] != close {
            return None;
        }
        let range = Range::try_from_usize(self.pos, self.pos + i)?;
        self.pos += i + 1;
        Some(range)
    }

    /// Remaining input from the cursor.
    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_bump() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.peek_back(), None);
        assert_eq!(cursor.peek(), Some(b'a'));
        cursor.bump();
        assert_eq!(cursor.peek_back(), Some(b'a'));
        cursor.bump();
        cursor.bump();
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_seek() {
        let mut cursor = Cursor::new("one [two]");
        assert!(cursor.seek(b'['));
        assert_eq!(cursor.offset(), 4);
        assert!(!cursor.seek(b'('));
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_take_until() {
        let mut cursor = Cursor::new_at("[label](url)", 1);
        let label = cursor.take_until(b']', b'[').unwrap();
        assert_eq!(label, Range::new(1, 6));
        assert!(cursor.eat(b'('));
        let url = cursor.take_until(b')', b'(').unwrap();
        assert_eq!(url.slice_str("[label](url)"), "url");
        assert_eq!(cursor.offset(), 12);
    }

    #[test]
    fn test_take_until_forbidden() {
        let mut cursor = Cursor::new("ab[c]");
        assert_eq!(cursor.take_until(b']', b'['), None);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_take_until_unterminated() {
        let mut cursor = Cursor::new("no close");
        assert_eq!(cursor.take_until(b')', b'('), None);
    }
}
