//! Compact byte ranges into a source string.
//!
//! Scanners report where a construct sits in the input instead of copying
//! it; the caller slices the text only when it builds a fragment.
//!
//! Offsets are `u32`, so only the first 4 GiB of an input can be addressed.
//! A construct reaching past that point is not reported as a match.

/// Half-open byte range `start..end` into a source string.
///
/// # Example
/// ```
/// use leafmark::Range;
///
/// let input = "Hello, World!";
/// let range = Range::new(7, 12);
/// assert_eq!(range.slice_str(input), "World");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize offsets, or `None` if either offset does
    /// not fit in a `u32`.
    #[inline]
    pub fn try_from_usize(start: usize, end: usize) -> Option<Self> {
        Some(Self {
            start: u32::try_from(start).ok()?,
            end: u32::try_from(end).ok()?,
        })
    }

    /// Slice the input with this range.
    ///
    /// Ranges produced by this crate always fall on ASCII delimiters, so the
    /// slice boundaries are valid `char` boundaries.
    #[inline]
    pub fn slice_str<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start_usize()..self.end_usize()]
    }

    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }
}
