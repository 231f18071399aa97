//! HTML escaping for rendered node content.
//!
//! Only applied when [`Options::escape_html`](crate::Options) is set; by
//! default values are written verbatim.

/// Escape text content (`&`, `<`, `>`) into `out`.
///
/// # Example
/// ```
/// use leafmark::escape::escape_text_into;
///
/// let mut out = String::new();
/// escape_text_into(&mut out, "<script>");
/// assert_eq!(out, "&lt;script&gt;");
/// ```
#[inline]
pub fn escape_text_into(out: &mut String, input: &str) {
    html_escape::encode_text_to_string(input, out);
}

/// Escape a double-quoted attribute value (`&`, `<`, `>`, `"`) into `out`.
///
/// # Example
/// ```
/// use leafmark::escape::escape_attr_into;
///
/// let mut out = String::new();
/// escape_attr_into(&mut out, "say \"hi\"");
/// assert_eq!(out, "say &quot;hi&quot;");
/// ```
#[inline]
pub fn escape_attr_into(out: &mut String, input: &str) {
    html_escape::encode_double_quoted_attribute_to_string(input, out);
}

/// Check if text content needs any escaping.
#[inline]
pub fn needs_text_escape(input: &str) -> bool {
    memchr::memchr3(b'<', b'>', b'&', input.as_bytes()).is_some()
}
