//! Inline text fragments.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Style or role of an inline fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    /// Unstyled text.
    PlainText,
    /// `**bold**`
    Bold,
    /// `_italic_` or `*italic*`
    Italic,
    /// `` `code` ``
    Code,
    /// `[label](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl TextKind {
    /// Canonical snake_case name of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            TextKind::PlainText => "plain_text",
            TextKind::Bold => "bold_text",
            TextKind::Italic => "italic_text",
            TextKind::Code => "code_text",
            TextKind::Link => "link",
            TextKind::Image => "embedded_image",
        }
    }
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain_text" => Ok(TextKind::PlainText),
            "bold_text" => Ok(TextKind::Bold),
            "italic_text" => Ok(TextKind::Italic),
            "code_text" => Ok(TextKind::Code),
            "link" => Ok(TextKind::Link),
            "embedded_image" => Ok(TextKind::Image),
            other => Err(Error::UnknownKind(other.to_owned())),
        }
    }
}

/// An immutable unit of inline-tokenized text.
///
/// Equality is structural over text, kind and URL, so a link without a URL
/// never equals a link with an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextFragment {
    pub text: String,
    pub kind: TextKind,
    pub url: Option<String>,
}

impl TextFragment {
    /// Create a fragment without a URL.
    pub fn new(text: impl Into<String>, kind: TextKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    /// Create a fragment carrying a URL.
    pub fn with_url(text: impl Into<String>, kind: TextKind, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::PlainText)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Bold)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Italic)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Code)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(text, TextKind::Link, url)
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(alt, TextKind::Image, url)
    }

    #[inline]
    pub fn is_plain(&self) -> bool {
        self.kind == TextKind::PlainText
    }
}
