//! Error types for leafmark.

use thiserror::Error;

/// Result type alias for leafmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while tokenizing, converting, or rendering.
///
/// Malformed markdown syntax is never an error: unmatched links, headings,
/// lists and quotes fall through to plain text or paragraphs instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A delimiter occurs an odd number of times in one plain text fragment.
    #[error("unmatched delimiter {delimiter:?}")]
    UnmatchedDelimiter {
        /// The delimiter that could not be paired.
        delimiter: String,
    },

    /// A leaf node other than an empty `img` has an empty value.
    #[error("leaf node <{tag}> must have a value")]
    MissingValue {
        /// Tag of the offending leaf (empty for raw text).
        tag: String,
    },

    /// A parent node has an empty tag.
    #[error("parent node must have a tag")]
    MissingTag,

    /// A parent node has no children.
    #[error("parent node <{tag}> must have children")]
    MissingChildren {
        /// Tag of the offending parent.
        tag: String,
    },

    /// A link or image fragment has no usable URL.
    #[error("{kind} fragment must have a URL")]
    MissingUrl {
        /// Canonical name of the fragment kind.
        kind: &'static str,
    },

    /// A fragment kind name outside the known set.
    #[error("unknown text kind: {0}")]
    UnknownKind(String),
}
