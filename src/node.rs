//! HTML node tree.
//!
//! A [`Node`] is either a [`LeafNode`] holding text or a [`ParentNode`]
//! holding children, so a node can never carry both. Structural problems
//! such as an empty value or a childless parent are reported when the node
//! is rendered, not when it is built.

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::inline::{TextFragment, TextKind};

/// Ordered HTML attributes with unique keys.
///
/// Attributes render in insertion order. Inserting an existing key replaces
/// its value and keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: SmallVec<[(String, String); 2]>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

/// A node holding text content and no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    /// Tag name; `None` renders the value as raw text.
    pub tag: Option<String>,
    pub value: String,
    pub attributes: Attributes,
}

impl LeafNode {
    /// A tagged leaf, e.g. `<b>value</b>`.
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// A raw text leaf without a tag.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// A node holding ordered children and no text of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: String,
    pub children: Vec<Node>,
    pub attributes: Attributes,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// A renderable HTML node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<ParentNode> for Node {
    fn from(parent: ParentNode) -> Self {
        Node::Parent(parent)
    }
}

impl TryFrom<&TextFragment> for Node {
    type Error = Error;

    fn try_from(fragment: &TextFragment) -> Result<Self> {
        fragment_to_node(fragment)
    }
}

/// Convert an inline fragment into a leaf node.
///
/// | kind      | node                                  |
/// |-----------|---------------------------------------|
/// | PlainText | raw text                              |
/// | Bold      | `<b>`                                 |
/// | Italic    | `<i>`                                 |
/// | Code      | `<code>`                              |
/// | Link      | `<a href=url>` with the label as text |
/// | Image     | `<img src=url alt=text>`, no value    |
///
/// Links and images fail with [`Error::MissingUrl`] if the URL is absent,
/// empty, or only whitespace.
pub fn fragment_to_node(fragment: &TextFragment) -> Result<Node> {
    let leaf = match fragment.kind {
        TextKind::PlainText => LeafNode::text(fragment.text.as_str()),
        TextKind::Bold => LeafNode::new("b", fragment.text.as_str()),
        TextKind::Italic => LeafNode::new("i", fragment.text.as_str()),
        TextKind::Code => LeafNode::new("code", fragment.text.as_str()),
        TextKind::Link => {
            let url = require_url(fragment)?;
            LeafNode::new("a", fragment.text.as_str())
                .with_attributes(Attributes::new().with("href", url))
        }
        TextKind::Image => {
            let url = require_url(fragment)?;
            LeafNode::new("img", "").with_attributes(
                Attributes::new()
                    .with("src", url)
                    .with("alt", fragment.text.as_str()),
            )
        }
    };
    Ok(Node::Leaf(leaf))
}

fn require_url(fragment: &TextFragment) -> Result<&str> {
    match fragment.url.as_deref() {
        Some(url) if !url.trim().is_empty() => Ok(url),
        _ => Err(Error::MissingUrl {
            kind: fragment.kind.as_str(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_keep_insertion_order() {
        let attrs = Attributes::new().with("src", "a.png").with("alt", "a");
        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(pairs, vec![("src", "a.png"), ("alt", "a")]);
    }

    #[test]
    fn test_attributes_replace_in_place() {
        let mut attrs: Attributes = [("a", "1"), ("b", "2")].into_iter().collect();
        attrs.insert("a", "3");
        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
        assert_eq!(attrs.get("a"), Some("3"));
        assert_eq!(attrs.get("c"), None);
    }

    #[test]
    fn test_plain_to_node() {
        let node = fragment_to_node(&TextFragment::plain("hello")).unwrap();
        assert_eq!(node, Node::Leaf(LeafNode::text("hello")));
    }

    #[test]
    fn test_styled_to_node() {
        assert_eq!(
            fragment_to_node(&TextFragment::bold("b")),
            Ok(Node::Leaf(LeafNode::new("b", "b")))
        );
        assert_eq!(
            fragment_to_node(&TextFragment::italic("i")),
            Ok(Node::Leaf(LeafNode::new("i", "i")))
        );
        assert_eq!(
            fragment_to_node(&TextFragment::code("c")),
            Ok(Node::Leaf(LeafNode::new("code", "c")))
        );
    }

    #[test]
    fn test_image_to_node() {
        let node = fragment_to_node(&TextFragment::image("a", "i.png")).unwrap();
        let Node::Leaf(leaf) = node else {
            panic!("expected leaf");
        };
        assert_eq!(leaf.tag.as_deref(), Some("img"));
        assert_eq!(leaf.value, "");
        assert_eq!(leaf.attributes.get("src"), Some("i.png"));
        assert_eq!(leaf.attributes.get("alt"), Some("a"));
    }

    #[test]
    fn test_missing_url() {
        let missing = Error::MissingUrl { kind: "link" };
        assert_eq!(fragment_to_node(&TextFragment::link("x", "")), Err(missing.clone()));
        assert_eq!(fragment_to_node(&TextFragment::link("x", " \t")), Err(missing.clone()));
        assert_eq!(
            fragment_to_node(&TextFragment::new("x", TextKind::Link)),
            Err(missing)
        );
        assert_eq!(
            fragment_to_node(&TextFragment::new("x", TextKind::Image)),
            Err(Error::MissingUrl {
                kind: "embedded_image"
            })
        );
    }

    #[test]
    fn test_try_from() {
        let node = Node::try_from(&TextFragment::link("x", "https://e.com")).unwrap();
        let expected = LeafNode::new("a", "x")
            .with_attributes(Attributes::new().with("href", "https://e.com"));
        assert_eq!(node, Node::Leaf(expected));
    }
}
