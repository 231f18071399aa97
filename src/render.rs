//! HTML rendering of the node tree.
//!
//! Rendering is recursive and deterministic: attributes appear in insertion
//! order and children in sequence order.

use crate::Options;
use crate::error::{Error, Result};
use crate::escape;
use crate::node::{Attributes, LeafNode, Node, ParentNode};

/// Image leaves carry their content in attributes and may have no value.
const IMAGE_TAG: &str = "img";

/// HTML output writer.
///
/// # Example
/// ```
/// use leafmark::{HtmlWriter, Options};
///
/// let mut writer = HtmlWriter::new(Options::default());
/// writer.write_str("<p>");
/// writer.write_text("Hello");
/// writer.write_str("</p>");
/// assert_eq!(writer.into_string(), "<p>Hello</p>");
/// ```
pub struct HtmlWriter {
    out: String,
    options: Options,
}

impl HtmlWriter {
    #[inline]
    pub fn new(options: Options) -> Self {
        Self::with_capacity(options, 128)
    }

    #[inline]
    pub fn with_capacity(options: Options, capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            options,
        }
    }

    /// Write markup without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write text content, escaped if the options ask for it.
    #[inline]
    pub fn write_text(&mut self, text: &str) {
        if self.options.escape_html && escape::needs_text_escape(text) {
            escape::escape_text_into(&mut self.out, text);
        } else {
            self.out.push_str(text);
        }
    }

    /// Write an attribute value, escaped if the options ask for it.
    #[inline]
    pub fn write_attr_value(&mut self, value: &str) {
        if self.options.escape_html {
            escape::escape_attr_into(&mut self.out, value);
        } else {
            self.out.push_str(value);
        }
    }

    /// Write `key="value"` pairs separated by single spaces.
    pub fn write_attributes(&mut self, attributes: &Attributes) {
        for (i, (key, value)) in attributes.iter().enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            self.out.push_str(key);
            self.out.push_str("=\"");
            self.write_attr_value(value);
            self.out.push('"');
        }
    }

    /// Write `<tag attrs>`, with no space when there are no attributes.
    pub fn write_open_tag(&mut self, tag: &str, attributes: &Attributes) {
        self.out.push('<');
        self.out.push_str(tag);
        if !attributes.is_empty() {
            self.out.push(' ');
            self.write_attributes(attributes);
        }
        self.out.push('>');
    }

    #[inline]
    pub fn write_close_tag(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Render a node and all its descendants.
    pub fn write_node(&mut self, node: &Node) -> Result<()> {
        match node {
            Node::Leaf(leaf) => self.write_leaf(leaf),
            Node::Parent(parent) => self.write_parent(parent),
        }
    }

    fn write_leaf(&mut self, leaf: &LeafNode) -> Result<()> {
        let tag = leaf.tag.as_deref().filter(|t| !t.is_empty());

        if leaf.value.is_empty() {
            if tag == Some(IMAGE_TAG) {
                self.write_open_tag(IMAGE_TAG, &leaf.attributes);
                return Ok(());
            }
            return Err(Error::MissingValue {
                tag: tag.unwrap_or_default().to_owned(),
            });
        }

        match tag {
            None => self.write_text(&leaf.value),
            Some(tag) => {
                self.write_open_tag(tag, &leaf.attributes);
                self.write_text(&leaf.value);
                self.write_close_tag(tag);
            }
        }
        Ok(())
    }

    fn write_parent(&mut self, parent: &ParentNode) -> Result<()> {
        if parent.tag.is_empty() {
            return Err(Error::MissingTag);
        }
        if parent.children.is_empty() {
            return Err(Error::MissingChildren {
                tag: parent.tag.clone(),
            });
        }

        self.write_open_tag(&parent.tag, &parent.attributes);
        for child in &parent.children {
            self.write_node(child)?;
        }
        self.write_close_tag(&parent.tag);
        Ok(())
    }

    /// Get the output as a string.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

/// Render attributes as `key="value"` pairs joined by single spaces.
///
/// Values are inserted verbatim. Empty attributes render as an empty string.
pub fn attributes_to_string(attributes: &Attributes) -> String {
    let mut writer = HtmlWriter::default();
    writer.write_attributes(attributes);
    writer.into_string()
}

impl Node {
    /// Render this node to HTML with default options.
    ///
    /// Fails with [`Error::MissingValue`] for an empty leaf other than `img`,
    /// [`Error::MissingTag`] or [`Error::MissingChildren`] for a malformed
    /// parent anywhere in the tree.
    pub fn render(&self) -> Result<String> {
        self.render_with_options(&Options::default())
    }

    /// Render this node to HTML.
    pub fn render_with_options(&self, options: &Options) -> Result<String> {
        let mut writer = HtmlWriter::new(*options);
        writer.write_node(self)?;
        Ok(writer.into_string())
    }
}

impl Attributes {
    /// See [`attributes_to_string`].
    pub fn to_html(&self) -> String {
        attributes_to_string(self)
    }
}
