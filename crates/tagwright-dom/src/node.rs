//! The two node variants of the tree.

use std::fmt;
use std::sync::Arc;

use crate::element::Element;

/// The unit of the tree: either an [`Element`] or a [`Text`] leaf.
///
/// Both variants are immutable and cheap to clone; a clone shares the same
/// underlying allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// A tagged node with attributes and ordered contents.
    Element(Element),
    /// A leaf holding resolved text.
    Text(Text),
}

impl Node {
    /// Get the element if this node is one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Get the text if this node is a text leaf.
    #[must_use]
    pub const fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }

    /// Concatenation of every text leaf in document order.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Element(element) => element.text(),
            Self::Text(text) => text.as_str().to_string(),
        }
    }

    pub(crate) fn collect_text(&self, out: &mut String) {
        match self {
            Self::Element(element) => element.collect_text(out),
            Self::Text(text) => out.push_str(text.as_str()),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Element> for Option<Node> {
    fn from(element: Element) -> Self {
        Some(Node::Element(element))
    }
}

impl From<Text> for Option<Node> {
    fn from(text: Text) -> Self {
        Some(Node::Text(text))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => fmt::Display::fmt(element, f),
            Self::Text(text) => fmt::Display::fmt(text, f),
        }
    }
}

/// An immutable text leaf.
///
/// The stored string is fully resolved: entities were decoded when parsing
/// and are encoded again only when rendering. Equality and hashing look at
/// the string alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Text(Arc<str>);

impl Text {
    /// Create a text leaf.
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(Arc::from(text.as_ref()))
    }

    /// The resolved text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the text is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Self(Arc::from(text))
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
