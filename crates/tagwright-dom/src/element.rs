//! The immutable element node and its edit operations.
//!
//! # Design
//!
//! An [`Element`] is a handle to a shared, never-mutated allocation. Every
//! edit clones the element's own record (tag, attributes, the list of child
//! handles) into a fresh allocation and returns it; child subtrees are
//! referenced, not copied. Earlier snapshots therefore stay valid and
//! unaffected, and values can be shared across threads without locking.
//!
//! There is no parent pointer. Ancestor and sibling queries go through
//! [`Cursor`](crate::Cursor), which records the path taken while descending.

use std::fmt;
use std::sync::Arc;

use crate::attributes::{
    Attribute, CLASS, Classes, STYLE, Styles, check_attribute_name, validate_style_rule,
};
use crate::error::{Error, Result};
use crate::node::{Node, Text};
use crate::render::RenderMode;

/// An immutable element: tag name, ordered attributes, ordered contents and
/// a render mode.
///
/// Cloning is a reference count increment.
#[derive(Clone)]
pub struct Element(Arc<ElementData>);

#[derive(Debug, Clone)]
struct ElementData {
    tag: Arc<str>,
    attributes: Vec<Attribute>,
    contents: Vec<Node>,
    render_mode: RenderMode,
}

impl Element {
    /// Create an empty element with the given tag name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `tag` is empty.
    pub fn new(tag: impl AsRef<str>) -> Result<Self> {
        let tag = tag.as_ref();
        if tag.is_empty() {
            return Err(Error::invalid_argument("tag name cannot be empty"));
        }
        Ok(Self::with_tag(Arc::from(tag)))
    }

    /// Constructor for tag names known at compile time to be non-empty.
    pub(crate) fn known(tag: &'static str) -> Self {
        debug_assert!(!tag.is_empty(), "known tag names are never empty");
        Self::with_tag(Arc::from(tag))
    }

    fn with_tag(tag: Arc<str>) -> Self {
        Self(Arc::new(ElementData {
            tag,
            attributes: Vec::new(),
            contents: Vec::new(),
            render_mode: RenderMode::Normal,
        }))
    }

    /// Produce a new element from an edited copy of this element's record.
    fn edit(&self, f: impl FnOnce(&mut ElementData)) -> Self {
        let mut data = ElementData::clone(&self.0);
        f(&mut data);
        Self(Arc::new(data))
    }

    /// True when both handles point at the same allocation.
    ///
    /// No-op edits return the receiver itself, which this makes observable.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// The tag name, exactly as given at construction.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.0.tag
    }

    /// How this element will be serialized.
    #[must_use]
    pub fn render_mode(&self) -> RenderMode {
        self.0.render_mode
    }

    /// The ordered contents, elements and text leaves mixed.
    #[must_use]
    pub fn contents(&self) -> &[Node] {
        &self.0.contents
    }

    /// The element contents only, in order. Text leaves are skipped.
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        self.0.contents.iter().filter_map(Node::as_element)
    }

    // ===== attributes =====

    /// The attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.0.attributes
    }

    /// Read an attribute value, `None` when absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .attributes
            .iter()
            .find(|a| a.name == key)
            .map(|a| a.value.as_str())
    }

    /// True when the attribute is present.
    #[must_use]
    pub fn has_attribute(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set `key=value`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `key` is not a valid attribute
    /// name, see [`Element::attribute_with`].
    pub fn attribute(&self, key: &str, value: impl Into<String>) -> Result<Self> {
        self.attribute_with(key, value, true)
    }

    /// Set `key=value`. When `replace_existing` is false and the key is
    /// already present, the receiver is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `key` is empty or contains
    /// whitespace, a control character, or one of `"`, `'`, `=`, `<`, `>`
    /// and `/`.
    pub fn attribute_with(
        &self,
        key: &str,
        value: impl Into<String>,
        replace_existing: bool,
    ) -> Result<Self> {
        check_attribute_name(key)?;
        if !replace_existing && self.has_attribute(key) {
            return Ok(self.clone());
        }
        let value = value.into();
        Ok(self.edit(|data| set_entry(&mut data.attributes, key, value)))
    }

    /// Set an attribute whose name is a non-empty literal.
    pub(crate) fn set_known(&self, key: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if self.get(key) == Some(value.as_str()) {
            return self.clone();
        }
        self.edit(|data| set_entry(&mut data.attributes, key, value))
    }

    /// Remove `key`. Absent keys are a no-op.
    #[must_use]
    pub fn remove_attribute(&self, key: &str) -> Self {
        if !self.has_attribute(key) {
            return self.clone();
        }
        self.edit(|data| data.attributes.retain(|a| a.name != key))
    }

    /// Set `key=key` when `on`, remove `key` otherwise. Used for boolean
    /// attributes such as `checked` or `disabled`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `key` is not a valid attribute
    /// name, see [`Element::attribute_with`].
    pub fn toggle_attribute(&self, key: &str, on: bool) -> Result<Self> {
        check_attribute_name(key)?;
        if on {
            self.attribute(key, key)
        } else {
            Ok(self.remove_attribute(key))
        }
    }

    /// Set a `data-` attribute, replacing any existing value. The prefix is
    /// added unless `key` already starts with it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `key` is empty.
    pub fn data(&self, key: &str, value: impl Into<String>) -> Result<Self> {
        self.data_with(key, value, true)
    }

    /// Set a `data-` attribute, see [`Element::attribute_with`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `key` is empty.
    pub fn data_with(
        &self,
        key: &str,
        value: impl Into<String>,
        replace_existing: bool,
    ) -> Result<Self> {
        if key.is_empty() {
            return Err(Error::invalid_argument(
                "data attribute name cannot be empty",
            ));
        }
        if key.starts_with("data-") {
            self.attribute_with(key, value, replace_existing)
        } else {
            self.attribute_with(&format!("data-{key}"), value, replace_existing)
        }
    }

    // ===== styles =====

    /// The `style` attribute decomposed into rules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] when a rule lacks a `:` separator.
    pub fn styles(&self) -> Result<Styles> {
        self.get(STYLE)
            .map_or_else(|| Ok(Styles::default()), Styles::parse)
    }

    /// Set a style rule, replacing any existing value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `key` or `value` contains `;`,
    /// or `key` is empty or contains `:`. Returns [`Error::Format`] when the
    /// current `style` attribute is malformed.
    pub fn style(&self, key: &str, value: &str) -> Result<Self> {
        self.style_with(key, value, true)
    }

    /// Set a style rule. When `replace_existing` is false and `key` is
    /// already present, the receiver is returned unchanged.
    ///
    /// # Errors
    ///
    /// See [`Element::style`].
    pub fn style_with(&self, key: &str, value: &str, replace_existing: bool) -> Result<Self> {
        validate_style_rule(key, value)?;
        let mut styles = self.styles()?;
        if !styles.set(key.trim(), value.trim(), replace_existing) {
            return Ok(self.clone());
        }
        Ok(self.with_styles(&styles))
    }

    /// Remove a style rule. Absent rules are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] when the current `style` attribute is
    /// malformed.
    pub fn remove_style(&self, key: &str) -> Result<Self> {
        if !self.has_attribute(STYLE) {
            return Ok(self.clone());
        }
        let mut styles = self.styles()?;
        if !styles.remove(key.trim()) {
            return Ok(self.clone());
        }
        Ok(self.with_styles(&styles))
    }

    /// Write recomposed styles back, dropping the attribute when empty.
    fn with_styles(&self, styles: &Styles) -> Self {
        if styles.is_empty() {
            self.remove_attribute(STYLE)
        } else {
            let style = styles.to_string();
            self.edit(|data| set_entry(&mut data.attributes, STYLE, style))
        }
    }

    // ===== classes =====

    /// The `class` attribute decomposed into tokens.
    #[must_use]
    pub fn classes(&self) -> Classes {
        self.get(CLASS).map(Classes::parse).unwrap_or_default()
    }

    /// True when `token` is one of the class tokens.
    #[must_use]
    pub fn has_class(&self, token: &str) -> bool {
        self.classes().contains(token)
    }

    /// Add whitespace separated class tokens, keeping first-seen order and
    /// skipping tokens already present. Input without tokens is a no-op.
    #[must_use]
    pub fn class(&self, tokens: &str) -> Self {
        let mut classes = self.classes();
        if !classes.union(tokens) {
            return self.clone();
        }
        let class = classes.to_string();
        self.edit(|data| set_entry(&mut data.attributes, CLASS, class))
    }

    /// Remove whitespace separated class tokens. The attribute is dropped
    /// when no token remains; absent tokens are a no-op.
    #[must_use]
    pub fn remove_class(&self, tokens: &str) -> Self {
        if !self.has_attribute(CLASS) {
            return self.clone();
        }
        let mut classes = self.classes();
        if !classes.remove(tokens) {
            return self.clone();
        }
        if classes.is_empty() {
            return self.remove_attribute(CLASS);
        }
        let class = classes.to_string();
        self.edit(|data| set_entry(&mut data.attributes, CLASS, class))
    }

    // ===== contents =====

    /// Splice `nodes` into the contents at `index`.
    ///
    /// `None` items are dropped. `index == count` appends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when `index` is greater than the number
    /// of content nodes.
    pub fn insert<I>(&self, index: usize, nodes: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Option<Node>>,
    {
        let count = self.0.contents.len();
        if index > count {
            return Err(Error::OutOfRange { index, count });
        }
        let nodes: Vec<Node> = nodes.into_iter().filter_map(Into::into).collect();
        if nodes.is_empty() {
            return Ok(self.clone());
        }
        Ok(self.edit(|data| {
            let _ = data.contents.splice(index..index, nodes);
        }))
    }

    /// Insert `nodes` before all existing contents.
    #[must_use]
    pub fn prepend<I>(&self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<Node>>,
    {
        self.splice_at(0, nodes)
    }

    /// Insert `nodes` after all existing contents.
    #[must_use]
    pub fn append<I>(&self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<Node>>,
    {
        self.splice_at(self.0.contents.len(), nodes)
    }

    fn splice_at<I>(&self, index: usize, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<Node>>,
    {
        // `index` is 0 or the content count, both always in range.
        self.insert(index, nodes).unwrap_or_else(|_| self.clone())
    }

    /// Insert a text leaf at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when `index` is greater than the number
    /// of content nodes.
    pub fn insert_text(&self, index: usize, text: &str) -> Result<Self> {
        self.insert(index, [Text::new(text)])
    }

    /// Insert a text leaf before all existing contents.
    #[must_use]
    pub fn prepend_text(&self, text: &str) -> Self {
        self.prepend([Text::new(text)])
    }

    /// Insert a text leaf after all existing contents.
    #[must_use]
    pub fn append_text(&self, text: &str) -> Self {
        self.append([Text::new(text)])
    }

    /// Replace the content node at `index`, keeping everything else.
    pub(crate) fn replace_content(&self, index: usize, node: Node) -> Self {
        self.edit(|data| {
            if let Some(slot) = data.contents.get_mut(index) {
                *slot = node;
            }
        })
    }

    // ===== traversal =====

    /// Collect descendant elements matching `predicate`.
    ///
    /// The order is: every matching direct child, then, for each child in
    /// order (matching or not), the result of the same search inside it.
    /// This is not a pre-order walk; `<a><b><c/></b><d/></a>` searched for
    /// "any element" yields `b, d, c`.
    pub fn find<P>(&self, predicate: P) -> Vec<Self>
    where
        P: Fn(&Self) -> bool,
    {
        let mut found = Vec::new();
        self.find_into(&predicate, &mut found);
        found
    }

    fn find_into<P>(&self, predicate: &P, found: &mut Vec<Self>)
    where
        P: Fn(&Self) -> bool,
    {
        found.extend(self.children().filter(|child| predicate(child)).cloned());
        for child in self.children() {
            child.find_into(predicate, found);
        }
    }

    /// Label this element with a render mode. Attributes and contents are
    /// untouched.
    #[must_use]
    pub fn render(&self, mode: RenderMode) -> Self {
        if self.0.render_mode == mode {
            return self.clone();
        }
        self.edit(|data| data.render_mode = mode)
    }

    /// Concatenation of every descendant text leaf in document order.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    pub(crate) fn collect_text(&self, out: &mut String) {
        for node in &self.0.contents {
            node.collect_text(out);
        }
    }
}

/// Insert or overwrite an entry, keeping the position of an existing key.
fn set_entry(attributes: &mut Vec<Attribute>, key: &str, value: String) {
    if let Some(existing) = attributes.iter_mut().find(|a| a.name == key) {
        existing.value = value;
    } else {
        attributes.push(Attribute::new(key.to_string(), value));
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.0.tag)
            .field("attributes", &self.0.attributes)
            .field("contents", &self.0.contents)
            .field("render_mode", &self.0.render_mode)
            .finish()
    }
}

impl fmt::Display for Element {
    /// One-line start tag summary, for diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag())?;
        for attribute in self.attributes() {
            write!(f, " {}=\"{}\"", attribute.name, attribute.value)?;
        }
        if self.render_mode() == RenderMode::SelfClosing {
            f.write_str(" /")?;
        }
        f.write_str(">")
    }
}
