//! Insert raw markup into an element.

use tagwright_dom::{Element, Result};

use crate::parser::parse_all;

/// Content insertion from markup strings, parsed leniently with
/// [`parse_all`].
///
/// ```
/// use tagwright_dom::tags;
/// use tagwright_html::MarkupExt;
///
/// let p = tags::p().append_html("<b>bold</b> text")?;
/// assert_eq!(p.to_html()?, "<p><b>bold</b> text</p>");
/// # Ok::<(), tagwright_dom::Error>(())
/// ```
pub trait MarkupExt: Sized {
    /// Parse `markup` and splice the resulting nodes in at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`tagwright_dom::Error::OutOfRange`] when `index` is greater
    /// than the number of content nodes.
    fn insert_html(&self, index: usize, markup: &str) -> Result<Self>;

    /// Parse `markup` and insert the nodes before all existing contents.
    ///
    /// # Errors
    ///
    /// Propagates parse failures.
    fn prepend_html(&self, markup: &str) -> Result<Self>;

    /// Parse `markup` and insert the nodes after all existing contents.
    ///
    /// # Errors
    ///
    /// Propagates parse failures.
    fn append_html(&self, markup: &str) -> Result<Self>;
}

impl MarkupExt for Element {
    fn insert_html(&self, index: usize, markup: &str) -> Result<Self> {
        self.insert(index, parse_all(markup)?)
    }

    fn prepend_html(&self, markup: &str) -> Result<Self> {
        Ok(self.prepend(parse_all(markup)?))
    }

    fn append_html(&self, markup: &str) -> Result<Self> {
        Ok(self.append(parse_all(markup)?))
    }
}
