//! Serialization of trees back into markup.
//!
//! Each element carries a [`RenderMode`] label that selects what part of it
//! is written. Escaping is delegated to an [`Encoder`]; [`HtmlEncoder`] is
//! the default.

use std::fmt;

use strum_macros::{Display, EnumString};

use crate::element::Element;
use crate::error::{Error, Result};
use crate::node::Node;

/// Serialization strategy for one element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum RenderMode {
    /// Start tag, contents, end tag.
    #[default]
    Normal,
    /// `<tag attr="v">` only; contents are ignored.
    StartTagOnly,
    /// `</tag>` only; attributes and contents are ignored.
    EndTagOnly,
    /// `<tag attr="v" />`; the element must have no contents.
    SelfClosing,
}

/// Escaping collaborator used while writing markup.
pub trait Encoder {
    /// Write `text` escaped for use as element content.
    ///
    /// # Errors
    ///
    /// Propagates sink failures.
    fn encode_text(&self, text: &str, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Write `value` escaped for use inside a double quoted attribute.
    ///
    /// # Errors
    ///
    /// Propagates sink failures.
    fn encode_attribute(&self, value: &str, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// Escapes `&`, `<`, `>`, `"` and `'` in both text and attribute values.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEncoder;

impl HtmlEncoder {
    fn escape(input: &str, out: &mut dyn fmt::Write) -> fmt::Result {
        let mut last = 0;
        for (i, c) in input.char_indices() {
            let entity = match c {
                '&' => "&amp;",
                '<' => "&lt;",
                '>' => "&gt;",
                '"' => "&quot;",
                '\'' => "&#x27;",
                _ => continue,
            };
            out.write_str(&input[last..i])?;
            out.write_str(entity)?;
            last = i + c.len_utf8();
        }
        out.write_str(&input[last..])
    }
}

impl Encoder for HtmlEncoder {
    fn encode_text(&self, text: &str, out: &mut dyn fmt::Write) -> fmt::Result {
        Self::escape(text, out)
    }

    fn encode_attribute(&self, value: &str, out: &mut dyn fmt::Write) -> fmt::Result {
        Self::escape(value, out)
    }
}

/// Elements whose text content is written without escaping.
fn is_raw_text(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("script") || tag.eq_ignore_ascii_case("style")
}

/// True when raw `text` contains an end tag for `tag`, which would end the
/// element early when the markup is read back.
fn closes_raw_text(text: &str, tag: &str) -> bool {
    let text = text.to_ascii_lowercase();
    let closer = format!("</{}", tag.to_ascii_lowercase());
    text.contains(&closer)
}

impl Element {
    /// Serialize this element with the default [`HtmlEncoder`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] when this element, or any element
    /// written below it, is [`RenderMode::SelfClosing`] and has contents, or
    /// when the text of a `script` or `style` element contains its own end
    /// tag.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.write_to(&mut out, &HtmlEncoder)?;
        Ok(out)
    }

    /// Serialize this element into `out`.
    ///
    /// Output may have been partially written when an error is returned.
    ///
    /// # Errors
    ///
    /// See [`Element::to_html`]; sink failures surface as [`Error::Write`].
    pub fn write_to(&self, out: &mut dyn fmt::Write, encoder: &dyn Encoder) -> Result<()> {
        match self.render_mode() {
            RenderMode::StartTagOnly => self.write_start_tag(out, encoder, false),
            RenderMode::EndTagOnly => self.write_end_tag(out),
            RenderMode::SelfClosing => {
                if !self.contents().is_empty() {
                    return Err(Error::InvalidOperation(format!(
                        "<{}> is self-closing but has {} content node(s)",
                        self.tag(),
                        self.contents().len()
                    )));
                }
                self.write_start_tag(out, encoder, true)
            }
            RenderMode::Normal => {
                self.write_start_tag(out, encoder, false)?;
                let raw = is_raw_text(self.tag());
                let mut raw_text = String::new();
                for node in self.contents() {
                    match node {
                        Node::Element(child) => child.write_to(out, encoder)?,
                        Node::Text(text) if raw => {
                            raw_text.push_str(text.as_str());
                            if closes_raw_text(&raw_text, self.tag()) {
                                return Err(Error::InvalidOperation(format!(
                                    "text inside <{0}> contains </{0}>",
                                    self.tag()
                                )));
                            }
                            out.write_str(text.as_str())?;
                        }
                        Node::Text(text) => encoder.encode_text(text.as_str(), out)?,
                    }
                }
                self.write_end_tag(out)
            }
        }
    }

    fn write_start_tag(
        &self,
        out: &mut dyn fmt::Write,
        encoder: &dyn Encoder,
        self_closing: bool,
    ) -> Result<()> {
        write!(out, "<{}", self.tag())?;
        for attribute in self.attributes() {
            write!(out, " {}=\"", attribute.name)?;
            encoder.encode_attribute(&attribute.value, out)?;
            out.write_char('"')?;
        }
        out.write_str(if self_closing { " />" } else { ">" })?;
        Ok(())
    }

    fn write_end_tag(&self, out: &mut dyn fmt::Write) -> Result<()> {
        write!(out, "</{}>", self.tag())?;
        Ok(())
    }
}

impl Node {
    /// Serialize this node with the default [`HtmlEncoder`].
    ///
    /// # Errors
    ///
    /// See [`Element::to_html`].
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.write_to(&mut out, &HtmlEncoder)?;
        Ok(out)
    }

    /// Serialize this node into `out`. A text node is escaped as content.
    ///
    /// # Errors
    ///
    /// See [`Element::write_to`].
    pub fn write_to(&self, out: &mut dyn fmt::Write, encoder: &dyn Encoder) -> Result<()> {
        match self {
            Self::Element(element) => element.write_to(out, encoder),
            Self::Text(text) => Ok(encoder.encode_text(text.as_str(), out)?),
        }
    }
}
