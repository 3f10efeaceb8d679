//! One-line setters for common attributes and styles.
//!
//! Every method is a call-through to [`Element::attribute`],
//! [`Element::toggle_attribute`], [`Element::style`] or
//! [`Element::style_with`] with a fixed name, so none of them carries an
//! invariant of its own.

use crate::element::Element;
use crate::error::Result;

/// Shorthand setters over the attribute and style primitives.
pub trait Shorthands: Sized {
    /// Set `id`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// See [`Element::attribute`].
    fn id(&self, id: &str) -> Result<Self>;
    /// Set `name`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// See [`Element::attribute`].
    fn name(&self, name: &str) -> Result<Self>;
    /// Set `title`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// See [`Element::attribute`].
    fn title(&self, title: &str) -> Result<Self>;
    /// Set `type`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// See [`Element::attribute`].
    fn r#type(&self, kind: &str) -> Result<Self>;
    /// Set `value`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// See [`Element::attribute`].
    fn value(&self, value: &str) -> Result<Self>;
    /// Set `href`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// See [`Element::attribute`].
    fn href(&self, href: &str) -> Result<Self>;
    /// Set `src`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// See [`Element::attribute`].
    fn src(&self, src: &str) -> Result<Self>;

    /// Toggle the boolean `checked` attribute.
    ///
    /// # Errors
    ///
    /// See [`Element::toggle_attribute`].
    fn checked(&self, on: bool) -> Result<Self>;
    /// Toggle the boolean `disabled` attribute.
    ///
    /// # Errors
    ///
    /// See [`Element::toggle_attribute`].
    fn disabled(&self, on: bool) -> Result<Self>;
    /// Toggle the boolean `selected` attribute.
    ///
    /// # Errors
    ///
    /// See [`Element::toggle_attribute`].
    fn selected(&self, on: bool) -> Result<Self>;
    /// Toggle the boolean `readonly` attribute.
    ///
    /// # Errors
    ///
    /// See [`Element::toggle_attribute`].
    fn readonly(&self, on: bool) -> Result<Self>;

    /// Set the `width` style, replacing any existing value.
    ///
    /// # Errors
    ///
    /// See [`Element::style`].
    fn width(&self, width: &str) -> Result<Self>;
    /// Set the `width` style, keeping an existing value unless
    /// `replace_existing`.
    ///
    /// # Errors
    ///
    /// See [`Element::style_with`].
    fn width_with(&self, width: &str, replace_existing: bool) -> Result<Self>;
    /// Set the `height` style, replacing any existing value.
    ///
    /// # Errors
    ///
    /// See [`Element::style`].
    fn height(&self, height: &str) -> Result<Self>;
    /// Set the `height` style, keeping an existing value unless
    /// `replace_existing`.
    ///
    /// # Errors
    ///
    /// See [`Element::style_with`].
    fn height_with(&self, height: &str, replace_existing: bool) -> Result<Self>;
    /// Set the `margin` style, replacing any existing value.
    ///
    /// # Errors
    ///
    /// See [`Element::style`].
    fn margin(&self, margin: &str) -> Result<Self>;
    /// Set the `margin` style, keeping an existing value unless
    /// `replace_existing`.
    ///
    /// # Errors
    ///
    /// See [`Element::style_with`].
    fn margin_with(&self, margin: &str, replace_existing: bool) -> Result<Self>;
    /// Set the `padding` style, replacing any existing value.
    ///
    /// # Errors
    ///
    /// See [`Element::style`].
    fn padding(&self, padding: &str) -> Result<Self>;
    /// Set the `padding` style, keeping an existing value unless
    /// `replace_existing`.
    ///
    /// # Errors
    ///
    /// See [`Element::style_with`].
    fn padding_with(&self, padding: &str, replace_existing: bool) -> Result<Self>;
    /// Set the `color` style, replacing any existing value.
    ///
    /// # Errors
    ///
    /// See [`Element::style`].
    fn color(&self, color: &str) -> Result<Self>;
    /// Set the `color` style, keeping an existing value unless
    /// `replace_existing`.
    ///
    /// # Errors
    ///
    /// See [`Element::style_with`].
    fn color_with(&self, color: &str, replace_existing: bool) -> Result<Self>;
    /// Set the `text-align` style, replacing any existing value.
    ///
    /// # Errors
    ///
    /// See [`Element::style`].
    fn text_align(&self, text_align: &str) -> Result<Self>;
    /// Set the `text-align` style, keeping an existing value unless
    /// `replace_existing`.
    ///
    /// # Errors
    ///
    /// See [`Element::style_with`].
    fn text_align_with(&self, text_align: &str, replace_existing: bool) -> Result<Self>;
    /// Set the `border` style, replacing any existing value.
    ///
    /// # Errors
    ///
    /// See [`Element::style`].
    fn border(&self, border: &str) -> Result<Self>;
    /// Set the `border` style, keeping an existing value unless
    /// `replace_existing`.
    ///
    /// # Errors
    ///
    /// See [`Element::style_with`].
    fn border_with(&self, border: &str, replace_existing: bool) -> Result<Self>;
}

impl Shorthands for Element {
    fn id(&self, id: &str) -> Result<Self> {
        self.attribute("id", id)
    }

    fn name(&self, name: &str) -> Result<Self> {
        self.attribute("name", name)
    }

    fn title(&self, title: &str) -> Result<Self> {
        self.attribute("title", title)
    }

    fn r#type(&self, kind: &str) -> Result<Self> {
        self.attribute("type", kind)
    }

    fn value(&self, value: &str) -> Result<Self> {
        self.attribute("value", value)
    }

    fn href(&self, href: &str) -> Result<Self> {
        self.attribute("href", href)
    }

    fn src(&self, src: &str) -> Result<Self> {
        self.attribute("src", src)
    }

    fn checked(&self, on: bool) -> Result<Self> {
        self.toggle_attribute("checked", on)
    }

    fn disabled(&self, on: bool) -> Result<Self> {
        self.toggle_attribute("disabled", on)
    }

    fn selected(&self, on: bool) -> Result<Self> {
        self.toggle_attribute("selected", on)
    }

    fn readonly(&self, on: bool) -> Result<Self> {
        self.toggle_attribute("readonly", on)
    }

    fn width(&self, width: &str) -> Result<Self> {
        self.style("width", width)
    }

    fn width_with(&self, width: &str, replace_existing: bool) -> Result<Self> {
        self.style_with("width", width, replace_existing)
    }

    fn height(&self, height: &str) -> Result<Self> {
        self.style("height", height)
    }

    fn height_with(&self, height: &str, replace_existing: bool) -> Result<Self> {
        self.style_with("height", height, replace_existing)
    }

    fn margin(&self, margin: &str) -> Result<Self> {
        self.style("margin", margin)
    }

    fn margin_with(&self, margin: &str, replace_existing: bool) -> Result<Self> {
        self.style_with("margin", margin, replace_existing)
    }

    fn padding(&self, padding: &str) -> Result<Self> {
        self.style("padding", padding)
    }

    fn padding_with(&self, padding: &str, replace_existing: bool) -> Result<Self> {
        self.style_with("padding", padding, replace_existing)
    }

    fn color(&self, color: &str) -> Result<Self> {
        self.style("color", color)
    }

    fn color_with(&self, color: &str, replace_existing: bool) -> Result<Self> {
        self.style_with("color", color, replace_existing)
    }

    fn text_align(&self, text_align: &str) -> Result<Self> {
        self.style("text-align", text_align)
    }

    fn text_align_with(&self, text_align: &str, replace_existing: bool) -> Result<Self> {
        self.style_with("text-align", text_align, replace_existing)
    }

    fn border(&self, border: &str) -> Result<Self> {
        self.style("border", border)
    }

    fn border_with(&self, border: &str, replace_existing: bool) -> Result<Self> {
        self.style_with("border", border, replace_existing)
    }
}
