//! Immutable HTML element trees.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tree model**: [`Node`], [`Element`] and [`Text`], persistent values
//!   whose edits return new roots that share every untouched subtree
//! - **Attribute views**: [`Styles`] and [`Classes`], decomposed forms of the
//!   `style` and `class` attributes that compare as sets
//! - **Structural equality**: `Eq` and `Hash` that ignore style and class
//!   order but respect content order
//! - **Serialization** under four [`RenderMode`]s with a pluggable
//!   [`Encoder`]
//! - **Navigation**: a [`Cursor`] zipper for parent, ancestor and sibling
//!   queries without parent pointers
//! - **Builders**: per-tag factories in [`tags`], the [`Shorthands`] setters
//!   and property-bag binding in [`bind`]
//!
//! Parsing markup into a tree lives in the `tagwright-html` crate.
//!
//! ```
//! use tagwright_dom::tags;
//!
//! let list = tags::ul()
//!     .class("menu")
//!     .append([tags::li().append_text("one"), tags::li().append_text("two")]);
//! assert_eq!(list.text(), "onetwo");
//! assert_eq!(
//!     list.to_html()?,
//!     r#"<ul class="menu"><li>one</li><li>two</li></ul>"#
//! );
//! # Ok::<(), tagwright_dom::Error>(())
//! ```

/// Attribute store views for `style` and `class`.
pub mod attributes;
/// Property-bag binding.
pub mod bind;
/// Zipper navigation.
pub mod cursor;
/// The element node.
pub mod element;
mod equality;
/// Error type.
pub mod error;
/// Node and text leaf.
pub mod node;
/// Markup serialization.
pub mod render;
/// Attribute and style shorthands.
pub mod shorthand;
pub mod tags;

pub use attributes::{Attribute, CLASS, Classes, STYLE, Styles};
pub use cursor::{Ancestors, Cursor};
pub use element::Element;
pub use error::{Error, Result};
pub use node::{Node, Text};
pub use render::{Encoder, HtmlEncoder, RenderMode};
pub use shorthand::Shorthands;
