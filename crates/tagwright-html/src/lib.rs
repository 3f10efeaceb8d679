//! Markup parsing for tagwright element trees.
//!
//! # Scope
//!
//! This crate implements:
//! - **Parsing**: [`parse`] and [`parse_all`] turn markup into
//!   [`tagwright_dom`] trees, with tokenization delegated to `html5gum`
//! - **Syntax validation**: [`HtmlParser::with_syntax_validation`] (or
//!   [`parse_strict`] / [`parse_all_strict`]) turns every [`ParseIssue`]
//!   into an error instead of a warning
//! - **Markup insertion**: [`MarkupExt`] splices parsed markup into an element
//!
//! # Not Implemented
//!
//! - Full HTML tree construction (insertion modes, foster parenting,
//!   adoption agency)
//! - Comments and doctypes, which are dropped

/// Insertion of raw markup.
pub mod markup;
/// Markup parser and tree construction.
pub mod parser;

pub use markup::MarkupExt;
pub use parser::{
    HtmlParser, ParseIssue, parse, parse_all, parse_all_strict, parse_strict, print_tree,
};
