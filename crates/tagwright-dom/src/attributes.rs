//! Attribute store and the two structured views derived from it.
//!
//! An element keeps its attributes as an ordered list of name/value pairs.
//! The `style` and `class` entries are ordinary attributes, but they also have
//! a decomposed form: [`Styles`] (rules split on `;`, then on the first `:`)
//! and [`Classes`] (tokens split on whitespace). Both views compare as sets.

use std::fmt;

use crate::error::{Error, Result};

/// Name of the attribute backing the [`Styles`] view.
pub const STYLE: &str = "style";

/// Name of the attribute backing the [`Classes`] view.
pub const CLASS: &str = "class";

/// A single attribute on an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// Attribute name, unique within one element.
    pub name: String,
    /// Fully resolved (unescaped) value.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }

    /// True for the `style` and `class` attributes, which compare through
    /// their decomposed views instead of their raw text.
    #[must_use]
    pub fn is_structured(&self) -> bool {
        self.name == STYLE || self.name == CLASS
    }
}

/// Reject attribute names that would not survive serialization as a single
/// `name="value"` pair.
pub(crate) fn check_attribute_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_argument("attribute name cannot be empty"));
    }
    let forbidden = |c: char| {
        c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/')
    };
    if let Some(c) = name.chars().find(|&c| forbidden(c)) {
        return Err(Error::invalid_argument(format!(
            "attribute name cannot contain {c:?}, name was '{name}'"
        )));
    }
    Ok(())
}

/// Reject style keys and values that would corrupt the recomposed attribute.
pub(crate) fn validate_style_rule(key: &str, value: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(Error::invalid_argument("style key cannot be empty"));
    }
    if key.contains(';') {
        return Err(Error::invalid_argument(format!(
            "style key cannot contain ';', key was '{key}'"
        )));
    }
    if key.contains(':') {
        return Err(Error::invalid_argument(format!(
            "style key cannot contain ':', key was '{key}'"
        )));
    }
    if value.contains(';') {
        return Err(Error::invalid_argument(format!(
            "style value cannot contain ';', value was '{value}'"
        )));
    }
    Ok(())
}

/// The `style` attribute decomposed into `key:value` rules.
///
/// Rules keep their first-seen order for rendering. Equality ignores that
/// order: two views are equal when they hold the same set of pairs.
#[derive(Debug, Clone, Default, Eq)]
pub struct Styles {
    rules: Vec<(String, String)>,
}

impl Styles {
    /// Decompose a raw `style` attribute value.
    ///
    /// Segments that are empty after trimming are skipped, so a trailing `;`
    /// is accepted. Keys and values are trimmed. A repeated key keeps its
    /// first position and takes the last value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] when a non-empty segment has no `:`.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut styles = Self::default();
        for segment in raw.split(';') {
            if segment.trim().is_empty() {
                continue;
            }
            let Some((key, value)) = segment.split_once(':') else {
                return Err(Error::Format(format!(
                    "rule '{}' has no ':' separator in style \"{raw}\"",
                    segment.trim()
                )));
            };
            let _ = styles.set(key.trim(), value.trim(), true);
        }
        Ok(styles)
    }

    /// Look up the value of a rule.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// True when a rule with this key exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Rules ordered by key, the canonical order used for equality and hashing.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_unstable();
        pairs
    }

    /// Upsert a rule. Returns `false` when nothing changed.
    pub(crate) fn set(&mut self, key: &str, value: &str, replace_existing: bool) -> bool {
        if let Some((_, existing)) = self.rules.iter_mut().find(|(k, _)| k == key) {
            if !replace_existing || *existing == value {
                return false;
            }
            value.clone_into(existing);
            return true;
        }
        self.rules.push((key.to_string(), value.to_string()));
        true
    }

    /// Remove a rule. Returns `false` when the key was absent.
    pub(crate) fn remove(&mut self, key: &str) -> bool {
        let before = self.rules.len();
        self.rules.retain(|(k, _)| k != key);
        self.rules.len() != before
    }
}

impl PartialEq for Styles {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.sorted() == other.sorted()
    }
}

impl fmt::Display for Styles {
    /// Recompose into `k1:v1;k2:v2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{key}:{value}")?;
        }
        Ok(())
    }
}

/// The `class` attribute decomposed into whitespace separated tokens.
///
/// Tokens are de-duplicated and keep their first-seen order. Equality
/// ignores that order.
#[derive(Debug, Clone, Default, Eq)]
pub struct Classes {
    tokens: Vec<String>,
}

impl Classes {
    /// Decompose a raw `class` attribute value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut classes = Self::default();
        let _ = classes.union(raw);
        classes
    }

    /// True when the token is present.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when there are no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over tokens in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Tokens in lexicographic order, the canonical order used for equality
    /// and hashing.
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut tokens: Vec<_> = self.iter().collect();
        tokens.sort_unstable();
        tokens
    }

    /// Add every whitespace separated token not already present.
    /// Returns `false` when nothing was added.
    pub(crate) fn union(&mut self, tokens: &str) -> bool {
        let mut changed = false;
        for token in tokens.split_whitespace() {
            if !self.contains(token) {
                self.tokens.push(token.to_string());
                changed = true;
            }
        }
        changed
    }

    /// Remove every whitespace separated token. Returns `false` when none of
    /// them was present.
    pub(crate) fn remove(&mut self, tokens: &str) -> bool {
        let before = self.tokens.len();
        let doomed: Vec<&str> = tokens.split_whitespace().collect();
        self.tokens.retain(|t| !doomed.contains(&t.as_str()));
        self.tokens.len() != before
    }
}

impl PartialEq for Classes {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.sorted() == other.sorted()
    }
}

impl fmt::Display for Classes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}
