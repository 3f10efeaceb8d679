//! Structural equality and hashing for elements.
//!
//! Two elements are equal when their tags match, their plain attributes
//! match as a map, their styles match as a set of rules, their classes match
//! as a set of tokens, and their contents match element-wise in order. The
//! render mode is a serialization label and takes no part.
//!
//! A `style` attribute that does not decompose is compared and hashed by its
//! raw text, which keeps `Eq` total and consistent with `Hash`.

use std::hash::{Hash, Hasher};

use crate::attributes::{Attribute, CLASS, STYLE, Styles};
use crate::element::Element;

/// The styles of an element, decomposed when possible.
enum StyleView<'a> {
    Rules(Styles),
    Raw(&'a str),
}

impl Element {
    fn plain_attributes(&self) -> Vec<&Attribute> {
        let mut plain: Vec<_> = self
            .attributes()
            .iter()
            .filter(|a| !a.is_structured())
            .collect();
        plain.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        plain
    }

    fn style_view(&self) -> StyleView<'_> {
        match self.styles() {
            Ok(styles) => StyleView::Rules(styles),
            Err(_) => StyleView::Raw(self.get(STYLE).unwrap_or_default()),
        }
    }
}

fn styles_equal(a: &Element, b: &Element) -> bool {
    match (a.style_view(), b.style_view()) {
        (StyleView::Rules(left), StyleView::Rules(right)) => left == right,
        _ => a.get(STYLE) == b.get(STYLE),
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        if Self::ptr_eq(self, other) {
            return true;
        }
        if self.tag() != other.tag() {
            return false;
        }
        let left = self.plain_attributes();
        let right = other.plain_attributes();
        if left.len() != right.len() {
            return false;
        }
        left == right
            && styles_equal(self, other)
            && self.classes() == other.classes()
            && self.contents() == other.contents()
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag().hash(state);
        for attribute in self.plain_attributes() {
            attribute.name.hash(state);
            attribute.value.hash(state);
        }
        match self.style_view() {
            StyleView::Rules(styles) => {
                for (key, value) in styles.sorted() {
                    key.hash(state);
                    value.hash(state);
                }
            }
            StyleView::Raw(raw) => {
                STYLE.hash(state);
                raw.hash(state);
            }
        }
        let classes = self.classes();
        for token in classes.sorted() {
            CLASS.hash(state);
            token.hash(state);
        }
        self.contents().hash(state);
    }
}
