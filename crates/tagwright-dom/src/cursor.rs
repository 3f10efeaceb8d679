//! A zipper over an element tree.
//!
//! Elements hold no parent pointer. A [`Cursor`] records the path taken from
//! the root while descending, so parent, ancestor and sibling queries are
//! answered from that path. Replacing the focused element and climbing back
//! up rebuilds only the elements on the path; every other subtree is shared
//! with the original tree.

use crate::element::Element;
use crate::node::Node;

/// One step of the recorded path: the parent as it was when we descended
/// and the content index of the child we descended into.
#[derive(Debug, Clone)]
struct Crumb {
    parent: Element,
    index: usize,
}

/// A focused position inside an element tree.
#[derive(Debug, Clone)]
pub struct Cursor {
    path: Vec<Crumb>,
    focus: Element,
}

impl Cursor {
    /// Place a cursor on `root`.
    #[must_use]
    pub const fn new(root: Element) -> Self {
        Self {
            path: Vec::new(),
            focus: root,
        }
    }

    /// The focused element, reflecting any replacement made through this
    /// cursor.
    #[must_use]
    pub const fn focus(&self) -> &Element {
        &self.focus
    }

    /// Number of steps from the root; 0 at the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Content index of the focus within its parent, `None` at the root.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.path.last().map(|crumb| crumb.index)
    }

    /// Descend into the content node at `index`.
    ///
    /// Returns `None` when `index` is out of range or names a text leaf.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<Self> {
        let element = self.focus.contents().get(index)?.as_element()?.clone();
        let mut path = self.path.clone();
        path.push(Crumb {
            parent: self.focus.clone(),
            index,
        });
        Some(Self {
            path,
            focus: element,
        })
    }

    /// Move to the parent, carrying any replacement made below it.
    ///
    /// Returns `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (crumb, rest) = self.path.split_last()?;
        let current = crumb
            .parent
            .contents()
            .get(crumb.index)
            .and_then(Node::as_element);
        let parent = match current {
            Some(original) if Element::ptr_eq(original, &self.focus) => crumb.parent.clone(),
            _ => crumb
                .parent
                .replace_content(crumb.index, Node::Element(self.focus.clone())),
        };
        Some(Self {
            path: rest.to_vec(),
            focus: parent,
        })
    }

    /// Iterate over the ancestors of the focus, nearest first, ending with the
    /// root.
    #[must_use]
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            current: self.parent(),
        }
    }

    /// The other content nodes of the focus's parent, in order. Empty at the
    /// root.
    pub fn siblings(&self) -> impl Iterator<Item = &Node> {
        let (contents, skip) = self
            .path
            .last()
            .map_or((&[][..], 0), |crumb| (crumb.parent.contents(), crumb.index));
        contents
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != skip)
            .map(|(_, node)| node)
    }

    /// Replace the focused element, keeping the recorded path.
    #[must_use]
    pub fn replace(&self, element: Element) -> Self {
        Self {
            path: self.path.clone(),
            focus: element,
        }
    }

    /// Climb to the root and return it, with every replacement applied.
    #[must_use]
    pub fn into_root(self) -> Element {
        let mut cursor = self;
        while let Some(parent) = cursor.parent() {
            cursor = parent;
        }
        cursor.focus
    }
}

/// Iterator over the ancestors of a cursor position.
#[derive(Debug)]
pub struct Ancestors {
    current: Option<Cursor>,
}

impl Iterator for Ancestors {
    type Item = Element;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.current.take()?;
        self.current = cursor.parent();
        Some(cursor.focus)
    }
}
