//! Property tests for the equality and hashing laws.

use std::collections::BTreeMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use tagwright_dom::{Element, Text};

fn hash_of(element: &Element) -> u64 {
    let mut hasher = DefaultHasher::new();
    element.hash(&mut hasher);
    hasher.finish()
}

/// Reorder `items` deterministically from `shift` and `reverse`.
fn permute<T: Clone>(items: &[T], shift: usize, reverse: bool) -> Vec<T> {
    let mut out = items.to_vec();
    if !out.is_empty() {
        let len = out.len();
        out.rotate_left(shift % len);
    }
    if reverse {
        out.reverse();
    }
    out
}

/// Distinct keys from a small alphabet so collisions are frequent in input
/// but absent after dedup.
fn distinct_pairs(raw: &[(u8, u8)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(k, v)| (format!("k{}", k % 12), format!("v{}", v % 5)))
        .collect::<BTreeMap<_, _>>()
        .into_iter()
        .collect()
}

fn with_everything(
    styles: &[(String, String)],
    attributes: &[(String, String)],
    classes: &[String],
) -> Element {
    let mut el = Element::new("span").unwrap();
    for (key, value) in attributes {
        el = el.attribute(&format!("data-{key}"), value.as_str()).unwrap();
    }
    for (key, value) in styles {
        el = el.style(key, value).unwrap();
    }
    for token in classes {
        el = el.class(token);
    }
    el
}

#[quickcheck]
fn prop_insertion_order_does_not_affect_equality_or_hash(
    styles: Vec<(u8, u8)>,
    attributes: Vec<(u8, u8)>,
    classes: Vec<u8>,
    shift: usize,
    reverse: bool,
) -> bool {
    let styles = distinct_pairs(&styles);
    let attributes = distinct_pairs(&attributes);
    let classes: Vec<String> = classes.iter().map(|c| format!("c{}", c % 10)).collect();

    let a = with_everything(&styles, &attributes, &classes);
    let b = with_everything(
        &permute(&styles, shift, reverse),
        &permute(&attributes, shift.wrapping_add(1), !reverse),
        &permute(&classes, shift, reverse),
    );
    a == b && hash_of(&a) == hash_of(&b)
}

#[quickcheck]
fn prop_content_order_matters(texts: Vec<String>, shift: usize) -> TestResult {
    let permuted = permute(&texts, shift, false);
    if permuted == texts {
        return TestResult::discard();
    }
    let build = |items: &[String]| {
        Element::new("div")
            .unwrap()
            .append(items.iter().map(Text::new))
    };
    TestResult::from_bool(build(&texts) != build(&permuted))
}

#[quickcheck]
fn prop_equal_elements_hash_equal(texts: Vec<String>, id: String) -> bool {
    let build = || {
        Element::new("p")
            .unwrap()
            .attribute("id", id.as_str())
            .unwrap()
            .append(texts.iter().map(Text::new))
    };
    let (a, b) = (build(), build());
    a == b && hash_of(&a) == hash_of(&b)
}
