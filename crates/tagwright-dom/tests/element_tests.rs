//! Tests for element construction, edits, traversal and rendering.

use tagwright_dom::{Element, Error, Node, RenderMode, Text, tags};

fn el(tag: &str) -> Element {
    Element::new(tag).unwrap()
}

// ========== equality ==========

#[test]
fn test_style_order_does_not_matter() {
    let a = el("span").style("width", "10px").unwrap().style("height", "15px").unwrap();
    let b = el("span").style("height", "15px").unwrap().style("width", "10px").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_content_order_matters() {
    let a = el("i");
    let b = el("b");
    let ab = el("div").append([a.clone()]).append([b.clone()]);
    let ba = el("div").append([b]).append([a]);
    assert_ne!(ab, ba);
}

// ========== classes ==========

#[test]
fn test_class_union_keeps_first_seen_order() {
    let div = el("div").class("a b").class("b c");
    assert_eq!(div.classes().iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert!(div.has_class("b"));
    assert!(!div.has_class("d"));
}

// ========== contents ==========

#[test]
fn test_insert_at_count_appends() {
    let div = el("div").append_text("a");
    let appended = div.insert(1, [Text::new("b")]).unwrap();
    assert_eq!(appended.text(), "ab");
}

#[test]
fn test_insert_past_count_is_out_of_range() {
    let div = el("div").append_text("a");
    let err = div.insert(2, [Text::new("b")]).unwrap_err();
    assert_eq!(err, Error::OutOfRange { index: 2, count: 1 });
    assert_eq!(div.text(), "a");
}

#[test]
fn test_empty_node_list_returns_receiver() {
    let div = el("div");
    let same = div.append(Vec::<Node>::new());
    assert!(Element::ptr_eq(&div, &same));
}

#[test]
fn test_children_skip_text() {
    let div = el("div")
        .append_text("lead")
        .append([el("p")])
        .append_text("tail")
        .append([el("span")]);
    let tags: Vec<_> = div.children().map(Element::tag).collect();
    assert_eq!(tags, vec!["p", "span"]);
    assert_eq!(div.contents().len(), 4);
}

// ========== attribute names ==========

#[test]
fn test_attribute_names_that_would_split_are_rejected() {
    for name in ["a b", "a=b", "a\"b", "a/b", "<a>"] {
        assert!(matches!(
            el("div").attribute(name, "x"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            el("div").toggle_attribute(name, true),
            Err(Error::InvalidArgument(_))
        ));
    }
    assert!(matches!(
        el("div").data("a b", "x"),
        Err(Error::InvalidArgument(_))
    ));
    let div = el("div").attribute("aria-label", "x").unwrap();
    assert_eq!(div.to_html().unwrap(), r#"<div aria-label="x"></div>"#);
}

// ========== removals ==========

#[test]
fn test_removals_of_absent_entries_are_noops() {
    let div = el("div").attribute("id", "x").unwrap();
    assert!(Element::ptr_eq(&div, &div.remove_attribute("name")));
    assert!(Element::ptr_eq(&div, &div.remove_class("missing")));
    assert!(Element::ptr_eq(&div, &div.remove_style("width").unwrap()));
}

// ========== find ==========

#[test]
fn test_find_lists_direct_matches_before_descending() {
    // <a><b><c/></b><d/></a>
    let root = el("a").append([el("b").append([el("c")]), el("d")]);
    let found: Vec<_> = root.find(|_| true).iter().map(|e| e.tag().to_string()).collect();
    assert_eq!(found, vec!["b", "d", "c"]);
}

#[test]
fn test_find_descends_into_non_matching_children() {
    let root = el("div").append([
        el("section").append([el("p").class("note"), el("p")]),
        el("p").class("note"),
    ]);
    let notes = root.find(|e| e.has_class("note"));
    assert_eq!(notes.len(), 2);
    assert!(notes.iter().all(|e| e.tag() == "p"));
}

#[test]
fn test_find_does_not_include_receiver() {
    let root = el("p");
    assert!(root.find(|e| e.tag() == "p").is_empty());
}

// ========== text ==========

#[test]
fn test_text_concatenates_descendants() {
    let ul = tags::ul().append([
        tags::li().append_text("one"),
        tags::li().append_text("two"),
    ]);
    assert_eq!(ul.text(), "onetwo");
    assert_eq!(el("div").append([el("br")]).text(), "");
}

// ========== rendering ==========

#[test]
fn test_render_self_closing_with_contents_fails() {
    let br = tags::br().append_text("nope");
    assert_eq!(br.render_mode(), RenderMode::SelfClosing);
    assert!(matches!(br.to_html(), Err(Error::InvalidOperation(_))));
}

#[test]
fn test_render_nested_document() {
    let page = tags::div()
        .attribute("id", "main")
        .unwrap()
        .append([
            Node::from(tags::h1().append_text("Fish & Chips")),
            Node::from(tags::img().attribute("src", "fish.png").unwrap()),
        ]);
    assert_eq!(
        page.to_html().unwrap(),
        "<div id=\"main\"><h1>Fish &amp; Chips</h1><img src=\"fish.png\" /></div>"
    );
}

// ========== threading ==========

#[test]
fn test_trees_are_shareable_across_threads() {
    let tree = tags::ul().append([tags::li().append_text("shared")]);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let tree = tree.clone();
            std::thread::spawn(move || tree.append_text(&i.to_string()).text())
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().starts_with("shared"));
    }
    assert_eq!(tree.text(), "shared");
}
