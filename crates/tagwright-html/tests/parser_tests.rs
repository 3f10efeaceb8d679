//! Integration tests for markup parsing and the parse/render round trip.

use tagwright_dom::{Element, Error, Node, RenderMode, Text, tags};
use tagwright_html::{HtmlParser, parse, parse_all, parse_all_strict, parse_strict};

fn el(tag: &str) -> Element {
    Element::new(tag).unwrap()
}

// ========== parse ==========

#[test]
fn test_parse_single_element() {
    let div = parse(r#"<div id="main" class="a b">hello</div>"#).unwrap();
    assert_eq!(div.tag(), "div");
    assert_eq!(div.get("id"), Some("main"));
    assert!(div.has_class("a") && div.has_class("b"));
    assert_eq!(div.text(), "hello");
}

#[test]
fn test_parse_requires_exactly_one_root() {
    assert!(matches!(parse(""), Err(Error::InvalidArgument(_))));
    assert!(matches!(parse("<p>a</p><p>b</p>"), Err(Error::InvalidArgument(_))));
    assert!(matches!(parse("just text"), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_parse_ignores_surrounding_whitespace() {
    let div = parse("\n  <div></div>\n").unwrap();
    assert_eq!(div, el("div"));
}

#[test]
fn test_parse_all_empty_input() {
    assert!(parse_all("").unwrap().is_empty());
}

#[test]
fn test_parse_all_list_items() {
    let nodes = parse_all("<li>The first</li><li>The second</li>").unwrap();
    assert_eq!(
        nodes,
        vec![
            Node::from(el("li").append([Text::new("The first")])),
            Node::from(el("li").append([Text::new("The second")])),
        ]
    );
}

#[test]
fn test_parse_all_mixed_text_and_elements() {
    let nodes = parse_all("before <b>bold</b> after").unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0], Node::from(Text::new("before ")));
    assert_eq!(nodes[1].as_element().map(Element::tag), Some("b"));
    assert_eq!(nodes[2].text(), " after");
}

#[test]
fn test_text_of_nested_list() {
    let ul = parse("<ul><li>one</li><li>two</li></ul>").unwrap();
    assert_eq!(ul.text(), "onetwo");
}

#[test]
fn test_select_with_options() {
    let select = parse(
        r#"<select name="pick"><option value="1" selected>One</option><option value="2">Two</option></select>"#,
    )
    .unwrap();
    let options: Vec<_> = select.children().collect();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].get("selected"), Some(""));
    assert_eq!(options[1].get("value"), Some("2"));
    assert_eq!(options[1].text(), "Two");
}

// ========== render modes from source ==========

#[test]
fn test_self_closed_source_becomes_self_closing() {
    let div = parse("<div/>").unwrap();
    assert_eq!(div.render_mode(), RenderMode::SelfClosing);
    assert_eq!(div.to_html().unwrap(), "<div />");
}

#[test]
fn test_void_elements_are_self_closing() {
    let p = parse(r#"<p>a<br>b<img src="x.png"></p>"#).unwrap();
    let modes: Vec<_> = p.children().map(Element::render_mode).collect();
    assert_eq!(modes, vec![RenderMode::SelfClosing, RenderMode::SelfClosing]);
    assert_eq!(p.to_html().unwrap(), r#"<p>a<br />b<img src="x.png" /></p>"#);
}

#[test]
fn test_explicitly_closed_empty_element_stays_normal() {
    let span = parse("<span></span>").unwrap();
    assert_eq!(span.render_mode(), RenderMode::Normal);
    assert_eq!(span.to_html().unwrap(), "<span></span>");
}

#[test]
fn test_self_closed_icon_gets_a_space() {
    let icon = parse(r#"<i class="fa fa-star" />"#).unwrap();
    assert_eq!(icon.render_mode(), RenderMode::Normal);
    assert_eq!(icon.text(), " ");
    assert_eq!(icon.to_html().unwrap(), r#"<i class="fa fa-star"> </i>"#);
}

// ========== entities and raw text ==========

#[test]
fn test_entities_are_decoded_once() {
    let p = parse(r#"<p title="&quot;q&quot;">Fish &amp; Chips &lt;3</p>"#).unwrap();
    assert_eq!(p.get("title"), Some("\"q\""));
    assert_eq!(p.text(), "Fish & Chips <3");
    assert_eq!(
        p.to_html().unwrap(),
        r#"<p title="&quot;q&quot;">Fish &amp; Chips &lt;3</p>"#
    );
}

#[test]
fn test_script_content_is_raw() {
    let source = "<script>if (a < b && c) { x = '</div>'; }</script>";
    let script = parse(source).unwrap();
    assert_eq!(script.text(), "if (a < b && c) { x = '</div>'; }");
    assert_eq!(script.to_html().unwrap(), source);
}

#[test]
fn test_style_value_with_colons() {
    let div = parse(
        r#"<div style="filter:progid:DXImageTransform.Microsoft.gradient(startColorstr='#80000000', endColorstr='#80000000');"></div>"#,
    )
    .unwrap();
    let styles = div.styles().unwrap();
    assert_eq!(styles.len(), 1);
    assert_eq!(
        styles.get("filter"),
        Some("progid:DXImageTransform.Microsoft.gradient(startColorstr='#80000000', endColorstr='#80000000')")
    );
}

// ========== equality after parsing ==========

#[test]
fn test_parsed_equals_built() {
    let parsed = parse(r#"<span style="height:15px;width:10px" class="b a">x</span>"#).unwrap();
    let built = el("span")
        .style("width", "10px")
        .unwrap()
        .style("height", "15px")
        .unwrap()
        .class("a b")
        .append_text("x");
    assert_eq!(parsed, built);
}

#[test]
fn test_parse_factory_equivalence() {
    let parsed = parse("<ul><li>a</li></ul>").unwrap();
    let built = tags::ul().append([tags::li().append_text("a")]);
    assert_eq!(parsed, built);
}

// ========== syntax validation ==========

#[test]
fn test_strict_mode_rejects_issues() {
    let markup = "<div><span>unclosed</div>";
    assert!(parse(markup).is_ok());
    assert!(matches!(parse_strict(markup), Err(Error::InvalidOperation(_))));
    assert!(matches!(parse_all_strict("</b>"), Err(Error::InvalidOperation(_))));
}

#[test]
fn test_strict_mode_accepts_clean_markup() {
    let strict = HtmlParser::new().with_syntax_validation();
    assert!(strict.parse("<ul><li>one</li><li>two</li></ul>").is_ok());
    assert!(parse_all_strict("text <em>and</em> more").is_ok());
}

#[test]
fn test_issues_are_reported_with_token_positions() {
    let (nodes, issues) = HtmlParser::run_with_issues("<div></p></div>").unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].token_index, 1);
}
