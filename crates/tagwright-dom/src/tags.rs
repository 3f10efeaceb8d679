//! Stateless factories, one per HTML tag name.
//!
//! Void elements (`br`, `img`, `input`, ...) start in
//! [`RenderMode::SelfClosing`]; every other factory returns an empty element
//! in [`RenderMode::Normal`].
//!
//! ```
//! use tagwright_dom::tags;
//!
//! let html = tags::p().append([tags::br()]).to_html().unwrap();
//! assert_eq!(html, "<p><br /></p>");
//! ```

use crate::element::Element;
use crate::render::RenderMode;

macro_rules! normal_tags {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("An empty `<", $tag, ">` element.")]
            #[must_use]
            pub fn $name() -> Element {
                Element::known($tag)
            }
        )*
    };
}

macro_rules! void_tags {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("A self-closing `<", $tag, " />` element.")]
            #[must_use]
            pub fn $name() -> Element {
                Element::known($tag).render(RenderMode::SelfClosing)
            }
        )*
    };
}

normal_tags! {
    a => "a", abbr => "abbr", address => "address", article => "article",
    aside => "aside", audio => "audio", b => "b", bdi => "bdi", bdo => "bdo",
    blockquote => "blockquote", body => "body", button => "button",
    canvas => "canvas", caption => "caption", cite => "cite", code => "code",
    colgroup => "colgroup", data => "data", datalist => "datalist", dd => "dd",
    del => "del", details => "details", dfn => "dfn", div => "div", dl => "dl",
    dt => "dt", em => "em", fieldset => "fieldset", figcaption => "figcaption",
    figure => "figure", footer => "footer", form => "form", h1 => "h1",
    h2 => "h2", h3 => "h3", h4 => "h4", h5 => "h5", h6 => "h6", head => "head",
    header => "header", html => "html", i => "i", iframe => "iframe",
    ins => "ins", kbd => "kbd", label => "label", legend => "legend",
    li => "li", main => "main", map => "map", mark => "mark", menu => "menu",
    meter => "meter", nav => "nav", noscript => "noscript", object => "object",
    ol => "ol", optgroup => "optgroup", option => "option", output => "output",
    p => "p", pre => "pre", progress => "progress", q => "q", rp => "rp",
    rt => "rt", ruby => "ruby", s => "s", samp => "samp", script => "script",
    section => "section", select => "select", small => "small", span => "span",
    strong => "strong", style => "style", sub => "sub", summary => "summary",
    sup => "sup", table => "table", tbody => "tbody", td => "td",
    template => "template", textarea => "textarea", tfoot => "tfoot",
    th => "th", thead => "thead", time => "time", title => "title", tr => "tr",
    u => "u", ul => "ul", var => "var", video => "video",
}

void_tags! {
    area => "area", base => "base", br => "br", col => "col", embed => "embed",
    hr => "hr", img => "img", input => "input", link => "link", meta => "meta",
    param => "param", source => "source", track => "track", wbr => "wbr",
}

/// Self-closing `<input>` elements with their `type` preset.
pub mod inputs {
    use crate::element::Element;

    macro_rules! input_types {
        ($($name:ident => $kind:literal),* $(,)?) => {
            $(
                #[doc = concat!("A self-closing `<input type=\"", $kind, "\" />` element.")]
                #[must_use]
                pub fn $name() -> Element {
                    super::input().set_known("type", $kind)
                }
            )*
        };
    }

    input_types! {
        button => "button", checkbox => "checkbox", color => "color",
        date => "date", datetime => "datetime", datetime_local => "datetime-local",
        email => "email", file => "file", hidden => "hidden", image => "image",
        month => "month", number => "number", password => "password",
        radio => "radio", range => "range", reset => "reset", search => "search",
        submit => "submit", tel => "tel", text => "text", time => "time",
        url => "url", week => "week",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_factory() {
        let el = div();
        assert_eq!(el.tag(), "div");
        assert_eq!(el.render_mode(), RenderMode::Normal);
        assert!(el.contents().is_empty());
    }

    #[test]
    fn test_void_factory_is_self_closing() {
        for el in [
            area(),
            base(),
            br(),
            col(),
            embed(),
            hr(),
            img(),
            input(),
            link(),
            meta(),
            param(),
            source(),
            track(),
            wbr(),
        ] {
            assert_eq!(el.render_mode(), RenderMode::SelfClosing, "{}", el.tag());
        }
    }

    #[test]
    fn test_input_types() {
        let el = inputs::datetime_local();
        assert_eq!(el.tag(), "input");
        assert_eq!(el.get("type"), Some("datetime-local"));
        assert_eq!(inputs::checkbox().to_html().unwrap(), "<input type=\"checkbox\" />");
    }

    #[test]
    fn test_factories_return_fresh_values() {
        let first = p().append_text("one");
        assert!(p().contents().is_empty());
        assert_ne!(first, p());
    }
}
