//! Tree construction on top of the `html5gum` tokenizer.
//!
//! The tokenizer turns markup into start tag, end tag, text and error
//! tokens with character references already decoded. This module builds
//! [`Node`] trees from that stream with a stack of open elements and a small
//! set of recovery rules:
//!
//! - void elements and start tags carrying the self-closing flag close at once
//! - a start tag of `li`, `option`, `p`, `dt`, `dd`, `tr`, `td` or `th`
//!   closes an open element of the same family at the top of the stack
//! - an end tag closes every element above its matching start tag
//! - end tags without a matching start tag are dropped
//! - comments and doctypes are dropped, but still separate the text on
//!   either side of them into distinct text nodes
//!
//! Syntax errors reported by the tokenizer and every recovery that is not
//! allowed by HTML's optional end tag rules are recorded as [`ParseIssue`]s.
//! In the default lenient mode they are printed once through
//! [`warn_once`]; with [`HtmlParser::with_syntax_validation`] any issue makes
//! the parse fail.

use html5gum::{State, Token, Tokenizer};
use tagwright_common::warning::warn_once;
use tagwright_dom::{Element, Error, Node, RenderMode, Result, Text};

/// Elements that never have contents.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose end tag may be omitted.
const OPTIONAL_END_TAGS: &[&str] = &["li", "option", "p", "dt", "dd", "tr", "td", "th"];

fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// The tags a start tag implicitly closes when one of them is the current
/// element.
fn closes_family(tag: &str) -> &'static [&'static str] {
    match tag {
        "li" => &["li"],
        "option" => &["option"],
        "p" => &["p"],
        "dt" | "dd" => &["dt", "dd"],
        "tr" => &["tr"],
        "td" | "th" => &["td", "th"],
        _ => &[],
    }
}

/// A problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// What went wrong.
    pub message: String,
    /// Index into the token stream where the issue was found.
    pub token_index: usize,
}

/// Markup parser configuration.
///
/// ```
/// use tagwright_html::HtmlParser;
///
/// let nodes = HtmlParser::new().parse_all("<b>bold</b> and plain")?;
/// assert_eq!(nodes.len(), 2);
///
/// let strict = HtmlParser::new().with_syntax_validation();
/// assert!(strict.parse("<div id=a id=b></div>").is_err());
/// # Ok::<(), tagwright_dom::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser {
    syntax_validation: bool,
}

impl HtmlParser {
    /// A lenient parser: issues are reported as warnings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            syntax_validation: false,
        }
    }

    /// Fail with [`Error::InvalidOperation`] when any [`ParseIssue`] is found.
    #[must_use]
    pub const fn with_syntax_validation(mut self) -> Self {
        self.syntax_validation = true;
        self
    }

    /// Parse markup that holds exactly one element.
    ///
    /// Whitespace around the element is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the markup yields no node,
    /// several nodes, or a single text node. In strict mode, returns
    /// [`Error::InvalidOperation`] first if the markup has issues.
    pub fn parse(&self, markup: &str) -> Result<Element> {
        let mut nodes = self.parse_all(markup.trim())?;
        if nodes.len() != 1 {
            return Err(Error::InvalidArgument(format!(
                "expected exactly one root node, found {}",
                nodes.len()
            )));
        }
        match nodes.pop() {
            Some(Node::Element(element)) => Ok(element),
            _ => Err(Error::InvalidArgument(
                "markup holds text, not an element".to_string(),
            )),
        }
    }

    /// Parse markup into its ordered top-level nodes. Empty input yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`Error::InvalidOperation`] listing every
    /// issue found.
    pub fn parse_all(&self, markup: &str) -> Result<Vec<Node>> {
        let (nodes, issues) = Self::run_with_issues(markup)?;
        if issues.is_empty() {
            return Ok(nodes);
        }
        if self.syntax_validation {
            let report: Vec<String> = issues
                .iter()
                .map(|issue| format!("token {}: {}", issue.token_index, issue.message))
                .collect();
            return Err(Error::InvalidOperation(format!(
                "parse errors found:\n{}",
                report.join("\n")
            )));
        }
        for issue in &issues {
            let _ = warn_once("HTML Parser", &issue.message);
        }
        Ok(nodes)
    }

    /// Parse markup and return the nodes together with every issue found,
    /// without printing or failing on them.
    ///
    /// # Errors
    ///
    /// Only fails if a node cannot be constructed, which well-formed
    /// tokenizer output never triggers.
    pub fn run_with_issues(markup: &str) -> Result<(Vec<Node>, Vec<ParseIssue>)> {
        let mut builder = TreeBuilder::default();
        let mut tokenizer = Tokenizer::new(markup);

        while let Some(token) = tokenizer.next() {
            let token = match token {
                Ok(token) => token,
                Err(never) => match never {},
            };
            match token {
                Token::StartTag(tag) => {
                    let name = String::from_utf8_lossy(&tag.name).into_owned();
                    let attributes = tag.attributes.iter().map(|(k, v)| {
                        (
                            String::from_utf8_lossy(k).into_owned(),
                            String::from_utf8_lossy(v).into_owned(),
                        )
                    });
                    let immediate = tag.self_closing || is_void_element(&name);
                    builder.start_tag(&name, attributes, tag.self_closing, immediate)?;
                    if !immediate {
                        match name.as_str() {
                            "script" | "style" => tokenizer.set_state(State::ScriptData),
                            "textarea" | "title" => tokenizer.set_state(State::RcData),
                            _ => {}
                        }
                    }
                }
                Token::EndTag(tag) => {
                    builder.end_tag(&String::from_utf8_lossy(&tag.name));
                }
                Token::String(text) => builder.text(&String::from_utf8_lossy(&text)),
                Token::Comment(_) | Token::Doctype(_) => builder.end_text_run(),
                Token::Error(error) => builder.issue(format!("syntax error: {error:?}")),
            }
            builder.token_index += 1;
        }

        Ok(builder.finish())
    }
}

/// An element whose end tag has not been seen yet.
struct OpenElement {
    element: Element,
    contents: Vec<Node>,
    self_closed: bool,
}

impl OpenElement {
    /// Produce the finished element.
    ///
    /// An empty element that was self-closed in the source, or is void,
    /// renders as self-closing. The exception is `<i>`: icon fonts use it
    /// as an empty placeholder and browsers mishandle `<i />`, so it gets a
    /// single space of text and a normal end tag instead.
    fn close(self) -> Element {
        let tag = self.element.tag();
        if self.contents.is_empty() && (self.self_closed || is_void_element(tag)) {
            if tag == "i" {
                return self.element.append_text(" ");
            }
            return self.element.render(RenderMode::SelfClosing);
        }
        self.element.append(self.contents)
    }
}

#[derive(Default)]
struct TreeBuilder {
    stack: Vec<OpenElement>,
    roots: Vec<Node>,
    issues: Vec<ParseIssue>,
    token_index: usize,
    /// Set while consecutive text tokens belong to one run of text.
    in_text_run: bool,
}

impl TreeBuilder {
    fn issue(&mut self, message: String) {
        self.issues.push(ParseIssue {
            message,
            token_index: self.token_index,
        });
    }

    fn start_tag(
        &mut self,
        name: &str,
        attributes: impl Iterator<Item = (String, String)>,
        self_closed: bool,
        immediate: bool,
    ) -> Result<()> {
        let family = closes_family(name);
        if self
            .stack
            .last()
            .is_some_and(|open| family.contains(&open.element.tag()))
        {
            let _ = self.pop();
        }

        let mut element = Element::new(name)?;
        for (key, value) in attributes {
            match element.attribute(&key, value) {
                Ok(next) => element = next,
                Err(Error::InvalidArgument(message)) => {
                    self.issue(format!("attribute dropped from <{name}>: {message}"));
                }
                Err(other) => return Err(other),
            }
        }
        let open = OpenElement {
            element,
            contents: Vec::new(),
            self_closed,
        };
        if immediate {
            self.attach(Node::Element(open.close()));
        } else {
            self.stack.push(open);
        }
        Ok(())
    }

    fn end_tag(&mut self, name: &str) {
        let Some(index) = self.stack.iter().rposition(|open| open.element.tag() == name) else {
            self.issue(format!("end tag </{name}> has no matching start tag"));
            return;
        };
        while self.stack.len() > index + 1 {
            if let Some(tag) = self.pop()
                && !OPTIONAL_END_TAGS.contains(&tag.as_str())
            {
                self.issue(format!("<{tag}> closed implicitly by </{name}>"));
            }
        }
        let _ = self.pop();
    }

    fn text(&mut self, text: &str) {
        let contents = match self.stack.last_mut() {
            Some(open) => &mut open.contents,
            None => &mut self.roots,
        };
        // The tokenizer may split one run of text across several tokens.
        if self.in_text_run
            && let Some(Node::Text(previous)) = contents.last_mut()
        {
            *previous = Text::new(format!("{}{text}", previous.as_str()));
        } else {
            contents.push(Node::Text(Text::new(text)));
        }
        self.in_text_run = true;
    }

    fn end_text_run(&mut self) {
        self.in_text_run = false;
    }

    /// Close the current element and attach it to its parent. Returns the
    /// closed tag name.
    fn pop(&mut self) -> Option<String> {
        let open = self.stack.pop()?;
        let tag = open.element.tag().to_string();
        self.attach(Node::Element(open.close()));
        Some(tag)
    }

    fn attach(&mut self, node: Node) {
        self.end_text_run();
        match self.stack.last_mut() {
            Some(parent) => parent.contents.push(node),
            None => self.roots.push(node),
        }
    }

    fn finish(mut self) -> (Vec<Node>, Vec<ParseIssue>) {
        while let Some(tag) = self.pop() {
            if !OPTIONAL_END_TAGS.contains(&tag.as_str()) {
                self.issue(format!("<{tag}> was never closed"));
            }
        }
        (self.roots, self.issues)
    }
}

/// Parse markup holding exactly one element, leniently.
///
/// # Errors
///
/// See [`HtmlParser::parse`].
pub fn parse(markup: &str) -> Result<Element> {
    HtmlParser::new().parse(markup)
}

/// Parse markup into its top-level nodes, leniently.
///
/// # Errors
///
/// See [`HtmlParser::parse_all`].
pub fn parse_all(markup: &str) -> Result<Vec<Node>> {
    HtmlParser::new().parse_all(markup)
}

/// Parse markup holding exactly one element, failing on any issue.
///
/// # Errors
///
/// See [`HtmlParser::parse`].
pub fn parse_strict(markup: &str) -> Result<Element> {
    HtmlParser::new().with_syntax_validation().parse(markup)
}

/// Parse markup into its top-level nodes, failing on any issue.
///
/// # Errors
///
/// See [`HtmlParser::parse_all`].
pub fn parse_all_strict(markup: &str) -> Result<Vec<Node>> {
    HtmlParser::new().with_syntax_validation().parse_all(markup)
}

/// Print a tree for debugging.
pub fn print_tree(node: &Node, indent: usize) {
    let prefix = "  ".repeat(indent);
    match node {
        Node::Element(element) => {
            println!("{prefix}{element}");
            for child in element.contents() {
                print_tree(child, indent + 1);
            }
        }
        Node::Text(text) => {
            let display = text.as_str().replace('\n', "\\n").replace(' ', "\u{00B7}");
            println!("{prefix}\"{display}\"");
        }
    }
}
