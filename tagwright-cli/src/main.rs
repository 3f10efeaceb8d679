//! Tagwright CLI
//!
//! Inspect, re-render, query and syntax-check HTML fragments.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use tagwright_common::warning::clear_warnings;
use tagwright_dom::{Element, Node, RenderMode};
use tagwright_html::{HtmlParser, parse_all, print_tree};

#[derive(Parser, Debug)]
#[command(name = "tagwright")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Show the parsed tree of a file
    tagwright tree page.html

    # Re-render an inline fragment
    tagwright render --html '<ul><li>one<li>two</ul>'

    # Only the start tags
    tagwright render --mode start-tag-only page.html

    # List every element with class "note"
    tagwright find --class note page.html

    # Fail on any syntax problem
    tagwright check page.html
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the parsed node tree
    Tree {
        #[command(flatten)]
        input: Input,
    },
    /// Parse and render the markup again
    Render {
        #[command(flatten)]
        input: Input,

        /// Render mode applied to every top-level element
        #[arg(long, value_name = "MODE", default_value = "normal")]
        mode: RenderMode,
    },
    /// Print the text content only
    Text {
        #[command(flatten)]
        input: Input,
    },
    /// Print every element matching all given filters
    Find {
        #[command(flatten)]
        input: Input,

        /// Tag name to match
        #[arg(long, value_name = "TAG")]
        tag: Option<String>,

        /// Class token to match
        #[arg(long, value_name = "CLASS")]
        class: Option<String>,
    },
    /// Report syntax issues and exit with an error if there are any
    Check {
        #[command(flatten)]
        input: Input,
    },
}

#[derive(Args, Debug)]
struct Input {
    /// Path to an HTML file
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// HTML string to use instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,
}

impl Input {
    fn read(&self) -> Result<String> {
        match (&self.path, &self.html) {
            (_, Some(html)) => Ok(html.clone()),
            (Some(path), None) => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            (None, None) => bail!("expected a file path or --html"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    clear_warnings();

    match cli.command {
        Command::Tree { input } => {
            for node in parse_all(&input.read()?)? {
                print_tree(&node, 0);
            }
        }
        Command::Render { input, mode } => {
            let mut out = String::new();
            for node in parse_all(&input.read()?)? {
                let node = match node {
                    Node::Element(element) => Node::Element(element.render(mode)),
                    text @ Node::Text(_) => text,
                };
                out.push_str(&node.to_html()?);
            }
            println!("{out}");
        }
        Command::Text { input } => {
            let text: String = parse_all(&input.read()?)?.iter().map(Node::text).collect();
            println!("{text}");
        }
        Command::Find { input, tag, class } => {
            let matches = |element: &Element| {
                tag.as_deref().is_none_or(|t| element.tag() == t)
                    && class.as_deref().is_none_or(|c| element.has_class(c))
            };
            for root in parse_all(&input.read()?)?.iter().filter_map(Node::as_element) {
                if matches(root) {
                    println!("{}", root.to_html()?);
                }
                for found in root.find(matches) {
                    println!("{}", found.to_html()?);
                }
            }
        }
        Command::Check { input } => {
            let (_, issues) = HtmlParser::run_with_issues(&input.read()?)?;
            if issues.is_empty() {
                println!("{}", "no issues found".green());
                return Ok(());
            }
            for issue in &issues {
                println!(
                    "{} {}",
                    format!("token {}:", issue.token_index).red(),
                    issue.message
                );
            }
            bail!("{} issue(s) found", issues.len());
        }
    }

    Ok(())
}
