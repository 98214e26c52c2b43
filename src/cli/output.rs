//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use termtree::Tree;

use crate::domain::{BrowsingContext, Node, Tag};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print success status indented (green checkmark with leading spaces)
pub fn success_detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {} {}", "✓".green(), msg);
}

/// Print completed action (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for documents and data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Outline of a view tree: components by name, markup by tag, links with
/// their destination.
pub fn outline(node: &Node) -> Tree<String> {
    let label = match node {
        Node::Fragment(f) => format!("<{} />", f.kind.name()),
        Node::Element(e) => e.tag.as_str().to_string(),
        Node::Link(l) => match l.context {
            BrowsingContext::New => format!("a -> {} (new context)", l.destination),
            BrowsingContext::Current => format!("a -> {}", l.destination),
        },
        Node::Text(t) => format!("{:?}", t),
    };

    // svg internals are noise in an outline
    let leaves: Vec<Tree<String>> = match node {
        Node::Element(e) if e.tag == Tag::Svg => Vec::new(),
        _ => node.children().iter().map(outline).collect(),
    };

    Tree::new(label).with_leaves(leaves)
}
