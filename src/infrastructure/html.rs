//! HTML rendering of view trees via maud
//!
//! Text and attribute values go through maud's escaping; tag and attribute
//! names are compile-time constants of the view tree and are written as is.

use maud::{html, Markup, Render, DOCTYPE};

use crate::domain::{BrowsingContext, Destination, Element, Link, Node, Style};
use crate::infrastructure::stylesheet::StyleSheet;

/// Renders view trees with class tokens from a stylesheet.
#[derive(Debug, Clone)]
pub struct HtmlRenderer<S> {
    sheet: S,
}

impl<S: StyleSheet> HtmlRenderer<S> {
    pub fn new(sheet: S) -> Self {
        Self { sheet }
    }

    /// Renders a single tree as an HTML fragment.
    pub fn fragment(&self, node: &Node) -> String {
        self.view(node).render().into_string()
    }

    /// Complete HTML5 document with `body` as page content.
    pub fn document(&self, title: &str, body: &Node) -> String {
        let markup: Markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    link rel="stylesheet" href=(self.sheet.href());
                }
                body {
                    (self.view(body))
                }
            }
        };
        markup.into_string()
    }

    /// Static document forwarding the browser to `target`.
    pub fn redirect(&self, title: &str, target: &Destination) -> String {
        let markup: Markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta http-equiv="refresh" content=(format!("0; url={}", target));
                    title { (title) }
                }
                body {
                    p {
                        "Redirecting to "
                        a href=(target.as_str()) { (target.as_str()) }
                    }
                }
            }
        };
        markup.into_string()
    }

    fn view<'a>(&'a self, node: &'a Node) -> NodeView<'a, S> {
        NodeView {
            node,
            sheet: &self.sheet,
        }
    }
}

struct NodeView<'a, S> {
    node: &'a Node,
    sheet: &'a S,
}

impl<S: StyleSheet> Render for NodeView<'_, S> {
    fn render_to(&self, buffer: &mut String) {
        match self.node {
            Node::Element(e) => self.element(e, buffer),
            Node::Link(l) => self.link(l, buffer),
            Node::Text(t) => t.as_str().render_to(buffer),
            Node::Fragment(f) => self.children(&f.children, buffer),
        }
    }
}

impl<S: StyleSheet> NodeView<'_, S> {
    fn element(&self, e: &Element, buffer: &mut String) {
        let tag = e.tag.as_str();
        buffer.push('<');
        buffer.push_str(tag);
        for attr in &e.attrs {
            write_attr(buffer, attr.name, &attr.value);
        }
        self.class_attr(&e.styles, buffer);
        buffer.push('>');
        self.children(&e.children, buffer);
        buffer.push_str("</");
        buffer.push_str(tag);
        buffer.push('>');
    }

    fn link(&self, l: &Link, buffer: &mut String) {
        buffer.push_str("<a");
        write_attr(buffer, "href", l.destination.as_str());
        if l.context == BrowsingContext::New {
            write_attr(buffer, "target", "_blank");
        }
        if let Some(label) = &l.label {
            write_attr(buffer, "aria-label", label);
        }
        self.class_attr(&l.styles, buffer);
        buffer.push('>');
        self.children(&l.children, buffer);
        buffer.push_str("</a>");
    }

    fn class_attr(&self, styles: &[Style], buffer: &mut String) {
        if styles.is_empty() {
            return;
        }
        let classes = styles
            .iter()
            .flat_map(|s| self.sheet.classes(*s))
            .collect::<Vec<_>>()
            .join(" ");
        write_attr(buffer, "class", &classes);
    }

    fn children(&self, children: &[Node], buffer: &mut String) {
        for child in children {
            NodeView {
                node: child,
                sheet: self.sheet,
            }
            .render_to(buffer);
        }
    }
}

fn write_attr(buffer: &mut String, name: &str, value: &str) {
    buffer.push(' ');
    buffer.push_str(name);
    buffer.push_str("=\"");
    value.render_to(buffer);
    buffer.push('"');
}
