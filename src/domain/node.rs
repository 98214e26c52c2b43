//! View tree: immutable markup descriptions produced by components

use crate::domain::{Breakpoint, Destination};

/// Markup element names used by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Span,
    Svg,
    Path,
    Circle,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Svg => "svg",
            Tag::Path => "path",
            Tag::Circle => "circle",
        }
    }
}

/// Semantic styling intent, mapped to class tokens by a stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Page-width wrapper around the grid
    Container,
    /// Row whose columns sit side by side at or above the breakpoint
    ResponsiveRow,
    /// One of two equally weighted columns in a responsive row, sharing a
    /// line with its siblings from the given breakpoint up
    Column(Breakpoint),
    /// Horizontally centers its content
    Centered,
    /// Large outlined call-to-action button
    CallToAction,
    /// Icon placed before a label, spaced from it
    LeadingIcon,
    /// Floats independent of the grid
    Accessory,
    /// Small button inside an accessory
    AccessoryButton,
    /// Main illustration
    Portrait,
}

/// Where activating a link opens its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BrowsingContext {
    /// Replace the current page
    #[default]
    Current,
    /// Open a new tab/window, keep the current page
    New,
}

/// Boundary of a component's output inside the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    RootLayout,
    PrimaryContent,
    FeedbackLink,
    RepositoryLink,
}

impl FragmentKind {
    pub fn name(&self) -> &'static str {
        match self {
            FragmentKind::RootLayout => "RootLayout",
            FragmentKind::PrimaryContent => "PrimaryContent",
            FragmentKind::FeedbackLink => "FeedbackLink",
            FragmentKind::RepositoryLink => "RepositoryLink",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub attrs: Vec<Attr>,
    pub styles: Vec<Style>,
    pub children: Vec<Node>,
}

/// Activatable control navigating to a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub destination: Destination,
    pub context: BrowsingContext,
    pub label: Option<String>,
    pub styles: Vec<Style>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub children: Vec<Node>,
}

/// A node of the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Link(Link),
    Text(String),
    Fragment(Fragment),
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push(Attr {
            name,
            value: value.into(),
        });
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.styles.push(style);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn has_style(&self, style: Style) -> bool {
        self.styles.contains(&style)
    }

    pub fn is_column(&self) -> bool {
        self.styles.iter().any(|s| matches!(s, Style::Column(_)))
    }
}

impl Link {
    pub fn new(destination: Destination, context: BrowsingContext) -> Self {
        Self {
            destination,
            context,
            label: None,
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Accessible name, for links without visible text.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.styles.push(style);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }
}

impl Fragment {
    pub fn new(kind: FragmentKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<Link> for Node {
    fn from(l: Link) -> Self {
        Node::Link(l)
    }
}

impl From<Fragment> for Node {
    fn from(f: Fragment) -> Self {
        Node::Fragment(f)
    }
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(e) => &e.children,
            Node::Link(l) => &l.children,
            Node::Fragment(f) => &f.children,
            Node::Text(_) => &[],
        }
    }

    /// Depth-first, pre-order walk over this node and its descendants.
    pub fn walk(&self, visit: &mut impl FnMut(&Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Fragment kinds in document order.
    pub fn fragments(&self) -> Vec<FragmentKind> {
        let mut kinds = Vec::new();
        self.walk(&mut |n| {
            if let Node::Fragment(f) = n {
                kinds.push(f.kind);
            }
        });
        kinds
    }

    pub fn count_fragments(&self, kind: FragmentKind) -> usize {
        self.fragments().into_iter().filter(|k| *k == kind).count()
    }

    /// First fragment of the given kind, depth-first.
    pub fn find_fragment(&self, kind: FragmentKind) -> Option<&Node> {
        if let Node::Fragment(f) = self {
            if f.kind == kind {
                return Some(self);
            }
        }
        self.children()
            .iter()
            .find_map(|child| child.find_fragment(kind))
    }

    /// All links in document order.
    pub fn links(&self) -> Vec<&Link> {
        let mut out = Vec::new();
        collect_links(self, &mut out);
        out
    }

    /// Concatenation of all text nodes, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |n| {
            if let Node::Text(t) = n {
                out.push_str(t);
            }
        });
        out
    }

    pub fn contains_style(&self, style: Style) -> bool {
        let mut found = false;
        self.walk(&mut |n| match n {
            Node::Element(e) if e.has_style(style) => found = true,
            Node::Link(l) if l.styles.contains(&style) => found = true,
            _ => {}
        });
        found
    }
}

fn collect_links<'a>(node: &'a Node, out: &mut Vec<&'a Link>) {
    if let Node::Link(l) = node {
        out.push(l);
    }
    for child in node.children() {
        collect_links(child, out);
    }
}
