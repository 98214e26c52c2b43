//! Page components
//!
//! Each component returns a fresh view tree wrapped in a fragment boundary.
//! Components read nothing but the immutable [`PageSpec`] captured at
//! construction, so rendering twice yields equal trees.

use tracing::instrument;

use crate::domain::icons;
use crate::domain::layout::Breakpoint;
use crate::domain::{
    BrowsingContext, Destination, Element, Fragment, FragmentKind, Link, Node, Style, Tag,
};

/// Destination of the feedback call-to-action.
pub const FEEDBACK_PATH: &str = "/feedback";

/// Visible label of the feedback call-to-action.
pub const FEEDBACK_LABEL: &str = "feedback me";

/// Accessible name of the repository link.
pub const REPOSITORY_LABEL: &str = "source repository";

/// Build-time inputs of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSpec {
    pub repository: Destination,
    pub breakpoint: Breakpoint,
}

/// The landing page and its components.
#[derive(Debug, Clone)]
pub struct Page {
    spec: PageSpec,
}

impl Page {
    pub fn new(spec: PageSpec) -> Self {
        Self { spec }
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.spec.breakpoint
    }

    /// Full page body: two-column grid plus the floating repository link.
    #[instrument(level = "debug", skip(self))]
    pub fn root_layout(&self) -> Node {
        let column = Style::Column(self.spec.breakpoint);
        let row = Element::new(Tag::Div)
            .style(Style::ResponsiveRow)
            .child(
                Element::new(Tag::Div)
                    .style(column)
                    .child(self.primary_content()),
            )
            .child(
                Element::new(Tag::Div)
                    .style(column)
                    .child(self.feedback_link()),
            );

        Fragment::new(FragmentKind::RootLayout)
            .child(Element::new(Tag::Div).style(Style::Container).child(row))
            .child(self.repository_link())
            .into()
    }

    pub fn primary_content(&self) -> Node {
        Fragment::new(FragmentKind::PrimaryContent)
            .child(
                Element::new(Tag::Div)
                    .style(Style::Centered)
                    .child(icons::face().style(Style::Portrait)),
            )
            .into()
    }

    pub fn feedback_link(&self) -> Node {
        let link = Link::new(Destination::fixed(FEEDBACK_PATH), BrowsingContext::New)
            .style(Style::CallToAction)
            .child(icons::envelope().style(Style::LeadingIcon))
            .child(Node::text(FEEDBACK_LABEL));

        Fragment::new(FragmentKind::FeedbackLink)
            .child(Element::new(Tag::Div).style(Style::Centered).child(link))
            .into()
    }

    pub fn repository_link(&self) -> Node {
        let link = Link::new(self.spec.repository.clone(), BrowsingContext::New)
            .label(REPOSITORY_LABEL)
            .style(Style::AccessoryButton)
            .child(icons::github_mark());

        Fragment::new(FragmentKind::RepositoryLink)
            .child(Element::new(Tag::Div).style(Style::Accessory).child(link))
            .into()
    }
}
