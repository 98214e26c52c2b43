//! Page composition, link behaviour and responsive arrangement

use rstest::{fixture, rstest};

use feedpage::domain::{
    Arrangement, Breakpoint, BrowsingContext, Destination, FragmentKind, LayoutPlan, Node, Page,
    PageSpec, Viewport, FEEDBACK_LABEL, FEEDBACK_PATH,
};
use feedpage::infrastructure::html::HtmlRenderer;
use feedpage::infrastructure::stylesheet::{BootstrapStyleSheet, BOOTSTRAP_CDN};

const REPO: &str = "https://github.com/victorzhuk/homyak";

#[fixture]
fn page() -> Page {
    Page::new(PageSpec {
        repository: Destination::parse(REPO).unwrap(),
        breakpoint: Breakpoint::default(),
    })
}

fn renderer() -> HtmlRenderer<BootstrapStyleSheet> {
    HtmlRenderer::new(BootstrapStyleSheet::new(BOOTSTRAP_CDN))
}

fn feedback_fragment(root: &Node) -> &Node {
    root.find_fragment(FragmentKind::FeedbackLink)
        .expect("feedback fragment present")
}

// ============================================================
// Structure
// ============================================================

#[rstest]
fn given_root_layout_then_contains_each_leaf_exactly_once(page: Page) {
    let root = page.root_layout();
    assert_eq!(root.count_fragments(FragmentKind::RootLayout), 1);
    assert_eq!(root.count_fragments(FragmentKind::PrimaryContent), 1);
    assert_eq!(root.count_fragments(FragmentKind::FeedbackLink), 1);
    assert_eq!(root.count_fragments(FragmentKind::RepositoryLink), 1);
}

#[rstest]
fn given_root_layout_then_fragments_appear_in_source_order(page: Page) {
    assert_eq!(
        page.root_layout().fragments(),
        vec![
            FragmentKind::RootLayout,
            FragmentKind::PrimaryContent,
            FragmentKind::FeedbackLink,
            FragmentKind::RepositoryLink,
        ]
    );
}

#[rstest]
fn given_two_renders_then_trees_and_html_are_identical(page: Page) {
    let first = page.root_layout();
    let second = page.root_layout();
    assert_eq!(first, second);

    let r = renderer();
    assert_eq!(r.document("t", &first), r.document("t", &second));
}

// ============================================================
// Links
// ============================================================

#[rstest]
fn given_feedback_link_then_targets_feedback_path_in_new_context(page: Page) {
    let root = page.root_layout();
    let links = feedback_fragment(&root).links();

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].destination.as_str(), FEEDBACK_PATH);
    assert_eq!(links[0].destination.as_str(), "/feedback");
    assert_eq!(links[0].context, BrowsingContext::New);
}

#[rstest]
fn given_feedback_link_then_label_text_is_exact(page: Page) {
    let root = page.root_layout();
    assert_eq!(feedback_fragment(&root).text_content(), "feedback me");
    assert_eq!(FEEDBACK_LABEL, "feedback me");
}

#[rstest]
fn given_repository_link_then_targets_repository_in_new_context(page: Page) {
    let root = page.root_layout();
    let links = root
        .find_fragment(FragmentKind::RepositoryLink)
        .unwrap()
        .links();

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].destination.as_str(), REPO);
    assert_eq!(links[0].context, BrowsingContext::New);
}

#[rstest]
fn given_every_link_then_none_navigates_in_place(page: Page) {
    for link in page.root_layout().links() {
        assert_eq!(link.context, BrowsingContext::New, "{}", link.destination);
    }
}

// ============================================================
// Arrangement
// ============================================================

#[rstest]
#[case(320, Arrangement::Stacked)]
#[case(480, Arrangement::Stacked)]
#[case(767, Arrangement::Stacked)]
#[case(768, Arrangement::SideBySide)]
#[case(1280, Arrangement::SideBySide)]
fn given_viewport_when_resolving_layout_then_arrangement_follows_breakpoint(
    page: Page,
    #[case] width: u32,
    #[case] expected: Arrangement,
) {
    let plan = LayoutPlan::resolve(&page.root_layout(), page.breakpoint(), Viewport::new(width));
    assert_eq!(plan.arrangement, expected);
}

#[rstest]
fn given_wide_viewport_when_resolving_layout_then_columns_share_one_line(page: Page) {
    let plan = LayoutPlan::resolve(&page.root_layout(), page.breakpoint(), Viewport::new(1280));

    assert_eq!(
        plan.lines,
        vec![vec![FragmentKind::PrimaryContent, FragmentKind::FeedbackLink]]
    );
    assert_eq!(plan.accessories, vec![FragmentKind::RepositoryLink]);
}

#[rstest]
fn given_narrow_viewport_when_resolving_layout_then_columns_stack_in_source_order(page: Page) {
    let plan = LayoutPlan::resolve(&page.root_layout(), page.breakpoint(), Viewport::new(480));

    assert_eq!(
        plan.lines,
        vec![
            vec![FragmentKind::PrimaryContent],
            vec![FragmentKind::FeedbackLink]
        ]
    );
    assert_eq!(plan.accessories, vec![FragmentKind::RepositoryLink]);
}

#[rstest]
fn given_larger_breakpoint_when_resolving_between_tiers_then_stacks() {
    let page = Page::new(PageSpec {
        repository: Destination::parse(REPO).unwrap(),
        breakpoint: Breakpoint::new(1200).unwrap(),
    });
    let plan = LayoutPlan::resolve(&page.root_layout(), page.breakpoint(), Viewport::new(1024));
    assert_eq!(plan.arrangement, Arrangement::Stacked);
    assert_eq!(plan.lines.len(), 2);
}

// ============================================================
// Rendered markup
// ============================================================

#[rstest]
fn given_page_when_rendered_then_feedback_anchor_opens_new_context(page: Page) {
    let html = renderer().document("feedback me", &page.root_layout());

    assert!(html.contains(
        "<a href=\"/feedback\" target=\"_blank\" class=\"btn btn-outline-secondary btn-lg\">"
    ));
    assert!(html.contains("feedback me</a>"));
    assert!(html.contains("d=\"M2 26 L30 26 30 6 2 6 Z M2 6 L16 16 30 6\""));
}

#[rstest]
fn given_page_when_rendered_then_columns_use_responsive_classes(page: Page) {
    let html = renderer().document("feedback me", &page.root_layout());

    assert_eq!(
        html.matches("class=\"flex-column col-12 col-md-6\"").count(),
        2
    );
    assert!(html.contains("<div class=\"container\">"));
}

#[rstest]
fn given_page_when_rendered_then_primary_content_precedes_feedback(page: Page) {
    let html = renderer().document("feedback me", &page.root_layout());

    let face = html.find("aria-label=\"face\"").expect("portrait rendered");
    let feedback = html.find("href=\"/feedback\"").expect("feedback rendered");
    let repo = html.find(&format!("href=\"{REPO}\"")).expect("repository rendered");
    assert!(face < feedback);
    assert!(feedback < repo);
}

#[rstest]
fn given_page_when_rendered_then_document_links_stylesheet(page: Page) {
    let html = renderer().document("feedback me", &page.root_layout());

    assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
    assert!(html.contains(&format!("<link rel=\"stylesheet\" href=\"{BOOTSTRAP_CDN}\">")));
    assert!(html.contains("<title>feedback me</title>"));
    assert!(html.contains("name=\"viewport\""));
}
