//! Inline vector icons

use crate::domain::{Element, Tag};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Outline envelope with a diagonal fold, 32×32.
pub fn envelope() -> Element {
    Element::new(Tag::Svg)
        .attr("id", "i-mail")
        .attr("xmlns", SVG_NS)
        .attr("viewBox", "0 0 32 32")
        .attr("width", "32")
        .attr("height", "32")
        .attr("fill", "none")
        .attr("stroke", "currentcolor")
        .attr("stroke-linecap", "round")
        .attr("stroke-linejoin", "round")
        .attr("stroke-width", "2")
        .child(Element::new(Tag::Path).attr("d", "M2 26 L30 26 30 6 2 6 Z M2 6 L16 16 30 6"))
}

const GITHUB_MARK: &str = "M8 0C3.58 0 0 3.58 0 8c0 3.54 2.29 6.53 5.47 7.59.4.07.55-.17.55-.38 \
0-.19-.01-.82-.01-1.49-2.01.37-2.53-.49-2.69-.94-.09-.23-.48-.94-.82-1.13-.28-.15-.68-.52-.01-.53.63-.01 \
1.08.58 1.23.82.72 1.21 1.87.87 2.33.66.07-.52.28-.87.51-1.07-1.78-.2-3.64-.89-3.64-3.95 \
0-.87.31-1.59.82-2.15-.08-.2-.36-1.02.08-2.12 0 0 .67-.21 2.2.82.64-.18 1.32-.27 2-.27.68 0 1.36.09 \
2 .27 1.53-1.04 2.2-.82 2.2-.82.44 1.1.16 1.92.08 2.12.51.56.82 1.27.82 2.15 0 3.07-1.87 3.75-3.65 \
3.95.29.25.54.73.54 1.48 0 1.07-.01 1.93-.01 2.2 0 .21.15.46.55.38A8.013 8.013 0 0016 8c0-4.42-3.58-8-8-8z";

/// Repository host mark, 24×24.
pub fn github_mark() -> Element {
    Element::new(Tag::Svg)
        .attr("xmlns", SVG_NS)
        .attr("viewBox", "0 0 16 16")
        .attr("width", "24")
        .attr("height", "24")
        .attr("fill", "currentcolor")
        .attr("aria-hidden", "true")
        .child(
            Element::new(Tag::Path)
                .attr("fill-rule", "evenodd")
                .attr("d", GITHUB_MARK),
        )
}

/// Line-drawn face: head, two eyes, a smile.
pub fn face() -> Element {
    Element::new(Tag::Svg)
        .attr("xmlns", SVG_NS)
        .attr("viewBox", "0 0 64 64")
        .attr("width", "256")
        .attr("height", "256")
        .attr("fill", "none")
        .attr("stroke", "currentcolor")
        .attr("stroke-linecap", "round")
        .attr("stroke-width", "2")
        .attr("role", "img")
        .attr("aria-label", "face")
        .child(circle(32, 32, 28))
        .child(circle(23, 26, 3))
        .child(circle(41, 26, 3))
        .child(Element::new(Tag::Path).attr("d", "M20 40 Q32 50 44 40"))
}

fn circle(cx: u32, cy: u32, r: u32) -> Element {
    Element::new(Tag::Circle)
        .attr("cx", cx.to_string())
        .attr("cy", cy.to_string())
        .attr("r", r.to_string())
}
