//! Overview panel: mission statement plus status and interest boxes.
//!
//! The boxes carry inline styles because their contents are computed; the
//! external stylesheet has no classes for them.

use crate::content::Overview;
use crate::fragment::{ElementNode, Fragment, el};

fn info_box(label: &str, body: ElementNode) -> ElementNode {
    el("div")
        .style("flex", "1")
        .style("min-width", "200px")
        .style("padding", "1rem")
        .style("background", "rgba(255,255,255,0.02)")
        .style("border-radius", "0.5rem")
        .style("border", "1px solid rgba(255,255,255,0.05)")
        .child(
            el("div")
                .style("font-size", "0.75rem")
                .style("color", "var(--color-text-dim)")
                .style("text-transform", "uppercase")
                .style("letter-spacing", "0.5px")
                .style("margin-bottom", "0.5rem")
                .text(label),
        )
        .child(body)
}

fn interest_tag(interest: &str) -> ElementNode {
    el("span")
        .style("background", "rgba(168, 85, 247, 0.1)")
        .style("color", "var(--color-accent-purple)")
        .style("padding", "0.25rem 0.75rem")
        .style("border-radius", "0.375rem")
        .style("font-size", "0.875rem")
        .style("border", "1px solid rgba(168, 85, 247, 0.2)")
        .text(interest)
}

pub fn render(overview: &Overview) -> Fragment {
    let mission = el("p")
        .style("font-size", "1.125rem")
        .style("line-height", "1.8")
        .style("margin-bottom", "1.5rem")
        .text(overview.mission.as_str());

    let status = el("div")
        .style("font-weight", "600")
        .style("color", "var(--color-accent-cyan)")
        .text(overview.status.as_str());

    let interests = el("div")
        .style("display", "flex")
        .style("flex-wrap", "wrap")
        .style("gap", "0.5rem")
        .children(overview.interests.iter().map(|i| interest_tag(i)));

    let boxes = el("div")
        .style("display", "flex")
        .style("flex-wrap", "wrap")
        .style("gap", "1rem")
        .style("margin-top", "1.5rem")
        .child(info_box("Current Status", status))
        .child(info_box("Interests", interests));

    Fragment::from_iter([mission, boxes])
}
