//! Timeline items, shared by the experience and leadership panels.

use super::animation_delay;
use crate::content::TimelineEntry;
use crate::fragment::{ElementNode, Fragment, el};

pub fn render(entries: &[TimelineEntry]) -> Fragment {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| render_item(index, entry))
        .collect()
}

pub fn render_item(index: usize, entry: &TimelineEntry) -> ElementNode {
    el("div")
        .class("timeline-item")
        .style("animation-delay", animation_delay(index))
        .child(el("div").class("experience-role").text(entry.role.as_str()))
        .child(
            el("div")
                .class("experience-org")
                .text(entry.organization.as_str()),
        )
        .child(el("div").class("experience-date").text(entry.date.as_str()))
        .child(
            el("div").class("experience-description").child(
                el("ul").children(entry.description.iter().map(|d| el("li").text(d.as_str()))),
            ),
        )
}
