//! Sidebar profile: name, headline, status badges and social links.

use super::{Placement, external_link};
use crate::content::{Links, Profile};
use crate::fragment::{Fragment, Node, el};
use crate::targets;

/// Icon shown for a social platform.
pub fn social_icon(platform: &str) -> &'static str {
    match platform {
        "github" => "💻",
        "linkedin" => "💼",
        "email" => "✉️",
        _ => "🔗",
    }
}

pub fn render_badges(badges: &[String]) -> Fragment {
    badges
        .iter()
        .map(|badge| el("div").class("status-badge").text(badge.as_str()))
        .collect()
}

pub fn render_links(links: &Links) -> Fragment {
    links
        .iter()
        .map(|(platform, url)| {
            external_link(url)
                .attr("aria-label", format!("Visit {platform} profile"))
                .text(social_icon(platform))
        })
        .collect()
}

pub(super) fn place(profile: &Profile) -> Vec<Placement> {
    vec![
        Placement::replace(
            targets::PROFILE_NAME,
            Fragment::from_iter([Node::from(profile.name.as_str())]),
        ),
        Placement::replace(
            targets::PROFILE_HEADLINE,
            Fragment::from_iter([Node::from(profile.headline.as_str())]),
        ),
        Placement::append(targets::STATUS_BADGES, render_badges(&profile.status_badges)),
        Placement::append(targets::SOCIAL_LINKS, render_links(&profile.links)),
    ]
}
