//! # Section Renderers
//!
//! Each section is a pure function from one slice of the [`ContentStore`] to
//! a [`Fragment`]. Renderers never look at a document and never mutate their
//! input; [`Section::place`] pairs the fragments with the container they are
//! meant for so an adapter can attach them.

pub mod contact;
pub mod overview;
pub mod profile;
pub mod projects;
pub mod shell;
pub mod skills;
pub mod timeline;

use crate::content::ContentStore;
use crate::fragment::{ElementNode, Fragment, el};
use crate::targets;

/// Keyframes used by the clipboard confirmation toast.
pub const FADE_IN_OUT_KEYFRAMES: &str = "
    @keyframes fadeInOut {
        0%, 100% { opacity: 0; }
        10%, 90% { opacity: 1; }
    }
";

/// How a fragment is attached to its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountMode {
    /// Append after the container's existing children.
    Append,
    /// Replace the container's children.
    Replace,
}

/// A rendered fragment bound to the id of the container it belongs in.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub target: &'static str,
    pub mode: MountMode,
    pub fragment: Fragment,
}

impl Placement {
    pub fn append(target: &'static str, fragment: Fragment) -> Self {
        Self {
            target,
            mode: MountMode::Append,
            fragment,
        }
    }

    pub fn replace(target: &'static str, fragment: Fragment) -> Self {
        Self {
            target,
            mode: MountMode::Replace,
            fragment,
        }
    }
}

/// The page sections, in bootstrap order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Profile,
    Overview,
    Projects,
    Experience,
    Leadership,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Profile,
        Section::Overview,
        Section::Projects,
        Section::Experience,
        Section::Leadership,
        Section::Skills,
        Section::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Profile => "profile",
            Section::Overview => "overview",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Leadership => "leadership",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// Renders this section's slice of `store`.
    pub fn place(self, store: &ContentStore) -> Vec<Placement> {
        match self {
            Section::Profile => profile::place(&store.profile),
            Section::Overview => vec![Placement::replace(
                targets::OVERVIEW_CONTENT,
                overview::render(&store.overview),
            )],
            Section::Projects => vec![Placement::append(
                targets::PROJECTS_GRID,
                projects::render(&store.projects),
            )],
            Section::Experience => vec![Placement::append(
                targets::EXPERIENCE_TIMELINE,
                timeline::render(&store.experience),
            )],
            Section::Leadership => vec![Placement::append(
                targets::LEADERSHIP_TIMELINE,
                timeline::render(&store.leadership),
            )],
            Section::Skills => vec![Placement::append(
                targets::SKILLS_GRID,
                skills::render(&store.skills),
            )],
            Section::Contact => vec![Placement::append(
                targets::CONTACT_LIST,
                contact::render(&store.profile),
            )],
        }
    }
}

/// Staggered entrance delay for the `index`th card of a list.
pub(crate) fn animation_delay(index: usize) -> String {
    let tenths = index as f64 / 10.0;
    format!("{tenths}s")
}

/// An external link that opens in a new tab.
pub(crate) fn external_link(href: &str) -> ElementNode {
    el("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
}

/// One streamed system-log line.
pub fn log_line(timestamp: &str, message: &str) -> ElementNode {
    el("div")
        .class("log-line")
        .child(el("span").class("log-timestamp").text(format!("[{timestamp}]")))
        .text(message)
}
