//! Static page skeleton.
//!
//! The shell holds every render target as an empty container. Section
//! renderers only ever fill these containers; they never create them.

use crate::content::Profile;
use crate::fragment::{ElementNode, Fragment, el};
use crate::targets::{self, NAV_LINK_CLASS, PANEL_CLASS, PANELS};

/// Container placed inside each panel after its heading.
fn panel_body(section: &str) -> Vec<ElementNode> {
    match section {
        "overview" => vec![
            el("div").id(targets::OVERVIEW_CONTENT).class("overview-content"),
            el("div")
                .class("system-log-panel")
                .child(el("div").class("panel-subtitle").text("System Log"))
                .child(el("div").id(targets::SYSTEM_LOG).class("system-log")),
        ],
        "projects" => vec![el("div").id(targets::PROJECTS_GRID).class("projects-grid")],
        "experience" => vec![el("div").id(targets::EXPERIENCE_TIMELINE).class("timeline")],
        "leadership" => vec![el("div").id(targets::LEADERSHIP_TIMELINE).class("timeline")],
        "skills" => vec![el("div").id(targets::SKILLS_GRID).class("skills-grid")],
        "contact" => vec![el("div").id(targets::CONTACT_LIST).class("contact-list")],
        _ => Vec::new(),
    }
}

pub fn render(profile: &Profile) -> Fragment {
    let toggle = el("button")
        .id(targets::MENU_TOGGLE)
        .class("menu-toggle")
        .attr("aria-label", "Toggle navigation")
        .child(el("span").class("menu-icon").text("☰"));

    let nav = el("nav").class("nav").children(PANELS.iter().map(|(id, label)| {
        el("a")
            .class(NAV_LINK_CLASS)
            .attr("href", format!("#{id}"))
            .text(*label)
    }));

    let sidebar = el("aside")
        .id(targets::SIDEBAR)
        .class("sidebar")
        .child(
            el("div")
                .class("profile")
                .child(
                    el("img")
                        .id(targets::PROFILE_IMAGE)
                        .class("profile-image")
                        .attr("src", profile.image.as_str())
                        .attr("alt", profile.name.as_str()),
                )
                .child(el("h1").id(targets::PROFILE_NAME).class("profile-name"))
                .child(el("p").id(targets::PROFILE_HEADLINE).class("profile-headline"))
                .child(el("div").id(targets::STATUS_BADGES).class("status-badges"))
                .child(el("div").id(targets::SOCIAL_LINKS).class("social-links")),
        )
        .child(nav);

    let main = el("main")
        .class("main-content")
        .children(PANELS.iter().map(|(id, label)| {
            el("section")
                .id(id)
                .class(PANEL_CLASS)
                .child(el("h2").class("panel-title").text(*label))
                .children(panel_body(id))
        }));

    Fragment::from_iter([toggle, sidebar, main])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    #[test]
    fn test_shell_has_every_render_target_empty() {
        let shell = render(&ContentStore::builtin().profile);
        let html = shell.to_html();

        for target in [
            targets::PROFILE_NAME,
            targets::STATUS_BADGES,
            targets::SOCIAL_LINKS,
            targets::OVERVIEW_CONTENT,
            targets::PROJECTS_GRID,
            targets::EXPERIENCE_TIMELINE,
            targets::LEADERSHIP_TIMELINE,
            targets::SKILLS_GRID,
            targets::CONTACT_LIST,
            targets::SYSTEM_LOG,
            targets::SIDEBAR,
            targets::MENU_TOGGLE,
        ] {
            assert!(html.contains(&format!("id=\"{target}\"")), "missing {target}");
        }
        assert!(!html.contains("Rim Ba</h1>"));
    }

    #[test]
    fn test_one_nav_link_per_panel() {
        let shell = render(&ContentStore::builtin().profile);
        let hrefs: Vec<_> = shell
            .find_class(NAV_LINK_CLASS)
            .iter()
            .filter_map(|a| a.get_attr("href"))
            .map(String::from)
            .collect();
        assert_eq!(hrefs.len(), PANELS.len());
        assert_eq!(hrefs[0], "#overview");
        assert_eq!(shell.find_class(PANEL_CLASS).len(), PANELS.len());
    }
}
