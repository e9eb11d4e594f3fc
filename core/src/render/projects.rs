//! Project cards.

use super::{animation_delay, external_link};
use crate::content::Project;
use crate::fragment::{ElementNode, Fragment, el};

pub fn render(projects: &[Project]) -> Fragment {
    projects
        .iter()
        .enumerate()
        .map(|(index, project)| render_card(index, project))
        .collect()
}

/// A single card. Absent demo/code links and images drop only their own
/// element.
pub fn render_card(index: usize, project: &Project) -> ElementNode {
    let mut card = el("div")
        .class("project-card")
        .attr("data-project", project.id.as_str())
        .style("animation-delay", animation_delay(index));

    if let Some(image) = &project.image {
        card = card.child(
            el("img")
                .class("project-image")
                .attr("src", image.as_str())
                .attr("alt", project.title.as_str()),
        );
    }

    let tech = el("div").class("tech-stack").children(
        project
            .tech_stack
            .iter()
            .map(|tech| el("span").class("tech-chip").text(tech.as_str())),
    );

    let description = el("div")
        .class("project-description")
        .child(el("p").text(project.description.as_str()))
        .child(
            el("ul").children(
                project
                    .highlights
                    .iter()
                    .map(|h| el("li").text(h.as_str())),
            ),
        );

    let mut actions = el("div").class("project-actions");
    if let Some(demo) = &project.links.demo {
        actions = actions.child(
            external_link(demo)
                .class("btn")
                .class("btn-primary")
                .text("🌐 Live Demo"),
        );
    }
    if let Some(code) = &project.links.code {
        actions = actions.child(
            external_link(code)
                .class("btn")
                .class("btn-secondary")
                .text("💻 View Code"),
        );
    }

    card.child(el("h3").class("project-title").text(project.title.as_str()))
        .child(el("p").class("project-tagline").text(project.tagline.as_str()))
        .child(tech)
        .child(description)
        .child(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentStore, ProjectLinks};

    fn project(demo: Option<&str>, code: Option<&str>) -> Project {
        Project {
            id: "p".into(),
            title: "Probe".into(),
            tagline: "t".into(),
            tech_stack: vec!["Rust".into(), "SQL".into()],
            description: "d".into(),
            highlights: vec!["first".into(), "second".into()],
            links: ProjectLinks {
                demo: demo.map(String::from),
                code: code.map(String::from),
            },
            image: None,
        }
    }

    #[test]
    fn test_missing_demo_drops_only_demo_button() {
        let card = render_card(0, &project(None, Some("https://code")));

        assert!(card.find_class("btn-primary").is_empty());
        let code = card.find_class("btn-secondary");
        assert_eq!(code.len(), 1);
        assert_eq!(code[0].get_attr("href"), Some("https://code"));
        assert_eq!(card.find_class("project-title")[0].text_content(), "Probe");
    }

    #[test]
    fn test_missing_code_drops_only_code_button() {
        let card = render_card(0, &project(Some("https://demo"), None));

        assert!(card.find_class("btn-secondary").is_empty());
        assert_eq!(card.find_class("btn-primary").len(), 1);
        assert_eq!(card.find_class("project-actions").len(), 1);
    }

    #[test]
    fn test_image_only_when_present() {
        let mut with_image = project(None, None);
        with_image.image = Some("shot.png".into());

        assert!(render_card(0, &project(None, None)).find_class("project-image").is_empty());
        let image = render_card(0, &with_image);
        assert_eq!(
            image.find_class("project-image")[0].get_attr("src"),
            Some("shot.png")
        );
    }

    #[test]
    fn test_cards_follow_source_order_with_staggered_delay() {
        let projects = ContentStore::builtin().projects;
        let frag = render(&projects);

        let cards: Vec<_> = frag.elements().collect();
        assert_eq!(cards.len(), projects.len());
        assert_eq!(cards[0].get_attr("data-project"), Some("styles-by-sheyu"));
        assert_eq!(cards[1].style_text(), "animation-delay: 0.1s;");
        let chips: Vec<_> = cards[1]
            .find_class("tech-chip")
            .iter()
            .map(|c| c.text_content())
            .collect();
        assert_eq!(chips, projects[1].tech_stack);
    }

    #[test]
    fn test_rendering_twice_is_identical() {
        let projects = ContentStore::builtin().projects;
        assert_eq!(render(&projects), render(&projects));
    }
}
