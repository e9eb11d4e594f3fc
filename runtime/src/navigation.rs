//! Sidebar navigation: click-to-scroll and scroll-position highlighting.

use crate::document::{Document, ElementId};
use crate::viewport::{ScrollBehavior, Viewport};
use folio_core::config::NavigationConfig;
use folio_core::targets::{NAV_LINK_CLASS, PANEL_CLASS, SIDEBAR};

pub const ACTIVE_CLASS: &str = "active";
pub const OPEN_CLASS: &str = "open";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBinding {
    pub link: ElementId,
    /// Section id taken from the link's `#fragment` href.
    pub target: String,
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    bindings: Vec<NavBinding>,
    sidebar: Option<ElementId>,
    lead_in: f64,
    breakpoint: f64,
}

impl NavigationController {
    /// Binds every `.nav-link` currently in the document.
    pub fn bind(doc: &Document, config: &NavigationConfig) -> Self {
        let bindings = doc
            .elements_by_class(NAV_LINK_CLASS)
            .into_iter()
            .map(|link| NavBinding {
                link,
                target: doc
                    .attr(link, "href")
                    .map(|href| href.trim_start_matches('#').to_string())
                    .unwrap_or_default(),
            })
            .collect::<Vec<_>>();

        tracing::debug!(links = bindings.len(), "Navigation bound");
        Self {
            bindings,
            sidebar: doc.get_element_by_id(SIDEBAR),
            lead_in: config.lead_in,
            breakpoint: config.mobile_breakpoint,
        }
    }

    pub fn bindings(&self) -> &[NavBinding] {
        &self.bindings
    }

    /// Resolves a click target to the nav link it landed in, if any.
    pub fn link_for(&self, doc: &Document, target: ElementId) -> Option<&NavBinding> {
        self.bindings
            .iter()
            .find(|binding| doc.contains(binding.link, target))
    }

    /// Handles a click on `link`. Returns whether a section was scrolled to;
    /// links whose section is missing change nothing.
    pub fn on_click(&self, doc: &mut Document, link: ElementId, viewport: &mut Viewport) -> bool {
        let Some(binding) = self.bindings.iter().find(|b| b.link == link) else {
            return false;
        };
        let Some(section) = doc.get_element_by_id(&binding.target) else {
            tracing::debug!(section = %binding.target, "Nav target missing, click ignored");
            return false;
        };

        self.mark_active(doc, Some(link));
        viewport.scroll_to(doc.offset_top(section), ScrollBehavior::Smooth);

        if viewport.is_narrow(self.breakpoint) {
            if let Some(sidebar) = self.sidebar {
                doc.remove_class(sidebar, OPEN_CLASS);
            }
        }
        true
    }

    /// Recomputes the current section for `scroll_y` and re-marks the links.
    /// Returns the current section id.
    pub fn on_scroll(&self, doc: &mut Document, scroll_y: f64) -> Option<String> {
        let current = doc
            .elements_by_class(PANEL_CLASS)
            .into_iter()
            .filter(|panel| scroll_y >= doc.offset_top(*panel) - self.lead_in)
            .filter_map(|panel| doc.attr(panel, "id").map(String::from))
            .last();

        let active = current.as_deref().and_then(|id| {
            self.bindings
                .iter()
                .find(|binding| binding.target == id)
                .map(|binding| binding.link)
        });
        self.mark_active(doc, active);
        current
    }

    fn mark_active(&self, doc: &mut Document, active: Option<ElementId>) {
        for binding in &self.bindings {
            if Some(binding.link) == active {
                doc.add_class(binding.link, ACTIVE_CLASS);
            } else {
                doc.remove_class(binding.link, ACTIVE_CLASS);
            }
        }
    }

    /// Section id of the link currently marked active.
    pub fn active(&self, doc: &Document) -> Option<&str> {
        self.bindings
            .iter()
            .find(|binding| doc.has_class(binding.link, ACTIVE_CLASS))
            .map(|binding| binding.target.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::ContentStore;
    use folio_core::render::{MountMode, shell};
    use folio_core::targets::PANELS;

    fn page() -> (Document, NavigationController) {
        let mut doc = Document::new();
        let body = doc.body();
        doc.mount(
            body,
            &shell::render(&ContentStore::builtin().profile),
            MountMode::Append,
        );
        for (index, (id, _)) in PANELS.iter().enumerate() {
            if let Some(panel) = doc.get_element_by_id(id) {
                doc.set_layout(panel, index as f64 * 1000.0, 1000.0);
            }
        }
        let nav = NavigationController::bind(&doc, &NavigationConfig::default());
        (doc, nav)
    }

    fn link(nav: &NavigationController, target: &str) -> ElementId {
        nav.bindings()
            .iter()
            .find(|b| b.target == target)
            .map(|b| b.link)
            .unwrap()
    }

    #[test]
    fn test_click_activates_exactly_one_link_and_scrolls() {
        let (mut doc, nav) = page();
        let mut viewport = Viewport::desktop();

        assert!(nav.on_click(&mut doc, link(&nav, "skills"), &mut viewport));
        assert_eq!(nav.active(&doc), Some("skills"));
        assert_eq!(doc.elements_by_class(ACTIVE_CLASS).len(), 1);

        let request = viewport.last_scroll.unwrap();
        assert_eq!(request.top, 4000.0);
        assert_eq!(request.behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn test_click_on_narrow_viewport_closes_sidebar() {
        let (mut doc, nav) = page();
        let sidebar = doc.get_element_by_id(SIDEBAR).unwrap();
        doc.add_class(sidebar, OPEN_CLASS);

        let mut wide = Viewport::desktop();
        nav.on_click(&mut doc, link(&nav, "projects"), &mut wide);
        assert!(doc.has_class(sidebar, OPEN_CLASS));

        let mut narrow = Viewport::mobile();
        nav.on_click(&mut doc, link(&nav, "projects"), &mut narrow);
        assert!(!doc.has_class(sidebar, OPEN_CLASS));
    }

    #[test]
    fn test_click_with_missing_section_does_nothing() {
        let (mut doc, nav) = page();
        let skills = doc.get_element_by_id("skills").unwrap();
        doc.remove(skills);
        let mut viewport = Viewport::desktop();

        assert!(!nav.on_click(&mut doc, link(&nav, "skills"), &mut viewport));
        assert_eq!(nav.active(&doc), None);
        assert!(viewport.last_scroll.is_none());
    }

    #[test]
    fn test_scroll_marks_section_within_lead_in() {
        let (mut doc, nav) = page();

        assert_eq!(nav.on_scroll(&mut doc, 0.0).as_deref(), Some("overview"));
        // 200 above the experience panel top already counts
        assert_eq!(nav.on_scroll(&mut doc, 1800.0).as_deref(), Some("experience"));
        assert_eq!(nav.active(&doc), Some("experience"));
        assert_eq!(nav.on_scroll(&mut doc, 1799.0).as_deref(), Some("projects"));
        assert_eq!(doc.elements_by_class(ACTIVE_CLASS).len(), 1);
    }

    #[test]
    fn test_scroll_above_every_section_clears_active() {
        let (mut doc, nav) = page();
        let overview = doc.get_element_by_id("overview").unwrap();
        doc.set_layout(overview, 500.0, 500.0);
        for (id, _) in &PANELS[1..] {
            let panel = doc.get_element_by_id(id).unwrap();
            doc.set_layout(panel, 5000.0, 500.0);
        }

        nav.on_scroll(&mut doc, 4900.0);
        assert_eq!(nav.active(&doc), Some("contact"));
        assert_eq!(nav.on_scroll(&mut doc, 0.0), None);
        assert_eq!(nav.active(&doc), None);
    }
}
