//! Mobile sidebar toggle.

use crate::document::{Document, ElementId};
use crate::module::ModuleError;
use crate::navigation::OPEN_CLASS;
use folio_core::targets::{MENU_TOGGLE, SIDEBAR};

#[derive(Debug, Clone)]
pub struct MobileMenuController {
    sidebar: ElementId,
    toggle: ElementId,
    breakpoint: f64,
}

impl MobileMenuController {
    pub fn bind(doc: &Document, breakpoint: f64) -> Result<Self, ModuleError> {
        let sidebar = doc
            .get_element_by_id(SIDEBAR)
            .ok_or_else(|| ModuleError::MissingTarget(SIDEBAR.into()))?;
        let toggle = doc
            .get_element_by_id(MENU_TOGGLE)
            .ok_or_else(|| ModuleError::MissingTarget(MENU_TOGGLE.into()))?;
        Ok(Self {
            sidebar,
            toggle,
            breakpoint,
        })
    }

    pub fn toggle_element(&self) -> ElementId {
        self.toggle
    }

    /// Whether a click on `target` landed on the toggle button.
    pub fn hits_toggle(&self, doc: &Document, target: ElementId) -> bool {
        doc.contains(self.toggle, target)
    }

    /// Flips the sidebar; returns the new open state.
    pub fn toggle(&self, doc: &mut Document) -> bool {
        let open = doc.toggle_class(self.sidebar, OPEN_CLASS);
        tracing::debug!(open, "Sidebar toggled");
        open
    }

    /// Document-wide click. Closes the sidebar on narrow viewports when the
    /// click is outside both the sidebar and the toggle; returns whether it
    /// closed an open sidebar.
    pub fn on_document_click(&self, doc: &mut Document, target: ElementId, width: f64) -> bool {
        if width > self.breakpoint {
            return false;
        }
        if doc.contains(self.sidebar, target) || doc.contains(self.toggle, target) {
            return false;
        }
        let was_open = self.is_open(doc);
        doc.remove_class(self.sidebar, OPEN_CLASS);
        was_open
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.has_class(self.sidebar, OPEN_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::ContentStore;
    use folio_core::render::{MountMode, shell};
    use folio_core::targets::PROJECTS_GRID;

    fn page() -> (Document, MobileMenuController) {
        let mut doc = Document::new();
        let body = doc.body();
        doc.mount(
            body,
            &shell::render(&ContentStore::builtin().profile),
            MountMode::Append,
        );
        let menu = MobileMenuController::bind(&doc, 768.0).unwrap();
        (doc, menu)
    }

    #[test]
    fn test_toggle_flips_open_state() {
        let (mut doc, menu) = page();
        assert!(menu.toggle(&mut doc));
        assert!(menu.is_open(&doc));
        assert!(!menu.toggle(&mut doc));
        assert!(!menu.is_open(&doc));
    }

    #[test]
    fn test_outside_click_closes_only_on_narrow_viewports() {
        let (mut doc, menu) = page();
        let outside = doc.get_element_by_id(PROJECTS_GRID).unwrap();
        menu.toggle(&mut doc);

        assert!(!menu.on_document_click(&mut doc, outside, 1024.0));
        assert!(menu.is_open(&doc));

        assert!(menu.on_document_click(&mut doc, outside, 768.0));
        assert!(!menu.is_open(&doc));
    }

    #[test]
    fn test_clicks_inside_sidebar_or_toggle_keep_it_open() {
        let (mut doc, menu) = page();
        let inside = doc.get_element_by_id(folio_core::targets::PROFILE_NAME).unwrap();
        let icon = doc.children(menu.toggle_element())[0];
        menu.toggle(&mut doc);

        assert!(!menu.on_document_click(&mut doc, inside, 390.0));
        assert!(!menu.on_document_click(&mut doc, icon, 390.0));
        assert!(menu.is_open(&doc));
    }

    #[test]
    fn test_bind_requires_sidebar() {
        let doc = Document::new();
        assert!(matches!(
            MobileMenuController::bind(&doc, 768.0),
            Err(ModuleError::MissingTarget(id)) if id == SIDEBAR
        ));
    }
}
