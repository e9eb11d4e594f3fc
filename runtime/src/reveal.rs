//! Scroll-triggered panel reveal.
//!
//! [`IntersectionObserver`] is a headless stand-in for the browser API: it
//! compares each observed element's layout box with the viewport and reports
//! only the elements whose intersecting state changed since the last check.

use crate::document::{Document, ElementId};
use crate::viewport::Viewport;
use folio_core::config::RevealConfig;
use folio_core::targets::PANEL_CLASS;
use std::collections::HashMap;

pub const VISIBLE_CLASS: &str = "visible";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
    /// Visible fraction of the target's height, `0.0..=1.0`.
    pub ratio: f64,
}

#[derive(Debug, Clone)]
pub struct IntersectionObserver {
    threshold: f64,
    bottom_margin: f64,
    targets: Vec<ElementId>,
    last: HashMap<ElementId, bool>,
}

impl IntersectionObserver {
    pub fn new(threshold: f64, bottom_margin: f64) -> Self {
        Self {
            threshold,
            bottom_margin,
            targets: Vec::new(),
            last: HashMap::new(),
        }
    }

    pub fn observe(&mut self, target: ElementId) {
        if !self.targets.contains(&target) {
            self.targets.push(target);
        }
    }

    pub fn unobserve(&mut self, target: ElementId) {
        self.targets.retain(|t| *t != target);
        self.last.remove(&target);
    }

    pub fn observed(&self) -> &[ElementId] {
        &self.targets
    }

    /// Entries for targets whose state changed. The first check after
    /// `observe` reports every target.
    pub fn check(&mut self, doc: &Document, viewport: &Viewport) -> Vec<IntersectionEntry> {
        let root_top = viewport.scroll_y;
        let root_bottom = viewport.scroll_y + viewport.height - self.bottom_margin;

        let mut entries = Vec::new();
        for &target in &self.targets {
            if !doc.is_connected(target) {
                continue;
            }
            let layout = doc.layout(target);
            let ratio = if layout.height <= 0.0 {
                let inside = layout.top >= root_top && layout.top <= root_bottom;
                if inside { 1.0 } else { 0.0 }
            } else {
                let overlap = (layout.top + layout.height).min(root_bottom) - layout.top.max(root_top);
                (overlap.max(0.0) / layout.height).min(1.0)
            };
            let is_intersecting = ratio > 0.0 && ratio >= self.threshold;

            if self.last.insert(target, is_intersecting) != Some(is_intersecting) {
                entries.push(IntersectionEntry {
                    target,
                    is_intersecting,
                    ratio,
                });
            }
        }
        entries
    }
}

/// Adds `visible` to each panel the first time it intersects. Never removes
/// it.
#[derive(Debug, Clone)]
pub struct ScrollRevealController {
    observer: IntersectionObserver,
}

impl ScrollRevealController {
    pub fn bind(doc: &Document, config: &RevealConfig) -> Self {
        let mut observer = IntersectionObserver::new(config.threshold, config.bottom_margin);
        for panel in doc.elements_by_class(PANEL_CLASS) {
            observer.observe(panel);
        }
        tracing::debug!(panels = observer.observed().len(), "Scroll reveal bound");
        Self { observer }
    }

    /// Returns the panels revealed by this check.
    pub fn on_check(&mut self, doc: &mut Document, viewport: &Viewport) -> Vec<ElementId> {
        let mut revealed = Vec::new();
        for entry in self.observer.check(doc, viewport) {
            if entry.is_intersecting && !doc.has_class(entry.target, VISIBLE_CLASS) {
                doc.add_class(entry.target, VISIBLE_CLASS);
                revealed.push(entry.target);
            }
        }
        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panels(doc: &mut Document, tops: &[f64]) -> Vec<ElementId> {
        tops.iter()
            .map(|top| {
                let panel = doc.create_element("section");
                doc.add_class(panel, PANEL_CLASS);
                doc.set_layout(panel, *top, 600.0);
                let body = doc.body();
                doc.append_child(body, panel);
                panel
            })
            .collect()
    }

    #[test]
    fn test_reports_only_changes() {
        let mut doc = Document::new();
        let ids = panels(&mut doc, &[0.0, 2000.0]);
        let mut observer = IntersectionObserver::new(0.1, 50.0);
        for id in &ids {
            observer.observe(*id);
        }
        let mut viewport = Viewport::desktop();

        let first = observer.check(&doc, &viewport);
        assert_eq!(first.len(), 2);
        assert!(first[0].is_intersecting);
        assert!(!first[1].is_intersecting);

        assert!(observer.check(&doc, &viewport).is_empty());

        viewport.scroll_y = 1800.0;
        let changed = observer.check(&doc, &viewport);
        assert_eq!(changed.len(), 2);
        assert!(!changed[0].is_intersecting);
        assert!(changed[1].is_intersecting);
    }

    #[test]
    fn test_bottom_margin_and_threshold() {
        let mut doc = Document::new();
        let ids = panels(&mut doc, &[0.0]);
        let mut observer = IntersectionObserver::new(0.1, 50.0);
        observer.observe(ids[0]);

        // 80 units of the panel sit above the pulled-up bottom edge: 0.133
        let mut viewport = Viewport::new(1280.0, 130.0);
        assert!(observer.check(&doc, &viewport)[0].is_intersecting);

        // 30 units: 0.05, below threshold
        viewport.scroll_y = -50.0;
        assert!(!observer.check(&doc, &viewport)[0].is_intersecting);
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut doc = Document::new();
        let ids = panels(&mut doc, &[0.0, 2000.0]);
        let mut reveal = ScrollRevealController::bind(&doc, &RevealConfig::default());
        let mut viewport = Viewport::desktop();

        assert_eq!(reveal.on_check(&mut doc, &viewport), vec![ids[0]]);

        viewport.scroll_y = 1800.0;
        assert_eq!(reveal.on_check(&mut doc, &viewport), vec![ids[1]]);
        assert!(doc.has_class(ids[0], VISIBLE_CLASS));

        viewport.scroll_y = 0.0;
        assert!(reveal.on_check(&mut doc, &viewport).is_empty());
        assert!(doc.has_class(ids[1], VISIBLE_CLASS));
    }
}
