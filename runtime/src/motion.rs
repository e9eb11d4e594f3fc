//! Animation support: toast keyframes and the reduced-motion override.

use crate::document::{Document, ElementId};
use folio_core::render::FADE_IN_OUT_KEYFRAMES;

/// Appends the toast keyframes to the document head.
pub fn inject_keyframes(doc: &mut Document) -> ElementId {
    let style = doc.create_element("style");
    doc.append_text(style, FADE_IN_OUT_KEYFRAMES);
    let head = doc.head();
    doc.append_child(head, style);
    style
}

/// Sets `animation: none` and `transition: none` inline on every element
/// currently in the document. Returns how many elements were touched.
pub fn disable_animations(doc: &mut Document) -> usize {
    let elements = doc.all_elements();
    for id in &elements {
        doc.set_style(*id, "animation", "none");
        doc.set_style(*id, "transition", "none");
    }
    elements.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframes_land_in_head() {
        let mut doc = Document::new();
        let style = inject_keyframes(&mut doc);
        assert_eq!(doc.parent(style), Some(doc.head()));
        assert!(doc.text_content(style).contains("@keyframes fadeInOut"));
    }

    #[test]
    fn test_disable_overrides_existing_animation() {
        let mut doc = Document::new();
        let card = doc.create_element("div");
        doc.set_style(card, "animation-delay", "0.2s");
        doc.set_style(card, "animation", "fadeIn 1s");
        let body = doc.body();
        doc.append_child(body, card);

        disable_animations(&mut doc);
        assert_eq!(doc.style(card, "animation"), Some("none"));
        assert_eq!(doc.style(card, "transition"), Some("none"));
        assert_eq!(doc.style(card, "animation-delay"), Some("0.2s"));
    }
}
