//! Clipboard capability and the contact copy action.

use crate::document::{Document, ElementId};
use crate::scheduler::Scheduler;
use folio_core::render::contact::{COPY_ACTION_ATTR, COPY_VALUE_ATTR, ContactAction, copy_toast};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard access denied")]
    Denied,
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard buffer. A denied buffer rejects every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    denied: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn denied() -> Self {
        Self {
            contents: None,
            denied: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.denied {
            return Err(ClipboardError::Denied);
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Timer task that removes a confirmation toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissToast(pub ElementId);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyBinding {
    pub item: ElementId,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct CopyAction {
    bindings: Vec<CopyBinding>,
    toast_duration: Duration,
}

impl CopyAction {
    /// Binds every contact item marked as a copy action.
    pub fn bind(doc: &Document, toast_duration: Duration) -> Self {
        let bindings = doc
            .all_elements()
            .into_iter()
            .filter(|id| doc.attr(*id, COPY_ACTION_ATTR) == Some(ContactAction::Copy.as_str()))
            .filter_map(|item| {
                doc.attr(item, COPY_VALUE_ATTR).map(|value| CopyBinding {
                    item,
                    value: value.to_string(),
                })
            })
            .collect();
        Self {
            bindings,
            toast_duration,
        }
    }

    pub fn bindings(&self) -> &[CopyBinding] {
        &self.bindings
    }

    pub fn binding_for(&self, doc: &Document, target: ElementId) -> Option<&CopyBinding> {
        self.bindings
            .iter()
            .find(|binding| doc.contains(binding.item, target))
    }

    /// Writes `value` to the clipboard. On success a toast is appended to
    /// the body and its dismissal scheduled; on failure the error is logged
    /// and nothing is shown.
    pub fn copy<T: From<DismissToast>>(
        &self,
        value: &str,
        doc: &mut Document,
        clipboard: &mut dyn Clipboard,
        scheduler: &mut Scheduler<T>,
        animated: bool,
    ) -> Option<ElementId> {
        if let Err(error) = clipboard.write_text(value) {
            tracing::error!(%error, "Failed to copy");
            return None;
        }

        let toast = doc.instantiate(&copy_toast(animated));
        let body = doc.body();
        doc.append_child(body, toast);
        scheduler.set_timeout(self.toast_duration, DismissToast(toast).into());
        tracing::debug!("Copied contact value to clipboard");
        Some(toast)
    }

    pub fn dismiss(doc: &mut Document, DismissToast(toast): DismissToast) {
        doc.remove(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::ContentStore;
    use folio_core::render::contact::{self, TOAST_CLASS};

    fn page() -> (Document, CopyAction) {
        let mut doc = Document::new();
        let body = doc.body();
        doc.mount(
            body,
            &contact::render(&ContentStore::builtin().profile),
            folio_core::render::MountMode::Append,
        );
        let action = CopyAction::bind(&doc, Duration::from_secs(2));
        (doc, action)
    }

    #[test]
    fn test_binds_only_the_email_item() {
        let (doc, action) = page();
        assert_eq!(action.bindings().len(), 1);
        assert_eq!(action.bindings()[0].value, "contact@rimba.dev");

        let label = doc.elements_by_class("contact-label")[0];
        assert_eq!(
            action.binding_for(&doc, label).map(|b| b.item),
            Some(action.bindings()[0].item)
        );
    }

    #[test]
    fn test_copy_shows_one_toast_then_removes_it() {
        let (mut doc, action) = page();
        let mut clipboard = MemoryClipboard::new();
        let mut scheduler = Scheduler::<DismissToast>::new();

        let toast = action
            .copy("contact@rimba.dev", &mut doc, &mut clipboard, &mut scheduler, true)
            .unwrap();
        assert_eq!(clipboard.contents(), Some("contact@rimba.dev"));
        assert_eq!(doc.elements_by_class(TOAST_CLASS), vec![toast]);

        assert!(scheduler.pop_due(Duration::from_millis(1999)).is_none());
        let (_, task) = scheduler.pop_due(Duration::from_secs(2)).unwrap();
        CopyAction::dismiss(&mut doc, task);
        assert!(doc.elements_by_class(TOAST_CLASS).is_empty());
    }

    #[test]
    fn test_denied_clipboard_shows_nothing() {
        let (mut doc, action) = page();
        let mut clipboard = MemoryClipboard::denied();
        let mut scheduler = Scheduler::<DismissToast>::new();

        assert!(
            action
                .copy("contact@rimba.dev", &mut doc, &mut clipboard, &mut scheduler, true)
                .is_none()
        );
        assert!(doc.elements_by_class(TOAST_CLASS).is_empty());
        assert_eq!(scheduler.pending(), 0);
    }
}
