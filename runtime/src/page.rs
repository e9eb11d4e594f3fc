//! # Page: Composition Root
//!
//! Owns the document, the timer table, the platform capabilities and every
//! controller bound during bootstrap. Tests and drivers interact with the
//! page only through [`Page::dispatch`] and [`Page::advance`].

use crate::circuit::Circuit;
use crate::clipboard::{Clipboard, CopyAction, DismissToast, MemoryClipboard};
use crate::clock::{Clock, SystemClock};
use crate::document::{Document, ElementId};
use crate::log_animator::{LogAnimator, LogTimer};
use crate::menu::MobileMenuController;
use crate::module::{Module, ModuleError};
use crate::navigation::NavigationController;
use crate::reveal::ScrollRevealController;
use crate::scheduler::Scheduler;
use crate::steps::{
    ApplyMotionPreference, BindContactCopy, InjectKeyframes, RenderSection, SetupMobileMenu,
    SetupNavigation, SetupScrollReveal, StartSystemLog,
};
use crate::viewport::Viewport;
use folio_core::config::SiteConfig;
use folio_core::content::ContentStore;
use folio_core::render::{MountMode, Section, shell};
use std::time::Duration;

/// Work scheduled on the page's timer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTask {
    Log(LogTimer),
    DismissToast(DismissToast),
}

impl From<LogTimer> for PageTask {
    fn from(timer: LogTimer) -> Self {
        PageTask::Log(timer)
    }
}

impl From<DismissToast> for PageTask {
    fn from(dismiss: DismissToast) -> Self {
        PageTask::DismissToast(dismiss)
    }
}

/// Simulated user and window events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    Click { target: ElementId },
    Scroll { offset: f64 },
    Resize { width: f64, height: f64 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    pub default_prevented: bool,
}

pub struct Page {
    pub(crate) document: Document,
    pub(crate) scheduler: Scheduler<PageTask>,
    pub(crate) viewport: Viewport,
    pub(crate) config: SiteConfig,
    pub(crate) content: ContentStore,
    clock: Box<dyn Clock>,
    clipboard: Box<dyn Clipboard>,
    pub(crate) log: Option<LogAnimator>,
    pub(crate) navigation: Option<NavigationController>,
    pub(crate) reveal: Option<ScrollRevealController>,
    pub(crate) menu: Option<MobileMenuController>,
    pub(crate) copy: Option<CopyAction>,
    bootstrapped: bool,
    unloaded: bool,
}

impl Page {
    /// A page over an empty document. Bootstrap fails until the render
    /// targets exist; see [`Page::with_shell`].
    pub fn new(content: ContentStore, config: SiteConfig) -> Self {
        Self {
            document: Document::new(),
            scheduler: Scheduler::new(),
            viewport: Viewport::default(),
            config,
            content,
            clock: Box::new(SystemClock),
            clipboard: Box::new(MemoryClipboard::new()),
            log: None,
            navigation: None,
            reveal: None,
            menu: None,
            copy: None,
            bootstrapped: false,
            unloaded: false,
        }
    }

    /// A page whose body already holds the static shell.
    pub fn with_shell(content: ContentStore, config: SiteConfig) -> Self {
        let mut page = Self::new(content, config);
        let body = page.document.body();
        let skeleton = shell::render(&page.content.profile);
        page.document.mount(body, &skeleton, MountMode::Append);
        page
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// The initialization circuit: render every section, then bind the
    /// interactive controllers.
    pub fn circuit() -> Circuit {
        let mut circuit =
            Circuit::new("portfolio").with_description("Render content and bind controllers");
        for section in Section::ALL {
            circuit = circuit.wire(RenderSection(section));
            if section == Section::Contact {
                circuit = circuit.wire(BindContactCopy);
            }
        }
        circuit
            .wire(StartSystemLog)
            .wire(SetupNavigation)
            .wire(SetupScrollReveal)
            .wire(SetupMobileMenu)
    }

    /// Runs the initialization circuit inside a single failure boundary.
    /// Keyframes are injected and the motion preference applied whether or
    /// not the circuit succeeds. A page bootstraps at most once, even after
    /// a failed attempt.
    pub fn bootstrap(&mut self) -> Result<(), ModuleError> {
        if self.unloaded {
            return Err(ModuleError::Unloaded);
        }
        if self.bootstrapped {
            return Err(ModuleError::AlreadyBootstrapped);
        }
        self.bootstrapped = true;

        InjectKeyframes.execute(self)?;
        let result = Self::circuit().execute(self);
        ApplyMotionPreference.execute(self)?;

        match &result {
            Ok(()) => tracing::info!("✓ Portfolio initialized successfully"),
            Err(error) => tracing::error!(%error, "Error loading portfolio"),
        }
        result
    }

    pub fn dispatch(&mut self, event: PageEvent) -> EventResponse {
        if self.unloaded {
            tracing::debug!(?event, "Event after unload ignored");
            return EventResponse::default();
        }

        match event {
            PageEvent::Click { target } => self.on_click(target),
            PageEvent::Scroll { offset } => {
                self.viewport.scroll_y = offset;
                if let Some(nav) = &self.navigation {
                    nav.on_scroll(&mut self.document, offset);
                }
                self.check_reveal();
                EventResponse::default()
            }
            PageEvent::Resize { width, height } => {
                self.viewport.width = width;
                self.viewport.height = height;
                self.check_reveal();
                EventResponse::default()
            }
        }
    }

    fn on_click(&mut self, target: ElementId) -> EventResponse {
        let mut response = EventResponse::default();
        let mut scrolled = false;

        if let Some(nav) = &self.navigation {
            if let Some(link) = nav.link_for(&self.document, target).map(|b| b.link) {
                response.default_prevented = true;
                scrolled = nav.on_click(&mut self.document, link, &mut self.viewport);
            }
        }
        if scrolled {
            self.check_reveal();
        }

        if let Some(menu) = &self.menu {
            if menu.hits_toggle(&self.document, target) {
                menu.toggle(&mut self.document);
            }
        }

        if let Some(copy) = &self.copy {
            if let Some(value) = copy.binding_for(&self.document, target).map(|b| b.value.clone()) {
                let animated = !self.viewport.prefers_reduced_motion;
                copy.copy(
                    &value,
                    &mut self.document,
                    self.clipboard.as_mut(),
                    &mut self.scheduler,
                    animated,
                );
            }
        }

        // document-level listener runs last, after the click has bubbled
        if let Some(menu) = &self.menu {
            menu.on_document_click(&mut self.document, target, self.viewport.width);
        }

        response
    }

    fn check_reveal(&mut self) {
        if let Some(reveal) = &mut self.reveal {
            reveal.on_check(&mut self.document, &self.viewport);
        }
    }

    /// Advances page time by `by`, running every timer that falls due in
    /// order. Returns the tasks that ran.
    pub fn advance(&mut self, by: Duration) -> Vec<PageTask> {
        let until = self.scheduler.now() + by;
        let mut fired = Vec::new();

        while let Some((_, task)) = self.scheduler.pop_due(until) {
            match task {
                PageTask::Log(LogTimer::Tick) => {
                    let now = self.clock.time_of_day(self.scheduler.now());
                    if let Some(log) = &mut self.log {
                        log.tick(&mut self.document, &mut self.scheduler, now);
                    }
                }
                PageTask::Log(LogTimer::Drain) => {
                    if let Some(log) = &mut self.log {
                        log.finish_drain(&mut self.document);
                    }
                }
                PageTask::DismissToast(dismiss) => CopyAction::dismiss(&mut self.document, dismiss),
            }
            fired.push(task);
        }

        self.scheduler.advance_to(until);
        fired
    }

    /// Stops the log animation. Later events are ignored.
    pub fn unload(&mut self) {
        if self.unloaded {
            return;
        }
        if let Some(log) = &mut self.log {
            log.stop(&mut self.scheduler);
        }
        self.unloaded = true;
        tracing::info!("Page unloaded");
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }

    pub fn is_unloaded(&self) -> bool {
        self.unloaded
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable document access, for layout set-up in drivers and tests.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn scheduler(&self) -> &Scheduler<PageTask> {
        &self.scheduler
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn log(&self) -> Option<&LogAnimator> {
        self.log.as_ref()
    }

    pub fn navigation(&self) -> Option<&NavigationController> {
        self.navigation.as_ref()
    }

    pub fn menu(&self) -> Option<&MobileMenuController> {
        self.menu.as_ref()
    }

    pub fn copy_action(&self) -> Option<&CopyAction> {
        self.copy.as_ref()
    }

    /// Text of every log line currently shown.
    pub fn log_lines(&self) -> Vec<String> {
        match &self.log {
            Some(log) => self
                .document
                .children(log.container())
                .into_iter()
                .map(|line| self.document.text_content(line))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Gives every panel a stacked layout box of the given heights, in
    /// document order. Panels past the end of `heights` reuse the last one.
    pub fn layout_panels(&mut self, heights: &[f64]) {
        let panels = self
            .document
            .elements_by_class(folio_core::targets::PANEL_CLASS);
        let mut top = 0.0;
        for (index, panel) in panels.into_iter().enumerate() {
            let height = heights
                .get(index)
                .or_else(|| heights.last())
                .copied()
                .unwrap_or(0.0);
            self.document.set_layout(panel, top, height);
            top += height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveTime;

    fn page() -> Page {
        Page::with_shell(ContentStore::builtin(), SiteConfig::default())
            .with_clock(FixedClock::new(NaiveTime::from_hms_opt(9, 0, 0).unwrap()))
    }

    #[test]
    fn test_circuit_order() {
        let labels = Page::circuit().labels();
        assert_eq!(labels.first().map(String::as_str), Some("render:profile"));
        assert_eq!(labels.last().map(String::as_str), Some("mobile-menu"));
        let contact = labels.iter().position(|l| l == "render:contact").unwrap();
        assert_eq!(labels[contact + 1], "bind-contact-copy");
    }

    #[test]
    fn test_bootstrap_fills_targets() {
        let mut page = page();
        page.bootstrap().unwrap();

        let doc = page.document();
        let name = doc.get_element_by_id(folio_core::targets::PROFILE_NAME).unwrap();
        assert_eq!(doc.text_content(name), "Rim Ba");
        assert!(page.navigation().is_some());
        assert!(page.menu().is_some());
        assert_eq!(page.copy_action().map(|c| c.bindings().len()), Some(1));
    }

    #[test]
    fn test_bootstrap_without_shell_fails_at_first_target() {
        let mut page = Page::new(ContentStore::builtin(), SiteConfig::default());
        let err = page.bootstrap().unwrap_err();
        assert!(matches!(err, ModuleError::MissingTarget(ref id) if id == "profileName"));
        assert!(page.log().is_none());
        assert!(page.navigation().is_none());
    }

    #[test]
    fn test_log_ticks_use_page_clock() {
        let mut page = page();
        page.bootstrap().unwrap();

        page.advance(Duration::from_millis(3000));
        let lines = page.log_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[09:00:01]"));
        assert!(lines[1].starts_with("[09:00:03]"));
    }

    #[test]
    fn test_second_bootstrap_is_rejected_and_keeps_one_log_timer() {
        let mut page = page();
        page.bootstrap().unwrap();
        let err = page.bootstrap().unwrap_err();
        assert!(matches!(err, ModuleError::AlreadyBootstrapped));

        assert_eq!(page.scheduler().pending(), 1);
        page.advance(Duration::from_millis(1500));
        assert_eq!(page.log_lines().len(), 1);
    }

    #[test]
    fn test_unload_stops_log_and_ignores_events() {
        let mut page = page();
        page.bootstrap().unwrap();
        page.advance(Duration::from_millis(1500));
        page.unload();

        assert_eq!(page.scheduler().pending(), 0);
        page.advance(Duration::from_secs(60));
        assert_eq!(page.log_lines().len(), 1);

        let toggle = page.menu().unwrap().toggle_element();
        let response = page.dispatch(PageEvent::Click { target: toggle });
        assert_eq!(response, EventResponse::default());
        assert!(!page.menu().unwrap().is_open(page.document()));
    }
}
