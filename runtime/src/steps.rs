//! Bootstrap steps wired into the page circuit.

use crate::clipboard::CopyAction;
use crate::log_animator::LogAnimator;
use crate::menu::MobileMenuController;
use crate::module::{Module, ModuleError, ModuleResult, StepMetadata};
use crate::motion;
use crate::navigation::NavigationController;
use crate::page::Page;
use crate::reveal::ScrollRevealController;
use folio_core::render::Section;
use folio_core::targets::SYSTEM_LOG;

/// Mounts one section's fragments into their containers.
pub struct RenderSection(pub Section);

impl Module for RenderSection {
    fn metadata(&self) -> StepMetadata {
        StepMetadata::new(format!("render:{}", self.0.name()))
    }

    fn execute(&self, page: &mut Page) -> ModuleResult {
        let placements = self.0.place(&page.content);
        for placement in placements {
            let container = page
                .document
                .get_element_by_id(placement.target)
                .ok_or_else(|| ModuleError::MissingTarget(placement.target.into()))?;
            page.document
                .mount(container, &placement.fragment, placement.mode);
        }
        Ok(())
    }
}

pub struct InjectKeyframes;

impl Module for InjectKeyframes {
    fn metadata(&self) -> StepMetadata {
        StepMetadata::new("inject-keyframes")
    }

    fn execute(&self, page: &mut Page) -> ModuleResult {
        motion::inject_keyframes(&mut page.document);
        Ok(())
    }
}

pub struct BindContactCopy;

impl Module for BindContactCopy {
    fn metadata(&self) -> StepMetadata {
        StepMetadata::new("bind-contact-copy")
    }

    fn execute(&self, page: &mut Page) -> ModuleResult {
        page.copy = Some(CopyAction::bind(
            &page.document,
            page.config.timing.toast(),
        ));
        Ok(())
    }
}

pub struct StartSystemLog;

impl Module for StartSystemLog {
    fn metadata(&self) -> StepMetadata {
        StepMetadata::new("system-log")
            .with_description("Stream the system log script on an interval")
    }

    fn execute(&self, page: &mut Page) -> ModuleResult {
        let container = page
            .document
            .get_element_by_id(SYSTEM_LOG)
            .ok_or_else(|| ModuleError::MissingTarget(SYSTEM_LOG.into()))?;

        if let Some(mut previous) = page.log.take() {
            previous.stop(&mut page.scheduler);
        }

        let timing = &page.config.timing;
        let mut log = LogAnimator::new(page.content.system_log.clone(), container)
            .with_timing(timing.log_interval(), timing.drain_pause())
            .with_line_height(page.config.log.line_height);
        log.start(&mut page.scheduler);
        page.log = Some(log);
        Ok(())
    }
}

pub struct SetupNavigation;

impl Module for SetupNavigation {
    fn metadata(&self) -> StepMetadata {
        StepMetadata::new("navigation")
    }

    fn execute(&self, page: &mut Page) -> ModuleResult {
        page.navigation = Some(NavigationController::bind(
            &page.document,
            &page.config.navigation,
        ));
        Ok(())
    }
}

pub struct SetupScrollReveal;

impl Module for SetupScrollReveal {
    fn metadata(&self) -> StepMetadata {
        StepMetadata::new("scroll-reveal")
    }

    fn execute(&self, page: &mut Page) -> ModuleResult {
        let mut reveal = ScrollRevealController::bind(&page.document, &page.config.reveal);
        // observers report the initial state as soon as targets are observed
        reveal.on_check(&mut page.document, &page.viewport);
        page.reveal = Some(reveal);
        Ok(())
    }
}

pub struct SetupMobileMenu;

impl Module for SetupMobileMenu {
    fn metadata(&self) -> StepMetadata {
        StepMetadata::new("mobile-menu")
    }

    fn execute(&self, page: &mut Page) -> ModuleResult {
        page.menu = Some(MobileMenuController::bind(
            &page.document,
            page.config.navigation.mobile_breakpoint,
        )?);
        Ok(())
    }
}

/// Disables animations when the viewport asks for reduced motion.
pub struct ApplyMotionPreference;

impl Module for ApplyMotionPreference {
    fn metadata(&self) -> StepMetadata {
        StepMetadata::new("motion-preference")
    }

    fn execute(&self, page: &mut Page) -> ModuleResult {
        if page.viewport.prefers_reduced_motion {
            let touched = motion::disable_animations(&mut page.document);
            tracing::debug!(elements = touched, "Reduced motion applied");
        }
        Ok(())
    }
}
