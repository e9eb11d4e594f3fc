//! # folio-runtime
//!
//! Headless page runtime. A [`Page`] owns an in-memory [`Document`], a
//! virtual-time [`Scheduler`] and the controllers bound at bootstrap, and
//! accepts simulated events so the interactive behavior can run (and be
//! tested) without a browser.

pub mod circuit;
pub mod clipboard;
pub mod clock;
pub mod document;
pub mod log_animator;
pub mod menu;
pub mod module;
pub mod motion;
pub mod navigation;
pub mod page;
pub mod reveal;
pub mod scheduler;
pub mod steps;
pub mod viewport;

pub use circuit::Circuit;
pub use clipboard::{Clipboard, ClipboardError, CopyAction, MemoryClipboard};
pub use clock::{Clock, FixedClock, SystemClock};
pub use document::{Document, ElementId};
pub use log_animator::{LogAnimator, LogState, LogTimer};
pub use module::{Module, ModuleError, ModuleResult};
pub use page::{EventResponse, Page, PageEvent, PageTask};
pub use scheduler::{Scheduler, TimerId};
pub use viewport::{ScrollBehavior, Viewport};

pub mod prelude {
    pub use crate::clipboard::{Clipboard, MemoryClipboard};
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::document::{Document, ElementId};
    pub use crate::module::{Module, ModuleError};
    pub use crate::page::{EventResponse, Page, PageEvent, PageTask};
    pub use crate::viewport::Viewport;
}
