//! # folio-core
//!
//! Protocol-free core of the portfolio page: the read-only content store,
//! detached markup fragments, and the pure section renderers that turn one
//! into the other. Nothing here touches a document or a clock.

pub mod config;
pub mod content;
pub mod fragment;
pub mod render;
pub mod targets;

pub use config::{ConfigError, SiteConfig};
pub use content::{ContentError, ContentStore, Links, Profile, Project, TimelineEntry};
pub use fragment::{ElementNode, Fragment, Node};
pub use render::{MountMode, Placement, Section};

pub mod prelude {
    pub use crate::config::SiteConfig;
    pub use crate::content::ContentStore;
    pub use crate::fragment::{ElementNode, Fragment, Node, el};
    pub use crate::render::{MountMode, Placement, Section};
    pub use crate::targets;
}
