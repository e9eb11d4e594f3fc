//! # folio-site
//!
//! Static generator for the portfolio page. Produces:
//!
//! - **index.html**: shell with every section pre-rendered
//! - **content.json**: the content store the page was built from
//! - **manifest.json**: generated file list and build timestamp

pub mod generator;
mod templates;

pub use generator::{GeneratedFiles, SiteGenerator, render_html};
pub use templates::DEFAULT_CSS;
