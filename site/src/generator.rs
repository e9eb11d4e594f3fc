//! Static page generator.
//!
//! Boots a headless [`Page`] over the content, then writes the rendered
//! document next to the content it was built from.

use crate::templates;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use folio_core::fragment::{escape_attr, escape_text};
use folio_core::{ContentStore, Section, SiteConfig};
use folio_runtime::Page;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.html";
pub const CONTENT_FILE: &str = "content.json";
pub const MANIFEST_FILE: &str = "manifest.json";

pub struct SiteGenerator {
    output_dir: PathBuf,
    pretty: bool,
}

impl SiteGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            pretty: false,
        }
    }

    /// Pretty-print `content.json`.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn generate(&self, content: &ContentStore, config: &SiteConfig) -> Result<GeneratedFiles> {
        content.ensure_valid().context("Content failed validation")?;

        let output_path = self.output_dir.as_path();
        fs::create_dir_all(output_path).context("Failed to create output directory")?;

        // 1. content.json
        let content_json = content
            .to_json(self.pretty)
            .context("Failed to serialize content")?;
        let content_file = output_path.join(CONTENT_FILE);
        fs::write(&content_file, &content_json).context("Failed to write content.json")?;

        // 2. index.html
        let html = render_html(content, config)?;
        let html_file = output_path.join(INDEX_FILE);
        fs::write(&html_file, &html).context("Failed to write index.html")?;

        // 3. manifest.json
        let manifest = Manifest {
            generator: "folio",
            version: env!("CARGO_PKG_VERSION"),
            generated_at: Utc::now(),
            sections: Section::ALL.iter().map(|s| s.name()).collect(),
            files: vec![INDEX_FILE, CONTENT_FILE],
        };
        let manifest_json =
            serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;
        let manifest_file = output_path.join(MANIFEST_FILE);
        fs::write(&manifest_file, &manifest_json).context("Failed to write manifest.json")?;

        tracing::info!(dir = %output_path.display(), "Site generated");
        Ok(GeneratedFiles {
            html_path: html_file,
            content_json_path: content_file,
            manifest_path: manifest_file,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Boots the page over `content` and serializes the resulting document.
pub fn render_html(content: &ContentStore, config: &SiteConfig) -> Result<String> {
    let mut page = Page::with_shell(content.clone(), config.clone());
    page.bootstrap().context("Failed to bootstrap page")?;
    page.unload();

    let doc = page.document();
    let title = format!("{} | Portfolio", content.profile.name);
    Ok(templates::generate_html(
        &escape_text(&title),
        &escape_attr(&content.profile.headline),
        &doc.inner_html(doc.head()),
        &doc.inner_html(doc.body()),
    ))
}

#[derive(Debug, Serialize)]
struct Manifest {
    generator: &'static str,
    version: &'static str,
    generated_at: DateTime<Utc>,
    sections: Vec<&'static str>,
    files: Vec<&'static str>,
}

/// Paths written by [`SiteGenerator::generate`].
#[derive(Debug, Clone)]
pub struct GeneratedFiles {
    pub html_path: PathBuf,
    pub content_json_path: PathBuf,
    pub manifest_path: PathBuf,
}
