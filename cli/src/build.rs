//! Static build command implementation

use anyhow::Result;
use folio_core::{ContentStore, SiteConfig};
use folio_site::SiteGenerator;
use std::path::PathBuf;

/// Run the build command. `out` overrides the configured output directory.
pub fn run_build(
    config: &SiteConfig,
    content: &ContentStore,
    out: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let output_dir = out.unwrap_or_else(|| config.output_dir.clone());
    println!("Building portfolio into: {}", output_dir.display());

    let files = SiteGenerator::new(output_dir)
        .pretty(pretty)
        .generate(content, config)?;

    println!("  ✅ {}", files.html_path.display());
    println!("  ✅ {}", files.content_json_path.display());
    println!("  ✅ {}", files.manifest_path.display());
    println!();
    println!("✅ Build complete!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_out_flag_overrides_config_output_dir() {
        let dir = tempdir().unwrap();
        let config = SiteConfig {
            output_dir: dir.path().join("from-config"),
            ..SiteConfig::default()
        };
        let out = dir.path().join("from-flag");

        run_build(&config, &ContentStore::builtin(), Some(out.clone()), false).unwrap();
        assert!(out.join("index.html").exists());
        assert!(!config.output_dir.exists());
    }
}
