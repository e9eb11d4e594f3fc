//! Content and configuration validation

use anyhow::Result;
use folio_core::content::Severity;
use folio_runtime::Page;
use std::path::Path;

/// Validates the content, then boots a page over it to confirm every
/// section renders.
pub fn run_check_command(config_path: Option<&Path>, content_path: Option<&Path>) -> Result<()> {
    println!("Checking portfolio content...");

    // 1. Config and content parse
    let (config, content) = crate::load_inputs(config_path, content_path)?;
    println!("  ✅ config and content parsed");

    // 2. Content rules
    let issues = content.validate();
    let mut errors = 0;
    for issue in &issues {
        match issue.severity {
            Severity::Warning => println!("  ⚠️  {issue}"),
            Severity::Error => {
                errors += 1;
                println!("  ❌ {issue}");
            }
        }
    }
    if errors > 0 {
        anyhow::bail!("{errors} content error(s) found");
    }
    if issues.is_empty() {
        println!("  ✅ content rules passed");
    }

    // 3. Bootstrap
    let mut page = Page::with_shell(content, config);
    page.bootstrap()?;
    page.unload();
    println!("  ✅ all sections rendered");

    println!();
    println!("✅ Check complete!");

    Ok(())
}
