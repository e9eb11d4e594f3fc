//! folio CLI
//!
//! # Commands
//! - `folio build` - Generate the static page into the output directory
//! - `folio check` - Validate content and configuration
//! - `folio preview` - Run the page headlessly and stream the system log

mod build;
mod check;
mod preview;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{ContentStore, SiteConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Portfolio page generator
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Render and preview a portfolio page")]
struct Cli {
    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate index.html, content.json and manifest.json
    Build {
        /// Config file (default: ./folio.toml, optional)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Content JSON file (default: built-in content)
        #[arg(long)]
        content: Option<PathBuf>,

        /// Output directory (default: from config, ./dist)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Pretty-print content.json
        #[arg(long)]
        pretty: bool,
    },

    /// Validate content and configuration
    Check {
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long)]
        content: Option<PathBuf>,
    },

    /// Run the page in real time and print the system log
    Preview {
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long)]
        content: Option<PathBuf>,

        /// Stop after this many seconds (default: until Ctrl+C)
        #[arg(short, long)]
        seconds: Option<u64>,

        /// Viewport width
        #[arg(short, long, default_value_t = 1280.0)]
        width: f64,
    },
}

const DEFAULT_CONFIG: &str = "folio.toml";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            config,
            content,
            out,
            pretty,
        } => {
            let (config, content) = load_inputs(config.as_deref(), content.as_deref())?;
            build::run_build(&config, &content, out, pretty)
        }
        Commands::Check { config, content } => {
            check::run_check_command(config.as_deref(), content.as_deref())
        }
        Commands::Preview {
            config,
            content,
            seconds,
            width,
        } => {
            let (config, content) = load_inputs(config.as_deref(), content.as_deref())?;
            preview::run_preview(config, content, seconds, width).await
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Loads the config (a missing default file means defaults) and the content
/// it points at. `--content` overrides the config's content path.
pub(crate) fn load_inputs(
    config_path: Option<&Path>,
    content_path: Option<&Path>,
) -> Result<(SiteConfig, ContentStore)> {
    let config = match config_path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SiteConfig::load_or_default(DEFAULT_CONFIG).context("Failed to load folio.toml")?,
    };

    let content = match content_path.or(config.content.as_deref()) {
        Some(path) => ContentStore::load(path)
            .with_context(|| format!("Failed to load content {}", path.display()))?,
        None => ContentStore::builtin(),
    };

    Ok((config, content))
}
