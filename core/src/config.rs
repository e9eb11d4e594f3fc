//! Site configuration (`folio.toml`).
//!
//! Every field has a default, so an empty file (or no file) yields the
//! standard page timings and breakpoints.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Value { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// JSON content file; the built-in content is used when absent.
    pub content: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub timing: TimingConfig,
    pub navigation: NavigationConfig,
    pub reveal: RevealConfig,
    pub log: LogConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content: None,
            output_dir: PathBuf::from("./dist"),
            timing: TimingConfig::default(),
            navigation: NavigationConfig::default(),
            reveal: RevealConfig::default(),
            log: LogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub log_interval_ms: u64,
    pub drain_pause_ms: u64,
    pub toast_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            log_interval_ms: 1500,
            drain_pause_ms: 5000,
            toast_ms: 2000,
        }
    }
}

impl TimingConfig {
    pub fn log_interval(&self) -> Duration {
        Duration::from_millis(self.log_interval_ms)
    }

    pub fn drain_pause(&self) -> Duration {
        Duration::from_millis(self.drain_pause_ms)
    }

    pub fn toast(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// How far above a section's top the scroll position may be while the
    /// section still counts as current.
    pub lead_in: f64,
    /// Viewports at or below this width use the mobile sidebar behavior.
    pub mobile_breakpoint: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            lead_in: 200.0,
            mobile_breakpoint: 768.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction of a panel that counts as intersecting.
    pub threshold: f64,
    /// Amount the viewport's bottom edge is pulled up before testing.
    pub bottom_margin: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub line_height: f64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { line_height: 20.0 }
    }
}

impl SiteConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.check()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Loads `path` when it exists, otherwise returns the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.timing.log_interval_ms == 0 {
            return Err(ConfigError::Value {
                field: "timing.log_interval_ms",
                reason: "must be greater than zero".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Value {
                field: "reveal.threshold",
                reason: format!("{} is outside 0..=1", self.reveal.threshold),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.timing.log_interval(), Duration::from_millis(1500));
        assert_eq!(config.navigation.mobile_breakpoint, 768.0);
    }

    #[test]
    fn test_partial_tables_keep_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            output_dir = "public"

            [timing]
            drain_pause_ms = 8000
            "#,
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.timing.drain_pause_ms, 8000);
        assert_eq!(config.timing.log_interval_ms, 1500);
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let err = SiteConfig::from_toml_str("[reveal]\nthreshold = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::Value { field: "reveal.threshold", .. }));
    }
}
