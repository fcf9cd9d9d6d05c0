//! Configuration loading.
//!
//! Layers, later wins: built-in defaults, TOML file, `FOLIO_API_BASE_URL`,
//! then whatever the binary applies from its command line.
//!
//! ```toml
//! api_base_url = "https://api.example.com/api"
//! request_timeout_secs = 10
//!
//! [gallery]
//! batch_size = 20
//! load_delay_ms = 300
//! trigger_threshold = 0.5
//! root_margin_px = 100
//! mobile_breakpoint_px = 768
//! navigation_hints = true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Environment variable overriding the API base URL
pub const API_BASE_URL_ENV: &str = "FOLIO_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Backend root, e.g. `https://api.example.com/api`
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Items revealed per load-more step
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Pause before committing a batch, so the loading indicator shows
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
    /// Visible fraction of the sentinel that triggers a load
    #[serde(default = "default_trigger_threshold")]
    pub trigger_threshold: f64,
    /// Pre-trigger margin around the viewport
    #[serde(default = "default_root_margin_px")]
    pub root_margin_px: u32,
    /// Viewports narrower than this render inline instead of a lightbox
    #[serde(default = "default_mobile_breakpoint_px")]
    pub mobile_breakpoint_px: u32,
    /// Directional cursor over the lightbox image
    #[serde(default = "default_navigation_hints")]
    pub navigation_hints: bool,
}

fn default_timeout_secs() -> u64 {
    10
}
fn default_batch_size() -> usize {
    20
}
fn default_load_delay_ms() -> u64 {
    300
}
fn default_trigger_threshold() -> f64 {
    0.5
}
fn default_root_margin_px() -> u32 {
    100
}
fn default_mobile_breakpoint_px() -> u32 {
    768
}
fn default_navigation_hints() -> bool {
    true
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            load_delay_ms: default_load_delay_ms(),
            trigger_threshold: default_trigger_threshold(),
            root_margin_px: default_root_margin_px(),
            mobile_breakpoint_px: default_mobile_breakpoint_px(),
            navigation_hints: default_navigation_hints(),
        }
    }
}

impl GalleryConfig {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            request_timeout_secs: default_timeout_secs(),
            gallery: GalleryConfig::default(),
        }
    }
}

impl FolioConfig {
    /// Default location: `<config dir>/folio/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
    }

    /// Parse a TOML document
    pub fn from_toml(text: &str) -> FolioResult<Self> {
        let config: FolioConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file
    pub fn from_file(path: &Path) -> FolioResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            FolioError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&text)
    }

    /// Resolve the full layer stack.
    ///
    /// An explicit `path` must exist. The default path is optional.
    pub fn load(path: Option<&Path>) -> FolioResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(default) => Self::from_file(&default)?,
                None => Self::default(),
            },
        };
        config.apply_env(std::env::var(API_BASE_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply the environment override; blank values are ignored
    pub fn apply_env(&mut self, api_base_url: Option<String>) {
        if let Some(url) = api_base_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = Some(url);
        }
    }

    /// Base URL without a trailing slash, or `None` when unset or blank
    pub fn base_url(&self) -> Option<String> {
        self.api_base_url
            .as_deref()
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty())
            .map(str::to_string)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> FolioResult<()> {
        if self.gallery.batch_size == 0 {
            return Err(FolioError::Config("gallery.batch_size must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.gallery.trigger_threshold) {
            return Err(FolioError::Config(format!(
                "gallery.trigger_threshold must be within 0.0..=1.0, got {}",
                self.gallery.trigger_threshold
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(FolioError::Config("request_timeout_secs must be at least 1".into()));
        }
        Ok(())
    }
}
