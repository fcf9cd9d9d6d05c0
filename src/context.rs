//! Application context for Folio.
//!
//! Provides the data provider, the startup config and the shell's UI state
//! (theme, sidebar) to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component (Resources comes from the launch builder)
//! use_context_provider(|| AppContext::new(use_context::<Resources>()));
//!
//! // In child components
//! let app = use_app();
//! let provider = app.provider.clone();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{DataProvider, FolioConfig, GalleryConfig};

/// Color scheme of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Value of the root `data-theme` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Startup resources handed to the launch builder
#[derive(Clone)]
pub struct Resources {
    pub config: Arc<FolioConfig>,
    pub provider: Arc<DataProvider>,
}

impl Resources {
    pub fn new(config: FolioConfig, provider: DataProvider) -> Self {
        Self {
            config: Arc::new(config),
            provider: Arc::new(provider),
        }
    }
}

/// Shared state for every page
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<FolioConfig>,
    pub provider: Arc<DataProvider>,
    pub theme: Signal<Theme>,
    pub sidebar_open: Signal<bool>,
}

impl AppContext {
    /// Must be called inside a component (it creates signals)
    pub fn new(resources: Resources) -> Self {
        Self {
            config: resources.config,
            provider: resources.provider,
            theme: Signal::new(Theme::default()),
            sidebar_open: Signal::new(false),
        }
    }

    pub fn gallery(&self) -> &GalleryConfig {
        &self.config.gallery
    }
}

/// Hook to access the application context.
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.as_str(), "light");
    }
}
