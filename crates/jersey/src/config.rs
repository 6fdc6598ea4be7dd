//! Configuration types for jersey rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! configuration file. Every section is optional.
//!
//! # Example
//!
//! ```
//! # use jersey::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(!config.render().show_debug());
//! ```

use serde::Deserialize;

use jersey_core::options::RenderOptions;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderOptions,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given render options.
    pub fn new(render: RenderOptions) -> Self {
        Self { render }
    }

    /// Returns the render options.
    pub fn render(&self) -> &RenderOptions {
        &self.render
    }

    /// Returns a copy with the debug overlay forced on or off.
    pub fn with_show_debug(mut self, show_debug: bool) -> Self {
        self.render = self.render.with_show_debug(show_debug);
        self
    }
}
