//! Render options.

use serde::Deserialize;

/// Switches that affect SVG output without changing the design.
///
/// # Example
///
/// ```
/// # use jersey_core::options::RenderOptions;
/// let options = RenderOptions::default();
/// assert!(!options.show_debug());
/// assert!(options.with_show_debug(true).show_debug());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RenderOptions {
    /// Draw a dashed bounding box around the canvas.
    #[serde(default)]
    show_debug: bool,
}

impl RenderOptions {
    /// Creates a new [`RenderOptions`].
    pub fn new(show_debug: bool) -> Self {
        Self { show_debug }
    }

    /// Returns whether the debug overlay is drawn.
    pub fn show_debug(&self) -> bool {
        self.show_debug
    }

    /// Returns a copy with the debug overlay switched on or off.
    pub fn with_show_debug(mut self, show_debug: bool) -> Self {
        self.show_debug = show_debug;
        self
    }
}
