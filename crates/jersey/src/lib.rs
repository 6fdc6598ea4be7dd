//! Jersey - a small design language for sports jerseys.
//!
//! Compiles `jersey { ... }` descriptions into SVG images showing the front
//! and back of the kit. The pipeline is tokenize, parse, validate, render;
//! the first three stages live in `jersey-parser` and the design model in
//! `jersey-core`.

pub mod config;
pub mod export;
pub mod template;

mod error;

pub use jersey_core::{color, options, pattern, spec};

pub use error::JerseyError;

use log::{debug, info, trace};

use config::AppConfig;
use spec::JerseySpec;

/// Builder for compiling and rendering jersey designs.
///
/// # Examples
///
/// ```rust
/// use jersey::{JerseyBuilder, config::AppConfig};
///
/// let source = "jersey { primary: #036; secondary: #fc0; tertiary: #000; }";
///
/// let builder = JerseyBuilder::new(AppConfig::default());
///
/// // Compile source to the validated design
/// let spec = builder.compile(source).expect("Failed to compile");
///
/// // Render the design to SVG
/// let svg = builder.render_svg(&spec);
/// assert!(svg.contains("<svg"));
///
/// // Or use the default config
/// let builder = JerseyBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct JerseyBuilder {
    config: AppConfig,
}

impl JerseyBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Compile source text into a validated design.
    ///
    /// # Errors
    ///
    /// Returns [`JerseyError::Compile`] carrying the source text for lexical,
    /// syntax and semantic errors.
    pub fn compile(&self, source: &str) -> Result<JerseySpec, JerseyError> {
        info!("Compiling jersey design");

        let spec = jersey_parser::compile(source)
            .map_err(|err| JerseyError::new_compile_error(err, source))?;

        debug!(team = spec.team(); "Design compiled successfully");
        trace!(spec:?; "Compiled design");

        Ok(spec)
    }

    /// Render a validated design to an SVG string.
    pub fn render_svg(&self, spec: &JerseySpec) -> String {
        info!(show_debug = self.config.render().show_debug(); "Rendering SVG");
        let svg = export::svg::render(spec, self.config.render());
        info!(bytes = svg.len(); "SVG rendered successfully");
        svg
    }

    /// Compile and render in one step.
    ///
    /// # Errors
    ///
    /// Returns the error of [`JerseyBuilder::compile`].
    pub fn compile_to_svg(&self, source: &str) -> Result<String, JerseyError> {
        let spec = self.compile(source)?;
        Ok(self.render_svg(&spec))
    }
}
