//! Export of validated designs.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ tokenize, parse, validate (jersey-parser)
//! JerseySpec
//!     ↓ export (this module)
//! SVG document
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: standalone SVG documents via [`svg::render`]

/// SVG export backend.
pub mod svg;
