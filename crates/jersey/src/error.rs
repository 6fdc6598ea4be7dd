//! Error types for jersey operations.
//!
//! This module provides the main error type [`JerseyError`] which wraps
//! the conditions that can occur while turning a design into an image.

use std::io;

use thiserror::Error;

use jersey_parser::error::Error as CompileError;

/// The main error type for jersey operations.
///
/// # Diagnostic Variants
///
/// The `Compile` variant keeps the source text next to the pipeline error so
/// that its labeled spans can be rendered against it.
#[derive(Debug, Error)]
pub enum JerseyError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Compile { err: CompileError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid design record: {0}")]
    Template(#[from] serde_json::Error),
}

impl JerseyError {
    /// Create a new `Compile` error with the associated source code.
    pub fn new_compile_error(err: CompileError, src: impl Into<String>) -> Self {
        Self::Compile {
            err,
            src: src.into(),
        }
    }
}
