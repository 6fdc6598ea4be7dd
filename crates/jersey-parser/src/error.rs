//! Error and diagnostic system for the jersey pipeline.
//!
//! Each stage fails with its own error type: [`LexError`] from the
//! tokenizer, [`ParseError`] from the parser and [`SemanticError`] from the
//! validator. [`Error`] is their sum for callers that run the whole
//! pipeline. Every error converts into a [`Diagnostic`] with an
//! [`ErrorCode`] and labeled source spans for rich rendering.
//!
//! # Example
//!
//! ```
//! # use jersey_parser::{compile, error::ErrorCode};
//! let err = compile("jersey { team: \"A\"; team: \"B\"; }").unwrap_err();
//! let diagnostic = err.diagnostic();
//! assert_eq!(diagnostic.code(), Some(ErrorCode::E200));
//! assert_eq!(diagnostic.labels().len(), 2);
//! ```

mod diagnostic;
mod error_code;
mod label;
mod lex_error;
mod parse_error;
mod semantic_error;

use thiserror::Error;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::ParseError;
pub use semantic_error::SemanticError;

/// Any pipeline failure. The variant names the stage that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

impl Error {
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            Error::Lex(err) => err.diagnostic(),
            Error::Parse(err) => err.diagnostic(),
            Error::Semantic(err) => err.diagnostic(),
        }
    }
}
