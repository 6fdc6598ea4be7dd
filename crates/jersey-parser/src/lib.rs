//! # Jersey Parser
//!
//! Tokenizer, parser and validator for the jersey design language. The
//! pipeline runs one way, each stage consuming the previous stage's output:
//!
//! 1. **Tokenize** - Convert source text to [`tokens::Token`]s ([`tokenize`])
//! 2. **Parse** - Build the [`Program`] AST ([`parse`])
//! 3. **Validate** - Check constraints and apply defaults ([`validate`])
//!
//! Each stage fails with its own error type; [`compile`] runs all three and
//! returns their sum, [`error::Error`].
//!
//! ## Usage
//!
//! ```
//! # use jersey_parser::{compile, error::Error};
//! fn main() -> Result<(), Error> {
//!     let spec = compile(
//!         r#"jersey {
//!             team: "FC";
//!             primary: #F00;
//!             secondary: #0F0;
//!             tertiary: #00F;
//!             number: 7;
//!         }"#,
//!     )?;
//!     assert_eq!(spec.primary().to_string(), "#FF0000");
//!     Ok(())
//! }
//! ```

pub mod error;
mod grammar;
mod lexer;
mod parser;
mod parser_types;
mod span;
pub mod tokens;
mod validate;

pub use grammar::GRAMMAR;
pub use lexer::tokenize;
pub use parser::parse;
pub use parser_types::{Argument, Program, Statement};
pub use span::{LineIndex, Position, Span, Spanned};
pub use validate::validate;

use jersey_core::spec::JerseySpec;

use error::Error;

/// Compile source text into a validated [`JerseySpec`].
///
/// # Errors
///
/// Returns the first error of whichever stage failed, unchanged.
pub fn compile(source: &str) -> Result<JerseySpec, Error> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    let spec = validate(&program)?;
    Ok(spec)
}
