//! Inspection output for the intermediate pipeline stages.

use std::{fs, path::Path};

use log::{debug, info};

use jersey::JerseyError;
use jersey_parser::{Program, tokenize, tokens::Token};

/// One token per line as `line:column<TAB>KIND<TAB>lexeme`.
pub fn format_tokens(tokens: &[Token<'_>]) -> String {
    let mut listing = String::new();
    for token in tokens {
        listing.push_str(&token.to_string());
        listing.push('\n');
    }
    listing
}

/// Tokenize `source` and render the listing.
///
/// # Errors
///
/// Returns [`JerseyError::Compile`] for a lexical error.
pub fn token_listing(source: &str) -> Result<String, JerseyError> {
    let tokens =
        tokenize(source).map_err(|err| JerseyError::new_compile_error(err.into(), source))?;
    debug!(count = tokens.len(); "Tokenized input");
    Ok(format_tokens(&tokens))
}

/// Write the token listing next to `input` as `<input>.tokens.txt`.
///
/// # Errors
///
/// Returns an error when tokenizing fails or the file cannot be written.
pub fn write_token_listing(input: &str, source: &str) -> Result<String, JerseyError> {
    let listing = token_listing(source)?;
    let path = format!("{input}.tokens.txt");
    fs::write(Path::new(&path), listing)?;
    info!(path; "Token listing written");
    Ok(path)
}

/// Tokenize and parse `source` without validating it.
///
/// # Errors
///
/// Returns [`JerseyError::Compile`] for lexical and syntax errors.
pub fn syntax_tree(source: &str) -> Result<Program, JerseyError> {
    let tokens =
        tokenize(source).map_err(|err| JerseyError::new_compile_error(err.into(), source))?;
    jersey_parser::parse(&tokens).map_err(|err| JerseyError::new_compile_error(err.into(), source))
}
