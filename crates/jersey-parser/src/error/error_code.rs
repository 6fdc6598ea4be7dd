//! Error codes for the jersey diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Lexer errors
//! - `E1xx` - Parser errors
//! - `E2xx` - Validation errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lexer Errors (E0xx)
    // =========================================================================
    /// Unexpected character.
    ///
    /// A character was encountered that cannot start any token.
    E001,

    /// Unterminated string literal.
    ///
    /// A string was opened with a quote but never closed on the same line.
    E002,

    /// Invalid escape sequence.
    ///
    /// Valid escapes are `\"`, `\n`, `\t` and `\\`.
    E003,

    /// Invalid color literal.
    ///
    /// A `#` was not followed by exactly 3 or 6 hex digits.
    E004,

    /// Invalid integer literal.
    ///
    /// An integer has more than 9 digits or runs into an identifier.
    E005,

    /// Unterminated block comment.
    E006,

    // =========================================================================
    // Parser Errors (E1xx)
    // =========================================================================
    /// Unexpected token.
    ///
    /// The parser encountered a token it did not expect at this position.
    E100,

    /// Unexpected end of input.
    ///
    /// The input ended before the jersey block was complete.
    E101,

    /// Trailing input.
    ///
    /// Tokens follow the closing `}` of the jersey block.
    E102,

    /// Integer out of range.
    ///
    /// An integer literal does not fit the value type.
    E103,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Duplicate declaration.
    ///
    /// A field was declared more than once.
    E200,

    /// Missing required field.
    ///
    /// One or more of `primary`, `secondary` and `tertiary` is not declared.
    E201,

    /// Value out of range.
    E202,

    /// Empty text.
    ///
    /// `team` or `player` is blank after trimming.
    E203,

    /// Empty pattern identifier.
    E204,

    /// Invalid pattern argument.
    ///
    /// A recognized pattern got a non-integer argument or too many arguments.
    E205,

    /// Pattern argument out of range.
    E206,

    /// Invalid color value.
    E207,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E005 => "E005",
            ErrorCode::E006 => "E006",
            // Parser errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            // Validation errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
            ErrorCode::E205 => "E205",
            ErrorCode::E206 => "E206",
            ErrorCode::E207 => "E207",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Lexer errors
            ErrorCode::E001 => "unexpected character",
            ErrorCode::E002 => "unterminated string literal",
            ErrorCode::E003 => "invalid escape sequence",
            ErrorCode::E004 => "invalid color literal",
            ErrorCode::E005 => "invalid integer literal",
            ErrorCode::E006 => "unterminated block comment",
            // Parser errors
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "unexpected end of input",
            ErrorCode::E102 => "trailing input",
            ErrorCode::E103 => "integer out of range",
            // Validation errors
            ErrorCode::E200 => "duplicate declaration",
            ErrorCode::E201 => "missing required field",
            ErrorCode::E202 => "value out of range",
            ErrorCode::E203 => "empty text",
            ErrorCode::E204 => "empty pattern identifier",
            ErrorCode::E205 => "invalid pattern argument",
            ErrorCode::E206 => "pattern argument out of range",
            ErrorCode::E207 => "invalid color",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
