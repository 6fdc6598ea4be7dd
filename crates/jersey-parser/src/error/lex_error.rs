//! Tokenizer errors.

use std::fmt;

use thiserror::Error;

use crate::{
    error::{Diagnostic, ErrorCode},
    span::{Position, Span},
};

/// What went wrong while tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    UnexpectedCharacter,
    UnterminatedString,
    InvalidEscape,
    InvalidColor,
    InvalidInteger,
    UnterminatedComment,
}

impl LexErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            LexErrorKind::UnexpectedCharacter => ErrorCode::E001,
            LexErrorKind::UnterminatedString => ErrorCode::E002,
            LexErrorKind::InvalidEscape => ErrorCode::E003,
            LexErrorKind::InvalidColor => ErrorCode::E004,
            LexErrorKind::InvalidInteger => ErrorCode::E005,
            LexErrorKind::UnterminatedComment => ErrorCode::E006,
        }
    }

    fn help(self) -> &'static str {
        match self {
            LexErrorKind::UnexpectedCharacter => {
                "only identifiers, literals and `{ } ( ) ; : ,` may appear between comments"
            }
            LexErrorKind::UnterminatedString => "add a closing `\"` before the end of the line",
            LexErrorKind::InvalidEscape => "valid escapes: `\\\"`, `\\n`, `\\t`, `\\\\`",
            LexErrorKind::InvalidColor => "write colors as `#RGB` or `#RRGGBB`",
            LexErrorKind::InvalidInteger => "integers have at most 9 digits and end at a separator",
            LexErrorKind::UnterminatedComment => "close the comment with `*/`",
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code().description())
    }
}

/// A tokenizer failure at a specific character.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} {character:?} at {position}")]
pub struct LexError {
    kind: LexErrorKind,
    character: char,
    position: Position,
    span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, character: char, position: Position, span: Span) -> Self {
        Self {
            kind,
            character,
            position,
            span,
        }
    }

    pub fn kind(&self) -> LexErrorKind {
        self.kind
    }

    /// The offending character.
    pub fn character(&self) -> char {
        self.character
    }

    /// Line and column of the offending character.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.to_string())
            .with_code(self.kind.code())
            .with_label(self.span, self.kind.code().description())
            .with_help(self.kind.help())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_display() {
        let err = LexError::new(
            LexErrorKind::UnexpectedCharacter,
            '@',
            Position { line: 2, column: 7 },
            Span::new(12..13),
        );
        assert_eq!(err.to_string(), "unexpected character '@' at line 2, column 7");

        let diag = err.diagnostic();
        assert_eq!(diag.code(), Some(ErrorCode::E001));
        assert_eq!(diag.labels()[0].span(), Span::new(12..13));
    }
}
