//! Parser errors.

use thiserror::Error;

use crate::{
    error::{Diagnostic, ErrorCode},
    span::{Position, Span},
    tokens::TokenKind,
};

/// A grammar violation. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found} at {position}")]
    UnexpectedToken {
        expected: String,
        found: TokenKind,
        position: Position,
        span: Span,
    },

    #[error("expected {expected}, found end of input at {position}")]
    UnexpectedEof {
        expected: String,
        position: Position,
        span: Span,
    },

    #[error("unexpected {found} after the jersey block at {position}")]
    TrailingInput {
        found: TokenKind,
        position: Position,
        span: Span,
    },

    #[error("integer `{lexeme}` is too large at {position}")]
    IntegerOutOfRange {
        lexeme: String,
        position: Position,
        span: Span,
    },
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::UnexpectedToken { .. } => ErrorCode::E100,
            ParseError::UnexpectedEof { .. } => ErrorCode::E101,
            ParseError::TrailingInput { .. } => ErrorCode::E102,
            ParseError::IntegerOutOfRange { .. } => ErrorCode::E103,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::UnexpectedEof { position, .. }
            | ParseError::TrailingInput { position, .. }
            | ParseError::IntegerOutOfRange { position, .. } => *position,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEof { span, .. }
            | ParseError::TrailingInput { span, .. }
            | ParseError::IntegerOutOfRange { span, .. } => *span,
        }
    }

    pub fn diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.to_string()).with_code(self.code());
        match self {
            ParseError::UnexpectedToken {
                expected, span, ..
            } => diagnostic.with_label(*span, format!("expected {expected}")),
            ParseError::UnexpectedEof { expected, span, .. } => diagnostic
                .with_label(*span, format!("expected {expected}"))
                .with_help("close the jersey block with `}`"),
            ParseError::TrailingInput { span, .. } => diagnostic
                .with_label(*span, "after the closing `}`")
                .with_help("a source file holds exactly one `jersey { ... }` block"),
            ParseError::IntegerOutOfRange { span, .. } => {
                diagnostic.with_label(*span, self.code().description())
            }
        }
    }
}
