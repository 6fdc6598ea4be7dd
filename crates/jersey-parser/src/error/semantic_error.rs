//! Validation errors.

use thiserror::Error;

use jersey_core::{
    color::ColorError,
    pattern::PatternError,
    spec::{Field, FieldList},
};

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

/// A violation of the design's field constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    #[error("duplicate declaration of `{field}`")]
    Duplicate { field: Field, span: Span, first: Span },

    #[error("missing required field(s): {missing}")]
    MissingFields { missing: FieldList, span: Span },

    #[error("`{field}` must be between {min} and {max}, found {value}")]
    OutOfRange {
        field: Field,
        value: u32,
        min: u32,
        max: u32,
        span: Span,
    },

    #[error("`{field}` must not be empty")]
    EmptyText { field: Field, span: Span },

    #[error("pattern identifier must not be empty")]
    EmptyPatternIdentifier { span: Span },

    #[error("invalid pattern argument: {error}")]
    InvalidPatternArgument { error: PatternError, span: Span },

    #[error("pattern argument out of range: {error}")]
    PatternArgumentOutOfRange { error: PatternError, span: Span },

    #[error("{error}")]
    InvalidColor { error: ColorError, span: Span },
}

impl SemanticError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SemanticError::Duplicate { .. } => ErrorCode::E200,
            SemanticError::MissingFields { .. } => ErrorCode::E201,
            SemanticError::OutOfRange { .. } => ErrorCode::E202,
            SemanticError::EmptyText { .. } => ErrorCode::E203,
            SemanticError::EmptyPatternIdentifier { .. } => ErrorCode::E204,
            SemanticError::InvalidPatternArgument { .. } => ErrorCode::E205,
            SemanticError::PatternArgumentOutOfRange { .. } => ErrorCode::E206,
            SemanticError::InvalidColor { .. } => ErrorCode::E207,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            SemanticError::Duplicate { span, .. }
            | SemanticError::MissingFields { span, .. }
            | SemanticError::OutOfRange { span, .. }
            | SemanticError::EmptyText { span, .. }
            | SemanticError::EmptyPatternIdentifier { span }
            | SemanticError::InvalidPatternArgument { span, .. }
            | SemanticError::PatternArgumentOutOfRange { span, .. }
            | SemanticError::InvalidColor { span, .. } => *span,
        }
    }

    pub fn diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.to_string())
            .with_code(self.code())
            .with_label(self.span(), self.code().description());

        match self {
            SemanticError::Duplicate { first, .. } => diagnostic
                .with_secondary_label(*first, "first declared here")
                .with_help("each field may be declared once"),
            SemanticError::MissingFields { .. } => {
                diagnostic.with_help("declare `primary`, `secondary` and `tertiary` colors")
            }
            SemanticError::EmptyText { .. } => {
                diagnostic.with_help("remove the declaration to use the default")
            }
            _ => diagnostic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_has_secondary_label() {
        let err = SemanticError::Duplicate {
            field: Field::Team,
            span: Span::new(40..55),
            first: Span::new(10..25),
        };
        assert_eq!(err.to_string(), "duplicate declaration of `team`");

        let diag = err.diagnostic();
        assert_eq!(diag.code(), Some(ErrorCode::E200));
        assert_eq!(diag.labels().len(), 2);
        assert_eq!(diag.labels()[1].span(), Span::new(10..25));
    }

    #[test]
    fn test_missing_fields_message() {
        let err = SemanticError::MissingFields {
            missing: FieldList(vec![Field::Secondary, Field::Tertiary]),
            span: Span::new(0..30),
        };
        assert_eq!(
            err.to_string(),
            "missing required field(s): `secondary`, `tertiary`"
        );
    }
}
