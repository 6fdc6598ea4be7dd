//! The diagnostic record every pipeline error converts into.
//!
//! A [`Diagnostic`] carries an error code, labeled source spans and optional
//! help text. Front ends render it with source snippets.

use std::fmt;

use crate::{
    error::{error_code::ErrorCode, label::Label},
    span::Span,
};

/// A rich error message with source location information.
///
/// # Example
///
/// ```text
/// error[E200]: duplicate declaration of `team`
///   --> design.jersey:4:5
///    |
///  4 |     team: "Rovers";
///    |     ^^^^^^^^^^^^^^^ duplicate declaration
///    |
///  2 |     team: "United";
///    |     --------------- first declared here
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use jersey_parser::error::{Diagnostic, ErrorCode};
    /// # use jersey_parser::Span;
    ///
    /// let diag = Diagnostic::error("missing required field(s): `primary`")
    ///     .with_code(ErrorCode::E201)
    ///     .with_label(Span::new(0..10), "declared in this block")
    ///     .with_help("add `primary: #RRGGBB;`");
    /// assert_eq!(diag.to_string(), "error[E201]: missing required field(s): `primary`");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message" or "error: message"
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::error("test error");

        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::error("duplicate declaration of `team`")
            .with_code(ErrorCode::E200)
            .with_label(Span::new(40..55), "duplicate declaration")
            .with_secondary_label(Span::new(10..25), "first declared here")
            .with_help("remove one of the declarations");

        assert_eq!(diag.code(), Some(ErrorCode::E200));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
        assert_eq!(diag.help(), Some("remove one of the declarations"));
    }

    #[test]
    fn test_diagnostic_display() {
        let with_code = Diagnostic::error("unexpected character").with_code(ErrorCode::E001);
        assert_eq!(with_code.to_string(), "error[E001]: unexpected character");

        let without_code = Diagnostic::error("something failed");
        assert_eq!(without_code.to_string(), "error: something failed");
    }
}
