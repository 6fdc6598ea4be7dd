//! AST produced by the parser.

use jersey_core::spec::{ColorRole, Field};

use crate::span::{Span, Spanned};

/// A parsed `jersey { ... }` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Spanned<Statement>>,
    /// Span from `jersey` to the closing `}`.
    pub span: Span,
}

/// One declaration inside the jersey block.
///
/// Text values are unquoted and escape-decoded. Color values keep their
/// source spelling; the validator normalizes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Team(Spanned<String>),
    Color {
        role: ColorRole,
        value: Spanned<String>,
    },
    Number(Spanned<u32>),
    Player(Spanned<String>),
    Sponsor(Spanned<String>),
    Font(Spanned<String>),
    PlayerSize(Spanned<u32>),
    NumberSize(Spanned<u32>),
    TeamSize(Spanned<u32>),
    SponsorSize(Spanned<u32>),
    Pattern {
        name: Spanned<String>,
        args: Vec<Spanned<Argument>>,
    },
}

impl Statement {
    /// The field this statement declares.
    pub fn field(&self) -> Field {
        match self {
            Statement::Team(_) => Field::Team,
            Statement::Color { role, .. } => Field::from(*role),
            Statement::Number(_) => Field::Number,
            Statement::Player(_) => Field::Player,
            Statement::Sponsor(_) => Field::Sponsor,
            Statement::Font(_) => Field::Font,
            Statement::PlayerSize(_) => Field::PlayerSize,
            Statement::NumberSize(_) => Field::NumberSize,
            Statement::TeamSize(_) => Field::TeamSize,
            Statement::SponsorSize(_) => Field::SponsorSize,
            Statement::Pattern { .. } => Field::Pattern,
        }
    }
}

/// A pattern argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Int(u32),
    Color(String),
    Text(String),
}
