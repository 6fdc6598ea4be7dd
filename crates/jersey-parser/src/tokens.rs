//! Token definitions for the jersey language.

use std::fmt;

use crate::span::{Position, Span};

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Jersey,
    Team,
    Primary,
    Secondary,
    Tertiary,
    PatternColor,
    Number,
    Player,
    Sponsor,
    Font,
    PlayerSize,
    NumberSize,
    TeamSize,
    SponsorSize,
    Pattern,

    // Literals
    Ident,
    Int,
    Color,
    String,

    // Punctuation
    LeftBrace,  // {
    RightBrace, // }
    LeftParen,  // (
    RightParen, // )
    Semicolon,  // ;
    Colon,      // :
    Comma,      // ,

    Eof,
}

static KEYWORDS: [(&str, TokenKind); 15] = [
    ("jersey", TokenKind::Jersey),
    ("team", TokenKind::Team),
    ("primary", TokenKind::Primary),
    ("secondary", TokenKind::Secondary),
    ("tertiary", TokenKind::Tertiary),
    ("pattern_color", TokenKind::PatternColor),
    ("number", TokenKind::Number),
    ("player", TokenKind::Player),
    ("sponsor", TokenKind::Sponsor),
    ("font", TokenKind::Font),
    ("player_size", TokenKind::PlayerSize),
    ("number_size", TokenKind::NumberSize),
    ("team_size", TokenKind::TeamSize),
    ("sponsor_size", TokenKind::SponsorSize),
    ("pattern", TokenKind::Pattern),
];

impl TokenKind {
    /// Look up the keyword kind for an identifier. Keywords are case sensitive.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        KEYWORDS
            .iter()
            .find(|(keyword, _)| *keyword == word)
            .map(|(_, kind)| *kind)
    }

    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| *kind == self)
    }

    /// Upper-case name used in token listings.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Jersey => "JERSEY",
            TokenKind::Team => "TEAM",
            TokenKind::Primary => "PRIMARY",
            TokenKind::Secondary => "SECONDARY",
            TokenKind::Tertiary => "TERTIARY",
            TokenKind::PatternColor => "PATTERN_COLOR",
            TokenKind::Number => "NUMBER",
            TokenKind::Player => "PLAYER",
            TokenKind::Sponsor => "SPONSOR",
            TokenKind::Font => "FONT",
            TokenKind::PlayerSize => "PLAYER_SIZE",
            TokenKind::NumberSize => "NUMBER_SIZE",
            TokenKind::TeamSize => "TEAM_SIZE",
            TokenKind::SponsorSize => "SPONSOR_SIZE",
            TokenKind::Pattern => "PATTERN",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Color => "COLOR",
            TokenKind::String => "STRING",
            TokenKind::LeftBrace => "LBRACE",
            TokenKind::RightBrace => "RBRACE",
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Eof => "EOF",
        }
    }

    /// Human readable description used in error messages.
    pub fn description(self) -> &'static str {
        match self {
            TokenKind::Jersey => "`jersey`",
            TokenKind::Team => "`team`",
            TokenKind::Primary => "`primary`",
            TokenKind::Secondary => "`secondary`",
            TokenKind::Tertiary => "`tertiary`",
            TokenKind::PatternColor => "`pattern_color`",
            TokenKind::Number => "`number`",
            TokenKind::Player => "`player`",
            TokenKind::Sponsor => "`sponsor`",
            TokenKind::Font => "`font`",
            TokenKind::PlayerSize => "`player_size`",
            TokenKind::NumberSize => "`number_size`",
            TokenKind::TeamSize => "`team_size`",
            TokenKind::SponsorSize => "`sponsor_size`",
            TokenKind::Pattern => "`pattern`",
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::Color => "color",
            TokenKind::String => "string",
            TokenKind::LeftBrace => "`{`",
            TokenKind::RightBrace => "`}`",
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Colon => "`:`",
            TokenKind::Comma => "`,`",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A lexical token with its source text and location.
///
/// `line` and `column` are 1-based; `span` is the byte range of `lexeme`.
/// String lexemes keep their quotes and escapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub line: usize,
    pub column: usize,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str, position: Position, span: Span) -> Self {
        Self {
            kind,
            lexeme,
            line: position.line,
            column: position.column,
            span,
        }
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}\t{}\t{}",
            self.line,
            self.column,
            self.kind.name(),
            self.lexeme
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("jersey"), Some(TokenKind::Jersey));
        assert_eq!(
            TokenKind::keyword("pattern_color"),
            Some(TokenKind::PatternColor)
        );
        assert_eq!(TokenKind::keyword("Team"), None);
        assert_eq!(TokenKind::keyword("stripes"), None);
    }

    #[test]
    fn test_keyword_kinds() {
        assert!(TokenKind::SponsorSize.is_keyword());
        assert!(!TokenKind::Ident.is_keyword());
        assert!(!TokenKind::Eof.is_keyword());
    }

    #[test]
    fn test_token_listing_format() {
        let token = Token::new(
            TokenKind::Color,
            "#F00",
            Position { line: 2, column: 14 },
            Span::new(20..24),
        );
        assert_eq!(token.to_string(), "2:14\tCOLOR\t#F00");
    }
}
