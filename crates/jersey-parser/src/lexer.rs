//! Lexical analyzer for jersey source text.
//!
//! The lexer converts source text into [`Token`]s for the parser. Whitespace
//! and both comment styles are skipped between tokens. Literal families start
//! with distinct characters, so the first rule that matches wins and a rule
//! that has seen its leading character commits with `cut_err`.
//!
//! The public entry point is [`tokenize`], which stops at the first error.

use log::{debug, trace};
use winnow::{
    Parser as _,
    combinator::{alt, cut_err, not, peek, preceded, repeat, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location},
    token::{none_of, one_of, take_until, take_while},
};

use crate::{
    error::{LexError, LexErrorKind},
    span::{LineIndex, Span},
    tokens::{Token, TokenKind},
};

/// Error context attached by rules that have committed to a token.
///
/// `start` is the byte offset of the character the error is reported at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LexerDiagnostic {
    kind: LexErrorKind,
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError<LexerDiagnostic>>;

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn whitespace(input: &mut Input<'_>) -> IResult<()> {
    take_while(1.., [' ', '\t', '\r', '\n'])
        .void()
        .parse_next(input)
}

fn line_comment(input: &mut Input<'_>) -> IResult<()> {
    preceded("//", take_while(0.., |c: char| c != '\n'))
        .void()
        .parse_next(input)
}

fn block_comment(input: &mut Input<'_>) -> IResult<()> {
    let start = input.current_token_start();

    preceded(
        "/*",
        cut_err(terminated(take_until(0.., "*/"), "*/")).context(LexerDiagnostic {
            kind: LexErrorKind::UnterminatedComment,
            start,
        }),
    )
    .void()
    .parse_next(input)
}

/// Skip any run of whitespace and comments.
fn trivia(input: &mut Input<'_>) -> IResult<()> {
    repeat(0.., alt((whitespace, line_comment, block_comment))).parse_next(input)
}

fn symbol(input: &mut Input<'_>) -> IResult<TokenKind> {
    alt((
        '{'.value(TokenKind::LeftBrace),
        '}'.value(TokenKind::RightBrace),
        '('.value(TokenKind::LeftParen),
        ')'.value(TokenKind::RightParen),
        ';'.value(TokenKind::Semicolon),
        ':'.value(TokenKind::Colon),
        ','.value(TokenKind::Comma),
    ))
    .parse_next(input)
}

/// Parse an escape sequence after checking that it is one of the four
/// supported ones. Decoding happens in the parser.
fn string_escape(input: &mut Input<'_>) -> IResult<()> {
    let start = input.current_token_start();

    preceded('\\', cut_err(one_of(['"', 'n', 't', '\\'])))
        .void()
        .context(LexerDiagnostic {
            kind: LexErrorKind::InvalidEscape,
            start,
        })
        .parse_next(input)
}

fn string_content(input: &mut Input<'_>) -> IResult<()> {
    repeat(
        0..,
        alt((string_escape, none_of(['"', '\\', '\n']).void())),
    )
    .parse_next(input)
}

fn string_literal(input: &mut Input<'_>) -> IResult<TokenKind> {
    let start = input.current_token_start();

    '"'.parse_next(input)?;
    cut_err(terminated(string_content, '"'))
        .context(LexerDiagnostic {
            kind: LexErrorKind::UnterminatedString,
            start,
        })
        .parse_next(input)?;

    Ok(TokenKind::String)
}

/// Parse `#` followed by exactly 3 or 6 hex digits.
///
/// The whole identifier-like run after `#` is checked so that `#abcd` or
/// `#fffx` are rejected instead of splitting into two tokens.
fn color_literal(input: &mut Input<'_>) -> IResult<TokenKind> {
    let start = input.current_token_start();

    '#'.parse_next(input)?;
    cut_err(take_while(0.., is_ident_char).verify(|digits: &str| {
        matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
    }))
    .context(LexerDiagnostic {
        kind: LexErrorKind::InvalidColor,
        start,
    })
    .void()
    .parse_next(input)?;

    Ok(TokenKind::Color)
}

/// Parse an unsigned integer of 1 to 9 digits.
fn integer_literal(input: &mut Input<'_>) -> IResult<TokenKind> {
    let start = input.current_token_start();

    take_while(1..=9, |c: char| c.is_ascii_digit()).parse_next(input)?;
    // A tenth digit or a letter directly after the number is an error.
    cut_err(peek(not(one_of(is_ident_char))))
        .context(LexerDiagnostic {
            kind: LexErrorKind::InvalidInteger,
            start,
        })
        .parse_next(input)?;

    Ok(TokenKind::Int)
}

/// Parse an identifier and classify it through the keyword table.
fn identifier(input: &mut Input<'_>) -> IResult<TokenKind> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., is_ident_char),
    )
        .take()
        .map(|word: &str| TokenKind::keyword(word).unwrap_or(TokenKind::Ident))
        .parse_next(input)
}

fn token_kind(input: &mut Input<'_>) -> IResult<TokenKind> {
    alt((
        symbol,
        string_literal,
        color_literal,
        integer_literal,
        identifier,
    ))
    .parse_next(input)
}

/// Convert a winnow error into a [`LexError`].
///
/// Committed rules carry a [`LexerDiagnostic`] naming the error kind and the
/// character to report. Without one, nothing matched at `error_pos`.
fn convert_err_mode(
    err: ErrMode<ContextError<LexerDiagnostic>>,
    error_pos: usize,
    source: &str,
    index: &LineIndex<'_>,
) -> LexError {
    let context_error = match err {
        ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
        ErrMode::Incomplete(_) => ContextError::new(),
    };

    let (kind, start) = context_error
        .context()
        .next()
        .map_or((LexErrorKind::UnexpectedCharacter, error_pos), |diag| {
            (diag.kind, diag.start)
        });

    let character = source
        .get(start..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or('\0');
    let end = error_pos
        .max(start + character.len_utf8())
        .min(source.len());

    LexError::new(kind, character, index.position(start), Span::new(start..end))
}

/// Tokenize source text.
///
/// The returned tokens always end with an [`TokenKind::Eof`] token positioned
/// at the end of the source, also for empty input.
///
/// # Errors
///
/// Returns the first [`LexError`] encountered.
///
/// # Example
///
/// ```
/// # use jersey_parser::{tokenize, tokens::TokenKind};
/// let tokens = tokenize("jersey { number: 7; }").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Jersey,
///         TokenKind::LeftBrace,
///         TokenKind::Number,
///         TokenKind::Colon,
///         TokenKind::Int,
///         TokenKind::Semicolon,
///         TokenKind::RightBrace,
///         TokenKind::Eof,
///     ]
/// );
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let index = LineIndex::new(source);
    let mut input = LocatingSlice::new(source);
    let mut tokens = Vec::new();

    loop {
        if let Err(err) = trivia.parse_next(&mut input) {
            return Err(convert_err_mode(
                err,
                input.current_token_start(),
                source,
                &index,
            ));
        }
        if input.is_empty() {
            break;
        }

        let start = input.current_token_start();
        let kind = match token_kind.parse_next(&mut input) {
            Ok(kind) => kind,
            Err(err) => {
                return Err(convert_err_mode(
                    err,
                    input.current_token_start(),
                    source,
                    &index,
                ));
            }
        };
        let end = input.current_token_start();

        let token = Token::new(
            kind,
            source.get(start..end).unwrap_or_default(),
            index.position(start),
            Span::new(start..end),
        );
        trace!(token:?; "Lexed token");
        tokens.push(token);
    }

    let end = source.len();
    tokens.push(Token::new(
        TokenKind::Eof,
        "",
        index.position(end),
        Span::new(end..end),
    ));
    debug!(token_count = tokens.len(); "Tokenized source");

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .expect("source should tokenize")
            .iter()
            .map(|token| token.kind)
            .collect()
    }

    fn lex_error(source: &str) -> LexError {
        tokenize(source).expect_err("source should fail to tokenize")
    }

    #[test]
    fn test_empty_input_yields_eof() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("jersey team primary secondary tertiary pattern_color number"),
            [
                TokenKind::Jersey,
                TokenKind::Team,
                TokenKind::Primary,
                TokenKind::Secondary,
                TokenKind::Tertiary,
                TokenKind::PatternColor,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("player sponsor font player_size number_size team_size sponsor_size pattern"),
            [
                TokenKind::Player,
                TokenKind::Sponsor,
                TokenKind::Font,
                TokenKind::PlayerSize,
                TokenKind::NumberSize,
                TokenKind::TeamSize,
                TokenKind::SponsorSize,
                TokenKind::Pattern,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keyword_prefixes_are_identifiers() {
        assert_eq!(
            kinds("teams _team Team stripes"),
            [
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_symbols() {
        assert_eq!(
            kinds("{}();:,"),
            [
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Semicolon,
                TokenKind::Colon,
                TokenKind::Comma,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_literals_keep_raw_lexemes() {
        let tokens = tokenize(r#""a \"b\"" #abc #A1B2C3 123456789"#).unwrap();
        let lexemes: Vec<_> = tokens.iter().map(|t| (t.kind, t.lexeme)).collect();
        assert_eq!(
            lexemes,
            [
                (TokenKind::String, r#""a \"b\"""#),
                (TokenKind::Color, "#abc"),
                (TokenKind::Color, "#A1B2C3"),
                (TokenKind::Int, "123456789"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        let source = "// heading\njersey /* inline\n spanning */ { } // trailing";
        assert_eq!(
            kinds(source),
            [
                TokenKind::Jersey,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_line_and_column_tracking() {
        let source = "jersey {\n  team: \"FC\";\n/* a\nb */ }";
        let tokens = tokenize(source).unwrap();

        let positions: Vec<_> = tokens.iter().map(|t| (t.line, t.column)).collect();
        assert_eq!(
            positions,
            [(1, 1), (1, 8), (2, 3), (2, 7), (2, 9), (2, 13), (4, 6), (4, 7)]
        );
    }

    #[test]
    fn test_unexpected_character() {
        let err = lex_error("jersey {\n  team @ }");
        assert_eq!(err.kind(), LexErrorKind::UnexpectedCharacter);
        assert_eq!(err.character(), '@');
        assert_eq!(err.position(), Position { line: 2, column: 8 });
        assert_eq!(err.span(), Span::new(16..17));
    }

    #[test]
    fn test_lone_slash_is_unexpected() {
        let err = lex_error("a / b");
        assert_eq!(err.kind(), LexErrorKind::UnexpectedCharacter);
        assert_eq!(err.character(), '/');
    }

    #[test]
    fn test_unterminated_string() {
        let err = lex_error("team: \"Rovers");
        assert_eq!(err.kind(), LexErrorKind::UnterminatedString);
        assert_eq!(err.character(), '"');
        assert_eq!(err.position(), Position { line: 1, column: 7 });

        let err = lex_error("team: \"Rov\ners\";");
        assert_eq!(err.kind(), LexErrorKind::UnterminatedString);
    }

    #[test]
    fn test_invalid_escape() {
        let err = lex_error(r#"team: "a\qb";"#);
        assert_eq!(err.kind(), LexErrorKind::InvalidEscape);
        assert_eq!(err.character(), '\\');
        assert_eq!(err.position(), Position { line: 1, column: 9 });
    }

    #[test]
    fn test_invalid_color() {
        for source in ["#ff", "#ffff", "#ggg", "#fffx", "#", "#1234567"] {
            let err = lex_error(source);
            assert_eq!(err.kind(), LexErrorKind::InvalidColor, "{source}");
            assert_eq!(err.character(), '#');
        }
    }

    #[test]
    fn test_invalid_integer() {
        let err = lex_error("number: 1234567890;");
        assert_eq!(err.kind(), LexErrorKind::InvalidInteger);
        assert_eq!(err.character(), '1');

        let err = lex_error("number: 7a;");
        assert_eq!(err.kind(), LexErrorKind::InvalidInteger);
    }

    #[test]
    fn test_unterminated_comment() {
        let err = lex_error("jersey { /* never closed");
        assert_eq!(err.kind(), LexErrorKind::UnterminatedComment);
        assert_eq!(err.character(), '/');
        assert_eq!(err.position(), Position { line: 1, column: 10 });
    }
}
