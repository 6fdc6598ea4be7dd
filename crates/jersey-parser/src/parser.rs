//! Parser for jersey source tokens.
//!
//! This module transforms the token stream from the [`lexer`](super::lexer)
//! into the AST defined in [`parser_types`](super::parser_types). The grammar
//! is LL(1): every production is selected by its first token, so the parser
//! never backtracks and the first mismatch is reported as is. The public
//! entry point is [`parse`].

use log::{debug, trace};
use winnow::{
    Parser as _,
    error::{ContextError, ErrMode},
    stream::{Stream, TokenSlice},
    token::any,
};

use jersey_core::spec::{ColorRole, Field};

use crate::{
    error::ParseError,
    parser_types::{Argument, Program, Statement},
    span::{Position, Span, Spanned},
    tokens::{Token, TokenKind},
};

/// Context type for parser errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Context {
    /// Description of the construct expected at the failing token
    Expected(&'static str),
    /// The integer token at the failure point does not fit in `u32`
    IntegerRange,
}

type Input<'src> = TokenSlice<'src, Token<'src>>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError<Context>>>;

/// Consume one token of `kind`, or fail at the current token.
fn expect<'src>(
    input: &mut Input<'src>,
    kind: TokenKind,
    expected: &'static str,
) -> IResult<&'src Token<'src>> {
    any.verify(|token: &Token<'_>| token.kind == kind)
        .context(Context::Expected(expected))
        .parse_next(input)
}

fn next_is(input: &Input<'_>, kind: TokenKind) -> bool {
    input.peek_token().is_some_and(|token| token.kind == kind)
}

/// Decode a string lexeme: strip the quotes and resolve escapes.
///
/// The lexer only lets `\"`, `\n`, `\t` and `\\` through; any other escape is
/// kept as written.
pub(crate) fn unquote(lexeme: &str) -> String {
    let inner = lexeme
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(lexeme);

    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some('"') => value.push('"'),
            Some('\\') => value.push('\\'),
            Some(other) => {
                value.push('\\');
                value.push(other);
            }
            None => value.push('\\'),
        }
    }
    value
}

fn string_value<'src>(input: &mut Input<'src>) -> IResult<Spanned<String>> {
    let token = expect(input, TokenKind::String, "string")?;
    Ok(Spanned::new(unquote(token.lexeme), token.span))
}

fn color_value<'src>(input: &mut Input<'src>) -> IResult<Spanned<String>> {
    let token = expect(input, TokenKind::Color, "color")?;
    Ok(Spanned::new(token.lexeme.to_string(), token.span))
}

/// Convert an `INT` token's lexeme.
fn integer_token(token: &Token<'_>) -> IResult<u32> {
    token.lexeme.parse::<u32>().map_err(|_| {
        let mut err = ContextError::new();
        err.push(Context::IntegerRange);
        ErrMode::Cut(err)
    })
}

/// Parse an `INT` value, leaving the input at the token on overflow.
fn integer_value<'src>(input: &mut Input<'src>) -> IResult<Spanned<u32>> {
    let checkpoint = input.checkpoint();
    let token = expect(input, TokenKind::Int, "integer")?;
    match integer_token(token) {
        Ok(value) => Ok(Spanned::new(value, token.span)),
        Err(err) => {
            input.reset(&checkpoint);
            Err(err)
        }
    }
}

fn argument<'src>(input: &mut Input<'src>) -> IResult<Spanned<Argument>> {
    let checkpoint = input.checkpoint();
    let token = any
        .verify(|token: &Token<'_>| {
            matches!(
                token.kind,
                TokenKind::Int | TokenKind::Color | TokenKind::String
            )
        })
        .context(Context::Expected("an integer, color or string argument"))
        .parse_next(input)?;

    let argument = match token.kind {
        TokenKind::Int => match integer_token(token) {
            Ok(value) => Argument::Int(value),
            Err(err) => {
                input.reset(&checkpoint);
                return Err(err);
            }
        },
        TokenKind::Color => Argument::Color(token.lexeme.to_string()),
        _ => Argument::Text(unquote(token.lexeme)),
    };

    Ok(Spanned::new(argument, token.span))
}

/// Parse the argument list after `(`, through the closing `)`.
fn arguments<'src>(input: &mut Input<'src>) -> IResult<Vec<Spanned<Argument>>> {
    let mut args = Vec::new();
    if next_is(input, TokenKind::RightParen) {
        input.next_token();
        return Ok(args);
    }

    loop {
        args.push(argument(input)?);

        let separator = any
            .verify(|token: &Token<'_>| {
                matches!(token.kind, TokenKind::Comma | TokenKind::RightParen)
            })
            .context(Context::Expected("`,` or `)`"))
            .parse_next(input)?;
        if separator.kind == TokenKind::RightParen {
            return Ok(args);
        }
    }
}

fn pattern_value<'src>(
    input: &mut Input<'src>,
) -> IResult<(Spanned<String>, Vec<Spanned<Argument>>)> {
    let name = expect(input, TokenKind::Ident, "pattern name")?;
    let name = Spanned::new(name.lexeme.to_string(), name.span);

    let args = if next_is(input, TokenKind::LeftParen) {
        input.next_token();
        arguments(input)?
    } else {
        Vec::new()
    };

    Ok((name, args))
}

fn declaration_field(kind: TokenKind) -> Option<Field> {
    let field = match kind {
        TokenKind::Team => Field::Team,
        TokenKind::Primary => Field::Primary,
        TokenKind::Secondary => Field::Secondary,
        TokenKind::Tertiary => Field::Tertiary,
        TokenKind::PatternColor => Field::PatternColor,
        TokenKind::Number => Field::Number,
        TokenKind::Player => Field::Player,
        TokenKind::Sponsor => Field::Sponsor,
        TokenKind::Font => Field::Font,
        TokenKind::PlayerSize => Field::PlayerSize,
        TokenKind::NumberSize => Field::NumberSize,
        TokenKind::TeamSize => Field::TeamSize,
        TokenKind::SponsorSize => Field::SponsorSize,
        TokenKind::Pattern => Field::Pattern,
        _ => return None,
    };
    Some(field)
}

/// Parse one `KEYWORD ':' VALUE ';'` declaration.
fn statement<'src>(input: &mut Input<'src>) -> IResult<Spanned<Statement>> {
    let (field, start) = any
        .verify_map(|token: &Token<'_>| declaration_field(token.kind).map(|f| (f, token.span)))
        .context(Context::Expected("a declaration keyword or `}`"))
        .parse_next(input)?;
    expect(input, TokenKind::Colon, "`:`")?;

    let color = |role: ColorRole, input: &mut Input<'src>| -> IResult<Statement> {
        Ok(Statement::Color {
            role,
            value: color_value(input)?,
        })
    };

    let statement = match field {
        Field::Team => Statement::Team(string_value(input)?),
        Field::Player => Statement::Player(string_value(input)?),
        Field::Sponsor => Statement::Sponsor(string_value(input)?),
        Field::Font => Statement::Font(string_value(input)?),
        Field::Primary => color(ColorRole::Primary, input)?,
        Field::Secondary => color(ColorRole::Secondary, input)?,
        Field::Tertiary => color(ColorRole::Tertiary, input)?,
        Field::PatternColor => color(ColorRole::PatternColor, input)?,
        Field::Number => Statement::Number(integer_value(input)?),
        Field::PlayerSize => Statement::PlayerSize(integer_value(input)?),
        Field::NumberSize => Statement::NumberSize(integer_value(input)?),
        Field::TeamSize => Statement::TeamSize(integer_value(input)?),
        Field::SponsorSize => Statement::SponsorSize(integer_value(input)?),
        Field::Pattern => {
            let (name, args) = pattern_value(input)?;
            Statement::Pattern { name, args }
        }
    };

    let end = expect(input, TokenKind::Semicolon, "`;`")?;
    trace!(statement:?; "Parsed statement");

    Ok(Spanned::new(statement, start.union(end.span)))
}

/// Parse declarations until `}` or the end of input.
fn statements<'src>(input: &mut Input<'src>) -> IResult<Vec<Spanned<Statement>>> {
    let mut statements = Vec::new();
    while !(next_is(input, TokenKind::RightBrace)
        || next_is(input, TokenKind::Eof)
        || input.peek_token().is_none())
    {
        statements.push(statement(input)?);
    }
    Ok(statements)
}

fn program<'src>(input: &mut Input<'src>) -> IResult<Program> {
    let start = expect(input, TokenKind::Jersey, "`jersey`")?;
    expect(input, TokenKind::LeftBrace, "`{`")?;
    let statements = statements(input)?;
    let end = expect(input, TokenKind::RightBrace, "`}`")?;

    Ok(Program {
        statements,
        span: start.span.union(end.span),
    })
}

/// Position and span reported when the token list has no token left.
fn end_of(tokens: &[Token<'_>]) -> (Position, Span) {
    tokens.last().map_or(
        (Position { line: 1, column: 1 }, Span::default()),
        |token| (token.position(), Span::new(token.span.end()..token.span.end())),
    )
}

/// Convert a winnow error into a [`ParseError`] at the current token.
fn convert_error(
    error: ErrMode<ContextError<Context>>,
    input: &Input<'_>,
    tokens: &[Token<'_>],
) -> ParseError {
    let context = match &error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e.context().next().cloned(),
        ErrMode::Incomplete(_) => None,
    };
    let expected = match &context {
        Some(Context::Expected(expected)) => *expected,
        Some(Context::IntegerRange) | None => "a token",
    };

    match (context, input.peek_token()) {
        (Some(Context::IntegerRange), Some(token)) => ParseError::IntegerOutOfRange {
            lexeme: token.lexeme.to_string(),
            position: token.position(),
            span: token.span,
        },
        (_, Some(token)) if token.kind != TokenKind::Eof => ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: token.kind,
            position: token.position(),
            span: token.span,
        },
        (_, Some(eof)) => ParseError::UnexpectedEof {
            expected: expected.to_string(),
            position: eof.position(),
            span: eof.span,
        },
        (_, None) => {
            let (position, span) = end_of(tokens);
            ParseError::UnexpectedEof {
                expected: expected.to_string(),
                position,
                span,
            }
        }
    }
}

/// Parse a token list into a [`Program`].
///
/// The tokens are expected to end with an [`TokenKind::Eof`] token, as
/// produced by [`tokenize`](crate::tokenize). A missing `EOF` is treated as
/// the end of input.
///
/// # Errors
///
/// Returns the first [`ParseError`]. Nothing after the closing `}` but `EOF`
/// is accepted.
pub fn parse<'src>(tokens: &'src [Token<'src>]) -> Result<Program, ParseError> {
    let mut input = TokenSlice::new(tokens);

    let program = program(&mut input).map_err(|err| convert_error(err, &input, tokens))?;

    if let Some(token) = input.peek_token() {
        if token.kind != TokenKind::Eof {
            return Err(ParseError::TrailingInput {
                found: token.kind,
                position: token.position(),
                span: token.span,
            });
        }
    }

    debug!(statement_count = program.statements.len(); "Parsed jersey block");
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn test_unquote() {
        assert_eq!(unquote(r#""plain""#), "plain");
        assert_eq!(unquote(r#""""#), "");
        assert_eq!(unquote(r#""a\"b""#), "a\"b");
        assert_eq!(unquote(r#""line\nnext\ttab""#), "line\nnext\ttab");
        assert_eq!(unquote(r#""back\\slash""#), "back\\slash");
        assert_eq!(unquote(r#""keep\q""#), "keep\\q");
    }

    #[test]
    fn test_expect_leaves_input_at_mismatch() {
        let tokens = tokenize("team : ;").unwrap();
        let mut input = TokenSlice::new(&tokens);

        assert!(expect(&mut input, TokenKind::Team, "`team`").is_ok());
        assert!(expect(&mut input, TokenKind::Semicolon, "`;`").is_err());
        assert_eq!(
            input.peek_token().map(|token| token.kind),
            Some(TokenKind::Colon)
        );
    }

    #[test]
    fn test_statement_span_covers_keyword_to_semicolon() {
        let tokens = tokenize("number: 7;").unwrap();
        let mut input = TokenSlice::new(&tokens);

        let statement = statement(&mut input).unwrap();
        assert_eq!(statement.span(), Span::new(0..10));
        assert!(matches!(statement.inner(), Statement::Number(n) if *n.inner() == 7));
    }

    #[test]
    fn test_integer_overflow_is_reported_at_token() {
        let tokens = [
            Token::new(
                TokenKind::Int,
                "99999999999",
                Position { line: 1, column: 9 },
                Span::new(8..19),
            ),
            Token::new(
                TokenKind::Eof,
                "",
                Position { line: 1, column: 20 },
                Span::new(19..19),
            ),
        ];
        let mut input = TokenSlice::new(&tokens);

        let err = integer_value(&mut input).unwrap_err();
        let err = convert_error(err, &input, &tokens);
        assert!(matches!(err, ParseError::IntegerOutOfRange { ref lexeme, .. } if lexeme == "99999999999"));
    }
}
