//! Semantic validation of a parsed jersey block.
//!
//! Statements are applied in source order to a [`JerseySpecBuilder`], which
//! checks each value as it is set. A field may be declared once; the first
//! declaration is remembered so a duplicate can point back at it. Required
//! fields and defaults are handled by [`JerseySpecBuilder::build`].

use std::collections::HashMap;

use log::{debug, warn};

use jersey_core::{
    color::HexColor,
    pattern::{Pattern, PatternArg, PatternError},
    spec::{Field, JerseySpec, JerseySpecBuilder, SizeField, SpecError},
};

use crate::{
    error::SemanticError,
    parser_types::{Argument, Program, Statement},
    span::{Span, Spanned},
};

/// Attach a span to a builder error.
fn spec_error(err: SpecError, span: Span) -> SemanticError {
    match err {
        SpecError::MissingFields { missing } => SemanticError::MissingFields { missing, span },
        SpecError::OutOfRange {
            field,
            value,
            min,
            max,
        } => SemanticError::OutOfRange {
            field,
            value,
            min,
            max,
            span,
        },
        SpecError::EmptyText { field } => SemanticError::EmptyText { field, span },
        SpecError::Pattern(error) => pattern_error(error, span),
    }
}

fn pattern_error(error: PatternError, span: Span) -> SemanticError {
    match error {
        PatternError::EmptyIdentifier => SemanticError::EmptyPatternIdentifier { span },
        PatternError::TooManyArguments { .. } | PatternError::NotAnInteger { .. } => {
            SemanticError::InvalidPatternArgument { error, span }
        }
        PatternError::OutOfRange { .. } => {
            SemanticError::PatternArgumentOutOfRange { error, span }
        }
    }
}

fn color(value: &Spanned<String>) -> Result<HexColor, SemanticError> {
    HexColor::parse(value.inner()).map_err(|error| SemanticError::InvalidColor {
        error,
        span: value.span(),
    })
}

fn pattern(
    name: &Spanned<String>,
    args: &[Spanned<Argument>],
) -> Result<Pattern, SemanticError> {
    let values = args
        .iter()
        .map(|arg| match arg.inner() {
            Argument::Int(value) => Ok(PatternArg::Int(*value)),
            Argument::Color(value) => HexColor::parse(value)
                .map(PatternArg::Color)
                .map_err(|error| SemanticError::InvalidColor {
                    error,
                    span: arg.span(),
                }),
            Argument::Text(text) => Ok(PatternArg::Text(text.clone())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let pattern = Pattern::new(name.inner(), values).map_err(|error| {
        // Point at the offending argument when there is one.
        let span = error
            .argument_index()
            .and_then(|index| args.get(index))
            .map_or(name.span(), Spanned::span);
        pattern_error(error, span)
    })?;

    if pattern.kind().is_none() {
        warn!(pattern = pattern.identifier(); "Unknown pattern, no pattern geometry will be rendered");
    }

    Ok(pattern)
}

/// Apply one statement to the builder.
fn apply(builder: &mut JerseySpecBuilder, statement: &Statement) -> Result<(), SemanticError> {
    match statement {
        Statement::Team(name) => builder
            .set_team(name.inner())
            .map_err(|err| spec_error(err, name.span())),
        Statement::Player(name) => builder
            .set_player(name.inner())
            .map_err(|err| spec_error(err, name.span())),
        Statement::Sponsor(name) => {
            builder.set_sponsor(name.inner());
            Ok(())
        }
        Statement::Font(name) => {
            builder.set_font(name.inner());
            Ok(())
        }
        Statement::Color { role, value } => {
            builder.set_color(*role, color(value)?);
            Ok(())
        }
        Statement::Number(number) => builder
            .set_number(*number.inner())
            .map_err(|err| spec_error(err, number.span())),
        Statement::PlayerSize(size) => set_size(builder, SizeField::Player, size),
        Statement::NumberSize(size) => set_size(builder, SizeField::Number, size),
        Statement::TeamSize(size) => set_size(builder, SizeField::Team, size),
        Statement::SponsorSize(size) => set_size(builder, SizeField::Sponsor, size),
        Statement::Pattern { name, args } => {
            builder.set_pattern(pattern(name, args)?);
            Ok(())
        }
    }
}

fn set_size(
    builder: &mut JerseySpecBuilder,
    field: SizeField,
    size: &Spanned<u32>,
) -> Result<(), SemanticError> {
    builder
        .set_size(field, *size.inner())
        .map_err(|err| spec_error(err, size.span()))
}

/// Validate a parsed program and produce the defaulted [`JerseySpec`].
///
/// # Errors
///
/// Returns the first [`SemanticError`] in source order. Missing required
/// colors are reported after every statement has been checked.
pub fn validate(program: &Program) -> Result<JerseySpec, SemanticError> {
    let mut seen: HashMap<Field, Span> = HashMap::new();
    let mut builder = JerseySpecBuilder::new();

    for statement in &program.statements {
        let field = statement.inner().field();
        if let Some(first) = seen.get(&field) {
            return Err(SemanticError::Duplicate {
                field,
                span: statement.span(),
                first: *first,
            });
        }
        seen.insert(field, statement.span());

        apply(&mut builder, statement.inner())?;
    }

    let spec = builder
        .build()
        .map_err(|err| spec_error(err, program.span))?;
    debug!(declared = seen.len(); "Validated jersey spec");

    Ok(spec)
}
