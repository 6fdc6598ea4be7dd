//! The validated jersey design.
//!
//! [`JerseySpec`] is the canonical, fully defaulted form of a design. It can
//! only be produced through [`JerseySpecBuilder`], which enforces the field
//! constraints as values are set and applies the defaults in
//! [`JerseySpecBuilder::build`].

use std::{fmt, ops::RangeInclusive};

use log::trace;
use thiserror::Error;

use crate::{
    color::HexColor,
    pattern::{Pattern, PatternError},
};

/// Team name used when none is declared.
pub const DEFAULT_TEAM: &str = "Unnamed FC";
/// Player name used when none is declared.
pub const DEFAULT_PLAYER: &str = "PLAYER";
/// Sponsor text used when none is declared.
pub const DEFAULT_SPONSOR: &str = "SJSU";
/// Font family used when none is declared.
pub const DEFAULT_FONT: &str = "Arial";
/// Shirt number used when none is declared.
pub const DEFAULT_NUMBER: u32 = 23;
pub const DEFAULT_PLAYER_SIZE: u32 = 26;
pub const DEFAULT_NUMBER_SIZE: u32 = 75;
pub const DEFAULT_TEAM_SIZE: u32 = 18;
pub const DEFAULT_SPONSOR_SIZE: u32 = 35;

/// Accepted shirt numbers.
pub const NUMBER_RANGE: RangeInclusive<u32> = 0..=99;
/// Accepted font sizes.
pub const SIZE_RANGE: RangeInclusive<u32> = 8..=100;

/// A declarable field of a jersey design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
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
}

impl Field {
    /// The declaration keyword of the field.
    pub fn keyword(self) -> &'static str {
        match self {
            Field::Team => "team",
            Field::Primary => "primary",
            Field::Secondary => "secondary",
            Field::Tertiary => "tertiary",
            Field::PatternColor => "pattern_color",
            Field::Number => "number",
            Field::Player => "player",
            Field::Sponsor => "sponsor",
            Field::Font => "font",
            Field::PlayerSize => "player_size",
            Field::NumberSize => "number_size",
            Field::TeamSize => "team_size",
            Field::SponsorSize => "sponsor_size",
            Field::Pattern => "pattern",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The four color slots of a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Tertiary,
    PatternColor,
}

impl From<ColorRole> for Field {
    fn from(role: ColorRole) -> Self {
        match role {
            ColorRole::Primary => Field::Primary,
            ColorRole::Secondary => Field::Secondary,
            ColorRole::Tertiary => Field::Tertiary,
            ColorRole::PatternColor => Field::PatternColor,
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Field::from(*self).fmt(f)
    }
}

/// The four font size slots of a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeField {
    Player,
    Number,
    Team,
    Sponsor,
}

impl From<SizeField> for Field {
    fn from(size: SizeField) -> Self {
        match size {
            SizeField::Player => Field::PlayerSize,
            SizeField::Number => Field::NumberSize,
            SizeField::Team => Field::TeamSize,
            SizeField::Sponsor => Field::SponsorSize,
        }
    }
}

/// A comma separated list of field keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldList(pub Vec<Field>);

impl fmt::Display for FieldList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, field) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "`{field}`")?;
        }
        Ok(())
    }
}

/// Errors raised while setting or building a [`JerseySpec`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("missing required field(s): {missing}")]
    MissingFields { missing: FieldList },

    #[error("`{field}` must be between {min} and {max}, found {value}")]
    OutOfRange {
        field: Field,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("`{field}` must not be empty")]
    EmptyText { field: Field },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// A validated jersey design with every field populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JerseySpec {
    team: String,
    primary: HexColor,
    secondary: HexColor,
    tertiary: HexColor,
    pattern_color: HexColor,
    number: u32,
    player: String,
    sponsor: String,
    font: String,
    player_size: u32,
    number_size: u32,
    team_size: u32,
    sponsor_size: u32,
    pattern: Option<Pattern>,
}

impl JerseySpec {
    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn primary(&self) -> HexColor {
        self.primary
    }

    pub fn secondary(&self) -> HexColor {
        self.secondary
    }

    pub fn tertiary(&self) -> HexColor {
        self.tertiary
    }

    /// Fill of pattern shapes, white unless declared.
    pub fn pattern_color(&self) -> HexColor {
        self.pattern_color
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    /// Sponsor text. May be empty when declared as such.
    pub fn sponsor(&self) -> &str {
        &self.sponsor
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    pub fn player_size(&self) -> u32 {
        self.player_size
    }

    pub fn number_size(&self) -> u32 {
        self.number_size
    }

    pub fn team_size(&self) -> u32 {
        self.team_size
    }

    pub fn sponsor_size(&self) -> u32 {
        self.sponsor_size
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }
}

/// Collects declared values and produces a [`JerseySpec`].
///
/// Every setter checks its own constraint. Setting a field twice keeps the
/// last value; rejecting duplicates is left to the caller, which knows where
/// each declaration came from.
///
/// # Examples
///
/// ```
/// use jersey_core::{
///     color::HexColor,
///     spec::{ColorRole, JerseySpecBuilder},
/// };
///
/// let mut builder = JerseySpecBuilder::new();
/// builder.set_color(ColorRole::Primary, HexColor::parse("#f00").unwrap());
/// builder.set_color(ColorRole::Secondary, HexColor::parse("#0f0").unwrap());
/// builder.set_color(ColorRole::Tertiary, HexColor::parse("#00f").unwrap());
/// builder.set_number(7).unwrap();
///
/// let spec = builder.build().unwrap();
/// assert_eq!(spec.team(), "Unnamed FC");
/// assert_eq!(spec.number(), 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct JerseySpecBuilder {
    team: Option<String>,
    primary: Option<HexColor>,
    secondary: Option<HexColor>,
    tertiary: Option<HexColor>,
    pattern_color: Option<HexColor>,
    number: Option<u32>,
    player: Option<String>,
    sponsor: Option<String>,
    font: Option<String>,
    player_size: Option<u32>,
    number_size: Option<u32>,
    team_size: Option<u32>,
    sponsor_size: Option<u32>,
    pattern: Option<Pattern>,
}

impl JerseySpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the team name. Surrounding whitespace is removed.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::EmptyText`] if nothing remains after trimming.
    pub fn set_team(&mut self, team: &str) -> Result<(), SpecError> {
        self.team = Some(required_text(Field::Team, team)?);
        Ok(())
    }

    /// Set the player name. Surrounding whitespace is removed.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::EmptyText`] if nothing remains after trimming.
    pub fn set_player(&mut self, player: &str) -> Result<(), SpecError> {
        self.player = Some(required_text(Field::Player, player)?);
        Ok(())
    }

    /// Set the sponsor text. An empty value is kept and suppresses the default.
    pub fn set_sponsor(&mut self, sponsor: &str) {
        self.sponsor = Some(sponsor.trim().to_string());
    }

    pub fn set_font(&mut self, font: &str) {
        self.font = Some(font.trim().to_string());
    }

    pub fn set_color(&mut self, role: ColorRole, color: HexColor) {
        let slot = match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::Tertiary => &mut self.tertiary,
            ColorRole::PatternColor => &mut self.pattern_color,
        };
        *slot = Some(color);
    }

    /// Set the shirt number.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::OutOfRange`] outside [`NUMBER_RANGE`].
    pub fn set_number(&mut self, number: u32) -> Result<(), SpecError> {
        self.number = Some(in_range(Field::Number, number, NUMBER_RANGE)?);
        Ok(())
    }

    /// Set one of the four font sizes.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::OutOfRange`] outside [`SIZE_RANGE`].
    pub fn set_size(&mut self, field: SizeField, size: u32) -> Result<(), SpecError> {
        let slot = match field {
            SizeField::Player => &mut self.player_size,
            SizeField::Number => &mut self.number_size,
            SizeField::Team => &mut self.team_size,
            SizeField::Sponsor => &mut self.sponsor_size,
        };
        *slot = Some(in_range(field.into(), size, SIZE_RANGE)?);
        Ok(())
    }

    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.pattern = Some(pattern);
    }

    /// Check the required colors and fill every other field with its default.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::MissingFields`] naming each of `primary`,
    /// `secondary` and `tertiary` that was never set, in that order.
    pub fn build(&self) -> Result<JerseySpec, SpecError> {
        let missing: Vec<Field> = [
            (Field::Primary, self.primary),
            (Field::Secondary, self.secondary),
            (Field::Tertiary, self.tertiary),
        ]
        .into_iter()
        .filter(|(_, color)| color.is_none())
        .map(|(field, _)| field)
        .collect();

        let (Some(primary), Some(secondary), Some(tertiary)) =
            (self.primary, self.secondary, self.tertiary)
        else {
            return Err(SpecError::MissingFields {
                missing: FieldList(missing),
            });
        };

        let spec = JerseySpec {
            team: self.team.clone().unwrap_or_else(|| DEFAULT_TEAM.to_string()),
            primary,
            secondary,
            tertiary,
            pattern_color: self.pattern_color.unwrap_or(HexColor::WHITE),
            number: self.number.unwrap_or(DEFAULT_NUMBER),
            player: self
                .player
                .clone()
                .unwrap_or_else(|| DEFAULT_PLAYER.to_string()),
            sponsor: self
                .sponsor
                .clone()
                .unwrap_or_else(|| DEFAULT_SPONSOR.to_string()),
            font: self.font.clone().unwrap_or_else(|| DEFAULT_FONT.to_string()),
            player_size: self.player_size.unwrap_or(DEFAULT_PLAYER_SIZE),
            number_size: self.number_size.unwrap_or(DEFAULT_NUMBER_SIZE),
            team_size: self.team_size.unwrap_or(DEFAULT_TEAM_SIZE),
            sponsor_size: self.sponsor_size.unwrap_or(DEFAULT_SPONSOR_SIZE),
            pattern: self.pattern.clone(),
        };
        trace!(spec:?; "Built jersey spec");

        Ok(spec)
    }
}

fn required_text(field: Field, value: &str) -> Result<String, SpecError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SpecError::EmptyText { field });
    }
    Ok(trimmed.to_string())
}

fn in_range(field: Field, value: u32, range: RangeInclusive<u32>) -> Result<u32, SpecError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(SpecError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternArg;

    fn with_required_colors() -> JerseySpecBuilder {
        let mut builder = JerseySpecBuilder::new();
        builder.set_color(ColorRole::Primary, HexColor::from_rgb(0xFF, 0, 0));
        builder.set_color(ColorRole::Secondary, HexColor::from_rgb(0, 0xFF, 0));
        builder.set_color(ColorRole::Tertiary, HexColor::from_rgb(0, 0, 0xFF));
        builder
    }

    #[test]
    fn test_defaults_are_applied() {
        let spec = with_required_colors().build().unwrap();

        assert_eq!(spec.team(), DEFAULT_TEAM);
        assert_eq!(spec.player(), DEFAULT_PLAYER);
        assert_eq!(spec.sponsor(), DEFAULT_SPONSOR);
        assert_eq!(spec.font(), DEFAULT_FONT);
        assert_eq!(spec.number(), DEFAULT_NUMBER);
        assert_eq!(spec.player_size(), 26);
        assert_eq!(spec.number_size(), 75);
        assert_eq!(spec.team_size(), 18);
        assert_eq!(spec.sponsor_size(), 35);
        assert_eq!(spec.pattern_color(), HexColor::WHITE);
        assert!(spec.pattern().is_none());
    }

    #[test]
    fn test_defaults_never_overwrite_declared_values() {
        let mut builder = with_required_colors();
        builder.set_sponsor("   ");
        builder.set_team("  Rovers ").unwrap();
        builder.set_number(0).unwrap();

        let spec = builder.build().unwrap();
        assert_eq!(spec.sponsor(), "");
        assert_eq!(spec.team(), "Rovers");
        assert_eq!(spec.number(), 0);
    }

    #[test]
    fn test_missing_fields_are_listed_in_order() {
        let mut builder = JerseySpecBuilder::new();
        builder.set_color(ColorRole::Secondary, HexColor::WHITE);

        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            SpecError::MissingFields {
                missing: FieldList(vec![Field::Primary, Field::Tertiary])
            }
        );
        assert_eq!(
            err.to_string(),
            "missing required field(s): `primary`, `tertiary`"
        );
    }

    #[test]
    fn test_number_range() {
        let mut builder = JerseySpecBuilder::new();
        assert!(builder.set_number(99).is_ok());
        assert_eq!(
            builder.set_number(100),
            Err(SpecError::OutOfRange {
                field: Field::Number,
                value: 100,
                min: 0,
                max: 99
            })
        );
    }

    #[test]
    fn test_size_range() {
        let mut builder = JerseySpecBuilder::new();
        assert!(builder.set_size(SizeField::Player, 8).is_ok());
        assert!(builder.set_size(SizeField::Sponsor, 100).is_ok());
        assert!(builder.set_size(SizeField::Player, 7).is_err());
        assert_eq!(
            builder.set_size(SizeField::Team, 101),
            Err(SpecError::OutOfRange {
                field: Field::TeamSize,
                value: 101,
                min: 8,
                max: 100
            })
        );
    }

    #[test]
    fn test_each_size_fills_its_own_slot() {
        let mut builder = with_required_colors();
        builder.set_size(SizeField::Player, 10).unwrap();
        builder.set_size(SizeField::Number, 11).unwrap();
        builder.set_size(SizeField::Team, 12).unwrap();
        builder.set_size(SizeField::Sponsor, 13).unwrap();

        let spec = builder.build().unwrap();
        assert_eq!(
            (
                spec.player_size(),
                spec.number_size(),
                spec.team_size(),
                spec.sponsor_size()
            ),
            (10, 11, 12, 13)
        );
    }

    #[test]
    fn test_required_text_must_not_be_blank() {
        let mut builder = JerseySpecBuilder::new();
        assert_eq!(
            builder.set_team(" \t "),
            Err(SpecError::EmptyText { field: Field::Team })
        );
        assert_eq!(
            builder.set_player(""),
            Err(SpecError::EmptyText {
                field: Field::Player
            })
        );
    }

    #[test]
    fn test_pattern_is_kept() {
        let mut builder = with_required_colors();
        builder.set_pattern(Pattern::new("hoops", vec![PatternArg::Int(3)]).unwrap());

        let spec = builder.build().unwrap();
        assert_eq!(spec.pattern().map(Pattern::identifier), Some("hoops"));
    }

    #[test]
    fn test_color_role_keywords() {
        assert_eq!(ColorRole::PatternColor.to_string(), "pattern_color");
        assert_eq!(Field::SponsorSize.to_string(), "sponsor_size");
    }
}
