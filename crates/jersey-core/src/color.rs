//! Hex color handling for jersey designs.
//!
//! This module provides the [`HexColor`] type, the canonical `#RRGGBB` form
//! every color in a validated design is stored in. Parsing accepts the short
//! `#RGB` and the long `#RRGGBB` notations in any letter case and delegates
//! the channel decoding to the `color` crate.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};
use thiserror::Error;

/// Errors produced while parsing a hex color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color `{0}` must start with `#`")]
    MissingHash(String),

    #[error("color `{0}` must have exactly 3 or 6 hex digits")]
    InvalidDigits(String),

    #[error("invalid color `{value}`: {reason}")]
    Unparsable { value: String, reason: String },
}

/// An opaque sRGB color in canonical `#RRGGBB` form.
///
/// # Examples
///
/// ```
/// use jersey_core::color::HexColor;
///
/// let red = HexColor::parse("#f00").unwrap();
/// assert_eq!(red.to_string(), "#FF0000");
/// assert_eq!(red, HexColor::parse("#FF0000").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl HexColor {
    /// Pure white, the fill used for pattern shapes when no pattern color is declared.
    pub const WHITE: Self = Self::from_rgb(0xFF, 0xFF, 0xFF);

    /// Create a color from its channel values.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse a `#RGB` or `#RRGGBB` literal.
    ///
    /// Short literals double each nibble, so `#abc` is `#AABBCC`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] when the literal lacks the leading `#`, does
    /// not have exactly 3 or 6 hex digits, or cannot be decoded.
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(value.to_string()))?;

        if !matches!(digits.len(), 3 | 6) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigits(value.to_string()));
        }

        let color = DynamicColor::from_str(value).map_err(|err| ColorError::Unparsable {
            value: value.to_string(),
            reason: err.to_string(),
        })?;
        let rgba = color.to_alpha_color::<Srgb>().to_rgba8();

        Ok(Self::from_rgb(rgba.r, rgba.g, rgba.b))
    }

    /// Returns the red channel.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green channel.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue channel.
    pub fn blue(&self) -> u8 {
        self.blue
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn check_normalization_is_idempotent(literal: &str) -> Result<(), TestCaseError> {
        let once = HexColor::parse(literal).expect("generated literal is valid");
        let twice = HexColor::parse(&once.to_string()).expect("canonical form is valid");
        prop_assert_eq!(once, twice);
        prop_assert_eq!(once.to_string(), twice.to_string());
        Ok(())
    }

    fn check_case_insensitive(literal: &str) -> Result<(), TestCaseError> {
        let lower = HexColor::parse(&literal.to_lowercase()).expect("lower case is valid");
        let upper = HexColor::parse(&literal.to_uppercase()).expect("upper case is valid");
        prop_assert_eq!(lower, upper);
        Ok(())
    }

    fn check_short_form_matches_long_form(digits: &str) -> Result<(), TestCaseError> {
        let doubled: String = digits.chars().flat_map(|c| [c, c]).collect();
        let short = HexColor::parse(&format!("#{digits}")).expect("short form is valid");
        let long = HexColor::parse(&format!("#{doubled}")).expect("long form is valid");
        prop_assert_eq!(short, long);
        Ok(())
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(literal in "#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})") {
            check_normalization_is_idempotent(&literal)?;
        }

        #[test]
        fn normalization_is_case_insensitive(literal in "#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})") {
            check_case_insensitive(&literal)?;
        }

        #[test]
        fn short_form_matches_long_form(digits in "[0-9a-fA-F]{3}") {
            check_short_form_matches_long_form(&digits)?;
        }
    }
}
