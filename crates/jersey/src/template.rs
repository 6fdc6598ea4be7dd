//! Generation of jersey source text from structured design records.
//!
//! Design tools and suggestion services describe a jersey as a JSON object.
//! [`design_to_source`] turns such a [`JerseyDesign`] into a `jersey { ... }`
//! block that can be fed back into the compiler. String values are escaped,
//! so the output always tokenizes; whether it validates is still up to the
//! values themselves.
//!
//! # Example
//!
//! ```
//! # use jersey::template::{JerseyDesign, design_to_source};
//! let design = JerseyDesign::from_json(r##"{
//!     "team": "Rovers",
//!     "primary": "#036",
//!     "secondary": "#fc0",
//!     "tertiary": "#000",
//!     "pattern": { "type": "stripes", "args": [4, 12] }
//! }"##).unwrap();
//!
//! let source = design_to_source(&design);
//! assert!(source.contains("pattern: stripes(4, 12);"));
//! ```

use log::debug;
use serde::Deserialize;

use jersey_core::spec::{
    DEFAULT_NUMBER_SIZE, DEFAULT_PLAYER_SIZE, DEFAULT_SPONSOR_SIZE, DEFAULT_TEAM_SIZE,
};

use crate::JerseyError;

/// Pattern type meaning "no pattern".
const PLAIN: &str = "plain";

/// A pattern argument in a design record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DesignArg {
    Int(u32),
    Text(String),
}

/// The `pattern` object of a design record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatternDesign {
    #[serde(rename = "type", default)]
    kind: Option<String>,

    #[serde(default)]
    args: Vec<DesignArg>,
}

/// A jersey design as produced by external tools.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JerseyDesign {
    team: String,
    primary: String,
    secondary: String,
    tertiary: String,

    #[serde(default)]
    player_size: Option<u32>,
    #[serde(default)]
    number_size: Option<u32>,
    #[serde(default)]
    team_size: Option<u32>,
    #[serde(default)]
    sponsor_size: Option<u32>,

    #[serde(default)]
    pattern: Option<PatternDesign>,
    #[serde(default, alias = "patternColor")]
    pattern_color: Option<String>,

    #[serde(default)]
    number: Option<u32>,
    #[serde(default)]
    player: Option<String>,
    #[serde(default)]
    sponsor: Option<String>,
    #[serde(default)]
    font: Option<String>,
}

impl JerseyDesign {
    /// Parse a design record from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`JerseyError::Template`] when the text is not valid JSON or
    /// lacks one of `team`, `primary`, `secondary` and `tertiary`.
    pub fn from_json(json: &str) -> Result<Self, JerseyError> {
        let design: Self = serde_json::from_str(json)?;
        debug!(team = design.team; "Parsed design record");
        Ok(design)
    }

    pub fn team(&self) -> &str {
        &self.team
    }
}

/// Quote `text` as a string literal.
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn argument(arg: &DesignArg) -> String {
    match arg {
        DesignArg::Int(value) => value.to_string(),
        DesignArg::Text(text) if text.starts_with('#') => text.clone(),
        DesignArg::Text(text) => quote(text),
    }
}

/// Non-empty optional text.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

/// Generate a `jersey { ... }` block for `design`.
///
/// Required fields come first, followed by the pattern and any optional
/// fields that are set. A pattern of type `plain`, or with no type, is left
/// out.
pub fn design_to_source(design: &JerseyDesign) -> String {
    let mut lines = vec![
        "jersey {".to_string(),
        format!("  team: {};", quote(&design.team)),
        format!("  primary: {};", design.primary),
        format!("  secondary: {};", design.secondary),
        format!("  tertiary: {};", design.tertiary),
        format!(
            "  player_size: {};",
            design.player_size.unwrap_or(DEFAULT_PLAYER_SIZE)
        ),
        format!(
            "  number_size: {};",
            design.number_size.unwrap_or(DEFAULT_NUMBER_SIZE)
        ),
        format!(
            "  team_size: {};",
            design.team_size.unwrap_or(DEFAULT_TEAM_SIZE)
        ),
        format!(
            "  sponsor_size: {};",
            design.sponsor_size.unwrap_or(DEFAULT_SPONSOR_SIZE)
        ),
    ];

    if let Some(pattern) = &design.pattern {
        let kind = pattern.kind.as_deref().map(str::trim).unwrap_or_default();
        if !kind.is_empty() && kind != PLAIN {
            let args: Vec<String> = pattern.args.iter().map(argument).collect();
            lines.push(format!("  pattern: {kind}({});", args.join(", ")));
        }
    }

    if let Some(color) = present(&design.pattern_color) {
        lines.push(format!("  pattern_color: {color};"));
    }
    if let Some(number) = design.number {
        lines.push(format!("  number: {number};"));
    }
    for (keyword, value) in [
        ("player", &design.player),
        ("sponsor", &design.sponsor),
        ("font", &design.font),
    ] {
        if let Some(text) = present(value) {
            lines.push(format!("  {keyword}: {};", quote(text)));
        }
    }
    lines.push("}\n".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"{
        "team": "Rovers",
        "primary": "#036",
        "secondary": "#FC0",
        "tertiary": "#000000"
    }"##;

    #[test]
    fn test_minimal_design_uses_default_sizes() {
        let design = JerseyDesign::from_json(MINIMAL).unwrap();
        let source = design_to_source(&design);

        assert_eq!(
            source,
            "jersey {\n  team: \"Rovers\";\n  primary: #036;\n  secondary: #FC0;\n  \
             tertiary: #000000;\n  player_size: 26;\n  number_size: 75;\n  team_size: 18;\n  \
             sponsor_size: 35;\n}\n"
        );
    }

    #[test]
    fn test_plain_pattern_is_skipped() {
        let design = JerseyDesign::from_json(
            r##"{"team": "A", "primary": "#000", "secondary": "#111", "tertiary": "#222",
                 "pattern": {"type": "plain", "args": [1]}}"##,
        )
        .unwrap();
        assert!(!design_to_source(&design).contains("pattern"));
    }

    #[test]
    fn test_pattern_arguments() {
        let design = JerseyDesign::from_json(
            r##"{"team": "A", "primary": "#000", "secondary": "#111", "tertiary": "#222",
                 "pattern": {"type": "waves", "args": [12, "#ABC", "soft"]}}"##,
        )
        .unwrap();
        assert!(design_to_source(&design).contains(r##"  pattern: waves(12, #ABC, "soft");"##));

        let design = JerseyDesign::from_json(
            r##"{"team": "A", "primary": "#000", "secondary": "#111", "tertiary": "#222",
                 "pattern": {"type": "gradient"}}"##,
        )
        .unwrap();
        assert!(design_to_source(&design).contains("  pattern: gradient();"));
    }

    #[test]
    fn test_optional_fields_and_alias() {
        let design = JerseyDesign::from_json(
            r##"{"team": "A", "primary": "#000", "secondary": "#111", "tertiary": "#222",
                 "patternColor": "#fff", "number": 9, "player": "Kim", "sponsor": "",
                 "font": "Verdana"}"##,
        )
        .unwrap();
        let source = design_to_source(&design);

        assert!(source.contains("  pattern_color: #fff;\n"));
        assert!(source.contains("  number: 9;\n"));
        assert!(source.contains("  player: \"Kim\";\n"));
        assert!(source.contains("  font: \"Verdana\";\n"));
        assert!(!source.contains("sponsor:"));
    }

    #[test]
    fn test_strings_are_escaped() {
        let design = JerseyDesign::from_json(
            r##"{"team": "The \"Best\" \\ FC", "primary": "#000", "secondary": "#111",
                 "tertiary": "#222"}"##,
        )
        .unwrap();
        assert!(design_to_source(&design).contains(r#"  team: "The \"Best\" \\ FC";"#));
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let err = JerseyDesign::from_json(r##"{"team": "A", "primary": "#000"}"##).unwrap_err();
        assert!(matches!(err, JerseyError::Template(_)));
    }
}
