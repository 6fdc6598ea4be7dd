//! Decorative fill patterns.
//!
//! A [`Pattern`] is a named fill algorithm with a short argument list. The
//! recognized names are listed by [`PatternKind`]; each one declares its
//! parameters through [`ParamRule`]s that carry the accepted range and the
//! value used when a trailing argument is omitted. Names outside that list
//! are kept verbatim and render without geometry.

use std::fmt;

use thiserror::Error;

use crate::color::HexColor;

/// Errors raised while building a [`Pattern`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern identifier must not be empty")]
    EmptyIdentifier,

    #[error("`{pattern}` takes at most {max} argument(s), found {found}")]
    TooManyArguments {
        pattern: PatternKind,
        max: usize,
        found: usize,
    },

    #[error("`{parameter}` of `{pattern}` must be an integer")]
    NotAnInteger {
        pattern: PatternKind,
        parameter: &'static str,
        index: usize,
    },

    #[error("`{parameter}` of `{pattern}` must be between {min} and {max}, found {value}")]
    OutOfRange {
        pattern: PatternKind,
        parameter: &'static str,
        index: usize,
        value: u32,
        min: u32,
        max: u32,
    },
}

impl PatternError {
    /// Index of the offending argument, if the error concerns one.
    pub fn argument_index(&self) -> Option<usize> {
        match self {
            Self::EmptyIdentifier => None,
            Self::TooManyArguments { max, .. } => Some(*max),
            Self::NotAnInteger { index, .. } | Self::OutOfRange { index, .. } => Some(*index),
        }
    }
}

/// Accepted range and default of one pattern parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamRule {
    name: &'static str,
    min: u32,
    max: u32,
    default: u32,
}

impl ParamRule {
    const fn new(name: &'static str, min: u32, max: u32, default: u32) -> Self {
        Self {
            name,
            min,
            max,
            default,
        }
    }

    /// Parameter name used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Smallest accepted value.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Largest accepted value.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Value used when the argument is omitted.
    pub fn default(&self) -> u32 {
        self.default
    }

    /// Returns `true` if `value` is inside the accepted range.
    pub fn accepts(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

static STRIPES_PARAMS: [ParamRule; 2] = [
    ParamRule::new("count", 1, 50, 6),
    ParamRule::new("thickness", 2, 120, 20),
];
static HOOPS_PARAMS: [ParamRule; 2] = [
    ParamRule::new("count", 1, 50, 6),
    ParamRule::new("thickness", 2, 120, 20),
];
static SASH_PARAMS: [ParamRule; 2] = [
    ParamRule::new("angle", 0, 85, 30),
    ParamRule::new("width", 10, 200, 80),
];
static CHECKER_PARAMS: [ParamRule; 1] = [ParamRule::new("cell", 5, 200, 40)];
static GRADIENT_PARAMS: [ParamRule; 1] = [ParamRule::new("intensity", 10, 200, 100)];
static BRUSH_PARAMS: [ParamRule; 2] = [
    ParamRule::new("thickness", 1, 200, 24),
    ParamRule::new("roughness", 5, 200, 30),
];
static WAVES_PARAMS: [ParamRule; 2] = [
    ParamRule::new("amplitude", 2, 200, 12),
    ParamRule::new("wavelength", 1, 100, 40),
];

/// The recognized pattern names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Stripes,
    Hoops,
    Sash,
    Checker,
    Gradient,
    Brush,
    Waves,
}

impl PatternKind {
    /// All recognized kinds.
    pub const ALL: [PatternKind; 7] = [
        PatternKind::Stripes,
        PatternKind::Hoops,
        PatternKind::Sash,
        PatternKind::Checker,
        PatternKind::Gradient,
        PatternKind::Brush,
        PatternKind::Waves,
    ];

    /// Look up a kind by identifier, ignoring ASCII case.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(identifier))
    }

    /// Lower-case name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Stripes => "stripes",
            PatternKind::Hoops => "hoops",
            PatternKind::Sash => "sash",
            PatternKind::Checker => "checker",
            PatternKind::Gradient => "gradient",
            PatternKind::Brush => "brush",
            PatternKind::Waves => "waves",
        }
    }

    /// Parameter rules, in argument order.
    pub fn params(self) -> &'static [ParamRule] {
        match self {
            PatternKind::Stripes => &STRIPES_PARAMS,
            PatternKind::Hoops => &HOOPS_PARAMS,
            PatternKind::Sash => &SASH_PARAMS,
            PatternKind::Checker => &CHECKER_PARAMS,
            PatternKind::Gradient => &GRADIENT_PARAMS,
            PatternKind::Brush => &BRUSH_PARAMS,
            PatternKind::Waves => &WAVES_PARAMS,
        }
    }

    fn check_args(self, args: &[PatternArg]) -> Result<(), PatternError> {
        let params = self.params();
        if args.len() > params.len() {
            return Err(PatternError::TooManyArguments {
                pattern: self,
                max: params.len(),
                found: args.len(),
            });
        }

        for (index, (arg, rule)) in args.iter().zip(params).enumerate() {
            let PatternArg::Int(value) = arg else {
                return Err(PatternError::NotAnInteger {
                    pattern: self,
                    parameter: rule.name(),
                    index,
                });
            };
            if !rule.accepts(*value) {
                return Err(PatternError::OutOfRange {
                    pattern: self,
                    parameter: rule.name(),
                    index,
                    value: *value,
                    min: rule.min(),
                    max: rule.max(),
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single pattern argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternArg {
    Int(u32),
    Color(HexColor),
    Text(String),
}

impl fmt::Display for PatternArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternArg::Int(value) => write!(f, "{value}"),
            PatternArg::Color(color) => write!(f, "{color}"),
            PatternArg::Text(text) => write!(f, "{text:?}"),
        }
    }
}

/// Geometry parameters of a recognized pattern, with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternShape {
    Stripes { count: u32, thickness: u32 },
    Hoops { count: u32, thickness: u32 },
    Sash { angle: u32, width: u32 },
    Checker { cell: u32 },
    Gradient { intensity: u32 },
    Brush { thickness: u32, roughness: u32 },
    Waves { amplitude: u32, wavelength: u32 },
}

/// A named fill pattern with its arguments.
///
/// # Examples
///
/// ```
/// use jersey_core::pattern::{Pattern, PatternArg, PatternShape};
///
/// let pattern = Pattern::new("Stripes", vec![PatternArg::Int(4)]).unwrap();
/// assert_eq!(
///     pattern.shape(),
///     Some(PatternShape::Stripes { count: 4, thickness: 20 })
/// );
///
/// let unknown = Pattern::new("zigzag", vec![PatternArg::Int(1)]).unwrap();
/// assert_eq!(unknown.shape(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    identifier: String,
    args: Vec<PatternArg>,
}

impl Pattern {
    /// Create a pattern, checking the arguments of recognized kinds.
    ///
    /// The identifier is trimmed. Unrecognized identifiers are accepted with
    /// their arguments unchecked.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] for an empty identifier, or for a recognized
    /// kind given too many arguments, a non-integer argument, or an argument
    /// outside its range.
    pub fn new(identifier: &str, args: Vec<PatternArg>) -> Result<Self, PatternError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(PatternError::EmptyIdentifier);
        }

        if let Some(kind) = PatternKind::from_identifier(identifier) {
            kind.check_args(&args)?;
        }

        Ok(Self {
            identifier: identifier.to_string(),
            args,
        })
    }

    /// The identifier as written, without surrounding whitespace.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The arguments in source order.
    pub fn args(&self) -> &[PatternArg] {
        &self.args
    }

    /// The recognized kind, if any.
    pub fn kind(&self) -> Option<PatternKind> {
        PatternKind::from_identifier(&self.identifier)
    }

    /// Resolve the geometry parameters, filling omitted arguments with defaults.
    ///
    /// Returns `None` for unrecognized identifiers.
    pub fn shape(&self) -> Option<PatternShape> {
        let kind = self.kind()?;
        let value = |index: usize| -> u32 {
            match self.args.get(index) {
                Some(PatternArg::Int(value)) => *value,
                _ => kind.params().get(index).map_or(0, ParamRule::default),
            }
        };

        let shape = match kind {
            PatternKind::Stripes => PatternShape::Stripes {
                count: value(0),
                thickness: value(1),
            },
            PatternKind::Hoops => PatternShape::Hoops {
                count: value(0),
                thickness: value(1),
            },
            PatternKind::Sash => PatternShape::Sash {
                angle: value(0),
                width: value(1),
            },
            PatternKind::Checker => PatternShape::Checker { cell: value(0) },
            PatternKind::Gradient => PatternShape::Gradient {
                intensity: value(0),
            },
            PatternKind::Brush => PatternShape::Brush {
                thickness: value(0),
                roughness: value(1),
            },
            PatternKind::Waves => PatternShape::Waves {
                amplitude: value(0),
                wavelength: value(1),
            },
        };
        Some(shape)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.identifier)?;
        for (index, arg) in self.args.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}
