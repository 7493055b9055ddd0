use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::angle::{LinearAngle, RadialPosition};
use crate::color::ColorToken;
use crate::error::ParseError;

/// Gradient family.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Linear,
    Radial,
    Conic,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Linear, Mode::Radial, Mode::Conic];

    pub fn name(self) -> &'static str {
        match self {
            Mode::Linear => "linear",
            Mode::Radial => "radial",
            Mode::Conic => "conic",
        }
    }

    /// Name of the CSS function, e.g. `linear-gradient`.
    pub fn function_name(self) -> &'static str {
        match self {
            Mode::Linear => "linear-gradient",
            Mode::Radial => "radial-gradient",
            Mode::Conic => "conic-gradient",
        }
    }

    /// Conic stops are written in degrees, the others in percent.
    pub fn uses_degrees(self) -> bool {
        self == Mode::Conic
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::malformed(0, format!("unknown gradient mode {:?}", s)))
    }
}

/// A resolved stop: `location` is a fraction of the gradient line.
///
/// Parsed stops keep whatever location the source gave (`-10%` reads as
/// `-0.1`); clamping into `[0, 1]` is the model's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: ColorToken,
    pub location: f32,
}

impl ColorStop {
    pub fn new(color: ColorToken, location: f32) -> Self {
        Self { color, location }
    }
}

/// The optional segment before the stop list.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum Modifier {
    #[default]
    None,
    Angle(LinearAngle),
    Position(RadialPosition),
}

/// Result of [`crate::parse_gradient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGradient {
    pub mode: Mode,
    pub modifier: Modifier,
    /// At least two, in source order.
    pub stops: Vec<ColorStop>,
}
