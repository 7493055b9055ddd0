//! Angles, direction keywords, and radial anchor positions.
//!
//! Everything here is a pure lookup or a small computation: pointer deltas in,
//! snapped degrees out; keywords in, canonical values out.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::lexer::{tokens, Token};
use crate::serialize::format_number;

/// Converts an angle with a CSS unit to degrees. `None` for non-angle units.
pub fn angle_to_degrees(value: f32, unit: &str) -> Option<f32> {
    match unit {
        "deg" => Some(value),
        "rad" => Some(value * 180.0 / PI),
        "grad" => Some(value / 400.0 * 360.0),
        "turn" => Some(value * 360.0),
        _ => None,
    }
}

// ── Pointer angle ─────────────────────────────────────────────────────────

/// How finely [`pointer_to_angle`] snaps: to multiples of `45 / divisor` degrees.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum SnapDivisor {
    #[default]
    One,
    Two,
    Four,
}

impl SnapDivisor {
    /// No modifier held snaps to 45°, one of the two to 22.5°, both to 11.25°.
    pub fn from_modifiers(coarse: bool, fine: bool) -> Self {
        match (coarse, fine) {
            (false, false) => SnapDivisor::One,
            (true, true) => SnapDivisor::Four,
            _ => SnapDivisor::Two,
        }
    }

    pub fn divisor(self) -> f32 {
        match self {
            SnapDivisor::One => 1.0,
            SnapDivisor::Two => 2.0,
            SnapDivisor::Four => 4.0,
        }
    }

    /// Snap step in degrees.
    pub fn step(self) -> f32 {
        45.0 / self.divisor()
    }
}

/// Angle in `[0, 360)` of a pointer at `(dx, dy)` from the control's center,
/// snapped down to a multiple of [`SnapDivisor::step`].
///
/// `dy` grows downward, as in screen space: straight up is 0°, right is 90°.
pub fn pointer_to_angle(dx: f32, dy: f32, snap: SnapDivisor) -> f32 {
    let radians = f64::from(dx).atan2(f64::from(dy)) - std::f64::consts::PI;
    let degrees = radians.to_degrees().abs();
    let step = f64::from(snap.step());
    // Tolerance keeps 89.99999 from snapping down to 45.
    let snapped = ((degrees + SNAP_TOLERANCE) / step).floor() * step;
    snapped.rem_euclid(360.0) as f32
}

const SNAP_TOLERANCE: f64 = 1e-6;

// ── Direction ─────────────────────────────────────────────────────────────

/// Named linear-gradient direction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    ToTop,
    ToRight,
    ToBottom,
    ToLeft,
    ToTopRight,
    ToRightBottom,
    ToLeftBottom,
    ToLeftTop,
}

/// Accepted spellings. The first entry for each direction is canonical.
const DIRECTION_KEYWORDS: &[(&str, Direction)] = &[
    ("to top", Direction::ToTop),
    ("to right", Direction::ToRight),
    ("to bottom", Direction::ToBottom),
    ("to left", Direction::ToLeft),
    ("to top right", Direction::ToTopRight),
    ("to right top", Direction::ToTopRight),
    ("to right bottom", Direction::ToRightBottom),
    ("to bottom right", Direction::ToRightBottom),
    ("to left bottom", Direction::ToLeftBottom),
    ("to bottom left", Direction::ToLeftBottom),
    ("to left top", Direction::ToLeftTop),
    ("to top left", Direction::ToLeftTop),
];

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::ToTop,
        Direction::ToRight,
        Direction::ToBottom,
        Direction::ToLeft,
        Direction::ToTopRight,
        Direction::ToRightBottom,
        Direction::ToLeftBottom,
        Direction::ToLeftTop,
    ];

    /// Case-insensitive lookup; runs of whitespace count as one space.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let wanted = collapse_lower(keyword);
        DIRECTION_KEYWORDS
            .iter()
            .find(|(kw, _)| *kw == wanted)
            .map(|&(_, dir)| dir)
    }

    pub fn keyword(self) -> &'static str {
        DIRECTION_KEYWORDS
            .iter()
            .find(|(_, dir)| *dir == self)
            .map(|(kw, _)| *kw)
            .unwrap_or_default()
    }

    pub fn degrees(self) -> f32 {
        match self {
            Direction::ToTop => 0.0,
            Direction::ToTopRight => 45.0,
            Direction::ToRight => 90.0,
            Direction::ToRightBottom => 135.0,
            Direction::ToBottom => 180.0,
            Direction::ToLeftBottom => 225.0,
            Direction::ToLeft => 270.0,
            Direction::ToLeftTop => 315.0,
        }
    }
}

fn collapse_lower(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ").to_ascii_lowercase()
}

// ── LinearAngle ───────────────────────────────────────────────────────────

/// Linear-gradient angle, either raw degrees or a direction keyword.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinearAngle {
    /// Always in `[0, 360)` when built through [`LinearAngle::from_degrees`].
    Degrees(f32),
    Direction(Direction),
}

impl LinearAngle {
    /// Normalizes into `[0, 360)`. `None` for NaN or infinities.
    pub fn from_degrees(degrees: f32) -> Option<Self> {
        degrees
            .is_finite()
            .then(|| {
                // `rem_euclid` of a tiny negative rounds up to exactly 360.
                let d = degrees.rem_euclid(360.0);
                LinearAngle::Degrees(if d >= 360.0 { 0.0 } else { d })
            })
    }

    pub fn degrees(self) -> f32 {
        match self {
            LinearAngle::Degrees(d) => d,
            LinearAngle::Direction(dir) => dir.degrees(),
        }
    }

    /// Build from modifier tokens: one angle dimension, or `to` keywords.
    pub(crate) fn from_tokens(toks: &[Token], text: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDirection(text.to_string());
        match toks {
            [Token::Dimension { value, unit }] => angle_to_degrees(*value, unit)
                .and_then(LinearAngle::from_degrees)
                .ok_or_else(invalid),
            [Token::Ident(first), ..] if first.eq_ignore_ascii_case("to") => {
                let mut words = Vec::with_capacity(toks.len());
                for tok in toks {
                    match tok {
                        Token::Ident(w) => words.push(w.as_str()),
                        _ => return Err(invalid()),
                    }
                }
                Direction::from_keyword(&words.join(" "))
                    .map(LinearAngle::Direction)
                    .ok_or_else(invalid)
            }
            _ => Err(invalid()),
        }
    }
}

impl Default for LinearAngle {
    fn default() -> Self {
        LinearAngle::Degrees(0.0)
    }
}

impl fmt::Display for LinearAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinearAngle::Degrees(d) => {
                let text = format_number(*d);
                // 359.9999 prints as 360 at three decimals.
                f.write_str(if text == "360" { "0" } else { &text })?;
                f.write_str("deg")
            }
            LinearAngle::Direction(dir) => f.write_str(dir.keyword()),
        }
    }
}

impl FromStr for LinearAngle {
    type Err = ParseError;

    /// Accepts `45deg`, `0.25turn`, `to top right`, ... Bare numbers are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let toks: Vec<Token> = tokens(s)
            .map_err(|_| ParseError::InvalidDirection(s.to_string()))?
            .into_iter()
            .map(|t| t.token)
            .collect();
        LinearAngle::from_tokens(&toks, s)
    }
}

// ── RadialPosition ────────────────────────────────────────────────────────

/// One of the nine anchor points a radial gradient can be centered on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RadialPosition {
    TopLeft,
    TopCenter,
    TopRight,
    Left,
    #[default]
    Center,
    Right,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

#[derive(Copy, Clone, PartialEq)]
enum Vertical { Top, Middle, Bottom }

#[derive(Copy, Clone, PartialEq)]
enum Horizontal { Left, Middle, Right }

impl RadialPosition {
    pub const ALL: [RadialPosition; 9] = [
        RadialPosition::TopLeft,
        RadialPosition::TopCenter,
        RadialPosition::TopRight,
        RadialPosition::Left,
        RadialPosition::Center,
        RadialPosition::Right,
        RadialPosition::BottomLeft,
        RadialPosition::BottomCenter,
        RadialPosition::BottomRight,
    ];

    /// Short code used by position pickers: `tl`, `tm`, `tr`, `l`, `m`, `r`, `bl`, `bm`, `br`.
    pub fn code(self) -> &'static str {
        match self {
            RadialPosition::TopLeft => "tl",
            RadialPosition::TopCenter => "tm",
            RadialPosition::TopRight => "tr",
            RadialPosition::Left => "l",
            RadialPosition::Center => "m",
            RadialPosition::Right => "r",
            RadialPosition::BottomLeft => "bl",
            RadialPosition::BottomCenter => "bm",
            RadialPosition::BottomRight => "br",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    /// Canonical `circle at <x> <y>` expression.
    pub fn expression(self) -> &'static str {
        match self {
            RadialPosition::TopLeft => "circle at top left",
            RadialPosition::TopCenter => "circle at top center",
            RadialPosition::TopRight => "circle at top right",
            RadialPosition::Left => "circle at left",
            RadialPosition::Center => "circle at center",
            RadialPosition::Right => "circle at right",
            RadialPosition::BottomLeft => "circle at bottom left",
            RadialPosition::BottomCenter => "circle at bottom center",
            RadialPosition::BottomRight => "circle at bottom right",
        }
    }

    /// Exact (case-insensitive) match against the canonical expressions.
    pub fn from_expression(expr: &str) -> Option<Self> {
        let wanted = collapse_lower(expr);
        Self::ALL.into_iter().find(|p| p.expression() == wanted)
    }

    fn from_axes(v: Vertical, h: Horizontal) -> Self {
        match (v, h) {
            (Vertical::Top, Horizontal::Left) => RadialPosition::TopLeft,
            (Vertical::Top, Horizontal::Middle) => RadialPosition::TopCenter,
            (Vertical::Top, Horizontal::Right) => RadialPosition::TopRight,
            (Vertical::Middle, Horizontal::Left) => RadialPosition::Left,
            (Vertical::Middle, Horizontal::Middle) => RadialPosition::Center,
            (Vertical::Middle, Horizontal::Right) => RadialPosition::Right,
            (Vertical::Bottom, Horizontal::Left) => RadialPosition::BottomLeft,
            (Vertical::Bottom, Horizontal::Middle) => RadialPosition::BottomCenter,
            (Vertical::Bottom, Horizontal::Right) => RadialPosition::BottomRight,
        }
    }

    /// Build from a radial modifier: `[circle|ellipse] [<extent>] [at <pos> [<pos>]]`.
    ///
    /// Shape and extent keywords are accepted but not kept; the model only
    /// tracks the anchor. Lengths and percentages are rejected.
    pub(crate) fn from_tokens(toks: &[Token], text: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDirection(text.to_string());
        let mut words = Vec::with_capacity(toks.len());
        for tok in toks {
            match tok {
                Token::Ident(w) => words.push(w.to_ascii_lowercase()),
                _ => return Err(invalid()),
            }
        }

        let at = words.iter().position(|w| w == "at");
        let (shape, anchor) = match at {
            Some(i) => (&words[..i], &words[i + 1..]),
            None => (&words[..], &words[..0]),
        };
        for w in shape {
            match w.as_str() {
                "circle" | "ellipse" | "closest-side" | "closest-corner" | "farthest-side"
                | "farthest-corner" => {
                    log::debug!("radial modifier keyword {:?} dropped", w);
                }
                _ => return Err(invalid()),
            }
        }
        if (at.is_some() && anchor.is_empty()) || anchor.len() > 2 {
            return Err(invalid());
        }

        // `center` leaves its axis open; an open axis means middle.
        let mut vertical = None;
        let mut horizontal = None;
        for w in anchor {
            match w.as_str() {
                "top" if vertical.is_none() => vertical = Some(Vertical::Top),
                "bottom" if vertical.is_none() => vertical = Some(Vertical::Bottom),
                "left" if horizontal.is_none() => horizontal = Some(Horizontal::Left),
                "right" if horizontal.is_none() => horizontal = Some(Horizontal::Right),
                "center" => {}
                _ => return Err(invalid()),
            }
        }
        Ok(Self::from_axes(
            vertical.unwrap_or(Vertical::Middle),
            horizontal.unwrap_or(Horizontal::Middle),
        ))
    }
}

impl fmt::Display for RadialPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expression())
    }
}

impl FromStr for RadialPosition {
    type Err = ParseError;

    /// Accepts only the nine canonical expressions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_expression(s).ok_or_else(|| ParseError::InvalidDirection(s.to_string()))
    }
}
