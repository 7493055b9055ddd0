//! Rendering stops and gradients back to CSS text.

use std::fmt;

use crate::angle::{LinearAngle, RadialPosition};
use crate::color::ColorToken;
use crate::gradient::{Mode, Modifier, ParsedGradient};

/// Shortest decimal form with at most three fractional digits: `33.333`, `45`, `0.72`.
pub fn format_number(v: f32) -> String {
    let mut s = format!("{:.3}", v);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

/// `"<color> <location*100>%"`, or `"<color> <location*360>deg"` for conic.
pub fn format_stop(mode: Mode, color: &ColorToken, location: f32) -> String {
    if mode.uses_degrees() {
        format!("{} {}deg", color, format_number(location * 360.0))
    } else {
        format!("{} {}%", color, format_number(location * 100.0))
    }
}

/// Comma-joined stop list in the units `mode` uses.
pub fn stop_list<'a, I>(mode: Mode, stops: I) -> String
where
    I: IntoIterator<Item = (&'a ColorToken, f32)>,
{
    stops
        .into_iter()
        .map(|(color, location)| format_stop(mode, color, location))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Full declaration for `mode`. The angle is only written for linear, the
/// position only for radial.
pub fn serialize_gradient<'a, I>(
    mode: Mode,
    angle: LinearAngle,
    position: RadialPosition,
    stops: I,
) -> String
where
    I: IntoIterator<Item = (&'a ColorToken, f32)>,
{
    let stops = stop_list(mode, stops);
    match mode {
        Mode::Linear => format!("{}({}, {})", mode.function_name(), angle, stops),
        Mode::Radial => format!("{}({}, {})", mode.function_name(), position, stops),
        Mode::Conic => format!("{}({})", mode.function_name(), stops),
    }
}

impl fmt::Display for ParsedGradient {
    /// Canonical form; a missing modifier is written as its default.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (angle, position) = match self.modifier {
            Modifier::Angle(a) => (a, RadialPosition::default()),
            Modifier::Position(p) => (LinearAngle::default(), p),
            Modifier::None => (LinearAngle::default(), RadialPosition::default()),
        };
        let stops = self.stops.iter().map(|s| (&s.color, s.location));
        f.write_str(&serialize_gradient(self.mode, angle, position, stops))
    }
}
