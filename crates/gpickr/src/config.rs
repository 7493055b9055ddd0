use gpickr_css::{LinearAngle, Mode, RadialPosition};
use serde::{Deserialize, Serialize};

use crate::model::AllowedModes;

/// Starting state of an editing session.
///
/// Colors are kept as written and validated by [`crate::StopEditor::new`].
///
/// # Example
/// ```rust
/// use gpickr::{Mode, PickerConfig, StopEditor};
///
/// let editor = StopEditor::new(
///     PickerConfig::new()
///         .stops([("rgb(255,132,109)", 0.0), ("rgb(255,136,230)", 1.0)])
///         .allowed_modes([Mode::Linear, Mode::Radial]),
/// )
/// .unwrap();
/// assert_eq!(editor.gradient(), "linear-gradient(0deg, rgb(255,132,109) 0%, rgb(255,136,230) 100%)");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// `(color, location)` pairs; locations are clamped into `[0, 1]`.
    pub stops: Vec<(String, f32)>,
    pub mode: Mode,
    /// Modes the session may use, in cycling order.
    pub allowed_modes: AllowedModes,
    pub angle: LinearAngle,
    pub position: RadialPosition,
}

impl PickerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stops<S: Into<String>>(mut self, stops: impl IntoIterator<Item = (S, f32)>) -> Self {
        self.stops = stops.into_iter().map(|(c, l)| (c.into(), l)).collect();
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn allowed_modes(mut self, modes: impl IntoIterator<Item = Mode>) -> Self {
        self.allowed_modes = AllowedModes::new(modes);
        self
    }

    pub fn angle(mut self, angle: LinearAngle) -> Self {
        self.angle = angle;
        self
    }

    pub fn position(mut self, position: RadialPosition) -> Self {
        self.position = position;
        self
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            stops: vec![("#42445a".into(), 0.0), ("#20b6dd".into(), 1.0)],
            mode: Mode::Linear,
            allowed_modes: AllowedModes::default(),
            angle: LinearAngle::default(),
            position: RadialPosition::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: PickerConfig = serde_json::from_str(r#"{ "mode": "radial", "position": "top-left" }"#).unwrap();
        assert_eq!(cfg.mode, Mode::Radial);
        assert_eq!(cfg.position, RadialPosition::TopLeft);
        assert_eq!(cfg.stops.len(), 2);
        assert_eq!(cfg.allowed_modes, AllowedModes::default());
    }

    #[test]
    fn stops_as_pairs() {
        let cfg: PickerConfig =
            serde_json::from_str(r##"{ "stops": [["#fff", 0.2], ["black", 0.9]], "allowed_modes": ["conic", "linear"] }"##)
                .unwrap();
        assert_eq!(cfg.stops, vec![("#fff".to_string(), 0.2), ("black".to_string(), 0.9)]);
        assert_eq!(cfg.allowed_modes.as_slice(), &[Mode::Conic, Mode::Linear]);
    }

    #[test]
    fn angle_variants() {
        let cfg: PickerConfig = serde_json::from_str(r#"{ "angle": { "direction": "to-left-top" } }"#).unwrap();
        assert_eq!(cfg.angle.degrees(), 315.0);
        let cfg: PickerConfig = serde_json::from_str(r#"{ "angle": { "degrees": 90.0 } }"#).unwrap();
        assert_eq!(cfg.angle.degrees(), 90.0);
    }
}
