//! In-memory gradient state.
//!
//! [`GradientModel`] is only mutated through [`crate::StopEditor`]; every
//! mutation leaves the stop list sorted by location (stable, so equal
//! locations keep insertion order) with each location inside `[0, 1]`.

use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};

use gpickr_css::{serialize_gradient, stop_list, ColorStop, ColorToken, LinearAngle, Mode, RadialPosition};
use serde::{Deserialize, Serialize};

static NEXT_STOP_ID: AtomicU64 = AtomicU64::new(1);

// ── StopHandle ────────────────────────────────────────────────────────────

/// Identity of one stop, stable across moves and recolors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct StopHandle(u64);

impl StopHandle {
    fn next() -> Self {
        StopHandle(NEXT_STOP_ID.fetch_add(1, Ordering::Relaxed))
    }
}

// ── Stop ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    handle: StopHandle,
    pub(crate) color: ColorToken,
    pub(crate) location: f32,
}

impl Stop {
    #[inline]
    pub fn handle(&self) -> StopHandle {
        self.handle
    }

    #[inline]
    pub fn color(&self) -> &ColorToken {
        &self.color
    }

    /// Always within `[0, 1]`.
    #[inline]
    pub fn location(&self) -> f32 {
        self.location
    }
}

/// Clamp into `[0, 1]`; NaN reads as `0`.
#[inline]
pub fn clamp_location(location: f32) -> f32 {
    if location.is_nan() { 0.0 } else { location.clamp(0.0, 1.0) }
}

// ── AllowedModes ──────────────────────────────────────────────────────────

/// Modes a session may switch to, in cycling order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Mode>", into = "Vec<Mode>")]
pub struct AllowedModes(Vec<Mode>);

impl AllowedModes {
    /// Duplicates are dropped; first occurrence fixes the cycling position.
    pub fn new(modes: impl IntoIterator<Item = Mode>) -> Self {
        let mut out = Vec::new();
        for mode in modes {
            if !out.contains(&mode) {
                out.push(mode);
            }
        }
        AllowedModes(out)
    }

    pub fn contains(&self, mode: Mode) -> bool {
        self.0.contains(&mode)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Mode] {
        &self.0
    }

    /// The mode after `current`, wrapping. A `current` outside the set yields the first mode.
    pub fn next_after(&self, current: Mode) -> Option<Mode> {
        let n = self.0.len();
        match self.0.iter().position(|&m| m == current) {
            Some(i) => self.0.get((i + 1) % n).copied(),
            None => self.0.first().copied(),
        }
    }
}

impl Default for AllowedModes {
    fn default() -> Self {
        AllowedModes(Mode::ALL.to_vec())
    }
}

impl From<Vec<Mode>> for AllowedModes {
    fn from(modes: Vec<Mode>) -> Self {
        AllowedModes::new(modes)
    }
}

impl From<AllowedModes> for Vec<Mode> {
    fn from(modes: AllowedModes) -> Self {
        modes.0
    }
}

// ── StopList ──────────────────────────────────────────────────────────────

/// Snapshot of the stops, sorted by location.
///
/// `Display` writes the percent form used by linear and radial gradients;
/// use [`StopList::to_css`] for a specific mode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopList(Vec<ColorStop>);

impl StopList {
    /// `"<color> <pct>%"` joined by commas, or `"<color> <deg>deg"` for conic.
    pub fn to_css(&self, mode: Mode) -> String {
        stop_list(mode, self.0.iter().map(|s| (&s.color, s.location)))
    }

    pub fn into_vec(self) -> Vec<ColorStop> {
        self.0
    }
}

impl Deref for StopList {
    type Target = [ColorStop];

    fn deref(&self) -> &[ColorStop] {
        &self.0
    }
}

impl fmt::Display for StopList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(Mode::Linear))
    }
}

// ── GradientModel ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct GradientModel {
    pub(crate) mode: Mode,
    pub(crate) stops: Vec<Stop>,
    pub(crate) angle: LinearAngle,
    pub(crate) position: RadialPosition,
    pub(crate) allowed: AllowedModes,
}

impl GradientModel {
    pub(crate) fn new(mode: Mode, angle: LinearAngle, position: RadialPosition, allowed: AllowedModes) -> Self {
        Self { mode, stops: Vec::new(), angle, position, allowed }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Sorted by location.
    #[inline]
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Stored linear angle, kept even while another mode is active.
    #[inline]
    pub fn angle(&self) -> LinearAngle {
        self.angle
    }

    /// Stored radial position, kept even while another mode is active.
    #[inline]
    pub fn position(&self) -> RadialPosition {
        self.position
    }

    #[inline]
    pub fn allowed_modes(&self) -> &AllowedModes {
        &self.allowed
    }

    pub fn stop(&self, handle: StopHandle) -> Option<&Stop> {
        self.stops.iter().find(|s| s.handle == handle)
    }

    pub(crate) fn index_of(&self, handle: StopHandle) -> Option<usize> {
        self.stops.iter().position(|s| s.handle == handle)
    }

    /// Insert with a clamped location and restore ordering.
    pub(crate) fn insert(&mut self, color: ColorToken, location: f32) -> StopHandle {
        let handle = StopHandle::next();
        self.stops.push(Stop { handle, color, location: clamp_location(location) });
        self.sort();
        handle
    }

    /// Stable: stops at equal locations keep their relative order.
    pub(crate) fn sort(&mut self) {
        self.stops.sort_by(|a, b| a.location.total_cmp(&b.location));
    }

    pub fn stop_list(&self) -> StopList {
        StopList(
            self.stops
                .iter()
                .map(|s| ColorStop::new(s.color.clone(), s.location))
                .collect(),
        )
    }

    /// Gradient declaration for `mode`, using the stored angle and position.
    pub fn to_css(&self, mode: Mode) -> String {
        serialize_gradient(
            mode,
            self.angle,
            self.position,
            self.stops.iter().map(|s| (&s.color, s.location)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> ColorToken {
        ColorToken::parse(s).unwrap()
    }

    fn model() -> GradientModel {
        GradientModel::new(Mode::Linear, LinearAngle::default(), RadialPosition::default(), AllowedModes::default())
    }

    // ── clamp_location ────────────────────────────────────────────────────

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp_location(-0.5), 0.0);
        assert_eq!(clamp_location(1.7), 1.0);
        assert_eq!(clamp_location(0.25), 0.25);
        assert_eq!(clamp_location(f32::NAN), 0.0);
        assert_eq!(clamp_location(f32::INFINITY), 1.0);
    }

    // ── insert / sort ─────────────────────────────────────────────────────

    #[test]
    fn insert_keeps_sorted_and_stable() {
        let mut m = model();
        let a = m.insert(c("red"), 0.5);
        let b = m.insert(c("green"), 0.2);
        let d = m.insert(c("blue"), 0.8);
        let e = m.insert(c("black"), 0.2);
        let order: Vec<StopHandle> = m.stops().iter().map(Stop::handle).collect();
        assert_eq!(order, vec![b, e, a, d]);
    }

    #[test]
    fn handles_are_unique() {
        let mut m = model();
        let a = m.insert(c("red"), 0.0);
        let b = m.insert(c("red"), 0.0);
        assert_ne!(a, b);
    }

    // ── AllowedModes ──────────────────────────────────────────────────────

    #[test]
    fn allowed_modes_dedup_and_cycle() {
        let modes = AllowedModes::new([Mode::Radial, Mode::Linear, Mode::Radial]);
        assert_eq!(modes.as_slice(), &[Mode::Radial, Mode::Linear]);
        assert_eq!(modes.next_after(Mode::Radial), Some(Mode::Linear));
        assert_eq!(modes.next_after(Mode::Linear), Some(Mode::Radial));
        assert_eq!(modes.next_after(Mode::Conic), Some(Mode::Radial));
        assert_eq!(AllowedModes::new([]).next_after(Mode::Linear), None);
    }

    // ── serialization ─────────────────────────────────────────────────────

    #[test]
    fn stop_list_units() {
        let mut m = model();
        m.insert(c("red"), 0.0);
        m.insert(c("blue"), 0.5);
        let list = m.stop_list();
        assert_eq!(list.to_string(), "red 0%, blue 50%");
        assert_eq!(list.to_css(Mode::Conic), "red 0deg, blue 180deg");
    }

    #[test]
    fn stop_list_json_shape() {
        let mut m = model();
        m.insert(c("#FF0000"), 0.25);
        let json = serde_json::to_string(&m.stop_list()).unwrap();
        assert_eq!(json, r##"[{"color":"#ff0000","location":0.25}]"##);
    }
}
