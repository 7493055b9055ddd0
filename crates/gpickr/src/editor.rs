//! The editing session.
//!
//! [`StopEditor`] owns the [`GradientModel`] and is the only way to change it.
//! Each accepted edit leaves the model valid (sorted, clamped, non-empty),
//! then notifies change listeners with the freshly serialized gradient.
//! Refused edits return an [`EditError`] and change nothing.

use std::fmt;

use gpickr_css::{
    parse_gradient_in, pointer_to_angle, ColorToken, LinearAngle, Mode, Modifier, RadialPosition,
    SnapDivisor,
};

use crate::config::PickerConfig;
use crate::error::EditError;
use crate::event::{ChangeEvent, ListenerId, Listeners};
use crate::model::{clamp_location, AllowedModes, GradientModel, Stop, StopHandle, StopList};
use crate::picker::ColorPicker;

/// Locations closer than this count as equal for [`StopEditor::remove_by_location`].
pub const LOCATION_EPSILON: f32 = 1e-6;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Notify {
    Emit,
    Silent,
}

pub struct StopEditor {
    model: GradientModel,
    focused: Option<StopHandle>,
    listeners: Listeners,
    picker: Option<Box<dyn ColorPicker>>,
    initialized: bool,
}

impl StopEditor {
    /// Build a session from `config`. Nothing is emitted until [`StopEditor::init`].
    pub fn new(config: PickerConfig) -> Result<Self, EditError> {
        let PickerConfig { stops, mode, allowed_modes, angle, position } = config;
        if allowed_modes.is_empty() {
            return Err(EditError::NoAllowedModes);
        }
        if !allowed_modes.contains(mode) {
            return Err(EditError::UnsupportedMode(mode));
        }
        if stops.is_empty() {
            return Err(EditError::EmptyStops);
        }
        let angle = validate_angle(angle)?;

        let mut editor = Self {
            model: GradientModel::new(mode, angle, position, allowed_modes),
            focused: None,
            listeners: Listeners::default(),
            picker: None,
            initialized: false,
        };
        for (color, location) in stops {
            let color = ColorToken::parse(&color)?;
            editor.insert(color, location, Notify::Silent);
        }
        log::debug!("editor created: {}", editor.gradient());
        Ok(editor)
    }

    /// Attach the color-selection widget. It immediately shows the focused stop.
    pub fn with_picker(mut self, picker: impl ColorPicker + 'static) -> Self {
        self.picker = Some(Box::new(picker));
        self.show_focused();
        self
    }

    /// Fire the init channel. Only the first call does anything.
    pub fn init(&mut self) -> bool {
        if self.initialized {
            log::debug!("init called again; ignored");
            return false;
        }
        self.initialized = true;
        let mut taken = self.listeners.init.take();
        for (_, cb) in taken.iter_mut() {
            cb(self);
        }
        self.listeners.init.restore(taken);
        true
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn model(&self) -> &GradientModel {
        &self.model
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.model.mode
    }

    #[inline]
    pub fn allowed_modes(&self) -> &AllowedModes {
        &self.model.allowed
    }

    /// Snapshot of `(color, location)` pairs, sorted by location.
    pub fn stops(&self) -> StopList {
        self.model.stop_list()
    }

    pub fn stop(&self, handle: StopHandle) -> Option<&Stop> {
        self.model.stop(handle)
    }

    /// Number of stops; never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.model.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.model.stops.is_empty()
    }

    #[inline]
    pub fn focused(&self) -> Option<StopHandle> {
        self.focused
    }

    pub fn focused_stop(&self) -> Option<&Stop> {
        self.focused.and_then(|h| self.model.stop(h))
    }

    /// Gradient declaration in the current mode.
    pub fn gradient(&self) -> String {
        self.model.to_css(self.model.mode)
    }

    /// Gradient declaration in `mode`, whatever the current mode is.
    pub fn gradient_for(&self, mode: Mode) -> String {
        self.model.to_css(mode)
    }

    /// `None` unless the session is in linear mode.
    pub fn linear_angle(&self) -> Option<LinearAngle> {
        (self.model.mode == Mode::Linear).then_some(self.model.angle)
    }

    /// `None` unless the session is in radial mode.
    pub fn radial_position(&self) -> Option<RadialPosition> {
        (self.model.mode == Mode::Radial).then_some(self.model.position)
    }

    // ── Listeners ─────────────────────────────────────────────────────────

    pub fn on_init(&mut self, cb: impl FnMut(&StopEditor) + 'static) -> ListenerId {
        self.listeners.add_init(Box::new(cb))
    }

    pub fn on_change(&mut self, cb: impl FnMut(&StopEditor, &ChangeEvent) + 'static) -> ListenerId {
        self.listeners.add_change(Box::new(cb))
    }

    pub fn on_color_change(&mut self, cb: impl FnMut(&StopEditor, &ColorToken) + 'static) -> ListenerId {
        self.listeners.add_color_change(Box::new(cb))
    }

    /// Unregister a listener. Returns `false` if it was already gone.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn emit_change(&mut self) {
        let event = ChangeEvent { mode: self.model.mode, gradient: self.gradient() };
        log::trace!("change: {}", event.gradient);
        let mut taken = self.listeners.change.take();
        for (_, cb) in taken.iter_mut() {
            cb(self, &event);
        }
        self.listeners.change.restore(taken);
    }

    fn emit_color_change(&mut self, color: &ColorToken) {
        let mut taken = self.listeners.color_change.take();
        for (_, cb) in taken.iter_mut() {
            cb(self, color);
        }
        self.listeners.color_change.restore(taken);
    }

    fn notify(&mut self, notify: Notify) {
        if notify == Notify::Emit {
            self.emit_change();
        }
    }

    // ── Focus ─────────────────────────────────────────────────────────────

    fn show_focused(&mut self) {
        let color = self.focused_stop().map(|s| s.color.clone());
        if let (Some(picker), Some(color)) = (self.picker.as_mut(), color) {
            picker.show_color(&color);
        }
    }

    /// Bind `handle` to the color picker.
    pub fn focus(&mut self, handle: StopHandle) -> Result<(), EditError> {
        if self.model.stop(handle).is_none() {
            return Err(EditError::StopNotFound);
        }
        self.focused = Some(handle);
        self.show_focused();
        Ok(())
    }

    // ── Import ────────────────────────────────────────────────────────────

    /// Parse `text` and replace the whole gradient with it.
    ///
    /// On any error the session is left exactly as it was. A modifier missing
    /// from `text` resets the angle to `to bottom` (linear) or the position to
    /// center (radial); the other mode's setting is kept.
    pub fn set_gradient(&mut self, text: &str) -> Result<(), EditError> {
        let parsed = parse_gradient_in(text, self.model.allowed.as_slice()).map_err(|err| {
            log::warn!("rejected gradient {:?}: {}", text, err);
            err
        })?;

        self.model.mode = parsed.mode;
        match (parsed.mode, parsed.modifier) {
            (_, Modifier::Angle(angle)) => self.model.angle = angle,
            (_, Modifier::Position(position)) => self.model.position = position,
            (Mode::Linear, Modifier::None) => {
                self.model.angle = LinearAngle::Direction(gpickr_css::Direction::ToBottom);
            }
            (Mode::Radial, Modifier::None) => self.model.position = RadialPosition::default(),
            (Mode::Conic, Modifier::None) => {}
        }
        self.rebuild(parsed.stops.into_iter().map(|s| (s.color, s.location)));
        log::debug!("gradient imported: {}", self.gradient());
        self.emit_change();
        Ok(())
    }

    // ── Stops ─────────────────────────────────────────────────────────────

    fn insert(&mut self, color: ColorToken, location: f32, notify: Notify) -> StopHandle {
        let handle = self.model.insert(color, location);
        self.focused = Some(handle);
        self.show_focused();
        self.notify(notify);
        handle
    }

    /// Swap in a new stop list without notifying. `stops` must not be empty.
    fn rebuild(&mut self, stops: impl IntoIterator<Item = (ColorToken, f32)>) {
        self.model.stops.clear();
        self.focused = None;
        for (color, location) in stops {
            self.insert(color, location, Notify::Silent);
        }
    }

    /// Insert a stop (location clamped into `[0, 1]`), focus it, and notify.
    pub fn add_stop(&mut self, color: ColorToken, location: f32) -> StopHandle {
        let handle = self.insert(color, location, Notify::Emit);
        log::debug!("stop added at {}", clamp_location(location));
        handle
    }

    /// [`StopEditor::add_stop`] without the change notification, for bulk rebuilds.
    pub fn add_stop_silent(&mut self, color: ColorToken, location: f32) -> StopHandle {
        self.insert(color, location, Notify::Silent)
    }

    fn remove_at(&mut self, index: usize) -> Result<Stop, EditError> {
        if self.model.stops.len() <= 1 {
            log::warn!("refusing to remove the last stop");
            return Err(EditError::LastStop);
        }
        let removed = self.model.stops.remove(index);
        if self.focused == Some(removed.handle()) {
            self.focused = self.model.stops.first().map(Stop::handle);
            self.show_focused();
        }
        log::debug!("stop removed at {}", removed.location);
        self.emit_change();
        Ok(removed)
    }

    pub fn remove_by_handle(&mut self, handle: StopHandle) -> Result<Stop, EditError> {
        let index = self.model.index_of(handle).ok_or(EditError::StopNotFound)?;
        self.remove_at(index)
    }

    /// Remove the first stop (in location order) within [`LOCATION_EPSILON`] of `location`.
    pub fn remove_by_location(&mut self, location: f32) -> Result<Stop, EditError> {
        let index = self
            .model
            .stops
            .iter()
            .position(|s| (s.location - location).abs() <= LOCATION_EPSILON)
            .ok_or(EditError::StopNotFound)?;
        self.remove_at(index)
    }

    /// Remove the first stop (in location order) whose color equals `color`.
    pub fn remove_by_color(&mut self, color: &ColorToken) -> Result<Stop, EditError> {
        let index = self
            .model
            .stops
            .iter()
            .position(|s| &s.color == color)
            .ok_or(EditError::StopNotFound)?;
        self.remove_at(index)
    }

    /// Drop every stop except the focused one (or the first, if none is focused).
    pub fn clear_stops(&mut self) {
        let keep = self
            .focused
            .and_then(|h| self.model.index_of(h))
            .unwrap_or(0);
        let kept = self.model.stops.swap_remove(keep);
        self.model.stops.clear();
        self.model.stops.push(kept);
        self.focused = self.model.stops.first().map(Stop::handle);
        self.show_focused();
        log::debug!("stops cleared");
        self.emit_change();
    }

    /// Replace all stops at once, with a single trailing notification.
    pub fn replace_stops(
        &mut self,
        stops: impl IntoIterator<Item = (ColorToken, f32)>,
    ) -> Result<(), EditError> {
        let stops: Vec<(ColorToken, f32)> = stops.into_iter().collect();
        if stops.is_empty() {
            return Err(EditError::EmptyStops);
        }
        self.rebuild(stops);
        log::debug!("stops replaced: {}", self.model.stop_list());
        self.emit_change();
        Ok(())
    }

    /// Recolor the focused stop. This is the path for colors coming back
    /// from the [`ColorPicker`].
    pub fn set_focused_color(&mut self, color: ColorToken) -> Result<(), EditError> {
        let index = self
            .focused
            .and_then(|h| self.model.index_of(h))
            .ok_or(EditError::NoFocusedStop)?;
        self.model.stops[index].color = color.clone();
        self.emit_color_change(&color);
        self.emit_change();
        Ok(())
    }

    /// Move a stop; `location` is clamped into `[0, 1]`.
    pub fn relocate_stop(&mut self, handle: StopHandle, location: f32) -> Result<(), EditError> {
        let index = self.model.index_of(handle).ok_or(EditError::StopNotFound)?;
        self.model.stops[index].location = clamp_location(location);
        self.model.sort();
        log::trace!("stop relocated to {}", clamp_location(location));
        self.emit_change();
        Ok(())
    }

    // ── Mode ──────────────────────────────────────────────────────────────

    pub fn set_mode(&mut self, mode: Mode) -> Result<(), EditError> {
        if !self.model.allowed.contains(mode) {
            log::warn!("mode {} not allowed", mode);
            return Err(EditError::UnsupportedMode(mode));
        }
        self.model.mode = mode;
        log::debug!("mode set to {}", mode);
        self.emit_change();
        Ok(())
    }

    /// Advance to the next allowed mode, wrapping around.
    pub fn cycle_mode(&mut self) -> Mode {
        let next = self.model.allowed.next_after(self.model.mode).unwrap_or(self.model.mode);
        self.model.mode = next;
        log::debug!("mode cycled to {}", next);
        self.emit_change();
        next
    }

    // ── Angle ─────────────────────────────────────────────────────────────

    /// Store the linear angle. Degrees are normalized into `[0, 360)`.
    pub fn set_linear_angle(&mut self, angle: LinearAngle) -> Result<(), EditError> {
        self.model.angle = validate_angle(angle).map_err(|err| {
            log::warn!("{}", err);
            err
        })?;
        log::debug!("linear angle set to {}", self.model.angle);
        self.emit_change();
        Ok(())
    }

    pub fn set_linear_angle_degrees(&mut self, degrees: f32) -> Result<(), EditError> {
        self.set_linear_angle(LinearAngle::Degrees(degrees))
    }

    /// Accepts `45deg`-style angles and direction keywords such as `to top left`.
    pub fn set_linear_angle_str(&mut self, value: &str) -> Result<(), EditError> {
        let angle = value.parse::<LinearAngle>().map_err(|_| {
            log::warn!("rejected linear angle {:?}", value);
            EditError::InvalidDirection(value.to_string())
        })?;
        self.set_linear_angle(angle)
    }

    /// Set the angle from a pointer at `(dx, dy)` from the angle control's
    /// center. Only meaningful in linear mode. Returns the stored degrees.
    pub fn set_angle_from_pointer(&mut self, dx: f32, dy: f32, snap: SnapDivisor) -> Result<f32, EditError> {
        if self.model.mode != Mode::Linear {
            return Err(EditError::ModeMismatch { expected: Mode::Linear, actual: self.model.mode });
        }
        let degrees = pointer_to_angle(dx, dy, snap);
        self.set_linear_angle(LinearAngle::Degrees(degrees))?;
        Ok(degrees)
    }

    // ── Radial position ───────────────────────────────────────────────────

    pub fn set_radial_position(&mut self, position: RadialPosition) {
        self.model.position = position;
        log::debug!("radial position set to {}", position);
        self.emit_change();
    }

    /// Accepts one of the nine canonical `circle at ...` expressions.
    pub fn set_radial_position_str(&mut self, expression: &str) -> Result<(), EditError> {
        let position = RadialPosition::from_expression(expression).ok_or_else(|| {
            log::warn!("rejected radial position {:?}", expression);
            EditError::InvalidDirection(expression.to_string())
        })?;
        self.set_radial_position(position);
        Ok(())
    }

    /// Accepts a position-picker code: `tl`, `tm`, `tr`, `l`, `m`, `r`, `bl`, `bm`, `br`.
    pub fn set_radial_position_code(&mut self, code: &str) -> Result<(), EditError> {
        let position = RadialPosition::from_code(code)
            .ok_or_else(|| EditError::InvalidDirection(code.to_string()))?;
        self.set_radial_position(position);
        Ok(())
    }
}

fn validate_angle(angle: LinearAngle) -> Result<LinearAngle, EditError> {
    match angle {
        LinearAngle::Degrees(d) => LinearAngle::from_degrees(d).ok_or(EditError::InvalidAngle(d)),
        dir @ LinearAngle::Direction(_) => Ok(dir),
    }
}

impl fmt::Debug for StopEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StopEditor")
            .field("model", &self.model)
            .field("focused", &self.focused)
            .field("listeners", &self.listeners)
            .field("picker", &self.picker.is_some())
            .field("initialized", &self.initialized)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use gpickr_css::{Direction, ParseError};

    fn c(s: &str) -> ColorToken {
        ColorToken::parse(s).unwrap()
    }

    fn editor() -> StopEditor {
        StopEditor::new(PickerConfig::new().stops([("red", 0.0), ("blue", 1.0)])).unwrap()
    }

    fn change_counter(ed: &mut StopEditor) -> Rc<RefCell<usize>> {
        let count = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&count);
        ed.on_change(move |_, _| *seen.borrow_mut() += 1);
        count
    }

    // ── Construction ──────────────────────────────────────────────────────

    #[test]
    fn config_validation() {
        assert_eq!(
            StopEditor::new(PickerConfig::new().allowed_modes([])).unwrap_err(),
            EditError::NoAllowedModes
        );
        assert_eq!(
            StopEditor::new(PickerConfig::new().mode(Mode::Conic).allowed_modes([Mode::Linear])).unwrap_err(),
            EditError::UnsupportedMode(Mode::Conic)
        );
        assert_eq!(
            StopEditor::new(PickerConfig::new().stops(Vec::<(String, f32)>::new())).unwrap_err(),
            EditError::EmptyStops
        );
        assert!(matches!(
            StopEditor::new(PickerConfig::new().stops([("nope", 0.0)])).unwrap_err(),
            EditError::Color(_)
        ));
        assert!(matches!(
            StopEditor::new(PickerConfig::new().angle(LinearAngle::Degrees(f32::NAN))).unwrap_err(),
            EditError::InvalidAngle(d) if d.is_nan()
        ));
    }

    #[test]
    fn default_session() {
        let ed = StopEditor::new(PickerConfig::default()).unwrap();
        assert_eq!(ed.gradient(), "linear-gradient(0deg, #42445a 0%, #20b6dd 100%)");
        assert_eq!(ed.focused_stop().unwrap().color().as_str(), "#20b6dd");
    }

    #[test]
    fn init_fires_once() {
        let mut ed = editor();
        let fired = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&fired);
        ed.on_init(move |e| {
            assert_eq!(e.len(), 2);
            *seen.borrow_mut() += 1;
        });
        assert!(ed.init());
        assert!(!ed.init());
        assert_eq!(*fired.borrow(), 1);
        assert!(ed.is_initialized());
    }

    // ── Notifications ─────────────────────────────────────────────────────

    #[test]
    fn change_carries_serialized_gradient() {
        let mut ed = editor();
        let last = Rc::new(RefCell::new(String::new()));
        let seen = Rc::clone(&last);
        ed.on_change(move |e, event| {
            assert_eq!(event.gradient, e.gradient());
            *seen.borrow_mut() = event.gradient.clone();
        });
        ed.set_linear_angle_degrees(90.0).unwrap();
        assert_eq!(*last.borrow(), "linear-gradient(90deg, red 0%, blue 100%)");
    }

    #[test]
    fn silent_add_does_not_notify() {
        let mut ed = editor();
        let count = change_counter(&mut ed);
        ed.add_stop_silent(c("lime"), 0.5);
        assert_eq!(*count.borrow(), 0);
        ed.add_stop(c("lime"), 0.5);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn off_unregisters() {
        let mut ed = editor();
        let count = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&count);
        let id = ed.on_change(move |_, _| *seen.borrow_mut() += 1);
        ed.cycle_mode();
        assert!(ed.off(id));
        assert!(!ed.off(id));
        ed.cycle_mode();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn refused_edits_do_not_notify() {
        let mut ed = StopEditor::new(PickerConfig::new().allowed_modes([Mode::Linear])).unwrap();
        let count = change_counter(&mut ed);
        assert!(ed.set_mode(Mode::Radial).is_err());
        assert!(ed.set_linear_angle_str("sideways").is_err());
        assert!(ed.set_gradient("nope").is_err());
        assert!(ed.relocate_stop(ed.focused().unwrap(), 0.5).is_ok());
        assert_eq!(*count.borrow(), 1);
    }

    // ── Focus and color ───────────────────────────────────────────────────

    #[test]
    fn add_focuses_new_stop() {
        let mut ed = editor();
        let h = ed.add_stop(c("lime"), 0.3);
        assert_eq!(ed.focused(), Some(h));
    }

    #[test]
    fn focused_color_updates_and_emits() {
        let mut ed = editor();
        let h = ed.add_stop(c("lime"), 0.3);
        let got = Rc::new(RefCell::new(None));
        let seen = Rc::clone(&got);
        ed.on_color_change(move |_, color| *seen.borrow_mut() = Some(color.clone()));
        ed.set_focused_color(c("rgba(0, 0, 0, 0.5)")).unwrap();
        assert_eq!(ed.stop(h).unwrap().color().as_str(), "rgba(0,0,0,0.5)");
        assert_eq!(got.borrow().as_ref().map(ColorToken::as_str), Some("rgba(0,0,0,0.5)"));
    }

    #[test]
    fn picker_follows_focus() {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&shown);
        let mut ed = editor().with_picker(move |color: &ColorToken| seen.borrow_mut().push(color.to_string()));
        let red = ed.model().stops()[0].handle();
        ed.add_stop(c("lime"), 0.5);
        ed.focus(red).unwrap();
        assert_eq!(*shown.borrow(), vec!["blue", "lime", "red"]);
    }

    #[test]
    fn removing_focused_stop_moves_focus_to_first() {
        let mut ed = editor();
        let h = ed.add_stop(c("lime"), 0.5);
        ed.remove_by_handle(h).unwrap();
        assert_eq!(ed.focused_stop().unwrap().color().as_str(), "red");
    }

    // ── Removal ───────────────────────────────────────────────────────────

    #[test]
    fn remove_by_location_and_color() {
        let mut ed = editor();
        ed.add_stop(c("lime"), 0.25);
        ed.add_stop(c("lime"), 0.75);
        assert_eq!(ed.remove_by_location(0.75).unwrap().color().as_str(), "lime");
        assert_eq!(ed.remove_by_color(&c("LIME")).unwrap().location(), 0.25);
        assert_eq!(ed.remove_by_color(&c("lime")).unwrap_err(), EditError::StopNotFound);
        assert_eq!(ed.remove_by_location(0.5).unwrap_err(), EditError::StopNotFound);
        assert_eq!(ed.len(), 2);
    }

    #[test]
    fn last_stop_is_kept() {
        let mut ed = editor();
        let handles: Vec<StopHandle> = ed.model().stops().iter().map(Stop::handle).collect();
        ed.remove_by_handle(handles[0]).unwrap();
        assert_eq!(ed.remove_by_handle(handles[1]).unwrap_err(), EditError::LastStop);
        assert_eq!(ed.len(), 1);
        assert_eq!(ed.remove_by_handle(handles[0]).unwrap_err(), EditError::StopNotFound);
    }

    #[test]
    fn clear_keeps_focused() {
        let mut ed = editor();
        let h = ed.add_stop(c("lime"), 0.5);
        ed.add_stop_silent(c("black"), 0.7);
        ed.focus(h).unwrap();
        ed.clear_stops();
        assert_eq!(ed.len(), 1);
        assert_eq!(ed.focused(), Some(h));
    }

    #[test]
    fn replace_stops_notifies_once() {
        let mut ed = editor();
        let count = change_counter(&mut ed);
        ed.replace_stops([(c("#000"), 0.0), (c("#fff"), 0.6), (c("#888"), 0.3)]).unwrap();
        assert_eq!(*count.borrow(), 1);
        assert_eq!(ed.stops().to_string(), "#000 0%, #888 30%, #fff 60%");
        assert_eq!(ed.replace_stops([]).unwrap_err(), EditError::EmptyStops);
        assert_eq!(ed.len(), 3);
    }

    // ── Mode, angle, position ─────────────────────────────────────────────

    #[test]
    fn cycle_wraps_through_allowed() {
        let mut ed = StopEditor::new(PickerConfig::new().allowed_modes([Mode::Linear, Mode::Conic])).unwrap();
        assert_eq!(ed.cycle_mode(), Mode::Conic);
        assert_eq!(ed.cycle_mode(), Mode::Linear);
    }

    #[test]
    fn angle_and_position_getters_depend_on_mode() {
        let mut ed = editor();
        assert_eq!(ed.linear_angle(), Some(LinearAngle::Degrees(0.0)));
        assert_eq!(ed.radial_position(), None);
        ed.set_mode(Mode::Radial).unwrap();
        assert_eq!(ed.linear_angle(), None);
        assert_eq!(ed.radial_position(), Some(RadialPosition::Center));
    }

    #[test]
    fn linear_angle_inputs() {
        let mut ed = editor();
        ed.set_linear_angle_str("to top left").unwrap();
        assert_eq!(ed.linear_angle(), Some(LinearAngle::Direction(Direction::ToLeftTop)));
        ed.set_linear_angle_degrees(-45.0).unwrap();
        assert_eq!(ed.linear_angle(), Some(LinearAngle::Degrees(315.0)));
        assert_eq!(ed.set_linear_angle_str("45").unwrap_err(), EditError::InvalidDirection("45".into()));
        assert_eq!(
            ed.set_linear_angle_degrees(f32::INFINITY).unwrap_err(),
            EditError::InvalidAngle(f32::INFINITY)
        );
        assert_eq!(ed.linear_angle(), Some(LinearAngle::Degrees(315.0)));
    }

    #[test]
    fn pointer_angle_only_in_linear() {
        let mut ed = editor();
        assert_eq!(ed.set_angle_from_pointer(1.0, 0.0, SnapDivisor::One), Ok(90.0));
        ed.set_mode(Mode::Radial).unwrap();
        assert_eq!(
            ed.set_angle_from_pointer(1.0, 0.0, SnapDivisor::One),
            Err(EditError::ModeMismatch { expected: Mode::Linear, actual: Mode::Radial })
        );
    }

    #[test]
    fn radial_position_inputs() {
        let mut ed = editor();
        ed.set_mode(Mode::Radial).unwrap();
        ed.set_radial_position_code("br").unwrap();
        assert_eq!(ed.gradient(), "radial-gradient(circle at bottom right, red 0%, blue 100%)");
        ed.set_radial_position_str("circle at top center").unwrap();
        assert_eq!(ed.radial_position(), Some(RadialPosition::TopCenter));
        assert!(ed.set_radial_position_str("circle at 10px 10px").is_err());
        assert!(ed.set_radial_position_code("zz").is_err());
        assert_eq!(ed.radial_position(), Some(RadialPosition::TopCenter));
    }

    // ── Import ────────────────────────────────────────────────────────────

    #[test]
    fn import_without_modifier_points_down() {
        let mut ed = editor();
        ed.set_linear_angle_degrees(33.0).unwrap();
        ed.set_gradient("linear-gradient(red, blue)").unwrap();
        assert_eq!(ed.linear_angle(), Some(LinearAngle::Direction(Direction::ToBottom)));
    }

    #[test]
    fn import_respects_allowed_modes() {
        let mut ed = StopEditor::new(PickerConfig::new().allowed_modes([Mode::Linear])).unwrap();
        let before = ed.gradient();
        assert_eq!(
            ed.set_gradient("conic-gradient(red, blue)").unwrap_err(),
            EditError::Parse(ParseError::UnsupportedMode(Mode::Conic))
        );
        assert_eq!(ed.gradient(), before);
    }

    #[test]
    fn import_radial_position() {
        let mut ed = editor();
        ed.set_gradient("radial-gradient(circle at left, #fff 10%, #000)").unwrap();
        assert_eq!(ed.mode(), Mode::Radial);
        assert_eq!(ed.gradient(), "radial-gradient(circle at left, #fff 10%, #000 100%)");
    }
}
