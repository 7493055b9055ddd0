use gpickr_css::ColorToken;

/// The color-selection widget bound to the focused stop.
///
/// The editor calls [`ColorPicker::show_color`] whenever focus moves to a
/// stop, so the picker can display that stop's color. Colors travel back the
/// other way through [`crate::StopEditor::set_focused_color`].
pub trait ColorPicker {
    fn show_color(&mut self, color: &ColorToken);
}

impl<F> ColorPicker for F
where
    F: FnMut(&ColorToken),
{
    fn show_color(&mut self, color: &ColorToken) {
        self(color)
    }
}
