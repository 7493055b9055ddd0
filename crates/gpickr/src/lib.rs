//! gpickr — interactive editing of multi-stop CSS gradients.
//!
//! # Quick start
//!
//! ```rust
//! use gpickr::prelude::*;
//!
//! let mut editor = StopEditor::new(PickerConfig::new()).unwrap();
//! editor.on_change(|_, event| println!("now: {}", event.gradient));
//! editor.init();
//!
//! assert!(editor.set_gradient("linear-gradient(45deg, red 0%, blue 100%)").is_ok());
//! editor.add_stop(ColorToken::parse("lime").unwrap(), 0.5);
//! assert_eq!(editor.gradient(), "linear-gradient(45deg, red 0%, lime 50%, blue 100%)");
//!
//! editor.set_mode(Mode::Conic).unwrap();
//! assert_eq!(editor.gradient(), "conic-gradient(red 0deg, lime 180deg, blue 360deg)");
//! ```
//!
//! # Pieces
//!
//! - [`StopEditor`] owns the [`GradientModel`] and performs every edit.
//! - [`event`] defines the init / change / color-change channels.
//! - [`drag`] turns pointer gestures into relocations or removals.
//! - [`ColorPicker`] is the seam to the color-selection widget.
//! - Parsing and serialization live in the `gpickr-css` crate, re-exported here.

pub mod config;
pub mod drag;
pub mod editor;
pub mod error;
pub mod event;
pub mod logging;
pub mod model;
pub mod picker;

pub use config::PickerConfig;
pub use editor::StopEditor;
pub use error::EditError;
pub use model::{AllowedModes, GradientModel, Stop, StopHandle, StopList};
pub use picker::ColorPicker;

pub use gpickr_css::{
    ColorError, ColorStop, ColorToken, Direction, LinearAngle, Mode, ParseError, RadialPosition,
    SnapDivisor,
};

/// Everything an embedder needs — import this in your widget glue.
pub mod prelude {
    pub use crate::config::PickerConfig;
    pub use crate::drag::{DragOutcome, DragSession, DRAG_REMOVE_DISTANCE};
    pub use crate::editor::StopEditor;
    pub use crate::error::EditError;
    pub use crate::event::{ChangeEvent, ListenerId};
    pub use crate::model::{AllowedModes, Stop, StopHandle, StopList};
    pub use crate::picker::ColorPicker;

    pub use gpickr_css::{
        ColorToken, Direction, LinearAngle, Mode, ParseError, RadialPosition, SnapDivisor,
    };
}
