use gpickr_css::{ColorError, Mode, ParseError};
use thiserror::Error;

/// Why an edit was refused. A refused edit never touches the model and
/// never notifies listeners.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("no such stop")]
    StopNotFound,
    /// The model always keeps at least one stop.
    #[error("cannot remove the last remaining stop")]
    LastStop,
    #[error("a stop list needs at least one stop")]
    EmptyStops,
    #[error("no stop is focused")]
    NoFocusedStop,
    #[error("mode {0} is not allowed in this session")]
    UnsupportedMode(Mode),
    #[error("at least one gradient mode must be allowed")]
    NoAllowedModes,
    #[error("invalid direction {0:?}")]
    InvalidDirection(String),
    #[error("angle {0} is not a finite number of degrees")]
    InvalidAngle(f32),
    #[error("operation needs {expected} mode, session is {actual}")]
    ModeMismatch { expected: Mode, actual: Mode },
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
