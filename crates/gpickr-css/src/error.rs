use thiserror::Error;

use crate::gradient::Mode;

/// A failure to read a gradient declaration.
///
/// Parsing never partially applies: callers holding a model keep it as-is
/// when they receive one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The outer `<type>-gradient(...)` shape, or a token inside it, is unrecognized.
    #[error("malformed gradient at byte {offset}: {message}")]
    MalformedSyntax { offset: usize, message: String },
    /// A stop segment starts with something that is not a color.
    #[error("invalid color {0:?}")]
    InvalidColor(String),
    /// Fewer than two stops could be resolved.
    #[error("a gradient needs at least 2 stops, found {0}")]
    InsufficientStops(usize),
    /// The gradient type is not accepted by the caller.
    #[error("gradient mode {0} is not allowed here")]
    UnsupportedMode(Mode),
    /// Angle or position modifier outside the keyword tables.
    #[error("invalid direction {0:?}")]
    InvalidDirection(String),
}

impl ParseError {
    pub(crate) fn malformed(offset: usize, message: impl Into<String>) -> Self {
        Self::MalformedSyntax { offset, message: message.into() }
    }
}

/// Why a color token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty color")]
    Empty,
    #[error("{0:?} is not a hex color (#rgb, #rgba, #rrggbb or #rrggbbaa)")]
    InvalidHex(String),
    #[error("{0:?} is not a named color")]
    UnknownName(String),
    #[error("{0:?} is not a color function")]
    UnknownFunction(String),
    #[error("bad arguments to {name}(): {reason}")]
    InvalidArguments { name: String, reason: String },
    #[error("{0:?} is not a single color token")]
    NotAColor(String),
}

impl From<ColorError> for ParseError {
    fn from(err: ColorError) -> Self {
        let token = match err {
            ColorError::Empty => String::new(),
            ColorError::InvalidHex(s)
            | ColorError::UnknownName(s)
            | ColorError::UnknownFunction(s)
            | ColorError::NotAColor(s) => s,
            ColorError::InvalidArguments { name, .. } => name,
        };
        ParseError::InvalidColor(token)
    }
}
