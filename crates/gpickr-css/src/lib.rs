//! Lexer, parser, and serializer for **CSS gradient declarations**.
//!
//! This crate holds no editing state, so validators and tooling can read and
//! write gradient strings without pulling in the editor session.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`angle`] | `LinearAngle`, `Direction`, `RadialPosition`, `pointer_to_angle` |
//! | [`color`] | `ColorToken` validation and normalization |
//! | [`error`] | `ParseError`, `ColorError` |
//! | [`gap`] | `fill_gaps` for stops written without a position |
//! | [`gradient`] | `Mode`, `ColorStop`, `Modifier`, `ParsedGradient` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_gradient` entry point |
//! | [`serialize`] | `serialize_gradient`, `stop_list` |
//!
//! # Quick start
//!
//! ```rust
//! use gpickr_css::{parse_gradient, Mode};
//!
//! let g = parse_gradient("linear-gradient(45deg, red, rgba(0, 0, 255, 1) 80%)").unwrap();
//! assert_eq!(g.mode, Mode::Linear);
//! assert_eq!(g.stops.len(), 2);
//! assert_eq!(g.to_string(), "linear-gradient(45deg, red 0%, rgba(0,0,255,1) 80%)");
//! ```

pub mod angle;
pub mod color;
pub mod error;
pub mod gap;
pub mod gradient;
pub mod lexer;
pub mod parser;
pub mod serialize;

pub use angle::{pointer_to_angle, Direction, LinearAngle, RadialPosition, SnapDivisor};
pub use color::ColorToken;
pub use error::{ColorError, ParseError};
pub use gap::fill_gaps;
pub use gradient::{ColorStop, Mode, Modifier, ParsedGradient};
pub use parser::{parse_gradient, parse_gradient_in};
pub use serialize::{format_stop, serialize_gradient, stop_list};
