#![forbid(unsafe_code)]

//! Core: escape-sequence tokens, the encoder, the 256-color palette,
//! output buffers, and cursor position report parsing.
//!
//! Nothing in this crate touches a terminal. See `ansikit-tty` for the
//! mode controller and the geometry query.

pub mod ansi;
pub mod buffer;
pub mod color;
pub mod encode;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod token;

pub use color::Color;
pub use error::{Error, ProtocolError, Result, ValidationError};
pub use geometry::Geometry;
pub use token::{Control, Count, Final, Token};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};
