#![forbid(unsafe_code)]
//! ansikit public facade crate.
//!
//! Re-exports the escape-sequence toolkit from `ansikit-core` and the
//! terminal geometry query from `ansikit-tty`, plus a prelude for everyday
//! use.
//!
//! ```
//! use ansikit::prelude::*;
//!
//! let mut buffer = Buffer::new();
//! buffer.bold(true).foreground(Color::RED).line("ready");
//! assert_eq!(buffer.as_string(), "\x1b[1m\x1b[38;5;9mready\x1b[0m\r\n");
//! ```

// --- Core re-exports -------------------------------------------------------

pub use ansikit_core::ansi;
pub use ansikit_core::buffer::{Buffer, Stream};
pub use ansikit_core::color::Color;
pub use ansikit_core::encode::{encode, encode_to};
pub use ansikit_core::error::{Error, ProtocolError, Result, ValidationError};
pub use ansikit_core::geometry::{Geometry, parse_cursor_report};
pub use ansikit_core::token::{Control, Count, EraseDisplay, EraseLine, Final, Token};

#[cfg(feature = "tracing-json")]
pub use ansikit_core::logging::init_json_subscriber;

// --- Terminal re-exports ---------------------------------------------------

pub use ansikit_tty::{LineDiscipline, ModeGuard, QueryOptions, query_geometry_with};
#[cfg(unix)]
pub use ansikit_tty::{TtyDiscipline, query_geometry, query_tty};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Buffer, Color, Control, Count, Error, Final, Geometry, QueryOptions, Result, Stream,
        Token, ansi, encode,
    };
    #[cfg(unix)]
    pub use crate::query_geometry;
    pub use crate::{core, tty};
}

pub use ansikit_core as core;
pub use ansikit_tty as tty;
