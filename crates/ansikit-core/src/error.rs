#![forbid(unsafe_code)]

//! Error types shared by every ansikit crate.
//!
//! Validation failures are caller contract violations and surface before any
//! output is produced. Protocol failures come from a malformed or missing
//! cursor position report. Resource failures mean the terminal mode
//! primitives themselves failed.

use std::fmt;
use std::io;

/// A caller-supplied value was rejected before anything was encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Movement and scroll counts must be non-negative.
    NegativeCount {
        /// The rejected value.
        value: i64,
    },
    /// Palette indices must lie in `0..=255`.
    ColorOutOfRange {
        /// The rejected value.
        value: i64,
    },
    /// No palette entry carries this name.
    UnknownColorName(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeCount { value } => {
                write!(f, "count must be >= 0, got {value}")
            }
            Self::ColorOutOfRange { value } => {
                write!(f, "color index must be within 0..=255, got {value}")
            }
            Self::UnknownColorName(name) => write!(f, "unknown color name: {name:?}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// The terminal's cursor position report was absent or malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// The terminal produced no bytes before EOF or the read timeout.
    NoResponse,
    /// The response does not start with `ESC [`.
    MissingPrefix,
    /// No digits where the row was expected.
    MissingRow,
    /// The row is not followed by `;`.
    MissingSeparator,
    /// No digits where the column was expected.
    MissingColumn,
    /// A number was zero or did not fit in `u32`.
    InvalidNumber,
    /// The response ended before the `R` terminator.
    MissingTerminator,
    /// The response ended with a byte other than `R`.
    UnexpectedTerminator(u8),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoResponse => write!(f, "terminal did not answer the cursor position request"),
            Self::MissingPrefix => write!(f, "cursor report does not start with ESC ["),
            Self::MissingRow => write!(f, "cursor report is missing the row"),
            Self::MissingSeparator => write!(f, "cursor report is missing the ';' separator"),
            Self::MissingColumn => write!(f, "cursor report is missing the column"),
            Self::InvalidNumber => write!(f, "cursor report contains an invalid number"),
            Self::MissingTerminator => write!(f, "cursor report is missing the 'R' terminator"),
            Self::UnexpectedTerminator(byte) => {
                write!(f, "cursor report ends with {byte:#04x} instead of 'R'")
            }
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Top-level error type for ansikit operations.
#[derive(Debug)]
pub enum Error {
    /// Invalid argument, rejected before any I/O.
    Validation(ValidationError),
    /// The operation requires an interactive terminal.
    Precondition(String),
    /// Malformed or missing cursor position report.
    Protocol(ProtocolError),
    /// Capturing, switching, or restoring the terminal mode failed.
    Resource(io::Error),
    /// Writing the request or reading the response failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Precondition(msg) => write!(f, "{msg}"),
            Self::Protocol(err) => write!(f, "{err}"),
            Self::Resource(err) => write!(f, "terminal mode: {err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Precondition(_) => None,
            Self::Protocol(err) => Some(err),
            Self::Resource(err) | Self::Io(err) => Some(err),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<ProtocolError> for Error {
    fn from(err: ProtocolError) -> Self {
        Self::Protocol(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for ansikit APIs.
pub type Result<T> = std::result::Result<T, Error>;
