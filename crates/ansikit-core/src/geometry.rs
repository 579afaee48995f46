#![forbid(unsafe_code)]

//! Cursor position reports.
//!
//! A terminal answers `ESC [ 6 n` with `ESC [ <row> ; <column> R`, both
//! 1-indexed decimal integers.

use std::fmt;

use crate::error::ProtocolError;

const REPORT_PREFIX: &[u8] = b"\x1b[";
const REPORT_TERMINATOR: u8 = b'R';

/// A 1-indexed cursor position, or a terminal size when the cursor has been
/// pushed into the bottom-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    /// Row, counted from 1.
    pub row: u32,
    /// Column, counted from 1.
    pub column: u32,
}

impl Geometry {
    /// Create a geometry.
    #[inline]
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.column, self.row)
    }
}

/// Parse a cursor position report.
///
/// Surrounding ASCII whitespace is ignored, as is anything after the `R`.
/// Both numbers must be positive and fit in `u32`.
///
/// ```
/// use ansikit_core::geometry::{parse_cursor_report, Geometry};
///
/// assert_eq!(parse_cursor_report(b"\x1b[24;80R"), Ok(Geometry::new(24, 80)));
/// assert!(parse_cursor_report(b"\x1b[24;80").is_err());
/// ```
pub fn parse_cursor_report(bytes: &[u8]) -> Result<Geometry, ProtocolError> {
    let bytes = bytes.trim_ascii();
    if bytes.is_empty() {
        return Err(ProtocolError::NoResponse);
    }
    let rest = bytes
        .strip_prefix(REPORT_PREFIX)
        .ok_or(ProtocolError::MissingPrefix)?;

    let (row, rest) = split_number(rest).ok_or(ProtocolError::MissingRow)?;
    let row = parse_number(row)?;

    let rest = match rest.split_first() {
        Some((b';', rest)) => rest,
        Some(_) => return Err(ProtocolError::MissingSeparator),
        None => return Err(ProtocolError::MissingTerminator),
    };

    let (column, rest) = split_number(rest).ok_or(ProtocolError::MissingColumn)?;
    let column = parse_number(column)?;

    match rest.first() {
        Some(&REPORT_TERMINATOR) => Ok(Geometry { row, column }),
        Some(&other) => Err(ProtocolError::UnexpectedTerminator(other)),
        None => Err(ProtocolError::MissingTerminator),
    }
}

/// Whether `buf` ends with a report terminator, i.e. a read can stop.
#[inline]
#[must_use]
pub fn is_report_complete(buf: &[u8]) -> bool {
    buf.last() == Some(&REPORT_TERMINATOR)
}

/// Split a leading run of ASCII digits off `bytes`.
fn split_number(bytes: &[u8]) -> Option<(&[u8], &[u8])> {
    let len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }
    Some(bytes.split_at(len))
}

fn parse_number(digits: &[u8]) -> Result<u32, ProtocolError> {
    // Digits only, so UTF-8 conversion cannot fail.
    let value: u32 = std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or(ProtocolError::InvalidNumber)?;
    if value == 0 {
        return Err(ProtocolError::InvalidNumber);
    }
    Ok(value)
}
