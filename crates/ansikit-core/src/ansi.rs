#![forbid(unsafe_code)]

//! Convenience sequences.
//!
//! One function per escape sequence, each returning the encoded string.
//! Movement and scroll helpers take signed counts so that negative input is
//! reported as a [`ValidationError`] instead of being silently wrapped; a
//! zero count yields an empty string.
//!
//! ```
//! use ansikit_core::ansi;
//! use ansikit_core::color::Color;
//!
//! let s = format!("{}{}ok{}", ansi::bold(true), ansi::foreground(Color::LIME), ansi::reset_style());
//! assert_eq!(s, "\x1b[1m\x1b[38;5;10mok\x1b[0m");
//! ```

use std::borrow::Borrow;

use crate::color::Color;
use crate::encode::encode;
use crate::error::ValidationError;
use crate::token::{
    Control, Count, EraseDisplay, EraseLine, SGR_BLINK, SGR_BOLD, SGR_ITALIC, SGR_UNDERLINE,
    Token,
};

/// Encode an arbitrary token list.
#[must_use]
pub fn sequence<I, T>(tokens: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Borrow<Token>,
{
    encode(tokens)
}

/// Plain text, unmodified.
#[must_use]
pub fn text(text: &str) -> String {
    text.to_owned()
}

/// Text followed by a style reset, carriage return, and line feed.
#[must_use]
pub fn line(text: &str) -> String {
    encode([
        Token::raw(text),
        Token::reset_style(),
        Control::CarriageReturn.into(),
        Control::LineFeed.into(),
    ])
}

/// Bell: `0x07`
#[must_use]
pub fn bell() -> String {
    Control::Bell.as_str().to_owned()
}

/// Backspace: `0x08`
#[must_use]
pub fn backspace() -> String {
    Control::Backspace.as_str().to_owned()
}

/// Tab: `\t`
#[must_use]
pub fn tab() -> String {
    Control::Tab.as_str().to_owned()
}

/// Line feed: `\n`
#[must_use]
pub fn line_feed() -> String {
    Control::LineFeed.as_str().to_owned()
}

/// Carriage return: `\r`
#[must_use]
pub fn carriage_return() -> String {
    Control::CarriageReturn.as_str().to_owned()
}

fn counted(cells: i64, build: fn(Count) -> Option<Token>) -> Result<String, ValidationError> {
    let count = Count::try_from(cells)?;
    Ok(encode(build(count)))
}

/// Move cursor up: `CSI n A`
pub fn cursor_up(cells: i64) -> Result<String, ValidationError> {
    counted(cells, Token::cursor_up)
}

/// Move cursor down: `CSI n B`
pub fn cursor_down(cells: i64) -> Result<String, ValidationError> {
    counted(cells, Token::cursor_down)
}

/// Move cursor forward (right): `CSI n C`
pub fn cursor_forward(cells: i64) -> Result<String, ValidationError> {
    counted(cells, Token::cursor_forward)
}

/// Move cursor back (left): `CSI n D`
pub fn cursor_back(cells: i64) -> Result<String, ValidationError> {
    counted(cells, Token::cursor_back)
}

/// Move to the start of the line `n` rows down: `CSI n E`
pub fn cursor_next_line(cells: i64) -> Result<String, ValidationError> {
    counted(cells, Token::cursor_next_line)
}

/// Move to the start of the line `n` rows up: `CSI n F`
pub fn cursor_previous_line(cells: i64) -> Result<String, ValidationError> {
    counted(cells, Token::cursor_previous_line)
}

/// CUP: `CSI row ; col H`, values passed through verbatim.
#[must_use]
pub fn cursor_position(row: i64, column: i64) -> String {
    encode([Token::cursor_position(row, column)])
}

/// Erase the whole screen: `CSI 2 J`
#[must_use]
pub fn erase_screen() -> String {
    encode([Token::erase_display(EraseDisplay::All)])
}

/// Erase from the cursor to the end of the screen: `CSI 0 J`
#[must_use]
pub fn erase_to_end_of_screen() -> String {
    encode([Token::erase_display(EraseDisplay::ToEnd)])
}

/// Erase from the start of the screen to the cursor: `CSI 1 J`
#[must_use]
pub fn erase_from_start_of_screen() -> String {
    encode([Token::erase_display(EraseDisplay::FromStart)])
}

/// Erase the scrollback: `CSI 3 J`
#[must_use]
pub fn erase_saved_lines() -> String {
    encode([Token::erase_display(EraseDisplay::SavedLines)])
}

/// Erase the current line: `CSI 2 K`
#[must_use]
pub fn erase_line() -> String {
    encode([Token::erase_line(EraseLine::All)])
}

/// Erase from the cursor to the end of the line: `CSI 0 K`
#[must_use]
pub fn erase_to_end_of_line() -> String {
    encode([Token::erase_line(EraseLine::ToEnd)])
}

/// Erase from the start of the line to the cursor: `CSI 1 K`
#[must_use]
pub fn erase_from_start_of_line() -> String {
    encode([Token::erase_line(EraseLine::FromStart)])
}

/// Scroll up, adding new lines at the bottom: `CSI n S`
pub fn scroll_up(lines: i64) -> Result<String, ValidationError> {
    counted(lines, Token::scroll_up)
}

/// Scroll down, adding new lines at the top: `CSI n T`
pub fn scroll_down(lines: i64) -> Result<String, ValidationError> {
    counted(lines, Token::scroll_down)
}

/// SGR reset: `CSI 0 m`
#[must_use]
pub fn reset_style() -> String {
    encode([Token::reset_style()])
}

/// Bold on (`CSI 1 m`) or normal intensity (`CSI 22 m`).
#[must_use]
pub fn bold(enable: bool) -> String {
    encode([Token::sgr_toggle(SGR_BOLD, enable)])
}

/// Italic on (`CSI 3 m`) or off (`CSI 23 m`).
#[must_use]
pub fn italic(enable: bool) -> String {
    encode([Token::sgr_toggle(SGR_ITALIC, enable)])
}

/// Underline on (`CSI 4 m`) or off (`CSI 24 m`).
#[must_use]
pub fn underline(enable: bool) -> String {
    encode([Token::sgr_toggle(SGR_UNDERLINE, enable)])
}

/// Blink on (`CSI 5 m`) or off (`CSI 25 m`).
#[must_use]
pub fn blink(enable: bool) -> String {
    encode([Token::sgr_toggle(SGR_BLINK, enable)])
}

/// 256-color foreground: `CSI 38 ; 5 ; n m`
#[must_use]
pub fn foreground(color: Color) -> String {
    encode([Token::foreground(color)])
}

/// 256-color background: `CSI 48 ; 5 ; n m`
#[must_use]
pub fn background(color: Color) -> String {
    encode([Token::background(color)])
}

/// Cursor position request: `CSI 6 n`
#[must_use]
pub fn device_status_report() -> String {
    encode([Token::device_status_report()])
}
