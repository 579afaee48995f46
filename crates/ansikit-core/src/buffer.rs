#![forbid(unsafe_code)]

//! Append-only output buffers.
//!
//! [`Buffer`] accumulates encoded fragments and writes them to a sink on
//! [`Buffer::flush`]. [`Stream`] is a buffer that owns its sink. Neither
//! does any locking; they are meant for a single owner.
//!
//! ```
//! use ansikit_core::buffer::Buffer;
//! use ansikit_core::color::Color;
//!
//! let mut out = Vec::new();
//! let mut buffer = Buffer::new();
//! buffer.bold(true).foreground(Color::RED).text("alert").reset_style();
//! buffer.cursor_up(2)?.line("");
//! buffer.flush(&mut out)?;
//!
//! assert!(buffer.is_empty());
//! assert_eq!(out, b"\x1b[1m\x1b[38;5;9malert\x1b[0m\x1b[2A\x1b[0m\r\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

use crate::ansi;
use crate::color::Color;
use crate::error::ValidationError;
use crate::token::Token;

/// Accumulates encoded sequences until flushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    chunks: Vec<String>,
}

impl Buffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, chunk: String) -> &mut Self {
        self.chunks.push(chunk);
        self
    }

    fn push_counted(
        &mut self,
        chunk: Result<String, ValidationError>,
    ) -> Result<&mut Self, ValidationError> {
        Ok(self.push(chunk?))
    }

    /// Append an encoded token list.
    pub fn sequence<I, T>(&mut self, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Borrow<Token>,
    {
        self.push(ansi::sequence(tokens))
    }

    /// Append plain text.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.push(ansi::text(text))
    }

    /// Append text, a style reset, and CR LF.
    pub fn line(&mut self, text: &str) -> &mut Self {
        self.push(ansi::line(text))
    }

    /// Append a bell.
    pub fn bell(&mut self) -> &mut Self {
        self.push(ansi::bell())
    }

    /// Append a backspace.
    pub fn backspace(&mut self) -> &mut Self {
        self.push(ansi::backspace())
    }

    /// Append a tab.
    pub fn tab(&mut self) -> &mut Self {
        self.push(ansi::tab())
    }

    /// Append a line feed.
    pub fn line_feed(&mut self) -> &mut Self {
        self.push(ansi::line_feed())
    }

    /// Append a carriage return.
    pub fn carriage_return(&mut self) -> &mut Self {
        self.push(ansi::carriage_return())
    }

    /// Append CUU.
    pub fn cursor_up(&mut self, cells: i64) -> Result<&mut Self, ValidationError> {
        self.push_counted(ansi::cursor_up(cells))
    }

    /// Append CUD.
    pub fn cursor_down(&mut self, cells: i64) -> Result<&mut Self, ValidationError> {
        self.push_counted(ansi::cursor_down(cells))
    }

    /// Append CUF.
    pub fn cursor_forward(&mut self, cells: i64) -> Result<&mut Self, ValidationError> {
        self.push_counted(ansi::cursor_forward(cells))
    }

    /// Append CUB.
    pub fn cursor_back(&mut self, cells: i64) -> Result<&mut Self, ValidationError> {
        self.push_counted(ansi::cursor_back(cells))
    }

    /// Append CNL.
    pub fn cursor_next_line(&mut self, cells: i64) -> Result<&mut Self, ValidationError> {
        self.push_counted(ansi::cursor_next_line(cells))
    }

    /// Append CPL.
    pub fn cursor_previous_line(&mut self, cells: i64) -> Result<&mut Self, ValidationError> {
        self.push_counted(ansi::cursor_previous_line(cells))
    }

    /// Append CUP.
    pub fn cursor_position(&mut self, row: i64, column: i64) -> &mut Self {
        self.push(ansi::cursor_position(row, column))
    }

    /// Append ED 2.
    pub fn erase_screen(&mut self) -> &mut Self {
        self.push(ansi::erase_screen())
    }

    /// Append ED 0.
    pub fn erase_to_end_of_screen(&mut self) -> &mut Self {
        self.push(ansi::erase_to_end_of_screen())
    }

    /// Append ED 1.
    pub fn erase_from_start_of_screen(&mut self) -> &mut Self {
        self.push(ansi::erase_from_start_of_screen())
    }

    /// Append ED 3.
    pub fn erase_saved_lines(&mut self) -> &mut Self {
        self.push(ansi::erase_saved_lines())
    }

    /// Append EL 2.
    pub fn erase_line(&mut self) -> &mut Self {
        self.push(ansi::erase_line())
    }

    /// Append EL 0.
    pub fn erase_to_end_of_line(&mut self) -> &mut Self {
        self.push(ansi::erase_to_end_of_line())
    }

    /// Append EL 1.
    pub fn erase_from_start_of_line(&mut self) -> &mut Self {
        self.push(ansi::erase_from_start_of_line())
    }

    /// Append SU.
    pub fn scroll_up(&mut self, lines: i64) -> Result<&mut Self, ValidationError> {
        self.push_counted(ansi::scroll_up(lines))
    }

    /// Append SD.
    pub fn scroll_down(&mut self, lines: i64) -> Result<&mut Self, ValidationError> {
        self.push_counted(ansi::scroll_down(lines))
    }

    /// Append an SGR reset.
    pub fn reset_style(&mut self) -> &mut Self {
        self.push(ansi::reset_style())
    }

    /// Append bold on/off.
    pub fn bold(&mut self, enable: bool) -> &mut Self {
        self.push(ansi::bold(enable))
    }

    /// Append italic on/off.
    pub fn italic(&mut self, enable: bool) -> &mut Self {
        self.push(ansi::italic(enable))
    }

    /// Append underline on/off.
    pub fn underline(&mut self, enable: bool) -> &mut Self {
        self.push(ansi::underline(enable))
    }

    /// Append blink on/off.
    pub fn blink(&mut self, enable: bool) -> &mut Self {
        self.push(ansi::blink(enable))
    }

    /// Append a 256-color foreground.
    pub fn foreground(&mut self, color: Color) -> &mut Self {
        self.push(ansi::foreground(color))
    }

    /// Append a 256-color background.
    pub fn background(&mut self, color: Color) -> &mut Self {
        self.push(ansi::background(color))
    }

    /// Drop everything buffered so far.
    pub fn clear(&mut self) -> &mut Self {
        self.chunks.clear();
        self
    }

    /// Number of buffered fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The buffered fragments concatenated in order.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.chunks.concat()
    }

    /// Write the buffered bytes to `to`, then clear.
    ///
    /// If a write fails the buffer keeps every fragment, including any that
    /// already reached `to`, so flushing again may repeat output.
    pub fn flush<W: Write + ?Sized>(&mut self, to: &mut W) -> io::Result<&mut Self> {
        for chunk in &self.chunks {
            to.write_all(chunk.as_bytes())?;
        }
        to.flush()?;
        Ok(self.clear())
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in &self.chunks {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

/// A [`Buffer`] bound to the sink it flushes into.
///
/// Dereferences to the buffer, so every builder method is available.
#[derive(Debug)]
pub struct Stream<W: Write = io::Stdout> {
    buffer: Buffer,
    sink: W,
}

impl Stream<io::Stdout> {
    /// A stream that flushes to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for Stream<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> Stream<W> {
    /// Wrap a sink.
    pub fn new(sink: W) -> Self {
        Self {
            buffer: Buffer::new(),
            sink,
        }
    }

    /// Write the buffered bytes to the sink, then clear.
    pub fn flush(&mut self) -> io::Result<&mut Self> {
        self.buffer.flush(&mut self.sink)?;
        Ok(self)
    }

    /// The sink.
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Consume the stream, discarding unflushed output, and return the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }
}

impl<W: Write> Deref for Stream<W> {
    type Target = Buffer;

    fn deref(&self) -> &Buffer {
        &self.buffer
    }
}

impl<W: Write> DerefMut for Stream<W> {
    fn deref_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Control;

    #[test]
    fn text_and_line() {
        let mut buffer = Buffer::new();
        buffer.text("test text");
        assert_eq!(buffer.as_string(), "test text");

        let mut buffer = Buffer::new();
        buffer.line("t");
        assert_eq!(buffer.as_string(), "t\x1b[0m\r\n");
    }

    #[test]
    fn chains_in_order() {
        let mut buffer = Buffer::new();
        buffer
            .bell()
            .backspace()
            .tab()
            .line_feed()
            .carriage_return()
            .cursor_position(3, 4)
            .erase_screen()
            .erase_line()
            .italic(true)
            .underline(false)
            .blink(true)
            .background(Color::NAVY);
        assert_eq!(
            buffer.to_string(),
            "\x07\x08\t\n\r\x1b[3;4H\x1b[2J\x1b[2K\x1b[3m\x1b[24m\x1b[5m\x1b[48;5;4m"
        );
        assert_eq!(buffer.len(), 12);
    }

    #[test]
    fn validated_methods_chain() {
        let mut buffer = Buffer::new();
        buffer
            .cursor_up(1)
            .and_then(|b| b.cursor_down(0))
            .and_then(|b| b.scroll_up(2))
            .unwrap();
        assert_eq!(buffer.as_string(), "\x1b[1A\x1b[2S");
    }

    #[test]
    fn validation_error_leaves_buffer_untouched() {
        let mut buffer = Buffer::new();
        buffer.text("keep");
        assert_eq!(
            buffer.cursor_back(-1).err(),
            Some(ValidationError::NegativeCount { value: -1 })
        );
        assert_eq!(buffer.as_string(), "keep");
    }

    #[test]
    fn erase_variants() {
        let mut buffer = Buffer::new();
        buffer
            .erase_to_end_of_screen()
            .erase_from_start_of_screen()
            .erase_saved_lines()
            .erase_to_end_of_line()
            .erase_from_start_of_line();
        assert_eq!(buffer.as_string(), "\x1b[0J\x1b[1J\x1b[3J\x1b[0K\x1b[1K");
    }

    #[test]
    fn sequence_appends_tokens() {
        let mut buffer = Buffer::new();
        buffer.sequence([Token::raw("a"), Control::Escape.into()]);
        assert_eq!(buffer.as_string(), "a\x1b");
    }

    #[test]
    fn flush_writes_and_clears() {
        let mut out = Vec::new();
        let mut buffer = Buffer::new();
        buffer.text("a").bold(true);
        buffer.flush(&mut out).unwrap();
        assert_eq!(out, b"a\x1b[1m");
        assert!(buffer.is_empty());

        buffer.flush(&mut out).unwrap();
        assert_eq!(out, b"a\x1b[1m");
    }

    #[test]
    fn clear_discards() {
        let mut buffer = Buffer::new();
        buffer.text("x").clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.as_string(), "");
    }

    #[test]
    fn stream_flushes_into_own_sink() {
        let mut stream = Stream::new(Vec::new());
        stream.foreground(Color::RED).text("hi");
        assert_eq!(stream.len(), 2);
        stream.flush().unwrap();
        assert!(stream.is_empty());
        assert_eq!(stream.sink().as_slice(), b"\x1b[38;5;9mhi");

        stream.text("!");
        let sink = stream.into_sink();
        assert_eq!(sink, b"\x1b[38;5;9mhi");
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_flush_keeps_contents() {
        let mut buffer = Buffer::new();
        buffer.text("pending");
        assert!(buffer.flush(&mut FailingSink).is_err());
        assert_eq!(buffer.as_string(), "pending");
    }

    /// Accepts `budget` writes, then fails.
    struct ShortSink {
        budget: usize,
        written: Vec<u8>,
    }

    impl Write for ShortSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.budget -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn partial_flush_keeps_delivered_fragments() {
        let mut sink = ShortSink {
            budget: 1,
            written: Vec::new(),
        };
        let mut buffer = Buffer::new();
        buffer.text("first").text("second");
        assert!(buffer.flush(&mut sink).is_err());
        assert_eq!(sink.written, b"first");
        assert_eq!(buffer.as_string(), "firstsecond");
    }
}
