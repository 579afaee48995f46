#![forbid(unsafe_code)]

//! Sequence tokens.
//!
//! A [`Token`] is one semantic instruction: raw text, a C0 control
//! character, or a CSI command with its parameters and final byte. Tokens
//! are plain values; [`crate::encode`] turns an ordered list of them into
//! bytes.
//!
//! # Sequence Reference
//!
//! | Token | Sequence | Description |
//! |-------|----------|-------------|
//! | [`Token::cursor_up`] | `ESC [ n A` | CUU |
//! | [`Token::cursor_down`] | `ESC [ n B` | CUD |
//! | [`Token::cursor_forward`] | `ESC [ n C` | CUF |
//! | [`Token::cursor_back`] | `ESC [ n D` | CUB |
//! | [`Token::cursor_next_line`] | `ESC [ n E` | CNL |
//! | [`Token::cursor_previous_line`] | `ESC [ n F` | CPL |
//! | [`Token::cursor_position`] | `ESC [ row ; col H` | CUP |
//! | [`Token::erase_display`] | `ESC [ n J` | ED |
//! | [`Token::erase_line`] | `ESC [ n K` | EL |
//! | [`Token::scroll_up`] | `ESC [ n S` | SU |
//! | [`Token::scroll_down`] | `ESC [ n T` | SD |
//! | [`Token::sgr`] | `ESC [ n m` | SGR |
//! | [`Token::device_status_report`] | `ESC [ 6 n` | DSR (cursor position) |
//! | [`Token::cursor_position_report`] | `ESC [ row ; col R` | CPR (terminal reply) |

use crate::color::Color;
use crate::error::ValidationError;

/// C0 control characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Audible bell (`0x07`).
    Bell,
    /// Move the cursor back one cell (`0x08`).
    Backspace,
    /// Horizontal tab (`0x09`).
    Tab,
    /// Line feed (`0x0A`). Scrolls when the cursor is on the last row.
    LineFeed,
    /// Carriage return (`0x0D`). Moves to column zero.
    CarriageReturn,
    /// Escape (`0x1B`). Starts every escape sequence.
    Escape,
}

impl Control {
    /// The control byte.
    #[must_use]
    pub const fn byte(self) -> u8 {
        match self {
            Self::Bell => 0x07,
            Self::Backspace => 0x08,
            Self::Tab => b'\t',
            Self::LineFeed => b'\n',
            Self::CarriageReturn => b'\r',
            Self::Escape => 0x1b,
        }
    }

    /// The control byte as a one-character string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bell => "\x07",
            Self::Backspace => "\x08",
            Self::Tab => "\t",
            Self::LineFeed => "\n",
            Self::CarriageReturn => "\r",
            Self::Escape => "\x1b",
        }
    }
}

/// CSI final bytes used by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Final {
    /// CUU `A`
    CursorUp,
    /// CUD `B`
    CursorDown,
    /// CUF `C`
    CursorForward,
    /// CUB `D`
    CursorBack,
    /// CNL `E`
    CursorNextLine,
    /// CPL `F`
    CursorPreviousLine,
    /// CUP `H`
    CursorPosition,
    /// ED `J`
    EraseInDisplay,
    /// EL `K`
    EraseInLine,
    /// SU `S`
    ScrollUp,
    /// SD `T`
    ScrollDown,
    /// SGR `m`
    Sgr,
    /// DSR `n`
    DeviceStatusReport,
    /// CPR `R`
    CursorPositionReport,
}

impl Final {
    /// The final byte.
    #[must_use]
    pub const fn byte(self) -> u8 {
        match self {
            Self::CursorUp => b'A',
            Self::CursorDown => b'B',
            Self::CursorForward => b'C',
            Self::CursorBack => b'D',
            Self::CursorNextLine => b'E',
            Self::CursorPreviousLine => b'F',
            Self::CursorPosition => b'H',
            Self::EraseInDisplay => b'J',
            Self::EraseInLine => b'K',
            Self::ScrollUp => b'S',
            Self::ScrollDown => b'T',
            Self::Sgr => b'm',
            Self::DeviceStatusReport => b'n',
            Self::CursorPositionReport => b'R',
        }
    }

    /// The final byte as a `char`.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.byte() as char
    }
}

/// A validated, non-negative movement or scroll count.
///
/// Built from a signed integer with [`TryFrom<i64>`]; negative values are
/// rejected with [`ValidationError::NegativeCount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Count(u64);

impl Count {
    /// A count of zero. Movement tokens with this count are elided.
    pub const ZERO: Self = Self(0);
    /// A count of one.
    pub const ONE: Self = Self(1);

    /// Create a count from an unsigned value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The wrapped value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether the count is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i64> for Count {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::NegativeCount { value })
    }
}

impl From<u16> for Count {
    fn from(value: u16) -> Self {
        Self(u64::from(value))
    }
}

impl From<u32> for Count {
    fn from(value: u32) -> Self {
        Self(u64::from(value))
    }
}

impl From<u64> for Count {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Erase-in-display (ED) targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EraseDisplay {
    /// From the cursor to the end of the screen (`0`).
    ToEnd,
    /// From the start of the screen to the cursor (`1`).
    FromStart,
    /// The whole screen (`2`).
    All,
    /// The scrollback buffer (`3`).
    SavedLines,
}

impl EraseDisplay {
    const fn param(self) -> u8 {
        match self {
            Self::ToEnd => 0,
            Self::FromStart => 1,
            Self::All => 2,
            Self::SavedLines => 3,
        }
    }
}

/// Erase-in-line (EL) targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EraseLine {
    /// From the cursor to the end of the line (`0`).
    ToEnd,
    /// From the start of the line to the cursor (`1`).
    FromStart,
    /// The whole line (`2`).
    All,
}

impl EraseLine {
    const fn param(self) -> u8 {
        match self {
            Self::ToEnd => 0,
            Self::FromStart => 1,
            Self::All => 2,
        }
    }
}

/// SGR attribute codes for a style toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SgrCodes {
    /// Enable code
    pub on: u8,
    /// Disable code
    pub off: u8,
}

impl SgrCodes {
    /// Pick the enable or disable code.
    #[must_use]
    pub const fn select(self, enable: bool) -> u8 {
        if enable { self.on } else { self.off }
    }
}

/// SGR reset code.
pub const SGR_RESET: u8 = 0;
/// SGR codes for bold (on=1, off=22).
pub const SGR_BOLD: SgrCodes = SgrCodes { on: 1, off: 22 };
/// SGR codes for italic (on=3, off=23).
pub const SGR_ITALIC: SgrCodes = SgrCodes { on: 3, off: 23 };
/// SGR codes for underline (on=4, off=24).
pub const SGR_UNDERLINE: SgrCodes = SgrCodes { on: 4, off: 24 };
/// SGR codes for blink (on=5, off=25).
pub const SGR_BLINK: SgrCodes = SgrCodes { on: 5, off: 25 };

/// SGR selector for a 256-color foreground (`38;5`).
const SGR_FG_256: [&str; 2] = ["38", "5"];
/// SGR selector for a 256-color background (`48;5`).
const SGR_BG_256: [&str; 2] = ["48", "5"];

/// DSR parameter requesting a cursor position report.
const DSR_CURSOR_POSITION: &str = "6";

/// One semantic instruction in an escape sequence stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Text passed through unmodified.
    Raw(String),
    /// A single C0 control character.
    Control(Control),
    /// `ESC [ params… final`, parameters joined with `;`.
    Csi {
        /// Parameters in emission order.
        params: Vec<String>,
        /// Final byte.
        terminator: Final,
    },
}

impl Token {
    /// Raw text token.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    /// CSI token from any displayable parameters.
    #[must_use]
    pub fn csi<I, P>(params: I, terminator: Final) -> Self
    where
        I: IntoIterator<Item = P>,
        P: ToString,
    {
        Self::Csi {
            params: params.into_iter().map(|p| p.to_string()).collect(),
            terminator,
        }
    }

    /// Relative movement; `None` for a zero count.
    fn movement(count: Count, terminator: Final) -> Option<Self> {
        if count.is_zero() {
            return None;
        }
        Some(Self::csi([count.get()], terminator))
    }

    /// CUU: move up `count` rows. `None` when `count` is zero.
    #[must_use]
    pub fn cursor_up(count: Count) -> Option<Self> {
        Self::movement(count, Final::CursorUp)
    }

    /// CUD: move down `count` rows. `None` when `count` is zero.
    #[must_use]
    pub fn cursor_down(count: Count) -> Option<Self> {
        Self::movement(count, Final::CursorDown)
    }

    /// CUF: move right `count` columns. `None` when `count` is zero.
    #[must_use]
    pub fn cursor_forward(count: Count) -> Option<Self> {
        Self::movement(count, Final::CursorForward)
    }

    /// CUB: move left `count` columns. `None` when `count` is zero.
    #[must_use]
    pub fn cursor_back(count: Count) -> Option<Self> {
        Self::movement(count, Final::CursorBack)
    }

    /// CNL: move to the start of the line `count` rows down.
    #[must_use]
    pub fn cursor_next_line(count: Count) -> Option<Self> {
        Self::movement(count, Final::CursorNextLine)
    }

    /// CPL: move to the start of the line `count` rows up.
    #[must_use]
    pub fn cursor_previous_line(count: Count) -> Option<Self> {
        Self::movement(count, Final::CursorPreviousLine)
    }

    /// SU: scroll the page up `count` lines; new lines appear at the bottom.
    #[must_use]
    pub fn scroll_up(count: Count) -> Option<Self> {
        Self::movement(count, Final::ScrollUp)
    }

    /// SD: scroll the page down `count` lines; new lines appear at the top.
    #[must_use]
    pub fn scroll_down(count: Count) -> Option<Self> {
        Self::movement(count, Final::ScrollDown)
    }

    /// CUP: absolute position, 1-indexed on the terminal side.
    ///
    /// Values are emitted verbatim, including zero and negatives; the
    /// terminal is responsible for clamping.
    #[must_use]
    pub fn cursor_position(row: i64, column: i64) -> Self {
        Self::csi([row, column], Final::CursorPosition)
    }

    /// ED: erase part of the display.
    #[must_use]
    pub fn erase_display(target: EraseDisplay) -> Self {
        Self::csi([target.param()], Final::EraseInDisplay)
    }

    /// EL: erase part of the current line.
    #[must_use]
    pub fn erase_line(target: EraseLine) -> Self {
        Self::csi([target.param()], Final::EraseInLine)
    }

    /// SGR with a single code.
    #[must_use]
    pub fn sgr(code: u8) -> Self {
        Self::csi([code], Final::Sgr)
    }

    /// SGR reset: `ESC [ 0 m`.
    #[must_use]
    pub fn reset_style() -> Self {
        Self::sgr(SGR_RESET)
    }

    /// SGR toggle: the `on` code when `enable`, otherwise the `off` code.
    #[must_use]
    pub fn sgr_toggle(codes: SgrCodes, enable: bool) -> Self {
        Self::sgr(codes.select(enable))
    }

    /// 256-color foreground: `ESC [ 38 ; 5 ; n m`.
    #[must_use]
    pub fn foreground(color: Color) -> Self {
        Self::palette(SGR_FG_256, color)
    }

    /// 256-color background: `ESC [ 48 ; 5 ; n m`.
    #[must_use]
    pub fn background(color: Color) -> Self {
        Self::palette(SGR_BG_256, color)
    }

    fn palette(selector: [&str; 2], color: Color) -> Self {
        let mut params: Vec<String> = selector.iter().map(|s| (*s).to_owned()).collect();
        params.push(color.index().to_string());
        Self::Csi {
            params,
            terminator: Final::Sgr,
        }
    }

    /// DSR: ask the terminal to report the cursor position.
    #[must_use]
    pub fn device_status_report() -> Self {
        Self::csi([DSR_CURSOR_POSITION], Final::DeviceStatusReport)
    }

    /// CPR: the reply a terminal sends to [`Token::device_status_report`].
    #[must_use]
    pub fn cursor_position_report(row: u32, column: u32) -> Self {
        Self::csi([row, column], Final::CursorPositionReport)
    }
}

impl From<Control> for Token {
    fn from(control: Control) -> Self {
        Self::Control(control)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_owned())
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}
