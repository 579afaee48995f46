#![forbid(unsafe_code)]

//! Sequence encoder.
//!
//! Pure serialization of [`Token`]s: no state, no I/O beyond the writer the
//! caller hands in. Tokens are emitted strictly left to right.
//!
//! - `Csi` → `ESC [ p1 ; p2 ; … final`
//! - `Control` → its single byte
//! - `Raw` → the text, unescaped

use std::borrow::Borrow;
use std::fmt;
use std::io::{self, Write};

use crate::token::{Control, Token};

/// Control Sequence Introducer: `ESC [`
pub const CSI: &str = "\x1b[";

/// Parameter separator inside a CSI sequence.
const PARAM_SEPARATOR: char = ';';

/// Encode tokens into a string.
///
/// Accepts owned tokens, references, or `Option<Token>` items flattened by
/// the caller, so elided movements can be passed straight through:
///
/// ```
/// use ansikit_core::encode::encode;
/// use ansikit_core::token::{Count, Token};
///
/// let tokens = [Token::cursor_up(Count::new(2)), Token::cursor_back(Count::ZERO)];
/// assert_eq!(encode(tokens.into_iter().flatten()), "\x1b[2A");
/// ```
#[must_use]
pub fn encode<I, T>(tokens: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Borrow<Token>,
{
    let mut out = String::new();
    for token in tokens {
        // Writing into a String cannot fail.
        let _ = write_token(&mut out, token.borrow());
    }
    out
}

/// Encode tokens directly into a byte sink.
pub fn encode_to<W, I, T>(w: &mut W, tokens: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = T>,
    T: Borrow<Token>,
{
    for token in tokens {
        write!(w, "{}", token.borrow())?;
    }
    Ok(())
}

fn write_token<W: fmt::Write + ?Sized>(w: &mut W, token: &Token) -> fmt::Result {
    match token {
        Token::Raw(text) => w.write_str(text),
        Token::Control(control) => w.write_str(control.as_str()),
        Token::Csi { params, terminator } => {
            w.write_str(CSI)?;
            for (i, param) in params.iter().enumerate() {
                if i > 0 {
                    w.write_char(PARAM_SEPARATOR)?;
                }
                w.write_str(param)?;
            }
            w.write_char(terminator.as_char())
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_token(f, self)
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
