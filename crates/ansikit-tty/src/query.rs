#![forbid(unsafe_code)]

//! Terminal geometry via cursor position reports.
//!
//! The terminal is asked for the cursor position (`ESC [ 6 n`), the cursor
//! is pushed to an out-of-range cell so the terminal clamps it to the
//! bottom-right corner, the position is asked for again, and the cursor is
//! put back. The second report is the screen size.
//!
//! The exchange runs in raw mode so the reply is neither line-buffered nor
//! echoed. The previous mode is restored on every path before a result or
//! error is returned.

use std::io::{self, Read, Write};

use ansikit_core::encode::encode_to;
use ansikit_core::error::{Error, ProtocolError, Result};
use ansikit_core::geometry::{Geometry, is_report_complete, parse_cursor_report};
use ansikit_core::token::Token;
use ansikit_core::{debug, trace};

use crate::config::QueryOptions;
use crate::mode::{LineDiscipline, ModeGuard};

#[cfg(unix)]
use crate::mode::TtyDiscipline;

/// Measure the controlling terminal.
///
/// Uses [`QueryOptions::from_env`]. Blocks until the terminal answers
/// unless `ANSIKIT_DSR_TIMEOUT_MS` is set.
///
/// # Errors
///
/// [`Error::Precondition`] when the device cannot be opened or is not a
/// terminal, [`Error::Resource`] when the mode cannot be changed,
/// [`Error::Io`] when the exchange fails, and [`Error::Protocol`] when a
/// report is missing or malformed.
#[cfg(unix)]
pub fn query_geometry() -> Result<Geometry> {
    query_tty(&QueryOptions::from_env())
}

/// Measure the terminal at `options.tty_path`.
#[cfg(unix)]
pub fn query_tty(options: &QueryOptions) -> Result<Geometry> {
    let path = options.tty_path.display();
    let tty = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .open(&options.tty_path)
        .map_err(|err| Error::Precondition(format!("cannot open {path}: {err}")))?;
    let discipline = TtyDiscipline::new(tty);
    if !discipline.is_terminal() {
        return Err(not_a_terminal());
    }

    let mut input = discipline.file().try_clone()?;
    let mut output = discipline.file().try_clone()?;
    let restore_on_signal = options.restore_on_signal;
    query_geometry_while(&discipline, &mut input, &mut output, options, |saved| {
        if !restore_on_signal {
            return Ok(None);
        }
        let restorer = discipline.try_clone()?;
        let saved = saved.clone();
        let guard = crate::signal::SignalGuard::new(move || {
            let _ = restorer.set_mode(&saved);
        })?;
        Ok(Some(guard))
    })
}

/// Run the geometry exchange over caller-supplied primitives.
///
/// `input` must read what the terminal sends and `output` must reach the
/// terminal. Nothing is retried.
///
/// # Errors
///
/// See [`query_geometry`]. When both the exchange and the final mode
/// restore fail, the exchange error is returned.
pub fn query_geometry_with<D, R, W>(
    discipline: &D,
    input: &mut R,
    output: &mut W,
    options: &QueryOptions,
) -> Result<Geometry>
where
    D: LineDiscipline + ?Sized,
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    query_geometry_while(discipline, input, output, options, |_| Ok(()))
}

/// Like [`query_geometry_with`], holding whatever `while_raw` returns for as
/// long as the terminal is in raw mode.
///
/// `while_raw` receives the mode captured on entry, the same snapshot the
/// final restore writes back. If it fails, the mode is restored and its
/// error returned without any I/O.
fn query_geometry_while<D, R, W, H, F>(
    discipline: &D,
    input: &mut R,
    output: &mut W,
    options: &QueryOptions,
    while_raw: F,
) -> Result<Geometry>
where
    D: LineDiscipline + ?Sized,
    R: Read + ?Sized,
    W: Write + ?Sized,
    F: FnOnce(&D::Mode) -> Result<H>,
{
    if !discipline.is_terminal() {
        return Err(not_a_terminal());
    }

    let guard = ModeGuard::enter(discipline, options.read_timeout).map_err(Error::Resource)?;
    let held = match guard.saved().map(while_raw).transpose() {
        Ok(held) => held,
        Err(err) => {
            if let Err(_restore_err) = guard.restore() {
                ansikit_core::warn!(error = %_restore_err, "restore failed after setup error");
            }
            return Err(err);
        }
    };
    let outcome = measure(input, output, options);
    let restored = guard.restore().map_err(Error::Resource);
    drop(held);
    debug!(ok = outcome.is_ok(), restored = restored.is_ok(), "terminal mode restored");

    match (outcome, restored) {
        (Ok(size), Ok(())) => Ok(size),
        (Err(err), Err(_restore_err)) => {
            ansikit_core::warn!(error = %_restore_err, "restore failed after query error");
            Err(err)
        }
        (Err(err), Ok(())) | (Ok(_), Err(err)) => Err(err),
    }
}

fn not_a_terminal() -> Error {
    Error::Precondition("not an interactive terminal".to_string())
}

/// Baseline report, probe, size report, cursor restore.
fn measure<R, W>(input: &mut R, output: &mut W, options: &QueryOptions) -> Result<Geometry>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let baseline = request_report(input, output, options.max_response_len)?;
    debug!(row = baseline.row, column = baseline.column, "baseline cursor position");

    let (row, column) = options.probe_target;
    let size = send(output, Token::cursor_position(i64::from(row), i64::from(column)))
        .and_then(|()| request_report(input, output, options.max_response_len));

    let back = Token::cursor_position(i64::from(baseline.row), i64::from(baseline.column));
    let cursor_restored = send(output, back);

    match size {
        Ok(size) => {
            cursor_restored?;
            debug!(rows = size.row, columns = size.column, "terminal size");
            Ok(size)
        }
        Err(err) => {
            if let Err(_restore_err) = cursor_restored {
                ansikit_core::warn!(error = %_restore_err, "failed to restore cursor position");
            }
            Err(err)
        }
    }
}

fn send<W: Write + ?Sized>(output: &mut W, token: Token) -> Result<()> {
    encode_to(output, [token])?;
    output.flush()?;
    Ok(())
}

fn request_report<R, W>(input: &mut R, output: &mut W, max_len: usize) -> Result<Geometry>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    send(output, Token::device_status_report())?;
    let response = read_report(input, max_len)?;
    trace!(?response, "cursor report");
    Ok(parse_cursor_report(&response)?)
}

/// Read byte-by-byte until the report terminator, EOF, a timed-out read,
/// or `max_len` bytes.
fn read_report<R: Read + ?Sized>(input: &mut R, max_len: usize) -> Result<Vec<u8>> {
    let mut response = Vec::with_capacity(16);
    let mut byte = [0u8; 1];
    while response.len() < max_len {
        match input.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                response.push(byte[0]);
                if is_report_complete(&response) {
                    break;
                }
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(Error::Io(err)),
        }
    }
    if response.is_empty() {
        return Err(ProtocolError::NoResponse.into());
    }
    Ok(response)
}
