#![forbid(unsafe_code)]

//! Terminal mode control.
//!
//! [`LineDiscipline`] is the pair of primitives the geometry query needs:
//! read the current input mode and write one back. [`ModeGuard`] captures the
//! mode, switches to raw, and puts the captured mode back exactly once.

use std::io;
use std::time::Duration;

/// Capture and apply terminal input modes.
pub trait LineDiscipline {
    /// Opaque snapshot of the terminal's input mode.
    type Mode: Clone;

    /// Whether the underlying handle is an interactive terminal.
    fn is_terminal(&self) -> bool;

    /// Capture the current mode.
    fn get_mode(&self) -> io::Result<Self::Mode>;

    /// Apply `mode`.
    fn set_mode(&self, mode: &Self::Mode) -> io::Result<()>;

    /// Derive the raw variant of `saved`: no line buffering, no echo.
    ///
    /// With `read_timeout` set, reads return empty once the timeout elapses
    /// without input. Otherwise reads block until at least one byte arrives.
    fn raw_mode(&self, saved: &Self::Mode, read_timeout: Option<Duration>) -> Self::Mode;
}

impl<D: LineDiscipline + ?Sized> LineDiscipline for &D {
    type Mode = D::Mode;

    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }

    fn get_mode(&self) -> io::Result<Self::Mode> {
        (**self).get_mode()
    }

    fn set_mode(&self, mode: &Self::Mode) -> io::Result<()> {
        (**self).set_mode(mode)
    }

    fn raw_mode(&self, saved: &Self::Mode, read_timeout: Option<Duration>) -> Self::Mode {
        (**self).raw_mode(saved, read_timeout)
    }
}

/// RAII guard that holds a terminal in raw mode.
///
/// Call [`ModeGuard::restore`] to restore and observe the result. If the guard
/// is dropped first (early return, panic), the saved mode is restored
/// best-effort and failures are logged.
#[must_use = "dropping the guard restores the terminal mode immediately"]
pub struct ModeGuard<'a, D: LineDiscipline + ?Sized> {
    discipline: &'a D,
    saved: Option<D::Mode>,
}

impl<'a, D: LineDiscipline + ?Sized> ModeGuard<'a, D> {
    /// Capture the current mode and switch to raw.
    ///
    /// If switching fails after a successful capture, the captured mode is
    /// restored before the error is returned.
    pub fn enter(discipline: &'a D, read_timeout: Option<Duration>) -> io::Result<Self> {
        let saved = discipline.get_mode()?;
        let raw = discipline.raw_mode(&saved, read_timeout);
        let guard = Self {
            discipline,
            saved: Some(saved),
        };
        discipline.set_mode(&raw)?;
        ansikit_core::debug!(?read_timeout, "terminal switched to raw mode");
        Ok(guard)
    }

    /// The mode that will be restored.
    pub fn saved(&self) -> Option<&D::Mode> {
        self.saved.as_ref()
    }

    /// Restore the saved mode now.
    pub fn restore(mut self) -> io::Result<()> {
        match self.saved.take() {
            Some(saved) => self.discipline.set_mode(&saved),
            None => Ok(()),
        }
    }
}

impl<D: LineDiscipline + ?Sized> Drop for ModeGuard<'_, D> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            let _result = self.discipline.set_mode(&saved);
            #[cfg(feature = "tracing")]
            if let Err(err) = &_result {
                tracing::warn!(%err, "failed to restore terminal mode");
            }
        }
    }
}

// ── termios ──────────────────────────────────────────────────────────────

#[cfg(unix)]
pub use self::unix::TtyDiscipline;

#[cfg(unix)]
mod unix {
    use std::fs::File;
    use std::io;
    use std::time::Duration;

    use crossterm::tty::IsTty;
    use nix::sys::termios::{self, LocalFlags, SetArg, SpecialCharacterIndices, Termios};

    use super::LineDiscipline;

    /// Longest read timeout `VTIME` can express, in deciseconds.
    const MAX_VTIME: u64 = u8::MAX as u64;

    /// [`LineDiscipline`] over a terminal file handle using termios.
    #[derive(Debug)]
    pub struct TtyDiscipline {
        tty: File,
    }

    impl TtyDiscipline {
        /// Wrap an open terminal handle.
        pub fn new(tty: File) -> Self {
            Self { tty }
        }

        /// The wrapped handle.
        pub fn file(&self) -> &File {
            &self.tty
        }

        /// A second discipline on a duplicate of the same descriptor.
        pub fn try_clone(&self) -> io::Result<Self> {
            Ok(Self::new(self.tty.try_clone()?))
        }
    }

    impl LineDiscipline for TtyDiscipline {
        type Mode = Termios;

        fn is_terminal(&self) -> bool {
            self.tty.is_tty()
        }

        fn get_mode(&self) -> io::Result<Termios> {
            termios::tcgetattr(&self.tty).map_err(io::Error::from)
        }

        fn set_mode(&self, mode: &Termios) -> io::Result<()> {
            termios::tcsetattr(&self.tty, SetArg::TCSAFLUSH, mode).map_err(io::Error::from)
        }

        fn raw_mode(&self, saved: &Termios, read_timeout: Option<Duration>) -> Termios {
            let mut raw = saved.clone();
            raw.local_flags.remove(LocalFlags::ICANON | LocalFlags::ECHO);
            let (vmin, vtime) = match read_timeout {
                None => (1, 0),
                Some(timeout) => (0, deciseconds(timeout)),
            };
            raw.control_chars[SpecialCharacterIndices::VMIN as usize] = vmin;
            raw.control_chars[SpecialCharacterIndices::VTIME as usize] = vtime;
            raw
        }
    }

    /// Round up to whole deciseconds, clamped to `1..=255`.
    fn deciseconds(timeout: Duration) -> u8 {
        let tenths = timeout.as_millis().div_ceil(100);
        let tenths = u64::try_from(tenths).unwrap_or(MAX_VTIME).clamp(1, MAX_VTIME);
        u8::try_from(tenths).unwrap_or(u8::MAX)
    }

}
