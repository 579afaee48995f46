#![forbid(unsafe_code)]

//! Query configuration.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming the terminal device.
pub const ENV_TTY: &str = "ANSIKIT_TTY";
/// Environment variable setting the report read timeout in milliseconds.
pub const ENV_DSR_TIMEOUT_MS: &str = "ANSIKIT_DSR_TIMEOUT_MS";

/// Terminal device opened by [`crate::query::query_geometry`].
pub const DEFAULT_TTY_PATH: &str = "/dev/tty";
/// Cursor target far outside any real screen; terminals clamp it to the
/// bottom-right cell.
pub const DEFAULT_PROBE_TARGET: (u32, u32) = (9999, 9999);
/// Upper bound on bytes read for a single cursor report.
pub const DEFAULT_MAX_RESPONSE_LEN: usize = 100;

/// Options for a geometry query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// Terminal device to open.
    pub tty_path: PathBuf,
    /// `(row, column)` the cursor is sent to when measuring the screen.
    pub probe_target: (u32, u32),
    /// Maximum bytes read per cursor report.
    pub max_response_len: usize,
    /// Give up on a report after this long. `None` blocks indefinitely.
    pub read_timeout: Option<Duration>,
    /// Restore the terminal mode and exit on SIGINT/SIGTERM during a query.
    pub restore_on_signal: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            tty_path: PathBuf::from(DEFAULT_TTY_PATH),
            probe_target: DEFAULT_PROBE_TARGET,
            max_response_len: DEFAULT_MAX_RESPONSE_LEN,
            read_timeout: None,
            restore_on_signal: true,
        }
    }
}

impl QueryOptions {
    /// Defaults with `ANSIKIT_TTY` and `ANSIKIT_DSR_TIMEOUT_MS` applied.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Like [`QueryOptions::from_env`] with a custom lookup (for tests).
    ///
    /// Empty or unparsable values are ignored. A timeout of `0` means block.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();
        if let Some(path) = get_env(ENV_TTY).filter(|path| !path.trim().is_empty()) {
            options.tty_path = PathBuf::from(path);
        }
        if let Some(raw) = get_env(ENV_DSR_TIMEOUT_MS) {
            match raw.trim().parse::<u64>() {
                Ok(0) => options.read_timeout = None,
                Ok(ms) => options.read_timeout = Some(Duration::from_millis(ms)),
                Err(_) => {
                    ansikit_core::warn!(value = %raw, "ignoring invalid {}", ENV_DSR_TIMEOUT_MS);
                }
            }
        }
        options
    }

    /// Set the terminal device.
    #[must_use]
    pub fn with_tty_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tty_path = path.into();
        self
    }

    /// Set the probe target.
    #[must_use]
    pub fn with_probe_target(mut self, row: u32, column: u32) -> Self {
        self.probe_target = (row, column);
        self
    }

    /// Set the per-report read bound. Values below one are raised to one.
    #[must_use]
    pub fn with_max_response_len(mut self, len: usize) -> Self {
        self.max_response_len = len.max(1);
        self
    }

    /// Set or clear the report read timeout.
    #[must_use]
    pub fn with_read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Enable or disable restoration on SIGINT/SIGTERM.
    #[must_use]
    pub fn with_restore_on_signal(mut self, enabled: bool) -> Self {
        self.restore_on_signal = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn defaults() {
        let options = QueryOptions::default();
        assert_eq!(options.tty_path, PathBuf::from("/dev/tty"));
        assert_eq!(options.probe_target, (9999, 9999));
        assert_eq!(options.max_response_len, 100);
        assert_eq!(options.read_timeout, None);
        assert!(options.restore_on_signal);
    }

    #[test]
    fn env_overrides() {
        let options = QueryOptions::from_env_with(lookup(&[
            ("ANSIKIT_TTY", "/dev/pts/7"),
            ("ANSIKIT_DSR_TIMEOUT_MS", " 250 "),
        ]));
        assert_eq!(options.tty_path, PathBuf::from("/dev/pts/7"));
        assert_eq!(options.read_timeout, Some(Duration::from_millis(250)));
    }

    #[test]
    fn env_ignores_garbage() {
        let options = QueryOptions::from_env_with(lookup(&[
            ("ANSIKIT_TTY", "  "),
            ("ANSIKIT_DSR_TIMEOUT_MS", "soon"),
        ]));
        assert_eq!(options, QueryOptions::default());

        let options = QueryOptions::from_env_with(lookup(&[("ANSIKIT_DSR_TIMEOUT_MS", "0")]));
        assert_eq!(options.read_timeout, None);
    }

    #[test]
    fn builders() {
        let options = QueryOptions::default()
            .with_tty_path("/dev/console")
            .with_probe_target(500, 600)
            .with_max_response_len(0)
            .with_read_timeout(Some(Duration::from_secs(1)))
            .with_restore_on_signal(false);
        assert_eq!(options.tty_path, PathBuf::from("/dev/console"));
        assert_eq!(options.probe_target, (500, 600));
        assert_eq!(options.max_response_len, 1);
        assert_eq!(options.read_timeout, Some(Duration::from_secs(1)));
        assert!(!options.restore_on_signal);
    }
}
