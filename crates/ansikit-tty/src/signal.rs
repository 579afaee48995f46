#![forbid(unsafe_code)]

//! Restore the terminal when the process is told to terminate mid-query.

use std::io;
use std::thread::JoinHandle;

use signal_hook::consts::signal::{SIGINT, SIGTERM};
use signal_hook::iterator::{Handle, Signals};

/// Listens for SIGINT/SIGTERM while alive.
///
/// On delivery the cleanup callback runs and the process exits with
/// `128 + signal`. Dropping the guard unregisters the handlers.
#[derive(Debug)]
pub(crate) struct SignalGuard {
    handle: Handle,
    thread: Option<JoinHandle<()>>,
}

impl SignalGuard {
    pub(crate) fn new<F>(cleanup: F) -> io::Result<Self>
    where
        F: Fn() + Send + 'static,
    {
        let mut signals = Signals::new([SIGINT, SIGTERM])?;
        let handle = signals.handle();
        let thread = std::thread::Builder::new()
            .name("ansikit-signal".into())
            .spawn(move || {
                for signal in signals.forever() {
                    if matches!(signal, SIGINT | SIGTERM) {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(signal, "termination signal received, restoring terminal");
                        cleanup();
                        std::process::exit(128 + signal);
                    }
                }
            })?;
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
