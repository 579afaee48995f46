#![forbid(unsafe_code)]
//! Terminal mode control and geometry queries for ansikit.
//!
//! ## Protocol
//!
//! | Step | Sent | Expected reply |
//! |------|------|----------------|
//! | Baseline | `CSI 6 n` | `CSI row ; col R` |
//! | Probe | `CSI 9999 ; 9999 H`, `CSI 6 n` | `CSI rows ; cols R` |
//! | Restore | `CSI row ; col H` | |
//!
//! The terminal is held in raw mode (no canonical input, no echo) for the
//! duration and restored afterwards, including on SIGINT/SIGTERM when
//! [`QueryOptions::restore_on_signal`] is set.

pub mod config;
pub mod mode;
pub mod query;

#[cfg(unix)]
mod signal;

pub use config::QueryOptions;
pub use mode::{LineDiscipline, ModeGuard};
#[cfg(unix)]
pub use mode::TtyDiscipline;
pub use query::query_geometry_with;
#[cfg(unix)]
pub use query::{query_geometry, query_tty};
