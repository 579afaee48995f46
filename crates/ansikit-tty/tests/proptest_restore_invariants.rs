//! Property-based tests for mode restoration around the geometry query.
//!
//! Whatever the terminal sends back (well-formed, truncated, or garbage),
//! and whichever primitive fails, the captured mode is restored exactly
//! once and the terminal ends up in the mode it started in.

use std::cell::Cell;
use std::io::{self, Cursor};
use std::time::Duration;

use ansikit_core::error::Error;
use ansikit_core::geometry::Geometry;
use ansikit_tty::{LineDiscipline, QueryOptions, query_geometry_with};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Cooked,
    Raw,
}

#[derive(Default)]
struct CountingDiscipline {
    fail_raw: bool,
    fail_restore: bool,
    raw: Cell<bool>,
    captures: Cell<usize>,
    restores: Cell<usize>,
}

impl LineDiscipline for CountingDiscipline {
    type Mode = Mode;

    fn is_terminal(&self) -> bool {
        true
    }

    fn get_mode(&self) -> io::Result<Mode> {
        self.captures.set(self.captures.get() + 1);
        Ok(if self.raw.get() { Mode::Raw } else { Mode::Cooked })
    }

    fn set_mode(&self, mode: &Mode) -> io::Result<()> {
        match mode {
            Mode::Cooked => {
                self.restores.set(self.restores.get() + 1);
                if self.fail_restore {
                    return Err(io::Error::other("restore"));
                }
                self.raw.set(false);
            }
            Mode::Raw => {
                if self.fail_raw {
                    return Err(io::Error::other("raw"));
                }
                self.raw.set(true);
            }
        }
        Ok(())
    }

    fn raw_mode(&self, _saved: &Mode, _read_timeout: Option<Duration>) -> Mode {
        Mode::Raw
    }
}

fn reply_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        (1u32..=500, 1u32..=500, 1u32..=500, 1u32..=500)
            .prop_map(|(r, c, rows, cols)| format!("\x1b[{r};{c}R\x1b[{rows};{cols}R").into_bytes()),
        proptest::collection::vec(any::<u8>(), 0..48),
        "\x1b\\[[0-9;]{0,12}[A-Z]?".prop_map(String::into_bytes),
    ]
}

proptest! {
    #[test]
    fn restored_exactly_once(
        reply in reply_strategy(),
        fail_raw in any::<bool>(),
        fail_restore in any::<bool>(),
    ) {
        let discipline = CountingDiscipline {
            fail_raw,
            fail_restore,
            ..CountingDiscipline::default()
        };
        let mut input = Cursor::new(reply);
        let mut output = Vec::new();
        let result = query_geometry_with(
            &discipline,
            &mut input,
            &mut output,
            &QueryOptions::default(),
        );

        prop_assert_eq!(discipline.captures.get(), 1);
        prop_assert_eq!(discipline.restores.get(), 1);
        if !fail_restore {
            prop_assert!(!discipline.raw.get());
        }
        if fail_raw {
            prop_assert!(matches!(result, Err(Error::Resource(_))));
            prop_assert!(output.is_empty());
        }
    }

    #[test]
    fn well_formed_replies_yield_second_report(
        r in 1u32..=500, c in 1u32..=500, rows in 1u32..=500, cols in 1u32..=500,
    ) {
        let discipline = CountingDiscipline::default();
        let mut input = Cursor::new(format!("\x1b[{r};{c}R\x1b[{rows};{cols}R").into_bytes());
        let mut output = Vec::new();
        let size = query_geometry_with(
            &discipline,
            &mut input,
            &mut output,
            &QueryOptions::default(),
        );
        prop_assert_eq!(size.ok(), Some(Geometry::new(rows, cols)));
        let expected = format!("\x1b[6n\x1b[9999;9999H\x1b[6n\x1b[{r};{c}H");
        prop_assert_eq!(output, expected.into_bytes());
    }
}
