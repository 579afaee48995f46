//! Geometry queries against a real pseudo-terminal.
//!
//! The slave side plays the terminal device handed to the query; a
//! responder thread on the master side answers cursor position requests the
//! way a terminal emulator would.

#![cfg(unix)]

use std::fs::File;
use std::io::{Read, Write};
use std::thread::JoinHandle;
use std::time::Duration;

use ansikit_core::error::{Error, ProtocolError};
use ansikit_core::geometry::Geometry;
use ansikit_tty::{LineDiscipline, QueryOptions, TtyDiscipline, query_geometry_with, query_tty};
use nix::pty::openpty;
use nix::sys::termios::{LocalFlags, tcgetattr};
use nix::unistd::ttyname;

const DSR: &[u8] = b"\x1b[6n";

struct Pty {
    master: File,
    slave: File,
}

fn open_pty() -> Pty {
    let pty = openpty(None, None).expect("openpty");
    Pty {
        master: File::from(pty.master),
        slave: File::from(pty.slave),
    }
}

fn count(haystack: &[u8], needle: &[u8]) -> usize {
    haystack
        .windows(needle.len())
        .filter(|window| *window == needle)
        .count()
}

struct Transcript {
    written: Vec<u8>,
    flags_during_query: Vec<LocalFlags>,
}

/// Answer each DSR with the next reply; stop once `until` has been seen.
fn spawn_responder(
    mut master: File,
    observe: File,
    replies: Vec<&'static [u8]>,
    until: &'static [u8],
) -> JoinHandle<Transcript> {
    std::thread::spawn(move || {
        let mut transcript = Transcript {
            written: Vec::new(),
            flags_during_query: Vec::new(),
        };
        let mut answered = 0;
        let mut chunk = [0u8; 64];
        loop {
            let n = match master.read(&mut chunk) {
                Ok(0) | Err(_) => break,
                Ok(n) => n,
            };
            transcript.written.extend_from_slice(&chunk[..n]);
            while answered < count(&transcript.written, DSR) && answered < replies.len() {
                let mode = tcgetattr(&observe).expect("tcgetattr on slave");
                transcript.flags_during_query.push(mode.local_flags);
                master.write_all(replies[answered]).expect("reply");
                master.flush().expect("flush reply");
                answered += 1;
            }
            if count(&transcript.written, until) > 0 {
                break;
            }
        }
        transcript
    })
}

#[test]
fn measures_pty_and_restores_everything() {
    let pty = open_pty();
    let before = tcgetattr(&pty.slave).unwrap().local_flags;
    assert!(before.contains(LocalFlags::ICANON | LocalFlags::ECHO));

    let responder = spawn_responder(
        pty.master.try_clone().unwrap(),
        pty.slave.try_clone().unwrap(),
        vec![b"\x1b[3;7R", b"\x1b[50;132R"],
        b"\x1b[3;7H",
    );

    let discipline = TtyDiscipline::new(pty.slave.try_clone().unwrap());
    assert!(discipline.is_terminal());
    let mut input = pty.slave.try_clone().unwrap();
    let mut output = pty.slave.try_clone().unwrap();
    let options = QueryOptions::default().with_read_timeout(Some(Duration::from_secs(5)));

    let size = query_geometry_with(&discipline, &mut input, &mut output, &options).unwrap();
    assert_eq!(size, Geometry { row: 50, column: 132 });

    let transcript = responder.join().unwrap();
    assert_eq!(
        transcript.written,
        b"\x1b[6n\x1b[9999;9999H\x1b[6n\x1b[3;7H".to_vec()
    );
    assert_eq!(transcript.flags_during_query.len(), 2);
    for flags in transcript.flags_during_query {
        assert!(!flags.intersects(LocalFlags::ICANON | LocalFlags::ECHO));
    }

    let after = tcgetattr(&pty.slave).unwrap().local_flags;
    assert_eq!(after, before);
}

#[test]
fn blocking_read_waits_for_late_reply() {
    let pty = open_pty();
    let mut master = pty.master.try_clone().unwrap();
    let responder = std::thread::spawn(move || {
        let mut seen = Vec::new();
        let mut chunk = [0u8; 64];
        for reply in [&b"\x1b[1;1R"[..], &b"\x1b[24;80R"[..]] {
            while count(&seen, DSR) == 0 {
                let n = master.read(&mut chunk).unwrap();
                seen.extend_from_slice(&chunk[..n]);
            }
            std::thread::sleep(Duration::from_millis(50));
            master.write_all(reply).unwrap();
            seen.clear();
        }
    });

    let discipline = TtyDiscipline::new(pty.slave.try_clone().unwrap());
    let mut input = pty.slave.try_clone().unwrap();
    let mut output = pty.slave.try_clone().unwrap();
    let size =
        query_geometry_with(&discipline, &mut input, &mut output, &QueryOptions::default())
            .unwrap();
    assert_eq!(size, Geometry::new(24, 80));
    responder.join().unwrap();
}

#[test]
fn silent_terminal_times_out_and_restores() {
    let pty = open_pty();
    let before = tcgetattr(&pty.slave).unwrap();

    let discipline = TtyDiscipline::new(pty.slave.try_clone().unwrap());
    let mut input = pty.slave.try_clone().unwrap();
    let mut output = pty.slave.try_clone().unwrap();
    let options = QueryOptions::default().with_read_timeout(Some(Duration::from_millis(100)));

    let result = query_geometry_with(&discipline, &mut input, &mut output, &options);
    assert!(matches!(
        result,
        Err(Error::Protocol(ProtocolError::NoResponse))
    ));

    let after = tcgetattr(&pty.slave).unwrap();
    assert_eq!(after.local_flags, before.local_flags);
    assert_eq!(after.control_chars, before.control_chars);
    drop(pty.master);
}

#[test]
fn malformed_reply_restores_mode() {
    let pty = open_pty();
    let before = tcgetattr(&pty.slave).unwrap().local_flags;

    let responder = spawn_responder(
        pty.master.try_clone().unwrap(),
        pty.slave.try_clone().unwrap(),
        vec![b"\x1b[;R"],
        DSR,
    );

    let discipline = TtyDiscipline::new(pty.slave.try_clone().unwrap());
    let mut input = pty.slave.try_clone().unwrap();
    let mut output = pty.slave.try_clone().unwrap();
    let options = QueryOptions::default().with_read_timeout(Some(Duration::from_secs(5)));

    let result = query_geometry_with(&discipline, &mut input, &mut output, &options);
    assert!(matches!(
        result,
        Err(Error::Protocol(ProtocolError::MissingRow))
    ));
    responder.join().unwrap();

    assert_eq!(tcgetattr(&pty.slave).unwrap().local_flags, before);
}

#[test]
fn query_tty_by_path_with_signal_restore() {
    let pty = open_pty();
    let path = ttyname(&pty.slave).expect("ttyname");
    let before = tcgetattr(&pty.slave).unwrap().local_flags;

    let responder = spawn_responder(
        pty.master.try_clone().unwrap(),
        pty.slave.try_clone().unwrap(),
        vec![b"\x1b[2;2R", b"\x1b[30;90R"],
        b"\x1b[2;2H",
    );

    let options = QueryOptions::default()
        .with_tty_path(path)
        .with_read_timeout(Some(Duration::from_secs(5)))
        .with_restore_on_signal(true);
    let size = query_tty(&options).unwrap();
    assert_eq!(size, Geometry::new(30, 90));

    let transcript = responder.join().unwrap();
    assert_eq!(transcript.flags_during_query.len(), 2);
    assert_eq!(tcgetattr(&pty.slave).unwrap().local_flags, before);
}
