//! Keyboard input from the controlling terminal.

use super::InputSource;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io;
use std::time::Duration;

/// Exit status used when the operator interrupts the process with Ctrl+C.
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Non-blocking single-key reader backed by `crossterm`.
///
/// The terminal is put in raw mode for the lifetime of the value and
/// restored on drop.
pub struct TerminalInput {
    _raw: RawModeGuard,
}

impl TerminalInput {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        tracing::debug!("terminal raw mode enabled");
        Ok(Self { _raw: RawModeGuard })
    }

    fn read_key() -> io::Result<Option<char>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) if modifiers.contains(KeyModifiers::CONTROL) => interrupt(),
            Event::Key(KeyEvent {
                code: KeyCode::Char(c),
                kind: KeyEventKind::Press,
                ..
            }) => Ok(Some(c)),
            _ => Ok(None),
        }
    }
}

impl InputSource for TerminalInput {
    fn poll_char(&mut self) -> Option<char> {
        Self::read_key().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to read terminal input");
            None
        })
    }
}

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            tracing::warn!(error = %err, "failed to restore terminal mode");
        }
    }
}

// Raw mode swallows SIGINT, so Ctrl+C arrives as a key event.
fn interrupt() -> ! {
    let _ = terminal::disable_raw_mode();
    tracing::info!("interrupted by operator");
    std::process::exit(INTERRUPTED_EXIT_CODE)
}
