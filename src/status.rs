//! Operator-facing status lines.
//!
//! Status lines are plain text, one per action start and one per failure
//! transition. They are separate from diagnostic logging, which goes through
//! `tracing`.

use std::io::{self, Write};

/// Destination for status lines.
pub trait StatusSink {
    fn emit(&mut self, line: &str);
}

impl<T: StatusSink + ?Sized> StatusSink for &mut T {
    fn emit(&mut self, line: &str) {
        (**self).emit(line)
    }
}

/// Writes status lines to standard output.
///
/// Lines end in `\r\n` so they render correctly while the terminal is in
/// raw mode.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StatusSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        let mut out = io::stdout().lock();
        if let Err(err) = write!(out, "{line}\r\n").and_then(|()| out.flush()) {
            tracing::warn!(error = %err, "failed to write status line");
        }
    }
}

/// Collects status lines in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    lines: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl StatusSink for RecordingSink {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_lines_in_order() {
        let mut sink = RecordingSink::new();
        sink.emit("Preheating. Press F to cause a failure.");
        sink.emit("Preheat failed");

        assert_eq!(
            sink.lines(),
            ["Preheating. Press F to cause a failure.", "Preheat failed"]
        );
        assert!(sink.contains("Preheat failed"));
        assert!(!sink.contains("Heat failed"));

        sink.clear();
        assert!(sink.lines().is_empty());
    }
}
