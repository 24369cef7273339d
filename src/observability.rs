//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never interleave with the status lines on
//! stdout. The filter comes from `RUST_LOG`, defaulting to errors only.

use std::io::{self, Write};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "error";

/// Install the global `tracing` subscriber.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = fmt::layer()
        .with_writer(|| CrlfWriter::new(io::stderr()))
        .with_target(true)
        .with_level(true)
        .with_ansi(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

/// Writer that ends every line with `\r\n`.
///
/// The terminal stays in raw mode while the controller runs, where a bare
/// `\n` moves down without returning to the first column.
pub struct CrlfWriter<W> {
    inner: W,
}

impl<W: Write> CrlfWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CrlfWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut lines = buf.split(|&b| b == b'\n').peekable();
        while let Some(line) = lines.next() {
            if lines.peek().is_none() {
                self.inner.write_all(line)?;
                break;
            }
            self.inner.write_all(line.strip_suffix(b"\r").unwrap_or(line))?;
            self.inner.write_all(b"\r\n")?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
