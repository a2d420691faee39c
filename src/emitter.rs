//! Event emitter writing one compact JSON line per event to stdout.

use eyre::{Context, Result};
use std::io::{self, Write};

use crate::event::Event;

/// Serializes events and writes them to the process's standard output.
///
/// The emitter trusts the builder's invariants and performs no re-validation.
/// A failed write propagates as an error; there is no retry or buffering, and
/// concurrent callers must serialize their own calls to avoid interleaved
/// lines.
#[derive(Debug, Default)]
pub struct EventEmitter;

impl EventEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Emit one event as a single line on stdout.
    pub fn emit(&self, event: &Event) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_line(&mut handle, event)
    }

    /// Serialize `event` compactly and write it, newline-terminated, to `w`.
    ///
    /// serde_json emits minimal whitespace and leaves non-ASCII characters
    /// unescaped, which is the wire format downstream consumers parse.
    fn write_line<W: Write>(&self, w: &mut W, event: &Event) -> Result<()> {
        let json = serde_json::to_string(event).context("Failed to serialize event")?;
        writeln!(w, "{}", json).context("Failed to write event line")?;
        Ok(())
    }
}
