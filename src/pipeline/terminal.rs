//! Output sink and terminal size detection.
//!
//! A document writes to an [`Output`]: any `Write` sink paired with a
//! [`SizeProbe`] that reports the terminal extents when the sink is one.
//! Plain writers (files, buffers, pipes) have no size; the document then
//! relies on an explicit size or renders with zero extents.

use std::io::{self, IsTerminal, Write};

use crate::types::TerminalSize;

// =============================================================================
// Size Probe
// =============================================================================

/// Reports the size of the terminal behind an output sink.
pub trait SizeProbe: Send {
    /// `None` when the sink is not a terminal or the size is unavailable.
    fn probe(&self) -> Option<TerminalSize>;
}

/// Which standard stream a [`CrosstermProbe`] checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Size probe backed by `crossterm::terminal::size`.
///
/// Only reports a size while the chosen stream is attached to a terminal.
#[derive(Debug, Clone, Copy)]
pub struct CrosstermProbe {
    stream: Stream,
}

impl CrosstermProbe {
    pub fn new(stream: Stream) -> Self {
        Self { stream }
    }

    fn is_terminal(&self) -> bool {
        match self.stream {
            Stream::Stdout => io::stdout().is_terminal(),
            Stream::Stderr => io::stderr().is_terminal(),
        }
    }
}

impl SizeProbe for CrosstermProbe {
    fn probe(&self) -> Option<TerminalSize> {
        if !self.is_terminal() {
            return None;
        }
        crossterm::terminal::size()
            .ok()
            .map(|(cols, rows)| TerminalSize::new(rows, cols))
    }
}

/// Probe for sinks that are never terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProbe;

impl SizeProbe for NoProbe {
    fn probe(&self) -> Option<TerminalSize> {
        None
    }
}

/// Probe that always reports the same size.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub TerminalSize);

impl SizeProbe for FixedProbe {
    fn probe(&self) -> Option<TerminalSize> {
        Some(self.0)
    }
}

// =============================================================================
// Output
// =============================================================================

/// Where a document draws.
pub struct Output {
    writer: Box<dyn Write + Send>,
    probe: Box<dyn SizeProbe>,
}

impl Output {
    /// A plain writer without a size.
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
            probe: Box::new(NoProbe),
        }
    }

    /// Standard output, sized from the terminal when it is one.
    pub fn stdout() -> Self {
        Self::new(io::stdout()).with_probe(CrosstermProbe::new(Stream::Stdout))
    }

    /// Standard error, sized from the terminal when it is one.
    pub fn stderr() -> Self {
        Self::new(io::stderr()).with_probe(CrosstermProbe::new(Stream::Stderr))
    }

    pub fn with_probe(mut self, probe: impl SizeProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    pub fn size(&self) -> Option<TerminalSize> {
        self.probe.probe()
    }

    pub fn writer(&mut self) -> &mut (dyn Write + Send) {
        self.writer.as_mut()
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output").field("size", &self.size()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_writer_has_no_size() {
        let output = Output::new(Vec::new());
        assert_eq!(output.size(), None);
    }

    #[test]
    fn test_fixed_probe() {
        let output = Output::new(io::sink()).with_probe(FixedProbe(TerminalSize::new(24, 80)));
        assert_eq!(output.size(), Some(TerminalSize::new(24, 80)));
    }
}
