//! Document configuration.

use std::time::Duration;

/// Refresh rate used when none is configured: 12 frames per second.
pub const DEFAULT_REFRESH_RATE: Duration = Duration::from_nanos(1_000_000_000 / 12);

/// Target geometry and cadence of a document.
///
/// Zero means "not set": zero rows or cols are read from the output's size
/// probe on every frame, a zero refresh rate means [`DEFAULT_REFRESH_RATE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentConfig {
    pub rows: u16,
    pub cols: u16,
    pub refresh_rate: Duration,
}

impl DocumentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, rows: u16, cols: u16) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_refresh_rate(mut self, refresh_rate: Duration) -> Self {
        self.refresh_rate = refresh_rate;
        self
    }

    /// The refresh rate to tick at, with the default substituted for zero.
    pub fn effective_refresh_rate(&self) -> Duration {
        if self.refresh_rate.is_zero() {
            DEFAULT_REFRESH_RATE
        } else {
            self.refresh_rate
        }
    }
}
