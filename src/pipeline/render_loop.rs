//! Render loop - ticks a document until cancelled.
//!
//! The loop sleeps on a condition variable rather than a plain timer, so
//! cancelling wakes it immediately. The refresh rate is re-read each tick,
//! which makes `set_refresh_rate` take effect on a running loop.

use std::io;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::debug;

use super::document::Document;

// =============================================================================
// Cancellation
// =============================================================================

/// Shared flag that stops a render loop.
///
/// Clones observe the same flag. Cancelling is permanent.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel and wake every waiter.
    pub fn cancel(&self) {
        let (flag, cvar) = &*self.inner;
        *flag.lock().unwrap_or_else(|p| p.into_inner()) = true;
        cvar.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.inner.0.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Wait up to `timeout`. Returns `true` once cancelled.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let (flag, cvar) = &*self.inner;
        let guard = flag.lock().unwrap_or_else(|p| p.into_inner());
        let (guard, _) = cvar
            .wait_timeout_while(guard, timeout, |cancelled| !*cancelled)
            .unwrap_or_else(|p| p.into_inner());
        *guard
    }
}

// =============================================================================
// Loop
// =============================================================================

impl Document {
    /// Render a frame every refresh interval until `token` is cancelled or
    /// the document is closed.
    ///
    /// Blocks the calling thread. The first frame is drawn one interval in.
    /// Ticks keep a fixed cadence: frame time is not added to the period.
    pub fn render(&self, token: &CancellationToken) {
        debug!("render loop started");
        let mut next_tick = Instant::now() + self.config().effective_refresh_rate();
        loop {
            let wait = next_tick.saturating_duration_since(Instant::now());
            if token.wait_timeout(wait) || self.is_closed() {
                break;
            }
            self.render_frame();

            let interval = self.config().effective_refresh_rate();
            next_tick = next_deadline(next_tick, interval, Instant::now());
        }
        debug!("render loop stopped");
    }

    /// Run [`render`](Self::render) on a dedicated thread.
    pub fn spawn(self: &Arc<Self>, token: CancellationToken) -> io::Result<JoinHandle<()>> {
        let document = Arc::clone(self);
        thread::Builder::new()
            .name("spark-document-render".into())
            .spawn(move || document.render(&token))
    }
}

/// The tick after `previous`. A loop that fell behind fires once right away
/// instead of replaying every missed tick.
fn next_deadline(previous: Instant, interval: Duration, now: Instant) -> Instant {
    let next = previous + interval;
    if next < now { now } else { next }
}
