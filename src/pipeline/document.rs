//! Document - an ordered list of root elements drawn inline.
//!
//! Each frame repaints the bottom of the document in place:
//!
//! 1. Measure from the last element backward into a discard sink, keeping
//!    the longest suffix that fits the row budget (terminal rows minus the
//!    one reserved for the trailing newline).
//! 2. Move the cursor up over `min(new, last)` lines and clear to the end of
//!    the screen. Never more than was drawn, never more than fits.
//! 3. Paint the suffix, one line break after each element.
//!
//! Leading elements whose trees are entirely finalized are painted once and
//! then dropped from the document: their lines stay behind as scrollback
//! and are never erased again.

use std::io;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::engine::Element;
use crate::renderer::{OutputBuffer, ansi};

use super::config::DocumentConfig;
use super::frame::{RenderedElement, render_element};
use super::terminal::Output;

// =============================================================================
// State
// =============================================================================

#[derive(Debug, Default)]
struct DocumentState {
    output: Option<Output>,
    config: DocumentConfig,
    elements: Vec<Element>,
    /// Lines drawn by the last successful frame.
    last_count: usize,
    closed: bool,
}

/// Outcome of one painted frame.
struct Frame {
    /// Lines the paint pass drew, capped at the row budget.
    count: usize,
    erased: usize,
    /// Index of the first painted element.
    start: usize,
    painted: Vec<RenderedElement>,
}

/// Explicit extents where set, the output's probe for the rest.
fn geometry(config: &DocumentConfig, output: &Output) -> (u16, u16) {
    let (mut rows, mut cols) = (config.rows, config.cols);
    if rows == 0 || cols == 0 {
        let size = output.size().unwrap_or_default();
        if rows == 0 {
            rows = size.rows;
        }
        if cols == 0 {
            cols = size.cols;
        }
    }
    (rows, cols)
}

/// Measure, erase and paint one frame into `output`.
fn paint_frame(
    output: &mut Output,
    config: &DocumentConfig,
    elements: &[Element],
    last_count: usize,
    finalize_all: bool,
) -> io::Result<Frame> {
    let (rows, cols) = geometry(config, output);
    // One row stays free for the newline after the last element.
    let budget = usize::from(rows.saturating_sub(1));

    let mut measured = 0;
    let mut start = elements.len();
    for (i, element) in elements.iter().enumerate().rev() {
        let lines = render_element(element, &mut io::sink(), cols, finalize_all)?.lines();
        if measured + lines > budget {
            break;
        }
        measured += lines;
        start = i;
    }

    let erased = measured.min(last_count);
    let mut buf = OutputBuffer::new();
    ansi::erase_lines(&mut buf, u16::try_from(erased).unwrap_or(u16::MAX))?;

    let mut painted = Vec::with_capacity(elements.len() - start);
    for element in &elements[start..] {
        painted.push(render_element(element, &mut buf, cols, finalize_all)?);
        ansi::line_break(&mut buf)?;
    }

    buf.flush_to(output.writer())?;

    // Bodies are re-read by the paint pass, so count what was actually drawn.
    let count = painted.iter().map(RenderedElement::lines).sum::<usize>().min(budget);
    Ok(Frame {
        count,
        erased,
        start,
        painted,
    })
}

impl DocumentState {
    fn render_frame(&mut self, finalize_all: bool) {
        if self.closed {
            return;
        }

        let DocumentState {
            output,
            config,
            elements,
            last_count,
            ..
        } = self;
        let Some(output) = output.as_mut() else {
            return;
        };

        match paint_frame(output, config, elements, *last_count, finalize_all) {
            Ok(frame) => {
                trace!(
                    painted = frame.painted.len(),
                    lines = frame.count,
                    erased = frame.erased,
                    "frame rendered"
                );
                self.last_count = frame.count;
                self.commit_finalized(&frame);
            }
            Err(err) => warn!(error = %err, "frame write failed"),
        }
    }

    /// Drop the leading finalized elements once they are on screen.
    fn commit_finalized(&mut self, frame: &Frame) {
        if frame.start != 0 {
            return;
        }

        let committed: Vec<&RenderedElement> =
            frame.painted.iter().take_while(|r| r.finalized).collect();
        if committed.is_empty() {
            return;
        }

        let lines: usize = committed.iter().map(|r| r.lines()).sum();
        self.elements.drain(..committed.len());
        self.last_count = self.last_count.saturating_sub(lines);
        debug!(elements = committed.len(), lines, "committed finalized elements");
    }
}

// =============================================================================
// Document
// =============================================================================

/// A document rendered inline at the cursor.
///
/// All methods take `&self`; the state sits behind one mutex, so the render
/// loop and the application can share the document through an `Arc`.
#[derive(Debug, Default)]
pub struct Document {
    state: Mutex<DocumentState>,
}

impl Document {
    /// A document with no output. Nothing is drawn until [`set_output`](Self::set_output).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DocumentConfig) -> Self {
        Self {
            state: Mutex::new(DocumentState {
                config,
                ..Default::default()
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DocumentState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("document lock poisoned, recovering");
            self.state.clear_poison();
            poisoned.into_inner()
        })
    }

    /// Set where frames are drawn.
    pub fn set_output(&self, output: Output) {
        self.lock().output = Some(output);
    }

    /// Fix the target size. Zero for either extent means "detect".
    pub fn set_size(&self, rows: u16, cols: u16) {
        let mut state = self.lock();
        state.config.rows = rows;
        state.config.cols = cols;
    }

    /// Set the render loop's tick interval. Zero means the default.
    pub fn set_refresh_rate(&self, refresh_rate: Duration) {
        self.lock().config.refresh_rate = refresh_rate;
    }

    pub fn config(&self) -> DocumentConfig {
        self.lock().config
    }

    /// Append root elements, in order.
    pub fn add<I, E>(&self, elements: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        let mut state = self.lock();
        if state.closed {
            warn!("element added to a closed document, ignoring");
            return;
        }
        state.elements.extend(elements.into_iter().map(Into::into));
    }

    /// Render a single frame.
    ///
    /// A no-op without output or once closed. Write failures are logged and leave the
    /// line count of the previous frame in place.
    pub fn render_frame(&self) {
        self.lock().render_frame(false);
    }

    /// Draw the final frame with every element finalized, then stop.
    ///
    /// Whatever was on screen becomes scrollback. Later frames draw nothing
    /// and later `add` calls are ignored.
    pub fn close(&self) {
        let mut state = self.lock();
        if state.closed {
            return;
        }

        state.render_frame(true);
        state.elements.clear();
        state.last_count = 0;
        state.closed = true;
        debug!("document closed");
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Lines drawn by the last frame that are still subject to erasure.
    pub fn last_count(&self) -> usize {
        self.lock().last_count
    }

    /// Root elements still being redrawn.
    pub fn len(&self) -> usize {
        self.lock().elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
