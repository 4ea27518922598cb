//! Rendering Pipeline
//!
//! Connects element trees to the terminal.
//!
//! # Pipeline Architecture
//!
//! ```text
//! render loop tick → Document::render_frame → render_element (per root) → OutputBuffer → sink
//! ```
//!
//! ## Data Flow
//!
//! 1. **render_loop** - ticks at the refresh rate until cancelled
//! 2. **document** - picks the suffix of root elements that fits, erases the
//!    previous frame, paints, commits finalized elements
//! 3. **frame** - unfolds one root element, computes layout, paints a canvas
//! 4. **terminal** - output sink and terminal size probe

pub mod config;
pub mod document;
pub mod frame;
pub mod render_loop;
pub mod terminal;

// Re-exports
pub use config::{DEFAULT_REFRESH_RATE, DocumentConfig};
pub use document::Document;
pub use frame::{RenderedElement, build_tree, render_element};
pub use render_loop::CancellationToken;
pub use terminal::{CrosstermProbe, FixedProbe, NoProbe, Output, SizeProbe, Stream};
