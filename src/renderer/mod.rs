//! Renderer
//!
//! Turns painted cells into terminal bytes.
//!
//! - [`Canvas`] - grid of styled cells a layout tree is painted into
//! - [`OutputBuffer`] - batches one frame so the sink sees a single write
//! - [`ansi`] - cursor movement and erase commands (via crossterm)

pub mod ansi;
mod canvas;
mod output;

pub use canvas::{Canvas, Cell};
pub use output::OutputBuffer;
