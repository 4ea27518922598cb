//! # spark-document
//!
//! Component-based inline terminal rendering.
//!
//! Applications describe output as a tree of elements; the document lays it
//! out with flexbox, paints it below the cursor and repaints it in place on
//! every frame without growing the scrollback.
//!
//! ## Architecture
//!
//! The rendering pipeline is rebuilt from scratch every frame:
//! ```text
//! Element graph → unfold → LayoutTree (taffy) → Canvas → erase + paint
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use spark_document::{CancellationToken, Document, Output, text};
//!
//! let doc = Arc::new(Document::new());
//! doc.set_output(Output::stdout());
//! doc.add([text("working…")]);
//!
//! let token = CancellationToken::new();
//! let handle = doc.spawn(token.clone())?;
//! // ...
//! token.cancel();
//! handle.join().ok();
//! doc.close();
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Dimension, TextStyle, Rect, etc.)
//! - [`engine`] - Element graph, context, tree builder
//! - [`layout`] - Taffy layout tree and text measurement
//! - [`renderer`] - Canvas, output batching, ANSI commands
//! - [`pipeline`] - Document, frame rendering, render loop
//! - [`primitives`] - Text, layout containers, inherited styles

pub mod engine;
pub mod layout;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use engine::{
    Component, Context, ContextKey, ContextValue, Element, Finalizer, Leaf, component, context,
    finalize, fragment, value,
};

pub use layout::{LayoutStyle, LayoutTree};

pub use renderer::{Canvas, Cell};

pub use pipeline::{
    CancellationToken, CrosstermProbe, DEFAULT_REFRESH_RATE, Document, DocumentConfig,
    FixedProbe, NoProbe, Output, SizeProbe, Stream,
};

pub use primitives::{Layout, STYLE_KEY, Text, layout, styled, text};
