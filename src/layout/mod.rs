//! Layout Module
//!
//! Flexbox layout computation for terminal documents using Taffy.
//!
//! # Architecture
//!
//! The layout module uses [Taffy](https://github.com/DioxusLabs/taffy) for
//! W3C-compliant flexbox computation. The bridge:
//!
//! 1. Converts [`LayoutStyle`] settings → Taffy styles
//! 2. Keeps one arena ([`LayoutTree`]) per rendered element
//! 3. Routes leaf measurement through the node context
//! 4. Reads computed geometry back as whole cells

mod taffy_bridge;
mod text_measure;
mod types;

pub use taffy_bridge::{LayoutTree, LeafSlot, NodeData};
pub use text_measure::*;
pub use types::*;
