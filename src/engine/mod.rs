//! Component engine - the component graph and how it unfolds.
//!
//! - [`component`]: the [`Element`] variant and capability traits
//! - [`context`]: immutable key/value overlay threaded through unfolding
//! - [`builder`]: flattens an element into a [`LayoutTree`](crate::layout::LayoutTree)
//!
//! # Architecture
//!
//! Nothing here is persistent. Every frame the document unfolds each root
//! element from scratch:
//!
//! ```text
//! Element ──unfold──▶ LayoutTree (taffy arena) ──compute──▶ geometry
//!    │                     ▲
//!    └── Context overlay ──┘ (captured by leaves for measure + paint)
//! ```

pub mod builder;
pub mod component;
pub mod context;

pub use builder::unfold;
pub use component::{
    Component, Element, Finalizer, Leaf, component, context, finalize, fragment,
};
pub use context::{Context, ContextKey, ContextValue, value};
