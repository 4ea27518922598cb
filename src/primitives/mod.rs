//! Primitives - the building blocks documents are written with.
//!
//! - [`text`] - a leaf displaying styled, optionally wrapped text
//! - [`layout`] - a flex container component
//! - [`styled`] - a context scope setting the inherited text style

mod container;
mod style;
mod text;

pub use container::{Layout, layout};
pub use style::{STYLE_KEY, inherited_style, styled};
pub use text::{Text, text};
