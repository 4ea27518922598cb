//! Inherited text style.
//!
//! [`styled`] is a context scope: it creates no layout node, it only makes a
//! [`TextStyle`] visible to the text leaves below it. Nested scopes layer,
//! the inner style winning where both set a color.

use crate::engine::{Context, ContextKey, Element, context, value};
use crate::types::TextStyle;

/// Context key the inherited text style is stored under.
pub const STYLE_KEY: ContextKey = "spark.text_style";

/// Apply `style` to every text leaf inside `inner`.
pub fn styled(style: TextStyle, inner: impl Into<Element>) -> Element {
    context([(STYLE_KEY, value(style))], inner)
}

/// The style inherited at this point of the graph, all enclosing scopes layered.
pub fn inherited_style(cx: &Context) -> TextStyle {
    cx.values::<TextStyle>(STYLE_KEY)
        .fold(TextStyle::default(), |inner, outer| inner.over(*outer))
}
