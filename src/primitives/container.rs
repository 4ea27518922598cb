//! Layout Primitive - a flex container around other elements.
//!
//! `Layout` is an ordinary component: its body is its children, and it
//! requests its node's flex settings through the custom-layout capability.
//!
//! ```ignore
//! use spark_document::{layout, text};
//!
//! layout(vec![text("left").into(), text("right").into()])
//!     .row()
//!     .gap(2);
//! ```

use crate::engine::{Component, Context, Element};
use crate::layout::LayoutStyle;
use crate::types::{AlignItems, Dimension, Edges, JustifyContent};

/// Flex container component.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    style: LayoutStyle,
    children: Element,
}

/// Wrap `children` in a flex container (a column by default).
pub fn layout(children: impl Into<Element>) -> Layout {
    Layout {
        style: LayoutStyle::default(),
        children: children.into(),
    }
}

impl Layout {
    /// Replace every layout setting at once.
    pub fn style(mut self, style: LayoutStyle) -> Self {
        self.style = style;
        self
    }

    pub fn row(mut self) -> Self {
        self.style = self.style.row();
        self
    }

    pub fn column(mut self) -> Self {
        self.style = self.style.column();
        self
    }

    pub fn grow(mut self, grow: f32) -> Self {
        self.style = self.style.grow(grow);
        self
    }

    pub fn shrink(mut self, shrink: f32) -> Self {
        self.style = self.style.shrink(shrink);
        self
    }

    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.style = self.style.width(width);
        self
    }

    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.style = self.style.height(height);
        self
    }

    pub fn min_width(mut self, width: impl Into<Dimension>) -> Self {
        self.style = self.style.min_width(width);
        self
    }

    pub fn max_width(mut self, width: impl Into<Dimension>) -> Self {
        self.style = self.style.max_width(width);
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.style = self.style.margin(margin);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.style = self.style.padding(padding);
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.style = self.style.gap(gap);
        self
    }

    pub fn justify(mut self, justify: JustifyContent) -> Self {
        self.style = self.style.justify(justify);
        self
    }

    pub fn align(mut self, align: AlignItems) -> Self {
        self.style = self.style.align(align);
        self
    }
}

impl Component for Layout {
    fn body(&self, _cx: &Context) -> Element {
        self.children.clone()
    }

    fn layout(&self) -> Option<LayoutStyle> {
        Some(self.style.clone())
    }
}

impl From<Layout> for Element {
    fn from(layout: Layout) -> Self {
        Element::component(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::unfold;
    use crate::layout::LayoutTree;
    use crate::primitives::text;

    fn computed(element: &Element, cols: u16) -> LayoutTree {
        let mut tree = LayoutTree::new(cols);
        let root = tree.root();
        unfold(&Context::new(), &mut tree, root, element, false);
        tree.compute(cols);
        tree
    }

    #[test]
    fn test_row_places_children_side_by_side() {
        let el: Element = layout(vec![text("ab").into(), text("cd").into()])
            .row()
            .gap(1)
            .into();
        let tree = computed(&el, 20);

        let container = tree.children(tree.root())[0];
        let kids = tree.children(container);
        assert_eq!(tree.rows(container), 1);
        assert_eq!(tree.geometry(kids[1]).x, 3);
    }

    #[test]
    fn test_padding_grows_container() {
        let el: Element = layout(text("x")).padding(Edges::symmetric(1, 2)).into();
        let tree = computed(&el, 20);
        let container = tree.children(tree.root())[0];
        assert_eq!(tree.rows(container), 3);
        let leaf = tree.children(container)[0];
        assert_eq!(tree.geometry(leaf).x, 2);
    }

    #[test]
    fn test_text_wraps_inside_fixed_width() {
        let el: Element = layout(text("hello world")).width(5u16).into();
        let tree = computed(&el, 20);
        let container = tree.children(tree.root())[0];
        assert_eq!(tree.cols(container), 5);
        assert_eq!(tree.rows(container), 3);
    }
}
