//! Geometry inputs for a layout node.

use crate::types::{AlignItems, Dimension, Edges, FlexDirection, FlexWrap, JustifyContent};

/// Flexbox settings a component can request for its node.
///
/// Unset (`None`) fields keep whatever the node already has, so a
/// `LayoutStyle` can be layered over the defaults the tree builder applies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutStyle {
    pub direction: Option<FlexDirection>,
    pub wrap: Option<FlexWrap>,
    pub grow: Option<f32>,
    pub shrink: Option<f32>,
    pub basis: Option<Dimension>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub min_width: Option<Dimension>,
    pub min_height: Option<Dimension>,
    pub max_width: Option<Dimension>,
    pub max_height: Option<Dimension>,
    pub margin: Option<Edges>,
    pub padding: Option<Edges>,
    pub gap: Option<u16>,
}

impl LayoutStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(mut self) -> Self {
        self.direction = Some(FlexDirection::Row);
        self
    }

    pub fn column(mut self) -> Self {
        self.direction = Some(FlexDirection::Column);
        self
    }

    pub fn direction(mut self, direction: FlexDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn wrap(mut self, wrap: FlexWrap) -> Self {
        self.wrap = Some(wrap);
        self
    }

    pub fn grow(mut self, grow: f32) -> Self {
        self.grow = Some(grow);
        self
    }

    pub fn shrink(mut self, shrink: f32) -> Self {
        self.shrink = Some(shrink);
        self
    }

    pub fn basis(mut self, basis: Dimension) -> Self {
        self.basis = Some(basis);
        self
    }

    pub fn justify(mut self, justify: JustifyContent) -> Self {
        self.justify_content = Some(justify);
        self
    }

    pub fn align(mut self, align: AlignItems) -> Self {
        self.align_items = Some(align);
        self
    }

    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn min_width(mut self, width: impl Into<Dimension>) -> Self {
        self.min_width = Some(width.into());
        self
    }

    pub fn min_height(mut self, height: impl Into<Dimension>) -> Self {
        self.min_height = Some(height.into());
        self
    }

    pub fn max_width(mut self, width: impl Into<Dimension>) -> Self {
        self.max_width = Some(width.into());
        self
    }

    pub fn max_height(mut self, height: impl Into<Dimension>) -> Self {
        self.max_height = Some(height.into());
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = Some(gap);
        self
    }
}

/// Computed geometry for one node, relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeGeometry {
    pub x: u16,
    pub y: u16,
    pub cols: u16,
    pub rows: u16,
}
