//! Taffy Bridge - the layout tree handed to the flexbox solver.
//!
//! [`LayoutTree`] is an arena of nodes backed by a [`TaffyTree`]. The tree
//! builder creates nodes top-down in document order, leaves register their
//! measurement through the node context, and [`LayoutTree::compute`] runs
//! Taffy against a definite root width with unconstrained height. Results
//! are read back per node as whole cells.
//!
//! Taffy errors only occur for stale node ids, which this module never
//! hands out; they are mapped to zero geometry rather than propagated.

use std::sync::Arc;

use taffy::{
    AlignItems as TaffyAlignItems, AvailableSpace, Dimension as TaffyDimension, Display,
    FlexDirection as TaffyFlexDirection, FlexWrap as TaffyFlexWrap,
    JustifyContent as TaffyJustifyContent, LengthPercentage, LengthPercentageAuto, NodeId, Rect,
    Size, Style, TaffyTree,
};

use crate::engine::{Context, Leaf};
use crate::types::{AlignItems, Dimension, Edges, FlexDirection, FlexWrap, JustifyContent};

use super::types::{LayoutStyle, NodeGeometry};

// =============================================================================
// CONVERSIONS
// =============================================================================

/// Convert our Dimension to Taffy's Dimension.
fn to_taffy_dimension(dim: Dimension) -> TaffyDimension {
    match dim {
        Dimension::Auto => TaffyDimension::Auto,
        Dimension::Cells(n) => TaffyDimension::Length(n as f32),
        Dimension::Percent(p) => TaffyDimension::Percent(p / 100.0),
    }
}

fn to_taffy_flex_direction(dir: FlexDirection) -> TaffyFlexDirection {
    match dir {
        FlexDirection::Column => TaffyFlexDirection::Column,
        FlexDirection::Row => TaffyFlexDirection::Row,
        FlexDirection::ColumnReverse => TaffyFlexDirection::ColumnReverse,
        FlexDirection::RowReverse => TaffyFlexDirection::RowReverse,
    }
}

fn to_taffy_flex_wrap(wrap: FlexWrap) -> TaffyFlexWrap {
    match wrap {
        FlexWrap::NoWrap => TaffyFlexWrap::NoWrap,
        FlexWrap::Wrap => TaffyFlexWrap::Wrap,
    }
}

fn to_taffy_justify_content(justify: JustifyContent) -> TaffyJustifyContent {
    match justify {
        JustifyContent::FlexStart => TaffyJustifyContent::FlexStart,
        JustifyContent::Center => TaffyJustifyContent::Center,
        JustifyContent::FlexEnd => TaffyJustifyContent::FlexEnd,
        JustifyContent::SpaceBetween => TaffyJustifyContent::SpaceBetween,
        JustifyContent::SpaceAround => TaffyJustifyContent::SpaceAround,
        JustifyContent::SpaceEvenly => TaffyJustifyContent::SpaceEvenly,
    }
}

fn to_taffy_align_items(align: AlignItems) -> TaffyAlignItems {
    match align {
        AlignItems::Stretch => TaffyAlignItems::Stretch,
        AlignItems::FlexStart => TaffyAlignItems::FlexStart,
        AlignItems::Center => TaffyAlignItems::Center,
        AlignItems::FlexEnd => TaffyAlignItems::FlexEnd,
    }
}

fn to_margin(edges: Edges) -> Rect<LengthPercentageAuto> {
    Rect {
        top: LengthPercentageAuto::Length(edges.top as f32),
        right: LengthPercentageAuto::Length(edges.right as f32),
        bottom: LengthPercentageAuto::Length(edges.bottom as f32),
        left: LengthPercentageAuto::Length(edges.left as f32),
    }
}

fn to_padding(edges: Edges) -> Rect<LengthPercentage> {
    Rect {
        top: LengthPercentage::Length(edges.top as f32),
        right: LengthPercentage::Length(edges.right as f32),
        bottom: LengthPercentage::Length(edges.bottom as f32),
        left: LengthPercentage::Length(edges.left as f32),
    }
}

/// Layer the set fields of `layout` onto a Taffy style.
fn apply_layout_style(style: &mut Style, layout: &LayoutStyle) {
    if let Some(direction) = layout.direction {
        style.flex_direction = to_taffy_flex_direction(direction);
    }
    if let Some(wrap) = layout.wrap {
        style.flex_wrap = to_taffy_flex_wrap(wrap);
    }
    if let Some(grow) = layout.grow {
        style.flex_grow = grow;
    }
    if let Some(shrink) = layout.shrink {
        style.flex_shrink = shrink;
    }
    if let Some(basis) = layout.basis {
        style.flex_basis = to_taffy_dimension(basis);
    }
    if let Some(justify) = layout.justify_content {
        style.justify_content = Some(to_taffy_justify_content(justify));
    }
    if let Some(align) = layout.align_items {
        style.align_items = Some(to_taffy_align_items(align));
    }
    if let Some(width) = layout.width {
        style.size.width = to_taffy_dimension(width);
    }
    if let Some(height) = layout.height {
        style.size.height = to_taffy_dimension(height);
    }
    if let Some(width) = layout.min_width {
        style.min_size.width = to_taffy_dimension(width);
    }
    if let Some(height) = layout.min_height {
        style.min_size.height = to_taffy_dimension(height);
    }
    if let Some(width) = layout.max_width {
        style.max_size.width = to_taffy_dimension(width);
    }
    if let Some(height) = layout.max_height {
        style.max_size.height = to_taffy_dimension(height);
    }
    if let Some(margin) = layout.margin {
        style.margin = to_margin(margin);
    }
    if let Some(padding) = layout.padding {
        style.padding = to_padding(padding);
    }
    if let Some(gap) = layout.gap {
        style.gap = Size {
            width: LengthPercentage::Length(gap as f32),
            height: LengthPercentage::Length(gap as f32),
        };
    }
}

/// Default style of a freshly created node: a flex column, like a block.
fn node_style() -> Style {
    Style {
        display: Display::Flex,
        flex_direction: TaffyFlexDirection::Column,
        ..Default::default()
    }
}

// =============================================================================
// NODE CONTEXT
// =============================================================================

/// A leaf registered on a node, with the context it was unfolded under.
#[derive(Clone)]
pub struct LeafSlot {
    pub leaf: Arc<dyn Leaf>,
    pub cx: Context,
}

/// Per-node data stored in the Taffy arena.
#[derive(Clone, Default)]
pub struct NodeData {
    pub finalized: bool,
    pub leaf: Option<LeafSlot>,
}

/// Measure function bridging Taffy to [`Leaf::measure`].
fn measure_leaf(
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    data: Option<&mut NodeData>,
) -> Size<f32> {
    let Some(slot) = data.and_then(|d| d.leaf.as_ref()) else {
        return Size::ZERO;
    };

    // A known width pins the wrap width; otherwise derive it from the space.
    let available_width = match known_dimensions.width {
        Some(w) => Some(w.max(0.0) as u16),
        None => match available_space.width {
            AvailableSpace::Definite(w) => Some(w.max(0.0) as u16),
            AvailableSpace::MinContent => Some(0),
            AvailableSpace::MaxContent => None,
        },
    };

    let (cols, rows) = slot.leaf.measure(&slot.cx, available_width);

    Size {
        width: known_dimensions.width.unwrap_or(cols as f32),
        height: known_dimensions.height.unwrap_or(rows as f32),
    }
}

// =============================================================================
// LAYOUT TREE
// =============================================================================

/// Arena of layout nodes for one element, rebuilt every frame.
pub struct LayoutTree {
    taffy: TaffyTree<NodeData>,
    root: NodeId,
}

impl LayoutTree {
    /// Create a tree whose root is a column exactly `cols` wide.
    pub fn new(cols: u16) -> Self {
        let mut taffy: TaffyTree<NodeData> = TaffyTree::new();
        let style = Style {
            size: Size {
                width: TaffyDimension::Length(cols as f32),
                height: TaffyDimension::Auto,
            },
            ..node_style()
        };
        let root = taffy
            .new_leaf_with_context(style, NodeData::default())
            .expect("taffy leaf allocation is infallible");
        Self { taffy, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Append a new node as the last child of `parent`.
    pub fn new_node(&mut self, parent: NodeId) -> NodeId {
        let node = match self
            .taffy
            .new_leaf_with_context(node_style(), NodeData::default())
        {
            Ok(node) => node,
            Err(_) => return parent,
        };
        let _ = self.taffy.add_child(parent, node);
        node
    }

    /// Layer custom layout settings onto a node.
    pub fn apply_style(&mut self, node: NodeId, layout: &LayoutStyle) {
        if let Ok(current) = self.taffy.style(node) {
            let mut style = current.clone();
            apply_layout_style(&mut style, layout);
            let _ = self.taffy.set_style(node, style);
        }
    }

    /// Mark a node finalized.
    pub fn mark_finalized(&mut self, node: NodeId) {
        if let Some(data) = self.taffy.get_node_context_mut(node) {
            data.finalized = true;
        }
    }

    pub fn is_node_finalized(&self, node: NodeId) -> bool {
        self.taffy
            .get_node_context(node)
            .is_some_and(|d| d.finalized)
    }

    /// True when the tree has top-level nodes and all of them are finalized.
    pub fn is_finalized(&self) -> bool {
        let children = self.children(self.root);
        !children.is_empty() && children.iter().all(|&n| self.is_node_finalized(n))
    }

    /// Register a leaf on a node and set the leaf defaults:
    /// row direction, shrink 1, grow 0.
    pub fn set_leaf(&mut self, node: NodeId, leaf: Arc<dyn Leaf>, cx: Context) {
        self.apply_style(
            node,
            &LayoutStyle::new()
                .direction(FlexDirection::Row)
                .shrink(1.0)
                .grow(0.0),
        );
        if let Some(data) = self.taffy.get_node_context_mut(node) {
            data.leaf = Some(LeafSlot { leaf, cx });
        }
    }

    pub fn leaf(&self, node: NodeId) -> Option<&LeafSlot> {
        self.taffy
            .get_node_context(node)
            .and_then(|d| d.leaf.as_ref())
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.taffy.children(node).unwrap_or_default()
    }

    /// Run the flexbox solver with a definite width and unbounded height.
    pub fn compute(&mut self, cols: u16) {
        let available = Size {
            width: AvailableSpace::Definite(cols as f32),
            height: AvailableSpace::MaxContent,
        };

        let mut measure_fn = |known_dimensions: Size<Option<f32>>,
                              available_space: Size<AvailableSpace>,
                              _node_id: NodeId,
                              context: Option<&mut NodeData>,
                              _style: &Style| {
            measure_leaf(known_dimensions, available_space, context)
        };

        let _ = self
            .taffy
            .compute_layout_with_measure(self.root, available, &mut measure_fn);
    }

    /// Computed geometry of a node relative to its parent.
    pub fn geometry(&self, node: NodeId) -> NodeGeometry {
        match self.taffy.layout(node) {
            Ok(layout) => NodeGeometry {
                x: layout.location.x.max(0.0).round() as u16,
                y: layout.location.y.max(0.0).round() as u16,
                cols: layout.size.width.max(0.0).round() as u16,
                rows: layout.size.height.max(0.0).round() as u16,
            },
            Err(_) => NodeGeometry::default(),
        }
    }

    pub fn rows(&self, node: NodeId) -> u16 {
        self.geometry(node).rows
    }

    pub fn cols(&self, node: NodeId) -> u16 {
        self.geometry(node).cols
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = self.children(self.root);
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(self.children(node));
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree_has_zero_extents() {
        let mut tree = LayoutTree::new(80);
        tree.compute(80);
        assert_eq!(tree.rows(tree.root()), 0);
        assert_eq!(tree.node_count(), 0);
        assert!(!tree.is_finalized());
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut tree = LayoutTree::new(40);
        let root = tree.root();
        let a = tree.new_node(root);
        let b = tree.new_node(root);
        let c = tree.new_node(a);
        assert_eq!(tree.children(root), vec![a, b]);
        assert_eq!(tree.children(a), vec![c]);
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn test_fixed_sizes_stack_in_column() {
        let mut tree = LayoutTree::new(40);
        let root = tree.root();
        let a = tree.new_node(root);
        tree.apply_style(a, &LayoutStyle::new().height(3u16));
        let b = tree.new_node(root);
        tree.apply_style(b, &LayoutStyle::new().height(2u16));
        tree.compute(40);

        assert_eq!(tree.rows(root), 5);
        assert_eq!(tree.cols(root), 40);
        assert_eq!(tree.geometry(b).y, 3);
        // Column children stretch across
        assert_eq!(tree.cols(a), 40);
    }

    #[test]
    fn test_flex_row_grow() {
        let mut tree = LayoutTree::new(30);
        let root = tree.root();
        let row = tree.new_node(root);
        tree.apply_style(row, &LayoutStyle::new().row().height(1u16));
        let fixed = tree.new_node(row);
        tree.apply_style(fixed, &LayoutStyle::new().width(10u16));
        let grow = tree.new_node(row);
        tree.apply_style(grow, &LayoutStyle::new().grow(1.0));
        tree.compute(30);

        assert_eq!(tree.geometry(grow).x, 10);
        assert_eq!(tree.cols(grow), 20);
    }

    #[test]
    fn test_padding_offsets_children() {
        let mut tree = LayoutTree::new(20);
        let root = tree.root();
        let outer = tree.new_node(root);
        tree.apply_style(outer, &LayoutStyle::new().padding(Edges::new(1, 0, 0, 2)));
        let inner = tree.new_node(outer);
        tree.apply_style(inner, &LayoutStyle::new().height(1u16));
        tree.compute(20);

        let g = tree.geometry(inner);
        assert_eq!((g.x, g.y), (2, 1));
        assert_eq!(tree.rows(outer), 2);
    }

    #[test]
    fn test_finalized_requires_all_top_level() {
        let mut tree = LayoutTree::new(10);
        let root = tree.root();
        let a = tree.new_node(root);
        let b = tree.new_node(root);
        tree.mark_finalized(a);
        assert!(!tree.is_finalized());
        tree.mark_finalized(b);
        assert!(tree.is_finalized());
    }

    #[test]
    fn test_dimension_conversion() {
        assert!(matches!(to_taffy_dimension(Dimension::Auto), TaffyDimension::Auto));
        assert!(matches!(to_taffy_dimension(Dimension::Cells(50)), TaffyDimension::Length(50.0)));
        if let TaffyDimension::Percent(p) = to_taffy_dimension(Dimension::Percent(50.0)) {
            assert!((p - 0.5).abs() < 0.001);
        } else {
            panic!("Expected Percent variant");
        }
    }
}
