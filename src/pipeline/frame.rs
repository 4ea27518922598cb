//! Element rendering - one root element to text.
//!
//! ```text
//! Element ──unfold──▶ LayoutTree ──compute(cols)──▶ geometry ──paint──▶ Canvas ──▶ sink
//! ```
//!
//! Everything is rebuilt from scratch on every call. The same function
//! serves the measurement pass (into `io::sink()`) and the paint pass.

use std::io::{self, Write};

use taffy::NodeId;
use tracing::trace;

use crate::engine::{Context, Element, unfold};
use crate::layout::LayoutTree;
use crate::renderer::Canvas;
use crate::types::Rect;

/// What rendering one element produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderedElement {
    /// Rows of the computed layout.
    pub rows: u16,
    /// Every top-level node of the element's tree was finalized.
    pub finalized: bool,
}

impl RenderedElement {
    /// Terminal lines the element occupies once its line break is written.
    pub fn lines(&self) -> usize {
        usize::from(self.rows).max(1)
    }
}

/// Lay out `element` at `cols` wide and write its rows to `w`.
///
/// Rows are separated by `\n`; no newline follows the last row. `finalize`
/// unfolds the element as if it were wrapped in a finalized marker.
pub fn render_element<W: Write + ?Sized>(
    element: &Element,
    w: &mut W,
    cols: u16,
    finalize: bool,
) -> io::Result<RenderedElement> {
    let tree = build_tree(element, cols, finalize);
    let rows = tree.rows(tree.root());

    let mut canvas = Canvas::new(cols, rows);
    paint_children(&tree, tree.root(), 0, 0, &mut canvas);
    canvas.write_to(w)?;

    trace!(rows, cols, "element rendered");
    Ok(RenderedElement {
        rows,
        finalized: tree.is_finalized(),
    })
}

/// Unfold and lay out `element`.
pub fn build_tree(element: &Element, cols: u16, finalize: bool) -> LayoutTree {
    let mut tree = LayoutTree::new(cols);
    let root = tree.root();
    unfold(&Context::new(), &mut tree, root, element, finalize);
    tree.compute(cols);
    tree
}

/// Paint the leaves below `node`; `(x, y)` is the node's absolute origin.
fn paint_children(tree: &LayoutTree, node: NodeId, x: u16, y: u16, canvas: &mut Canvas) {
    for child in tree.children(node) {
        let g = tree.geometry(child);
        let (ax, ay) = (x.saturating_add(g.x), y.saturating_add(g.y));

        if let Some(slot) = tree.leaf(child) {
            slot.leaf
                .paint(&slot.cx, Rect::new(ax, ay, g.cols, g.rows), canvas);
        }
        paint_children(tree, child, ax, ay, canvas);
    }
}
