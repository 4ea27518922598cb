//! Tree builder - flattens the component graph into a layout tree.
//!
//! This is the one place that dispatches on [`Element`] variants:
//!
//! - `Empty` produces nothing
//! - `Context` overlays its pairs and recurses without creating a node
//! - `Fragment` recurses into each child against the same parent
//! - everything else creates exactly one node appended to the parent
//!
//! Real nodes then go through the capability probes in a fixed order:
//! finalized marker, finalize notification, custom layout, and finally
//! either leaf registration or lazy expansion of the body.

use taffy::NodeId;

use crate::layout::{LayoutStyle, LayoutTree};

use super::component::{Element, Finalizer};
use super::context::Context;

/// Unfold `element` under `parent`, appending nodes in traversal order.
///
/// `finalize` is the flag inherited from ancestors. It only ever turns on
/// while descending.
pub fn unfold(cx: &Context, tree: &mut LayoutTree, parent: NodeId, element: &Element, finalize: bool) {
    match element {
        Element::Empty => {}

        Element::Context { pairs, inner } => {
            let cx = cx.with_pairs(pairs);
            unfold(&cx, tree, parent, inner, finalize);
        }

        Element::Fragment(children) => {
            for child in children {
                unfold(cx, tree, parent, child, finalize);
            }
        }

        _ => unfold_node(cx, tree, parent, element, finalize),
    }
}

/// Create the node for a non-structural element.
fn unfold_node(cx: &Context, tree: &mut LayoutTree, parent: NodeId, element: &Element, mut finalize: bool) {
    let node = tree.new_node(parent);

    if matches!(element, Element::Finalized(_)) {
        finalize = true;
    }
    if finalize {
        tree.mark_finalized(node);
        if let Some(finalizer) = finalizer(element) {
            finalizer.finalize();
        }
    }

    if let Some(layout) = custom_layout(element) {
        tree.apply_style(node, &layout);
    }

    match element {
        Element::Leaf(leaf) => tree.set_leaf(node, leaf.clone(), cx.clone()),
        Element::Component(component) => {
            let body = component.body(cx);
            unfold(cx, tree, node, &body, finalize);
        }
        Element::Finalized(inner) => unfold(cx, tree, node, inner, finalize),
        Element::Empty | Element::Fragment(_) | Element::Context { .. } => {}
    }
}

/// Probe the finalize notification capability.
fn finalizer(element: &Element) -> Option<&dyn Finalizer> {
    match element {
        Element::Component(component) => component.as_finalizer(),
        Element::Leaf(leaf) => leaf.as_finalizer(),
        _ => None,
    }
}

/// Probe the custom layout capability.
fn custom_layout(element: &Element) -> Option<LayoutStyle> {
    match element {
        Element::Component(component) => component.layout(),
        Element::Leaf(leaf) => leaf.layout(),
        _ => None,
    }
}
