//! Component graph - the declarative description a document renders.
//!
//! An [`Element`] is a tagged variant. Structural variants (fragments,
//! context scopes, finalized wrappers) are handled by the tree builder; the
//! two open-ended variants carry trait objects:
//!
//! - [`Component`]: user code that produces another element (its body)
//! - [`Leaf`]: terminal content that measures and paints itself
//!
//! Optional capabilities are probed at runtime rather than inherited:
//! `layout()` returns custom layout settings and `as_finalizer()` exposes a
//! [`Finalizer`]. Both default to "not supported".
//!
//! Components are shared (`Arc`) and re-read on every frame from the render
//! thread, so they must be `Send + Sync` and cheap to unfold.

use std::fmt;
use std::sync::Arc;

use crate::layout::LayoutStyle;
use crate::renderer::Canvas;
use crate::types::Rect;

use super::context::{Context, ContextKey, ContextValue};

// =============================================================================
// Capability Traits
// =============================================================================

/// A user-defined component.
pub trait Component: Send + Sync {
    /// Produce the next element down the graph.
    ///
    /// Called on every frame, so it must not block.
    fn body(&self, cx: &Context) -> Element;

    /// Custom layout settings for the node this component creates.
    fn layout(&self) -> Option<LayoutStyle> {
        None
    }

    /// Finalize notification capability.
    fn as_finalizer(&self) -> Option<&dyn Finalizer> {
        None
    }
}

/// Notified when a component is about to be finalized.
///
/// After the first call the component must keep producing the same output.
/// The notification may be delivered again on later frames; implementations
/// must treat repeats as no-ops.
pub trait Finalizer {
    fn finalize(&self);
}

/// Terminal content: no further unfolding.
pub trait Leaf: Send + Sync {
    /// Required extents `(cols, rows)` given an available width.
    ///
    /// `None` means unconstrained (max-content sizing).
    fn measure(&self, cx: &Context, available_width: Option<u16>) -> (u16, u16);

    /// Paint into `area` of the canvas. `area` is the computed geometry.
    fn paint(&self, cx: &Context, area: Rect, canvas: &mut Canvas);

    fn layout(&self) -> Option<LayoutStyle> {
        None
    }

    fn as_finalizer(&self) -> Option<&dyn Finalizer> {
        None
    }
}

// =============================================================================
// Element
// =============================================================================

/// A node of the component graph.
#[derive(Clone, Default)]
pub enum Element {
    /// Absent component: produces nothing.
    #[default]
    Empty,
    /// User component, unfolded through its body.
    Component(Arc<dyn Component>),
    /// Terminal content measured by the layout engine.
    Leaf(Arc<dyn Leaf>),
    /// Children spliced into the parent without a node of their own.
    Fragment(Vec<Element>),
    /// Values visible to `inner` and its descendants only.
    Context {
        pairs: Vec<(ContextKey, ContextValue)>,
        inner: Box<Element>,
    },
    /// `inner` and its whole subtree will not change again.
    Finalized(Box<Element>),
}

impl Element {
    pub fn component<C: Component + 'static>(component: C) -> Self {
        Self::Component(Arc::new(component))
    }

    pub fn leaf<L: Leaf + 'static>(leaf: L) -> Self {
        Self::Leaf(Arc::new(leaf))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Wrap `self` in a context scope binding `key` to `value`.
    pub fn with_context<T>(self, key: ContextKey, value: T) -> Self
    where
        T: std::any::Any + Send + Sync,
    {
        context(vec![(key, Arc::new(value) as ContextValue)], self)
    }

    /// Wrap `self` in a finalized wrapper.
    pub fn finalized(self) -> Self {
        finalize(self)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Component(_) => f.write_str("Component"),
            Self::Leaf(_) => f.write_str("Leaf"),
            Self::Fragment(children) => f.debug_tuple("Fragment").field(children).finish(),
            Self::Context { pairs, inner } => f
                .debug_struct("Context")
                .field("keys", &pairs.iter().map(|(k, _)| *k).collect::<Vec<_>>())
                .field("inner", inner)
                .finish(),
            Self::Finalized(inner) => f.debug_tuple("Finalized").field(inner).finish(),
        }
    }
}

impl From<Vec<Element>> for Element {
    fn from(children: Vec<Element>) -> Self {
        Self::Fragment(children)
    }
}

impl<T: Into<Element>> From<Option<T>> for Element {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Group children without creating a layout node.
pub fn fragment<I, E>(children: I) -> Element
where
    I: IntoIterator<Item = E>,
    E: Into<Element>,
{
    Element::Fragment(children.into_iter().map(Into::into).collect())
}

/// Inject `pairs` into the context seen by `inner` and its descendants.
pub fn context<I>(pairs: I, inner: impl Into<Element>) -> Element
where
    I: IntoIterator<Item = (ContextKey, ContextValue)>,
{
    Element::Context {
        pairs: pairs.into_iter().collect(),
        inner: Box::new(inner.into()),
    }
}

/// Mark `inner` and its subtree finalized.
pub fn finalize(inner: impl Into<Element>) -> Element {
    Element::Finalized(Box::new(inner.into()))
}

/// Build a component from a closure over the context.
pub fn component<F>(body: F) -> Element
where
    F: Fn(&Context) -> Element + Send + Sync + 'static,
{
    Element::component(FnComponent(body))
}

struct FnComponent<F>(F);

impl<F> Component for FnComponent<F>
where
    F: Fn(&Context) -> Element + Send + Sync,
{
    fn body(&self, cx: &Context) -> Element {
        (self.0)(cx)
    }
}
