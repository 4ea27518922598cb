//! Render context - immutable key/value overlay threaded through unfolding.
//!
//! A [`Context`] is a persistent linked list of frames. Adding a value never
//! mutates the receiver: it returns a new context whose head points at the
//! old one, so sibling subtrees can never observe each other's overlays.
//! Lookups walk from the newest frame outward, which gives shadowing for
//! free: the innermost value for a key wins.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Key type for context values.
pub type ContextKey = &'static str;

/// Type-erased context value.
pub type ContextValue = Arc<dyn Any + Send + Sync>;

struct Frame {
    key: ContextKey,
    value: ContextValue,
    parent: Option<Arc<Frame>>,
}

/// Immutable, copy-on-write key/value overlay.
///
/// Cloning is a reference-count bump.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Frame>>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new context with `key` bound to `value` on top of `self`.
    pub fn with_value<T: Any + Send + Sync>(&self, key: ContextKey, value: T) -> Self {
        self.with_raw(key, Arc::new(value))
    }

    /// Like [`with_value`](Self::with_value) for an already type-erased value.
    pub fn with_raw(&self, key: ContextKey, value: ContextValue) -> Self {
        Self {
            head: Some(Arc::new(Frame {
                key,
                value,
                parent: self.head.clone(),
            })),
        }
    }

    /// Overlay pairs in order. Later pairs shadow earlier pairs with the same key.
    pub fn with_pairs<'a, I>(&self, pairs: I) -> Self
    where
        I: IntoIterator<Item = &'a (ContextKey, ContextValue)>,
    {
        pairs
            .into_iter()
            .fold(self.clone(), |cx, (key, value)| cx.with_raw(*key, value.clone()))
    }

    /// Look up the innermost value for `key`.
    ///
    /// Returns `None` when the key is unbound or when the innermost binding
    /// holds a value of another type.
    pub fn get<T: Any>(&self, key: ContextKey) -> Option<&T> {
        self.raw(key).and_then(|value| value.downcast_ref::<T>())
    }

    /// Look up the innermost type-erased value for `key`.
    pub fn raw(&self, key: ContextKey) -> Option<&ContextValue> {
        let mut frame = self.head.as_deref();
        while let Some(f) = frame {
            if f.key == key {
                return Some(&f.value);
            }
            frame = f.parent.as_deref();
        }
        None
    }

    /// Every binding of `key` holding a `T`, innermost first.
    ///
    /// Unlike [`get`](Self::get) this sees shadowed bindings, so callers
    /// can layer nested scopes instead of replacing them.
    pub fn values<'a, T: Any>(&'a self, key: ContextKey) -> impl Iterator<Item = &'a T> + 'a {
        let mut frame = self.head.as_deref();
        std::iter::from_fn(move || {
            while let Some(f) = frame {
                frame = f.parent.as_deref();
                if f.key == key {
                    if let Some(v) = f.value.downcast_ref::<T>() {
                        return Some(v);
                    }
                }
            }
            None
        })
    }

    pub fn contains(&self, key: ContextKey) -> bool {
        self.raw(key).is_some()
    }

    /// Number of frames, shadowed ones included.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut frame = self.head.as_deref();
        while let Some(f) = frame {
            depth += 1;
            frame = f.parent.as_deref();
        }
        depth
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = Vec::new();
        let mut frame = self.head.as_deref();
        while let Some(fr) = frame {
            keys.push(fr.key);
            frame = fr.parent.as_deref();
        }
        f.debug_struct("Context").field("keys", &keys).finish()
    }
}

/// Wrap a value for use in a context-scope pair list.
pub fn value<T: Any + Send + Sync>(value: T) -> ContextValue {
    Arc::new(value)
}
