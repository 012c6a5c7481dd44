//! Focused views into nested immutable data with stable path identifiers.
//!
//! An inspector pairs a value somewhere inside a root data structure with a
//! path identifier derived from the chain of lenses used to reach it. The
//! identifier depends only on the lens id fragments, never on the data, so
//! UI elements tagged with it can be matched against validation messages for
//! exactly that location.
//!
//! Inspectors are immutable snapshots. Writing back goes through the
//! root-composed lens (see [`SubInspector::update`]), which yields a new
//! root value to wrap in a fresh root inspector.
//!
//! # Example
//!
//! ```ignore
//! let person = inspect(person);
//! let name = person.sub(name_lens());
//! assert_eq!(name.id(), "name");
//!
//! let new_root = name.update("Grace".to_string());
//! let person = inspect(new_root);
//! ```

use std::fmt;
use std::sync::Arc;

use optics::{Lens, element_lens, position_lens};

/// Wrap a root value in a [`RootInspector`] with an empty id.
pub fn inspect<T>(data: T) -> RootInspector<T> {
    RootInspector::new(data)
}

/// Wrap a root value in a [`RootInspector`] with a caller-supplied id.
pub fn inspect_with_id<T>(data: T, id: impl Into<String>) -> RootInspector<T> {
    RootInspector::with_id(data, id)
}

/// A focused view into a data structure: the value at the focus plus the
/// path identifier of that focus.
pub trait Inspector<T> {
    /// The root value type of the chain this inspector belongs to.
    type Root;

    /// The value at the focus, captured when this inspector was created.
    fn data(&self) -> &T;

    /// The path identifier of the focus.
    fn id(&self) -> &str;

    /// Narrow the focus through `lens`.
    ///
    /// The child's id is this id joined with the lens fragment by a `.`,
    /// with trailing dots trimmed; the child also carries the root-composed
    /// lens for O(depth) write-back.
    fn sub<X: 'static>(&self, lens: Lens<T, X>) -> SubInspector<Self::Root, X>;
}

/// The starting point of an inspector chain, wrapping the root value itself.
pub struct RootInspector<T> {
    data: Arc<T>,
    id: String,
}

impl<T> RootInspector<T> {
    /// Wrap `data` with an empty id.
    pub fn new(data: T) -> Self {
        Self::with_id(data, "")
    }

    /// Wrap `data` with the given id, used verbatim as the identifier prefix
    /// for every descendant.
    pub fn with_id(data: T, id: impl Into<String>) -> Self {
        Self {
            data: Arc::new(data),
            id: id.into(),
        }
    }
}

impl<T: 'static> Inspector<T> for RootInspector<T> {
    type Root = T;

    fn data(&self) -> &T {
        &self.data
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn sub<X: 'static>(&self, lens: Lens<T, X>) -> SubInspector<T, X> {
        let data = lens.get(&self.data);
        let id = join_id(&self.id, lens.id());
        SubInspector {
            root: self.clone(),
            root_lens: lens,
            data,
            id,
        }
    }
}

impl<T> Clone for RootInspector<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            id: self.id.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RootInspector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootInspector")
            .field("id", &self.id)
            .field("data", &self.data)
            .finish()
    }
}

/// An inspector reached by focusing a parent inspector through a lens.
///
/// Besides its value and id it retains the root inspector and the single
/// lens composed from every step since the root, so a changed focus value
/// can be written straight back into the root.
pub struct SubInspector<R, T> {
    root: RootInspector<R>,
    root_lens: Lens<R, T>,
    data: T,
    id: String,
}

impl<R, T> SubInspector<R, T> {
    /// The root inspector this chain started from.
    pub fn root(&self) -> &RootInspector<R> {
        &self.root
    }

    /// The single lens mapping the root value directly to this focus,
    /// composed once at construction.
    pub fn root_lens(&self) -> &Lens<R, T> {
        &self.root_lens
    }
}

impl<R: 'static, T: 'static> SubInspector<R, T> {
    /// Write `value` at this focus and return the resulting root value.
    ///
    /// The write goes through the root-composed lens, so it costs one lens
    /// application regardless of how deep this inspector sits. The returned
    /// root is a new value; wrap it in a fresh root inspector to observe it.
    pub fn update(&self, value: T) -> R {
        self.root_lens.set(self.root.data(), value)
    }
}

impl<R: 'static, T: 'static> Inspector<T> for SubInspector<R, T> {
    type Root = R;

    fn data(&self) -> &T {
        &self.data
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn sub<X: 'static>(&self, lens: Lens<T, X>) -> SubInspector<R, X> {
        let data = lens.get(&self.data);
        let id = join_id(&self.id, lens.id());
        let root_lens = self.root_lens.then(&lens);
        SubInspector {
            root: self.root.clone(),
            root_lens,
            data,
            id,
        }
    }
}

impl<R, T: Clone> Clone for SubInspector<R, T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            root_lens: self.root_lens.clone(),
            data: self.data.clone(),
            id: self.id.clone(),
        }
    }
}

impl<R, T: fmt::Debug> fmt::Debug for SubInspector<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubInspector")
            .field("id", &self.id)
            .field("data", &self.data)
            .finish()
    }
}

/// List element addressing for inspectors focused on a `Vec`.
pub trait ListInspector<T>: Inspector<Vec<T>> {
    /// Focus the element at `index`; the id fragment is the index itself.
    fn sub_at(&self, index: usize) -> SubInspector<Self::Root, T>;

    /// Focus the element with the same identity as `element`, where
    /// `id_provider` extracts a stable id from an element. The id fragment
    /// is the extracted id, so it survives reordering of the list.
    fn sub_element<I, P>(&self, element: &T, id_provider: P) -> SubInspector<Self::Root, T>
    where
        I: Clone + PartialEq + fmt::Display + Send + Sync + 'static,
        P: Fn(&T) -> I + Send + Sync + Clone + 'static;
}

impl<T, N> ListInspector<T> for N
where
    T: Clone + 'static,
    N: Inspector<Vec<T>>,
{
    fn sub_at(&self, index: usize) -> SubInspector<Self::Root, T> {
        self.sub(position_lens(index))
    }

    fn sub_element<I, P>(&self, element: &T, id_provider: P) -> SubInspector<Self::Root, T>
    where
        I: Clone + PartialEq + fmt::Display + Send + Sync + 'static,
        P: Fn(&T) -> I + Send + Sync + Clone + 'static,
    {
        self.sub(element_lens(element, id_provider))
    }
}

/// Join a parent identifier with a lens fragment.
///
/// Trims trailing dots only; empty segments earlier in the identifier are
/// kept as-is so existing identifiers never change retroactively.
fn join_id(parent: &str, fragment: &str) -> String {
    let joined = if parent.is_empty() {
        fragment.to_string()
    } else {
        format!("{parent}.{fragment}")
    };
    joined.trim_end_matches('.').to_string()
}
