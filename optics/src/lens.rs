//! Composable bidirectional accessors over immutable values.

use std::fmt;
use std::sync::Arc;

type Getter<A, B> = Arc<dyn Fn(&A) -> B + Send + Sync>;
type Setter<A, B> = Arc<dyn Fn(&A, B) -> A + Send + Sync>;

/// A bidirectional accessor focusing a whole value on one of its parts.
///
/// A lens pairs a pure getter (`&A -> B`) with a pure functional setter
/// (`(&A, B) -> A`, returning a new whole) and carries a stable string id
/// fragment naming the focused part. Lenses are cheap to clone (the
/// accessors live behind `Arc`) and compose associatively with [`Lens::then`].
///
/// Callers must uphold the lens laws (`get` after `set` returns the set
/// value; `set` of the current `get` is a no-op). Nothing here verifies
/// them; a law-breaking lens produces silently wrong values and ids
/// downstream.
pub struct Lens<A, B> {
    id: String,
    get: Getter<A, B>,
    set: Setter<A, B>,
}

impl<A: 'static, B: 'static> Lens<A, B> {
    /// Create a lens from an id fragment and a get/set pair.
    pub fn new<G, S>(id: impl Into<String>, get: G, set: S) -> Self
    where
        G: Fn(&A) -> B + Send + Sync + 'static,
        S: Fn(&A, B) -> A + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    /// The id fragment naming the focused part. May be empty.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Read the focused part out of `whole`.
    pub fn get(&self, whole: &A) -> B {
        (self.get)(whole)
    }

    /// Produce a new whole with the focused part replaced by `part`.
    pub fn set(&self, whole: &A, part: B) -> A {
        (self.set)(whole, part)
    }

    /// Compose with a lens focusing deeper, yielding a single `A -> C` lens.
    ///
    /// The composed id fragment is the dot-joined concatenation of both
    /// fragments; an empty fragment on either side contributes no separator.
    pub fn then<C: 'static>(&self, other: &Lens<B, C>) -> Lens<A, C> {
        let id = join_fragments(&self.id, &other.id);

        let outer_get = Arc::clone(&self.get);
        let inner_get = Arc::clone(&other.get);
        let get = move |whole: &A| inner_get(&outer_get(whole));

        let read_outer = Arc::clone(&self.get);
        let write_outer = Arc::clone(&self.set);
        let write_inner = Arc::clone(&other.set);
        let set = move |whole: &A, part: C| {
            let mid = read_outer(whole);
            write_outer(whole, write_inner(&mid, part))
        };

        Lens::new(id, get, set)
    }
}

impl<A, B> Clone for Lens<A, B> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
        }
    }
}

impl<A, B> fmt::Debug for Lens<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lens").field("id", &self.id).finish()
    }
}

fn join_fragments(left: &str, right: &str) -> String {
    if left.is_empty() {
        right.to_string()
    } else if right.is_empty() {
        left.to_string()
    } else {
        format!("{left}.{right}")
    }
}
