//! Lenses addressing single elements of a list.
//!
//! Two addressing modes exist: by position (the id fragment is the index,
//! which moves with reordering) and by element identity (the id fragment is
//! the element's own extracted id, which survives reordering).

use std::fmt;

use log::warn;

use crate::lens::Lens;

/// Lens focusing the element at `index`.
///
/// The id fragment is the decimal index. `get` panics when the index is out
/// of range; `set` with an out-of-range index leaves the list unchanged and
/// logs a warning.
pub fn position_lens<T>(index: usize) -> Lens<Vec<T>, T>
where
    T: Clone + 'static,
{
    Lens::new(
        index.to_string(),
        move |whole: &Vec<T>| {
            whole.get(index).cloned().unwrap_or_else(|| {
                panic!("position_lens: index {index} out of bounds (len {})", whole.len())
            })
        },
        move |whole: &Vec<T>, part: T| {
            if index >= whole.len() {
                warn!("position_lens: index {index} out of bounds, set is a no-op");
                return whole.clone();
            }
            let mut next = whole.clone();
            next[index] = part;
            next
        },
    )
}

/// Lens focusing the element with the same identity as `element`.
///
/// `id_provider` extracts a stable id from an element; the lens resolves by
/// comparing extracted ids, so it keeps tracking the same logical element
/// when the list is reordered. The id fragment is the extracted id rendered
/// with `Display`. The extracted ids are assumed unique within the list;
/// with duplicates the first match wins. `get` panics when no element
/// matches; `set` without a match leaves the list unchanged and logs a
/// warning.
pub fn element_lens<T, I, P>(element: &T, id_provider: P) -> Lens<Vec<T>, T>
where
    T: Clone + 'static,
    I: Clone + PartialEq + fmt::Display + Send + Sync + 'static,
    P: Fn(&T) -> I + Send + Sync + Clone + 'static,
{
    let target = id_provider(element);
    let fragment = target.to_string();

    let get_provider = id_provider.clone();
    let get_target = target.clone();
    let get_fragment = fragment.clone();

    let set_provider = id_provider;
    let set_target = target;
    let set_fragment = fragment.clone();

    Lens::new(
        fragment,
        move |whole: &Vec<T>| {
            whole
                .iter()
                .find(|item| get_provider(item) == get_target)
                .cloned()
                .unwrap_or_else(|| panic!("element_lens: no element with id `{get_fragment}`"))
        },
        move |whole: &Vec<T>, part: T| {
            match whole.iter().position(|item| set_provider(item) == set_target) {
                Some(index) => {
                    let mut next = whole.clone();
                    next[index] = part;
                    next
                }
                None => {
                    warn!("element_lens: no element with id `{set_fragment}`, set is a no-op");
                    whole.clone()
                }
            }
        },
    )
}
