//! Tests for position and identity based element lenses.

use optics::{element_lens, position_lens};

#[derive(Debug, Clone, PartialEq)]
struct Track {
    id: u32,
    title: String,
}

fn track(id: u32, title: &str) -> Track {
    Track {
        id,
        title: title.to_string(),
    }
}

fn playlist() -> Vec<Track> {
    vec![track(1, "one"), track(2, "two"), track(3, "three")]
}

// ============================================================================
// Position addressing
// ============================================================================

#[test]
fn test_position_lens_gets_element_at_index() {
    let lens = position_lens::<Track>(1);
    assert_eq!(lens.get(&playlist()), track(2, "two"));
}

#[test]
fn test_position_lens_id_is_the_index() {
    assert_eq!(position_lens::<Track>(0).id(), "0");
    assert_eq!(position_lens::<Track>(42).id(), "42");
}

#[test]
fn test_position_lens_set_replaces_index_only() {
    let lens = position_lens::<Track>(1);
    let next = lens.set(&playlist(), track(2, "second"));

    assert_eq!(next[0], track(1, "one"));
    assert_eq!(next[1], track(2, "second"));
    assert_eq!(next[2], track(3, "three"));
}

#[test]
fn test_position_lens_set_out_of_bounds_is_noop() {
    let lens = position_lens::<Track>(9);
    assert_eq!(lens.set(&playlist(), track(9, "nine")), playlist());
}

#[test]
#[should_panic]
fn test_position_lens_get_out_of_bounds_panics() {
    position_lens::<Track>(9).get(&playlist());
}

// ============================================================================
// Identity addressing
// ============================================================================

#[test]
fn test_element_lens_gets_by_identity() {
    let lens = element_lens(&track(2, "two"), |t: &Track| t.id);
    assert_eq!(lens.get(&playlist()), track(2, "two"));
}

#[test]
fn test_element_lens_id_is_the_extracted_id() {
    let lens = element_lens(&track(2, "two"), |t: &Track| t.id);
    assert_eq!(lens.id(), "2");
}

#[test]
fn test_element_lens_survives_reordering() {
    let lens = element_lens(&track(2, "two"), |t: &Track| t.id);

    let mut reordered = playlist();
    reordered.reverse();

    // identity addressing still finds the same logical element
    assert_eq!(lens.get(&reordered), track(2, "two"));
    // position addressing now resolves whatever occupies the index
    assert_eq!(position_lens::<Track>(1).get(&reordered), track(2, "two"));
    assert_eq!(position_lens::<Track>(0).get(&reordered), track(3, "three"));
}

#[test]
fn test_element_lens_set_replaces_matching_element() {
    let lens = element_lens(&track(3, "three"), |t: &Track| t.id);
    let next = lens.set(&playlist(), track(3, "third"));

    assert_eq!(next[2], track(3, "third"));
    assert_eq!(next[0], track(1, "one"));
    assert_eq!(next[1], track(2, "two"));
}

#[test]
fn test_element_lens_set_without_match_is_noop() {
    let lens = element_lens(&track(7, "seven"), |t: &Track| t.id);
    assert_eq!(lens.set(&playlist(), track(7, "seven")), playlist());
}

#[test]
#[should_panic]
fn test_element_lens_get_without_match_panics() {
    element_lens(&track(7, "seven"), |t: &Track| t.id).get(&playlist());
}
