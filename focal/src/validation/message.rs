//! Message contract for validation results.

/// A single validation finding about one location in the data model.
///
/// Equality drives distinct-change delivery: a republished list is only
/// broadcast again when it differs from the one currently held.
pub trait ValidationMessage: Clone + PartialEq + Send + Sync + 'static {
    /// Path identifier of the location this message concerns. Matches
    /// inspector identifiers by plain string equality.
    fn id(&self) -> &str;

    /// Whether this message reports a failure, as opposed to a hint that
    /// leaves the data valid.
    fn failed(&self) -> bool;
}
