//! Reusable predicates for writing validation functions.
//!
//! Each predicate returns `true` when the value passes, so a validation
//! function pushes a message whenever a predicate returns `false`.

use regex::Regex;

/// Non-empty after trimming whitespace.
pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// At least `min` characters.
pub fn min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// At most `max` characters.
pub fn max_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

/// Matches the given pattern.
pub fn matches_pattern(value: &str, pattern: &Regex) -> bool {
    pattern.is_match(value)
}

/// A well-formed email address.
///
/// The empty string passes; combine with [`required`] to also reject it.
pub fn email(value: &str) -> bool {
    value.is_empty() || email_address::EmailAddress::is_valid(value)
}
