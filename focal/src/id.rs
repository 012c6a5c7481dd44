//! Random unique ids.
//!
//! Root inspectors default to an empty id; callers that hold several roots
//! side by side can disambiguate them with a generated id instead.

use uuid::Uuid;

/// Generate a random, collision-free id string.
pub fn unique_id() -> String {
    Uuid::new_v4().to_string()
}
