pub mod id;
pub mod inspector;
pub mod validation;

pub use inspector::{
    Inspector, ListInspector, RootInspector, SubInspector, inspect, inspect_with_id,
};
pub use validation::{MessageStream, Validation, ValidationMessage, Validator};

pub mod prelude {
    pub use crate::id::unique_id;
    pub use crate::inspector::{
        Inspector, ListInspector, RootInspector, SubInspector, inspect, inspect_with_id,
    };
    pub use crate::validation::{MessageStream, Validation, ValidationMessage, Validator};

    // Re-export the lens capability for callers building their own lenses.
    pub use optics::{Lens, element_lens, position_lens};
}
