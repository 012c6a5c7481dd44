pub mod lens;
pub mod list;

pub use lens::Lens;
pub use list::{element_lens, position_lens};
