mod field;
mod section;
mod state;

pub use field::{FieldState, FieldValue};
pub use section::SectionState;
pub use state::FormState;
