pub mod descriptor;
pub mod section;
pub mod state;
pub mod validation;

pub use descriptor::{validate_descriptors, FieldDescriptor, FieldKind, SelectOption};
pub use section::{SectionKind, SectionMeta};
pub use state::FormState;
pub use validation::{validate_form, FormErrors, ValidationRules};
