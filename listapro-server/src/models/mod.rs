//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod list_name;
pub mod task_text;
pub mod record_id;

pub use validation::ValidationError;
pub use list_name::ListName;
pub use task_text::TaskText;
pub use record_id::RecordId;
