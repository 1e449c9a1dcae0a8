/*!
 * Process Module
 * Process descriptors, lifecycle state and per-run records
 */

pub mod record;
pub mod types;
mod validation;

// Re-export for convenience
pub use record::ProcessRecord;
pub use types::{ProcessDescriptor, ProcessState, ProcessType};
pub(crate) use validation::{validate_descriptor, validate_unique_ids};
