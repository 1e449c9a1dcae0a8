/*!
 * Process Descriptor Validation
 * Range and uniqueness checks applied before a run starts
 */

use super::types::ProcessDescriptor;
use crate::core::{Priority, ValidationError};
use std::collections::HashSet;

/// Validate a single descriptor's fields
pub(crate) fn validate_descriptor(descriptor: &ProcessDescriptor) -> Result<(), ValidationError> {
    if descriptor.id.trim().is_empty() {
        return Err(ValidationError::EmptyId);
    }

    if descriptor.arrival < 0 {
        return Err(ValidationError::NegativeArrival {
            id: descriptor.id.clone(),
            value: descriptor.arrival,
        });
    }

    if descriptor.burst <= 0 {
        return Err(ValidationError::NonPositiveBurst {
            id: descriptor.id.clone(),
            value: descriptor.burst,
        });
    }

    if descriptor.priority <= 0 {
        return Err(ValidationError::NonPositivePriority {
            id: descriptor.id.clone(),
            value: descriptor.priority,
        });
    }

    if descriptor.priority > i64::from(Priority::MAX) {
        return Err(ValidationError::PriorityOutOfRange {
            id: descriptor.id.clone(),
            value: descriptor.priority,
            max: Priority::MAX,
        });
    }

    Ok(())
}

/// Reject a batch that reuses an identifier
pub(crate) fn validate_unique_ids<'a, I>(ids: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateId(id.to_string()));
        }
    }
    Ok(())
}
