/*!
 * Process Types
 * Descriptor input, type tag and lifecycle state
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cosmetic workload tag; has no effect on scheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProcessType {
    #[default]
    #[serde(rename = "CPU", alias = "cpu")]
    Cpu,
    #[serde(rename = "I/O", alias = "io", alias = "i/o")]
    Io,
}

impl ProcessType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Io => "I/O",
        }
    }
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process lifecycle state
///
/// Legal transitions: `New -> Ready -> Running -> {Ready, Terminated}`.
/// `Terminated` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessState {
    /// Not yet arrived
    New,
    /// Eligible to run, waiting in the ready queue
    Ready,
    /// Holding the CPU
    Running,
    /// All burst ticks executed
    Terminated,
}

impl ProcessState {
    /// Check the transition table
    #[inline]
    #[must_use]
    pub const fn can_transition_to(self, next: ProcessState) -> bool {
        matches!(
            (self, next),
            (Self::New, Self::Ready)
                | (Self::Ready, Self::Running)
                | (Self::Running, Self::Ready)
                | (Self::Running, Self::Terminated)
        )
    }
}

/// Caller-supplied process description
///
/// Numeric fields are signed so that out-of-range input can be rejected with a
/// precise [`ValidationError`](crate::core::ValidationError) instead of failing
/// to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    pub id: String,
    pub arrival: i64,
    pub burst: i64,
    pub priority: i64,
    #[serde(rename = "type", default)]
    pub process_type: ProcessType,
}

impl ProcessDescriptor {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        arrival: i64,
        burst: i64,
        priority: i64,
        process_type: ProcessType,
    ) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority,
            process_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        use ProcessState::*;
        assert!(New.can_transition_to(Ready));
        assert!(Ready.can_transition_to(Running));
        assert!(Running.can_transition_to(Ready));
        assert!(Running.can_transition_to(Terminated));

        assert!(!New.can_transition_to(Running));
        assert!(!Ready.can_transition_to(New));
        assert!(!Ready.can_transition_to(Terminated));
        assert!(!Terminated.can_transition_to(Ready));
        assert!(!Terminated.can_transition_to(Running));
    }

    #[test]
    fn test_descriptor_json_shape() {
        let json = r#"{"id":"P2","arrival":1,"burst":3,"priority":3,"type":"I/O"}"#;
        let d: ProcessDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(d, ProcessDescriptor::new("P2", 1, 3, 3, ProcessType::Io));

        let d: ProcessDescriptor =
            serde_json::from_str(r#"{"id":"P1","arrival":0,"burst":4,"priority":2}"#).unwrap();
        assert_eq!(d.process_type, ProcessType::Cpu);
    }
}
