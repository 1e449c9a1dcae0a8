/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Descriptor and record validation errors
///
/// Every variant names the offending field through [`ValidationError::field`].
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Invalid id: process id cannot be empty")]
    #[diagnostic(
        code(validation::empty_id),
        help("Give every process a non-empty identifier such as \"P1\".")
    )]
    EmptyId,

    #[error("Invalid arrival for {id}: {value} is negative")]
    #[diagnostic(
        code(validation::negative_arrival),
        help("Arrival is the tick a process becomes eligible and must be >= 0.")
    )]
    NegativeArrival { id: String, value: i64 },

    #[error("Invalid burst for {id}: {value} must be greater than 0")]
    #[diagnostic(
        code(validation::non_positive_burst),
        help("Burst is the total CPU ticks a process needs and must be > 0.")
    )]
    NonPositiveBurst { id: String, value: i64 },

    #[error("Invalid priority for {id}: {value} must be greater than 0")]
    #[diagnostic(
        code(validation::non_positive_priority),
        help("Priority must be > 0; higher numbers are more urgent.")
    )]
    NonPositivePriority { id: String, value: i64 },

    #[error("Invalid priority for {id}: {value} exceeds the maximum of {max}")]
    #[diagnostic(
        code(validation::priority_out_of_range),
        help("Priorities are stored as 32-bit unsigned values.")
    )]
    PriorityOutOfRange { id: String, value: i64, max: u32 },

    #[error("Invalid quantum: {0} must be greater than 0")]
    #[diagnostic(
        code(validation::non_positive_quantum),
        help("Round-robin needs a quantum of at least one tick.")
    )]
    NonPositiveQuantum(i64),

    #[error("Duplicate id: {0} appears more than once")]
    #[diagnostic(
        code(validation::duplicate_id),
        help("Process identifiers must be unique within one run.")
    )]
    DuplicateId(String),

    #[error("Record {0} has already been scheduled")]
    #[diagnostic(
        code(validation::record_in_use),
        help("Each run needs fresh records; rebuild them from their descriptors.")
    )]
    RecordInUse(String),
}

impl ValidationError {
    /// Name of the offending input field
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyId | Self::DuplicateId(_) => "id",
            Self::NegativeArrival { .. } => "arrival",
            Self::NonPositiveBurst { .. } => "burst",
            Self::NonPositivePriority { .. } | Self::PriorityOutOfRange { .. } => "priority",
            Self::NonPositiveQuantum(_) => "quantum",
            Self::RecordInUse(_) => "state",
        }
    }
}

/// Scheduler configuration errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigurationError {
    #[error("Unknown algorithm '{0}'")]
    #[diagnostic(
        code(config::unknown_algorithm),
        help("Valid algorithms: priority, sjf, fcfs, rr.")
    )]
    UnknownAlgorithm(String),

    #[error("Unknown mode '{0}'")]
    #[diagnostic(
        code(config::unknown_mode),
        help("Valid modes: preemptive, non-preemptive.")
    )]
    UnknownMode(String),
}

/// Scenario loading errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ScenarioError {
    #[error("Failed to read scenario {path}: {reason}")]
    #[diagnostic(
        code(scenario::io),
        help("Check that the scenario file exists and is readable.")
    )]
    Io { path: String, reason: String },

    #[error("Malformed scenario: {0}")]
    #[diagnostic(
        code(scenario::parse),
        help("A scenario is a JSON object with `processes` and `config` fields.")
    )]
    Parse(String),
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Validation error: {0}")]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Scenario error: {0}")]
    #[diagnostic(transparent)]
    Scenario(#[from] ScenarioError),
}

/// Export collaborator errors
///
/// Not serializable since it carries the underlying I/O error.
#[derive(Error, Debug, Diagnostic)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    #[diagnostic(
        code(export::io),
        help("Check file permissions and disk space for the export directory.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
