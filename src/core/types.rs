/*!
 * Core Types
 * Common types used across the simulator
 */

/// Simulation clock value, in ticks since the start of a run
pub type Ticks = u64;

/// Process priority (higher is more urgent, always > 0 once validated)
pub type Priority = u32;

/// Process identifier as supplied by the caller
pub type ProcessId = String;

/// Common result type for simulator operations
pub type SchedResult<T> = Result<T, super::errors::SchedulerError>;
