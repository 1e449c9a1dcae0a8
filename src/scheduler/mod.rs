/*!
 * Scheduler Module
 * Dispatch policies and the tick-stepped scheduling engine
 */

mod engine;
mod entry;
mod operations;
mod policy;
mod queue;
pub mod types;

// Re-export public API
pub use engine::{EngineEvents, SchedulingEngine, SimulationOutcome};
pub use entry::{DispatchKey, Entry};
pub use policy::DispatchPolicy;
pub use queue::ReadyQueue;
pub use types::{Algorithm, Mode, SchedulerConfig, TimeQuantum, DEFAULT_QUANTUM};

use crate::core::SchedResult;
use crate::process::ProcessDescriptor;

/// Build and run an engine over fresh records in one call
pub fn simulate(
    descriptors: &[ProcessDescriptor],
    config: SchedulerConfig,
) -> SchedResult<SimulationOutcome> {
    Ok(SchedulingEngine::new(descriptors, config)?.run())
}
