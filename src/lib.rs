/*!
 * Process Scheduling Simulator Library
 * Discrete-time single-CPU scheduling engine with metrics and reports
 */

pub mod core;
pub mod generator;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scenario;
pub mod scheduler;

// Re-exports
pub use crate::core::{
    ConfigurationError, ExportError, ScenarioError, SchedResult, SchedulerError, Ticks,
    ValidationError,
};
pub use generator::{generate_processes, seeded_processes};
pub use monitoring::{
    init_tracing, Event, EventKind, EventLog, MetricsAggregator, ProcessMetrics, Replay,
    SystemMetrics,
};
pub use process::{ProcessDescriptor, ProcessRecord, ProcessState, ProcessType};
pub use report::{compare_algorithms, export_csv};
pub use scenario::Scenario;
pub use scheduler::{
    simulate, Algorithm, EngineEvents, Mode, SchedulerConfig, SchedulingEngine,
    SimulationOutcome, TimeQuantum,
};
