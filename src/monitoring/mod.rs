/*!
 * Monitoring Module
 * Event log, metrics aggregation and tracing setup
 */

pub mod events;
pub mod metrics;
pub mod tracer;

pub use events::{Event, EventKind, EventLog, Replay};
pub use metrics::{MetricsAggregator, ProcessMetrics, SystemMetrics};
pub use tracer::{init_tracing, TraceFormat};
