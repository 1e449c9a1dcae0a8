/*!
 * Scheduling Engine
 * Tick-stepped single-CPU simulation over a fixed batch of processes
 */

use super::policy::DispatchPolicy;
use super::queue::ReadyQueue;
use super::types::SchedulerConfig;
use crate::core::{SchedResult, Ticks, ValidationError};
use crate::monitoring::{Event, EventLog, MetricsAggregator, SystemMetrics};
use crate::process::{validate_descriptor, validate_unique_ids, ProcessDescriptor, ProcessRecord};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::iter::FusedIterator;
use tracing::{info, info_span};

/// Everything a run hands to its consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub config: SchedulerConfig,
    /// Terminated records in completion order
    pub completed: Vec<ProcessRecord>,
    pub metrics: SystemMetrics,
    pub events: EventLog,
}

/// Single-CPU scheduling simulation
///
/// The engine exclusively owns its records for the whole run. Records are kept
/// in a slot vector; queues and the running marker refer to slots.
#[derive(Debug, Clone)]
pub struct SchedulingEngine {
    pub(super) config: SchedulerConfig,
    pub(super) policy: DispatchPolicy,
    pub(super) records: Vec<ProcessRecord>,

    // Not yet arrived, sorted by (arrival, id)
    pub(super) pending: VecDeque<usize>,
    pub(super) ready: ReadyQueue,
    pub(super) running: Option<usize>,
    // Last process that held the CPU, for context-switch accounting
    pub(super) last_run: Option<usize>,
    // Ticks left in the running process's grant
    pub(super) slice_left: Ticks,
    pub(super) completed: Vec<usize>,

    pub(super) clock: Ticks,
    pub(super) idle_ticks: Ticks,
    pub(super) context_switches: u64,
    pub(super) log: EventLog,
}

impl SchedulingEngine {
    /// Validate descriptors and config, then build fresh records
    pub fn new(descriptors: &[ProcessDescriptor], config: SchedulerConfig) -> SchedResult<Self> {
        let records = descriptors
            .iter()
            .map(ProcessRecord::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_records(records, config)
    }

    /// Build from records that have never been scheduled
    ///
    /// Record fields are public, so their ranges are checked again here.
    pub fn from_records(records: Vec<ProcessRecord>, config: SchedulerConfig) -> SchedResult<Self> {
        for record in &records {
            validate_descriptor(&record.descriptor())?;
        }
        validate_unique_ids(records.iter().map(|r| r.id.as_str()))?;
        if let Some(used) = records.iter().find(|r| !r.is_fresh()) {
            return Err(ValidationError::RecordInUse(used.id.clone()).into());
        }

        let policy = DispatchPolicy::from_config(&config);

        let mut pending: Vec<usize> = (0..records.len()).collect();
        pending.sort_by(|&a, &b| {
            let (ra, rb) = (&records[a], &records[b]);
            ra.arrival.cmp(&rb.arrival).then_with(|| ra.id.cmp(&rb.id))
        });

        info!(
            algorithm = %config.algorithm,
            mode = %config.mode,
            quantum = config.quantum.ticks(),
            processes = records.len(),
            "Scheduling engine initialized"
        );

        Ok(Self {
            config,
            policy,
            ready: policy.ready_queue(),
            completed: Vec::with_capacity(records.len()),
            records,
            pending: pending.into(),
            running: None,
            last_run: None,
            slice_left: 0,
            clock: 0,
            idle_ticks: 0,
            context_switches: 0,
            log: EventLog::new(),
        })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn policy(&self) -> DispatchPolicy {
        self.policy
    }

    pub fn clock(&self) -> Ticks {
        self.clock
    }

    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub fn running(&self) -> Option<&ProcessRecord> {
        self.running.map(|slot| &self.records[slot])
    }

    pub fn ready_len(&self) -> usize {
        self.ready.len()
    }

    pub fn context_switches(&self) -> u64 {
        self.context_switches
    }

    pub fn idle_ticks(&self) -> Ticks {
        self.idle_ticks
    }

    /// Events emitted so far
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// No arrivals pending, nothing ready, nothing running
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty() && self.ready.is_empty() && self.running.is_none()
    }

    /// Run to completion
    pub fn run(mut self) -> SimulationOutcome {
        let span = info_span!("simulation", algorithm = %self.config.algorithm, mode = %self.config.mode);
        let _guard = span.enter();
        while !self.is_finished() {
            self.step();
        }
        self.into_outcome()
    }

    /// Lazy event stream that advances the engine one iteration at a time
    pub fn events(self) -> EngineEvents {
        EngineEvents {
            engine: self,
            buffer: VecDeque::new(),
        }
    }

    fn into_outcome(self) -> SimulationOutcome {
        let mut slots: Vec<Option<ProcessRecord>> = self.records.into_iter().map(Some).collect();
        let completed: Vec<ProcessRecord> = self
            .completed
            .iter()
            .filter_map(|&slot| slots[slot].take())
            .collect();

        let metrics = MetricsAggregator::system_metrics(
            &completed,
            self.clock,
            self.idle_ticks,
            self.context_switches,
        );

        info!(
            algorithm = %self.config.algorithm,
            total_ticks = metrics.total_ticks,
            idle_ticks = metrics.idle_time,
            context_switches = metrics.context_switches,
            cpu_utilization = metrics.cpu_utilization,
            "Simulation complete"
        );

        SimulationOutcome {
            config: self.config,
            completed,
            metrics,
            events: self.log,
        }
    }
}

/// Incremental view of a run, driven by the consumer
///
/// Each call to `next` yields a buffered event or steps the engine once. The
/// iterator never sleeps or paces itself.
#[derive(Debug, Clone)]
pub struct EngineEvents {
    engine: SchedulingEngine,
    buffer: VecDeque<Event>,
}

impl EngineEvents {
    /// Engine state as of the last yielded batch
    pub fn engine(&self) -> &SchedulingEngine {
        &self.engine
    }

    /// Drain the remaining events and return the full outcome
    pub fn finish(self) -> SimulationOutcome {
        self.engine.run()
    }
}

impl Iterator for EngineEvents {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        loop {
            if let Some(event) = self.buffer.pop_front() {
                return Some(event);
            }
            if self.engine.is_finished() {
                return None;
            }
            let batch = self.engine.step();
            self.buffer.extend(batch.iter().cloned());
        }
    }
}

impl FusedIterator for EngineEvents {}
