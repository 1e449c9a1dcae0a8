/*!
 * Process Record
 * Mutable per-process simulation state owned by one engine run
 */

use super::types::{ProcessDescriptor, ProcessState, ProcessType};
use super::validation::validate_descriptor;
use crate::core::{Priority, ProcessId, Ticks, ValidationError};
use crate::monitoring::ProcessMetrics;
use serde::{Deserialize, Serialize};

/// Simulation state for one task
///
/// Invariants held while the engine owns the record:
/// - `remaining <= burst`, never increasing
/// - `start` and `finish` are set at most once, `arrival <= start <= finish`
/// - `finish.is_some()` iff `remaining == 0`
/// - `execution_history.len() == burst` once terminated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub id: ProcessId,
    pub process_type: ProcessType,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: Priority,
    pub remaining: Ticks,
    pub start: Option<Ticks>,
    pub finish: Option<Ticks>,
    pub response: Option<Ticks>,
    pub waiting: Ticks,
    pub turnaround: Ticks,
    pub execution_history: Vec<Ticks>,
    pub dispatch_count: u32,
    /// Times this process was forced off the CPU before finishing
    pub context_switches: u32,
    pub state: ProcessState,
}

impl ProcessRecord {
    /// Build a fresh record from a validated descriptor
    pub fn new(descriptor: &ProcessDescriptor) -> Result<Self, ValidationError> {
        validate_descriptor(descriptor)?;

        // Ranges were checked above
        let burst = descriptor.burst as Ticks;
        Ok(Self {
            id: descriptor.id.clone(),
            process_type: descriptor.process_type,
            arrival: descriptor.arrival as Ticks,
            burst,
            priority: descriptor.priority as Priority,
            remaining: burst,
            start: None,
            finish: None,
            response: None,
            waiting: 0,
            turnaround: 0,
            execution_history: Vec::with_capacity(burst.min(4096) as usize),
            dispatch_count: 0,
            context_switches: 0,
            state: ProcessState::New,
        })
    }

    /// Descriptor that reproduces this record's inputs
    #[must_use]
    pub fn descriptor(&self) -> ProcessDescriptor {
        ProcessDescriptor::new(
            self.id.clone(),
            self.arrival as i64,
            self.burst as i64,
            i64::from(self.priority),
            self.process_type,
        )
    }

    /// Unused by any run so far
    #[inline]
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.state == ProcessState::New
            && self.remaining == self.burst
            && self.start.is_none()
            && self.execution_history.is_empty()
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, ProcessState::Running)
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        matches!(self.state, ProcessState::Terminated)
    }

    /// Ticks actually spent on the CPU so far
    #[inline]
    #[must_use]
    pub fn executed_ticks(&self) -> Ticks {
        self.execution_history.len() as Ticks
    }

    fn transition(&mut self, next: ProcessState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "Illegal transition for {}: {:?} -> {:?}",
            self.id,
            self.state,
            next
        );
        self.state = next;
    }

    /// NEW -> READY
    pub(crate) fn admit(&mut self) {
        self.transition(ProcessState::Ready);
    }

    /// READY -> RUNNING, capturing start and response on first dispatch
    pub(crate) fn dispatch(&mut self, clock: Ticks) {
        self.transition(ProcessState::Running);
        self.dispatch_count += 1;
        if self.start.is_none() {
            debug_assert!(clock >= self.arrival, "{} dispatched before arrival", self.id);
            self.start = Some(clock);
            self.response = Some(clock - self.arrival);
        }
    }

    /// RUNNING -> READY
    pub(crate) fn preempt(&mut self) {
        self.transition(ProcessState::Ready);
        self.context_switches += 1;
    }

    /// Consume one CPU tick
    pub(crate) fn run_tick(&mut self, tick: Ticks) {
        debug_assert!(self.is_running(), "{} executed while not running", self.id);
        debug_assert!(self.remaining > 0, "{} executed with no work left", self.id);
        self.execution_history.push(tick);
        self.remaining -= 1;
    }

    /// RUNNING -> TERMINATED
    pub(crate) fn complete(&mut self, finish: Ticks) {
        debug_assert_eq!(self.remaining, 0);
        debug_assert_eq!(self.executed_ticks(), self.burst);
        self.transition(ProcessState::Terminated);
        self.finish = Some(finish);
    }

    pub(crate) fn apply_metrics(&mut self, metrics: ProcessMetrics) {
        self.waiting = metrics.waiting;
        self.turnaround = metrics.turnaround;
        self.response = Some(metrics.response);
    }
}

impl TryFrom<&ProcessDescriptor> for ProcessRecord {
    type Error = ValidationError;

    fn try_from(descriptor: &ProcessDescriptor) -> Result<Self, Self::Error> {
        Self::new(descriptor)
    }
}

impl TryFrom<ProcessDescriptor> for ProcessRecord {
    type Error = ValidationError;

    fn try_from(descriptor: ProcessDescriptor) -> Result<Self, Self::Error> {
        Self::new(&descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(burst: i64) -> ProcessRecord {
        ProcessRecord::new(&ProcessDescriptor::new("P1", 2, burst, 3, ProcessType::Io)).unwrap()
    }

    #[test]
    fn test_new_record_is_fresh() {
        let r = record(3);
        assert!(r.is_fresh());
        assert_eq!(r.remaining, 3);
        assert_eq!(r.state, ProcessState::New);
        assert_eq!(r.descriptor(), ProcessDescriptor::new("P1", 2, 3, 3, ProcessType::Io));
    }

    #[test]
    fn test_invalid_descriptor_rejected() {
        let err = ProcessRecord::try_from(ProcessDescriptor::new("P1", 0, 0, 1, ProcessType::Cpu))
            .unwrap_err();
        assert_eq!(err.field(), "burst");
    }

    #[test]
    fn test_lifecycle_sets_start_once() {
        let mut r = record(2);
        r.admit();
        r.dispatch(4);
        r.run_tick(4);
        r.preempt();
        assert_eq!(r.context_switches, 1);
        r.dispatch(6);
        r.run_tick(6);
        r.complete(7);

        assert_eq!(r.start, Some(4));
        assert_eq!(r.response, Some(2));
        assert_eq!(r.finish, Some(7));
        assert_eq!(r.dispatch_count, 2);
        assert_eq!(r.execution_history, vec![4, 6]);
        assert!(r.is_terminated());
        assert!(!r.is_fresh());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Illegal transition")]
    fn test_illegal_transition_panics_in_debug() {
        let mut r = record(1);
        r.dispatch(2);
    }
}
