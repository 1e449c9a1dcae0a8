/*!
 * Dispatch Policy
 * Ready-queue ordering, preemption decision and slice length per algorithm
 */

use super::entry::DispatchKey;
use super::queue::ReadyQueue;
use super::types::{Algorithm, Mode, SchedulerConfig, TimeQuantum};
use crate::core::Ticks;
use crate::process::ProcessRecord;
use std::cmp::Ordering;

/// Dispatch strategy, selected once when an engine is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// Key `(priority desc, arrival, id)`, preempts on strictly higher priority
    Priority,
    /// Key `(remaining, arrival, id)`, preempts on strictly less remaining work
    ShortestRemaining,
    /// Key `(arrival, id)`, never preempts
    Fcfs,
    /// FIFO queue, each dispatch capped at the quantum
    RoundRobin { quantum: TimeQuantum },
}

impl DispatchPolicy {
    pub fn from_config(config: &SchedulerConfig) -> Self {
        match config.algorithm {
            Algorithm::Priority => Self::Priority,
            Algorithm::ShortestRemaining => Self::ShortestRemaining,
            Algorithm::Fcfs => Self::Fcfs,
            Algorithm::RoundRobin => Self::RoundRobin {
                quantum: config.quantum,
            },
        }
    }

    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::Priority => Algorithm::Priority,
            Self::ShortestRemaining => Algorithm::ShortestRemaining,
            Self::Fcfs => Algorithm::Fcfs,
            Self::RoundRobin { .. } => Algorithm::RoundRobin,
        }
    }

    /// Round-robin consumes whole slices per step, requeues on expiry and
    /// counts every dispatch as a context switch
    #[inline(always)]
    pub const fn is_time_sliced(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }

    /// Empty ready structure matching this policy
    pub fn ready_queue(&self) -> ReadyQueue {
        match self {
            Self::RoundRobin { .. } => ReadyQueue::fifo(),
            _ => ReadyQueue::ranked(),
        }
    }

    /// Ordering key for ranked policies; `None` for round-robin
    pub fn dispatch_key(&self, record: &ProcessRecord) -> Option<DispatchKey> {
        match self {
            Self::Priority => Some(DispatchKey::Priority {
                priority: record.priority,
                arrival: record.arrival,
                id: record.id.clone(),
            }),
            Self::ShortestRemaining => Some(DispatchKey::Remaining {
                remaining: record.remaining,
                arrival: record.arrival,
                id: record.id.clone(),
            }),
            Self::Fcfs => Some(DispatchKey::Arrival {
                arrival: record.arrival,
                id: record.id.clone(),
            }),
            Self::RoundRobin { .. } => None,
        }
    }

    /// Explicit comparator between two records; `Less` means `a` runs first
    ///
    /// Round-robin has no ranking of its own; its admission order is
    /// `(arrival, id)`, which is what this returns for it.
    pub fn compare(&self, a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
        match (self.dispatch_key(a), self.dispatch_key(b)) {
            (Some(ka), Some(kb)) => ka.precedence(&kb),
            _ => a.arrival.cmp(&b.arrival).then_with(|| a.id.cmp(&b.id)),
        }
    }

    /// Place a newly ready (or demoted) process in the ready structure
    pub fn admit(&self, queue: &mut ReadyQueue, slot: usize, record: &ProcessRecord) {
        queue.insert(slot, self.dispatch_key(record));
    }

    /// Remove and return the next process to dispatch
    pub fn select_next(&self, queue: &mut ReadyQueue) -> Option<usize> {
        queue.pop()
    }

    /// Whether the best-ranked ready process should displace `running`
    pub fn should_preempt(
        &self,
        mode: Mode,
        running: &ProcessRecord,
        queue: &ReadyQueue,
        records: &[ProcessRecord],
    ) -> bool {
        if !mode.is_preemptive() {
            return false;
        }

        let Some(best) = queue.peek().map(|slot| &records[slot]) else {
            return false;
        };

        match self {
            Self::Priority => best.priority > running.priority,
            Self::ShortestRemaining => best.remaining < running.remaining,
            Self::Fcfs | Self::RoundRobin { .. } => false,
        }
    }

    /// Ticks granted per dispatch before the policy is consulted again
    ///
    /// Priority and SJF re-evaluate every tick; FCFS holds the CPU until the
    /// process completes; round-robin grants `min(quantum, remaining)`.
    pub fn slice_length(&self, record: &ProcessRecord) -> Ticks {
        match self {
            Self::Priority | Self::ShortestRemaining => 1,
            Self::Fcfs => record.remaining.max(1),
            Self::RoundRobin { quantum } => quantum.ticks().min(record.remaining).max(1),
        }
    }
}
