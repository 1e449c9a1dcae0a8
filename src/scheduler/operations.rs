/*!
 * Engine Operations
 * Admission, preemption, dispatch, execution and idle phases of one iteration
 */

use super::engine::SchedulingEngine;
use crate::monitoring::{Event, EventKind, MetricsAggregator};
use tracing::{debug, trace};

impl SchedulingEngine {
    /// Advance one iteration and return the events it produced
    ///
    /// Tick-stepped policies advance the clock by one tick; round-robin
    /// advances by the slice it just executed. Stepping a finished engine is a
    /// no-op.
    pub fn step(&mut self) -> &[Event] {
        let mark = self.log.len();
        if self.is_finished() {
            return &self.log.as_slice()[mark..];
        }

        self.admit_arrivals();
        self.check_preemption();
        self.dispatch();

        match self.running {
            Some(slot) => self.execute(slot),
            None => self.idle_tick(),
        }

        #[cfg(debug_assertions)]
        self.check_invariants();

        &self.log.as_slice()[mark..]
    }

    /// Move every arrived NEW process into the ready structure
    fn admit_arrivals(&mut self) {
        while let Some(&slot) = self.pending.front() {
            if self.records[slot].arrival > self.clock {
                break;
            }
            self.pending.pop_front();

            let record = &mut self.records[slot];
            record.admit();
            self.policy.admit(&mut self.ready, slot, record);

            debug!(tick = self.clock, pid = %record.id, "Process arrived");
            self.log
                .push(Event::process(self.clock, EventKind::Arrived, &record.id));
        }
    }

    /// Demote the running process if the policy ranks a ready one above it
    fn check_preemption(&mut self) {
        let Some(slot) = self.running else {
            return;
        };

        let preempt = self.policy.should_preempt(
            self.config.mode,
            &self.records[slot],
            &self.ready,
            &self.records,
        );
        if !preempt {
            return;
        }

        let record = &mut self.records[slot];
        record.preempt();
        self.policy.admit(&mut self.ready, slot, record);
        self.running = None;
        self.context_switches += 1;

        debug!(
            tick = self.clock,
            pid = %record.id,
            remaining = record.remaining,
            "Process preempted"
        );
        self.log
            .push(Event::process(self.clock, EventKind::Preempted, &record.id));
    }

    /// Put the best-ranked ready process on an idle CPU
    fn dispatch(&mut self) {
        if self.running.is_some() {
            return;
        }
        let Some(slot) = self.policy.select_next(&mut self.ready) else {
            return;
        };

        let switched = if self.policy.is_time_sliced() {
            true
        } else {
            matches!(self.last_run, Some(prev) if prev != slot)
        };
        if switched {
            self.context_switches += 1;
        }

        let record = &mut self.records[slot];
        record.dispatch(self.clock);
        self.slice_left = self.policy.slice_length(record);
        self.running = Some(slot);

        debug!(
            tick = self.clock,
            pid = %record.id,
            slice = self.slice_left,
            remaining = record.remaining,
            "Process dispatched"
        );
        self.log
            .push(Event::process(self.clock, EventKind::Dispatched, &record.id));
    }

    /// Run the current process for one tick, or a whole slice under round-robin
    fn execute(&mut self, slot: usize) {
        let span = if self.policy.is_time_sliced() {
            self.slice_left
        } else {
            1
        };

        let record = &mut self.records[slot];
        for tick in self.clock..self.clock + span {
            record.run_tick(tick);
        }
        trace!(
            tick = self.clock,
            pid = %record.id,
            span,
            remaining = record.remaining,
            "Executed"
        );

        self.clock += span;
        self.slice_left -= span;
        self.last_run = Some(slot);

        if record.remaining == 0 {
            self.complete(slot);
        } else if self.slice_left == 0 {
            if self.policy.is_time_sliced() {
                self.expire_slice(slot);
            } else {
                self.slice_left = self.policy.slice_length(&self.records[slot]);
            }
        }
    }

    fn complete(&mut self, slot: usize) {
        let record = &mut self.records[slot];
        record.complete(self.clock);
        if let Some(metrics) = MetricsAggregator::process_metrics(record) {
            record.apply_metrics(metrics);
        }
        self.running = None;
        self.completed.push(slot);

        debug!(
            tick = self.clock,
            pid = %record.id,
            turnaround = record.turnaround,
            waiting = record.waiting,
            "Process completed"
        );
        self.log
            .push(Event::process(self.clock, EventKind::Completed, &record.id));
    }

    /// Round-robin quantum expiry: arrivals during the slice queue ahead of
    /// the expired process
    fn expire_slice(&mut self, slot: usize) {
        self.admit_arrivals();

        let record = &mut self.records[slot];
        record.preempt();
        self.policy.admit(&mut self.ready, slot, record);
        self.running = None;

        debug!(
            tick = self.clock,
            pid = %record.id,
            remaining = record.remaining,
            "Quantum expired"
        );
        self.log.push(Event::process(
            self.clock,
            EventKind::QuantumExpired,
            &record.id,
        ));
    }

    fn idle_tick(&mut self) {
        trace!(tick = self.clock, "CPU idle");
        self.log.push(Event::idle(self.clock));
        self.idle_ticks += 1;
        self.clock += 1;
    }

    /// Cross-check queue membership, states and tick accounting
    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use crate::process::ProcessState;

        if let Some(slot) = self.running {
            debug_assert_eq!(self.records[slot].state, ProcessState::Running);
            debug_assert!(
                !self.ready.contains(slot),
                "Running process {} must not be queued",
                self.records[slot].id
            );
        }

        for slot in self.ready.slots() {
            debug_assert_eq!(
                self.records[slot].state,
                ProcessState::Ready,
                "Queued process {} must be Ready",
                self.records[slot].id
            );
        }

        for &slot in &self.pending {
            debug_assert_eq!(self.records[slot].state, ProcessState::New);
        }

        for &slot in &self.completed {
            let record = &self.records[slot];
            debug_assert!(record.is_terminated());
            debug_assert_eq!(record.executed_ticks(), record.burst);
        }

        let busy: u64 = self.records.iter().map(|r| r.executed_ticks()).sum();
        debug_assert_eq!(
            busy + self.idle_ticks,
            self.clock,
            "every tick must be either busy or idle"
        );
    }
}
