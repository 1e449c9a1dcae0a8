/*!
 * Metrics Aggregator
 * Per-process timing metrics and system-wide utilization statistics
 */

use crate::core::Ticks;
use crate::process::ProcessRecord;
use serde::{Deserialize, Serialize};

/// Timing metrics for one completed process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// `finish - arrival`
    pub turnaround: Ticks,
    /// `turnaround - executed ticks`
    pub waiting: Ticks,
    /// `start - arrival`
    pub response: Ticks,
}

/// System-wide statistics for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    /// Elapsed clock ticks
    pub total_ticks: Ticks,
    /// Ticks with no process on the CPU
    pub idle_time: Ticks,
    /// Percentage of elapsed ticks spent running a process, in `[0, 100]`
    pub cpu_utilization: f64,
    /// Completed processes per elapsed tick
    pub throughput: f64,
    pub context_switches: u64,
    pub completed: usize,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub avg_response: f64,
}

/// Derives metrics from an engine's completed list
pub struct MetricsAggregator;

impl MetricsAggregator {
    /// Metrics for a terminated record; `None` until it has both start and finish
    pub fn process_metrics(record: &ProcessRecord) -> Option<ProcessMetrics> {
        let start = record.start?;
        let finish = record.finish?;

        let turnaround = finish.saturating_sub(record.arrival);
        Some(ProcessMetrics {
            turnaround,
            waiting: turnaround.saturating_sub(record.executed_ticks()),
            response: start.saturating_sub(record.arrival),
        })
    }

    /// Aggregate statistics over the completed list
    ///
    /// A run with no elapsed ticks reports zero utilization and throughput.
    pub fn system_metrics(
        completed: &[ProcessRecord],
        total_ticks: Ticks,
        idle_time: Ticks,
        context_switches: u64,
    ) -> SystemMetrics {
        debug_assert!(idle_time <= total_ticks);

        let (cpu_utilization, throughput) = if total_ticks > 0 {
            let busy = total_ticks.saturating_sub(idle_time) as f64;
            (
                busy / total_ticks as f64 * 100.0,
                completed.len() as f64 / total_ticks as f64,
            )
        } else {
            (0.0, 0.0)
        };

        let n = completed.len();
        let average = |f: fn(&ProcessRecord) -> Ticks| -> f64 {
            if n == 0 {
                0.0
            } else {
                completed.iter().map(f).sum::<Ticks>() as f64 / n as f64
            }
        };

        SystemMetrics {
            total_ticks,
            idle_time,
            cpu_utilization,
            throughput,
            context_switches,
            completed: n,
            avg_waiting: average(|p| p.waiting),
            avg_turnaround: average(|p| p.turnaround),
            avg_response: average(|p| p.response.unwrap_or(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{ProcessDescriptor, ProcessType};

    fn finished(arrival: i64, burst: i64, start: Ticks, ticks: &[Ticks]) -> ProcessRecord {
        let mut r = ProcessRecord::new(&ProcessDescriptor::new(
            "P1",
            arrival,
            burst,
            1,
            ProcessType::Cpu,
        ))
        .unwrap();
        r.start = Some(start);
        r.execution_history = ticks.to_vec();
        r.remaining = 0;
        r.finish = ticks.last().map(|t| t + 1);
        r
    }

    #[test]
    fn test_waiting_counts_every_gap_after_preemption() {
        // Ran at tick 0, preempted, resumed at 4..=6
        let r = finished(0, 4, 0, &[0, 4, 5, 6]);
        let m = MetricsAggregator::process_metrics(&r).unwrap();
        assert_eq!(m.turnaround, 7);
        assert_eq!(m.waiting, 3);
        assert_eq!(m.response, 0);
        assert_eq!(m.turnaround, m.waiting + r.burst);
    }

    #[test]
    fn test_unfinished_record_has_no_metrics() {
        let r = ProcessRecord::new(&ProcessDescriptor::new("P1", 0, 1, 1, ProcessType::Cpu))
            .unwrap();
        assert!(MetricsAggregator::process_metrics(&r).is_none());
    }

    #[test]
    fn test_system_metrics() {
        let mut a = finished(0, 2, 0, &[0, 1]);
        let mut b = finished(3, 1, 3, &[3]);
        for r in [&mut a, &mut b] {
            let m = MetricsAggregator::process_metrics(r).unwrap();
            r.apply_metrics(m);
        }

        let m = MetricsAggregator::system_metrics(&[a, b], 4, 1, 1);
        assert_eq!(m.cpu_utilization, 75.0);
        assert_eq!(m.throughput, 0.5);
        assert_eq!(m.avg_turnaround, 1.5);
        assert_eq!(m.avg_waiting, 0.0);
        assert_eq!(m.completed, 2);
    }

    #[test]
    fn test_empty_run() {
        let m = MetricsAggregator::system_metrics(&[], 0, 0, 0);
        assert_eq!(m.cpu_utilization, 0.0);
        assert_eq!(m.throughput, 0.0);
        assert_eq!(m.avg_waiting, 0.0);
    }
}
