/*!
 * Algorithm Comparison
 * Run every algorithm over fresh copies of one workload
 */

use crate::core::SchedResult;
use crate::process::ProcessDescriptor;
use crate::scheduler::{simulate, Algorithm, Mode, SchedulerConfig, TimeQuantum};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub algorithm: Algorithm,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub cpu_utilization: f64,
    pub context_switches: u64,
}

/// One row per algorithm, same mode and quantum for all
///
/// Each run builds its own records from the descriptors, so runs never share
/// state.
pub fn compare_algorithms(
    descriptors: &[ProcessDescriptor],
    mode: Mode,
    quantum: TimeQuantum,
) -> SchedResult<Vec<ComparisonRow>> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let config = SchedulerConfig::new(algorithm, mode).with_quantum(quantum);
            let outcome = simulate(descriptors, config)?;
            Ok(ComparisonRow {
                algorithm,
                avg_waiting: outcome.metrics.avg_waiting,
                avg_turnaround: outcome.metrics.avg_turnaround,
                cpu_utilization: outcome.metrics.cpu_utilization,
                context_switches: outcome.metrics.context_switches,
            })
        })
        .collect()
}

pub fn render_comparison(rows: &[ComparisonRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:^120}", "ALGORITHM COMPARISON");
    let _ = writeln!(
        out,
        "{:<15}{:<18}{:<20}{:<15}{:<20}",
        "Algorithm", "Avg Waiting", "Avg Turnaround", "CPU Util %", "Context Switches"
    );
    let _ = writeln!(out, "{}", "-".repeat(120));
    for row in rows {
        let _ = writeln!(
            out,
            "{:<15}{:<18.2}{:<20.2}{:<15.2}{:<20}",
            row.algorithm.as_str().to_uppercase(),
            row.avg_waiting,
            row.avg_turnaround,
            row.cpu_utilization,
            row.context_switches
        );
    }
    out
}
