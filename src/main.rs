/*!
 * Scheduling Simulator - Main Entry Point
 *
 * Runs either a scenario file named by SCHED_SCENARIO or the built-in
 * example workloads, printing:
 * - Per-process results and system metrics
 * - Gantt summaries
 * - The event log
 * - An algorithm comparison
 */

use anyhow::Context;
use std::path::PathBuf;
use tracing::{info, warn};

use proc_sched_sim::report::{
    export_csv, process_chain, render_comparison, render_event_log, render_results,
    render_slices, slices,
};
use proc_sched_sim::scenario::{self, Scenario};
use proc_sched_sim::{compare_algorithms, init_tracing};

const EVENT_LOG_LINES: usize = 40;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let scenarios = match std::env::var("SCHED_SCENARIO") {
        Ok(path) if !path.is_empty() => {
            info!(path = %path, "Loading scenario file");
            let loaded = Scenario::load(&path)
                .with_context(|| format!("Failed to load scenario {path}"))?;
            vec![loaded]
        }
        _ => scenario::predefined(),
    };

    // Empty string disables export
    let csv_dir = match std::env::var("SCHED_CSV_DIR") {
        Ok(dir) if dir.is_empty() => None,
        Ok(dir) => Some(PathBuf::from(dir)),
        Err(_) => Some(PathBuf::from(".")),
    };

    for (index, scenario) in scenarios.iter().enumerate() {
        info!(name = %scenario.name, processes = scenario.processes.len(), "Running scenario");
        let outcome = scenario
            .run()
            .with_context(|| format!("Scenario '{}' is invalid", scenario.name))?;

        println!("{}", render_results(&outcome));
        println!("Gantt (per process): {}", process_chain(&outcome.completed));
        println!("Gantt (timeline):    {}", render_slices(&slices(&outcome)));
        println!();
        println!("{}", render_event_log(&outcome, EVENT_LOG_LINES));

        let comparison = compare_algorithms(
            &scenario.processes,
            scenario.config.mode,
            scenario.config.quantum,
        )?;
        println!("{}", render_comparison(&comparison));

        if let Some(dir) = &csv_dir {
            let path = dir.join(format!("scheduling_results_{}.csv", index + 1));
            if let Err(e) = export_csv(&path, &outcome.completed) {
                warn!(error = %e, "CSV export failed");
            }
        }
    }

    info!(scenarios = scenarios.len(), "All scenarios complete");
    Ok(())
}
