/*!
 * Results Table
 * Fixed-width text rendering of a finished run
 */

use crate::scheduler::SimulationOutcome;
use std::fmt::Write;

const WIDTH: usize = 120;

fn cell(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}

/// Per-process table followed by the performance summary
pub fn render_results(outcome: &SimulationOutcome) -> String {
    let mut out = String::new();
    let rule = "=".repeat(WIDTH);
    let thin = "-".repeat(WIDTH);
    let title = format!(
        "Mode: {} | Algorithm: {}",
        outcome.config.mode.as_str().to_uppercase(),
        outcome.config.algorithm.as_str().to_uppercase()
    );

    // Writing to a String cannot fail
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{:^WIDTH$}", "PROCESS SCHEDULING RESULTS");
    let _ = writeln!(out, "{:^WIDTH$}", title);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{:<8}{:<12}{:<10}{:<10}{:<10}{:<10}{:<10}{:<10}{:<12}{:<10}{:<10}",
        "PID",
        "Type",
        "Arrival",
        "Burst",
        "Priority",
        "Start",
        "Finish",
        "Waiting",
        "Turnaround",
        "Response",
        "Switches"
    );
    let _ = writeln!(out, "{thin}");

    for p in &outcome.completed {
        let _ = writeln!(
            out,
            "{:<8}{:<12}{:<10}{:<10}{:<10}{:<10}{:<10}{:<10}{:<12}{:<10}{:<10}",
            p.id,
            p.process_type.as_str(),
            p.arrival,
            p.burst,
            p.priority,
            cell(p.start),
            cell(p.finish),
            p.waiting,
            p.turnaround,
            cell(p.response),
            p.context_switches
        );
    }

    let m = &outcome.metrics;
    let _ = writeln!(out, "{thin}");
    let _ = writeln!(out, "{:^WIDTH$}", "PERFORMANCE METRICS");
    let _ = writeln!(out, "{thin}");
    let _ = writeln!(out, "Average Waiting Time:      {:.2} time units", m.avg_waiting);
    let _ = writeln!(out, "Average Turnaround Time:   {:.2} time units", m.avg_turnaround);
    let _ = writeln!(out, "Average Response Time:     {:.2} time units", m.avg_response);
    let _ = writeln!(out, "CPU Utilization:           {:.2}%", m.cpu_utilization);
    let _ = writeln!(out, "Throughput:                {:.4} processes/time unit", m.throughput);
    let _ = writeln!(out, "Total Context Switches:    {}", m.context_switches);
    let _ = writeln!(out, "Total Idle Time:           {} time units", m.idle_time);
    let _ = writeln!(out, "{rule}");
    out
}

/// First `max_lines` event messages, with a count of the rest
pub fn render_event_log(outcome: &SimulationOutcome, max_lines: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "EXECUTION LOG (First {} entries):", max_lines);
    for event in outcome.events.iter().take(max_lines) {
        let _ = writeln!(out, "{event}");
    }
    if outcome.events.len() > max_lines {
        let _ = writeln!(out, "... and {} more entries", outcome.events.len() - max_lines);
    }
    out
}
