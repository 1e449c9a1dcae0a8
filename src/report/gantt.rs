/*!
 * Gantt Summary
 * Process-span chain and per-slice timeline derived from execution history
 */

use crate::core::{ProcessId, Ticks};
use crate::process::ProcessRecord;
use crate::scheduler::SimulationOutcome;
use serde::{Deserialize, Serialize};

/// Contiguous CPU occupancy; `id == None` marks idle time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSlice {
    pub id: Option<ProcessId>,
    pub start: Ticks,
    pub end: Ticks,
}

/// `P1[start-finish] -> P2[...]` in completion order
pub fn process_chain(completed: &[ProcessRecord]) -> String {
    completed
        .iter()
        .filter_map(|p| match (p.start, p.finish) {
            (Some(start), Some(finish)) => Some(format!("{}[{}-{}]", p.id, start, finish)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Merge execution histories into contiguous slices covering the whole run
pub fn slices(outcome: &SimulationOutcome) -> Vec<GanttSlice> {
    let total = outcome.metrics.total_ticks as usize;
    let mut owner: Vec<Option<usize>> = vec![None; total];
    for (idx, p) in outcome.completed.iter().enumerate() {
        for &tick in &p.execution_history {
            if let Some(cell) = owner.get_mut(tick as usize) {
                *cell = Some(idx);
            }
        }
    }

    let mut out: Vec<GanttSlice> = Vec::new();
    let mut run_start = 0;
    for tick in 0..total {
        let next_differs = tick + 1 == total || owner[tick + 1] != owner[tick];
        if next_differs {
            out.push(GanttSlice {
                id: owner[tick].map(|idx| outcome.completed[idx].id.clone()),
                start: run_start as Ticks,
                end: (tick + 1) as Ticks,
            });
            run_start = tick + 1;
        }
    }
    out
}

/// `P1[0-2] -> IDLE[2-4] -> P2[4-5]`
pub fn render_slices(slices: &[GanttSlice]) -> String {
    slices
        .iter()
        .map(|s| format!("{}[{}-{}]", s.id.as_deref().unwrap_or("IDLE"), s.start, s.end))
        .collect::<Vec<_>>()
        .join(" -> ")
}
