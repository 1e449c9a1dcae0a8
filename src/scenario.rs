/*!
 * Scenarios
 * JSON workload documents and the built-in example workloads
 */

use crate::core::{ScenarioError, SchedResult};
use crate::process::{ProcessDescriptor, ProcessType};
use crate::scheduler::{simulate, Algorithm, Mode, SchedulerConfig, SimulationOutcome};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named workload plus the configuration to run it under
///
/// `config.algorithm` and `config.mode` must both be present; an omitted
/// `config.quantum` defaults to two ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    pub processes: Vec<ProcessDescriptor>,
    pub config: SchedulerConfig,
}

impl Scenario {
    pub fn from_json_str(json: &str) -> SchedResult<Self> {
        serde_json::from_str(json).map_err(|e| ScenarioError::Parse(e.to_string()).into())
    }

    pub fn load(path: impl AsRef<Path>) -> SchedResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ScenarioError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&text)
    }

    pub fn run(&self) -> SchedResult<SimulationOutcome> {
        simulate(&self.processes, self.config)
    }
}

fn p(id: &str, arrival: i64, burst: i64, priority: i64, t: ProcessType) -> ProcessDescriptor {
    ProcessDescriptor::new(id, arrival, burst, priority, t)
}

/// Preemptive priority over five mixed processes
pub fn preemptive_priority() -> Scenario {
    use ProcessType::{Cpu, Io};
    Scenario {
        name: "preemptive priority".into(),
        processes: vec![
            p("P1", 0, 4, 2, Cpu),
            p("P2", 1, 3, 3, Io),
            p("P3", 2, 2, 1, Cpu),
            p("P4", 3, 5, 4, Cpu),
            p("P5", 4, 2, 5, Io),
        ],
        config: SchedulerConfig::new(Algorithm::Priority, Mode::Preemptive),
    }
}

/// Non-preemptive shortest job first
pub fn non_preemptive_sjf() -> Scenario {
    use ProcessType::{Cpu, Io};
    Scenario {
        name: "non-preemptive sjf".into(),
        processes: vec![
            p("P1", 0, 6, 2, Cpu),
            p("P2", 1, 8, 3, Cpu),
            p("P3", 2, 7, 1, Io),
            p("P4", 3, 3, 4, Cpu),
        ],
        config: SchedulerConfig::new(Algorithm::ShortestRemaining, Mode::NonPreemptive),
    }
}

/// Workload used for the algorithm comparison
pub fn comparison_workload() -> Scenario {
    use ProcessType::{Cpu, Io};
    Scenario {
        name: "algorithm comparison".into(),
        processes: vec![
            p("P1", 0, 5, 3, Cpu),
            p("P2", 1, 3, 2, Io),
            p("P3", 2, 8, 1, Cpu),
            p("P4", 3, 6, 4, Cpu),
        ],
        config: SchedulerConfig::new(Algorithm::Priority, Mode::Preemptive),
    }
}

pub fn predefined() -> Vec<Scenario> {
    vec![preemptive_priority(), non_preemptive_sjf(), comparison_workload()]
}
