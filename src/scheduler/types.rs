/*!
 * Scheduler Types
 * Domain types for scheduler configuration
 */

use crate::core::{ConfigurationError, SchedResult, SchedulerError, Ticks, ValidationError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Default round-robin quantum in ticks
pub const DEFAULT_QUANTUM: Ticks = 2;

/// Dispatch algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Highest priority first
    Priority,
    /// Shortest remaining time first
    ShortestRemaining,
    /// First come, first served
    Fcfs,
    /// Round-robin with a fixed quantum
    RoundRobin,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Self::Priority,
        Self::ShortestRemaining,
        Self::Fcfs,
        Self::RoundRobin,
    ];

    /// Canonical configuration name
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::ShortestRemaining => "sjf",
            Self::Fcfs => "fcfs",
            Self::RoundRobin => "rr",
        }
    }
}

impl FromStr for Algorithm {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "priority" | "prio" => Ok(Self::Priority),
            "sjf" | "srtf" | "shortest_remaining" => Ok(Self::ShortestRemaining),
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            _ => Err(ConfigurationError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Preemption discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Preemptive,
    NonPreemptive,
}

impl Mode {
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preemptive => "preemptive",
            Self::NonPreemptive => "non-preemptive",
        }
    }

    #[inline(always)]
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Preemptive)
    }
}

impl FromStr for Mode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "preemptive" => Ok(Self::Preemptive),
            "non-preemptive" | "non_preemptive" | "nonpreemptive" => Ok(Self::NonPreemptive),
            _ => Err(ConfigurationError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Mode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round-robin time quantum, always at least one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Ticks);

impl TimeQuantum {
    pub fn new(ticks: i64) -> Result<Self, ValidationError> {
        if ticks <= 0 {
            return Err(ValidationError::NonPositiveQuantum(ticks));
        }
        Ok(Self(ticks as Ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = i64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Engine configuration, selected once per run
///
/// The JSON form requires `algorithm` and `mode`; `quantum` may be omitted
/// and falls back to [`DEFAULT_QUANTUM`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig", into = "RawConfig")]
pub struct SchedulerConfig {
    pub algorithm: Algorithm,
    pub mode: Mode,
    pub quantum: TimeQuantum,
}

impl SchedulerConfig {
    #[must_use]
    pub fn new(algorithm: Algorithm, mode: Mode) -> Self {
        Self {
            algorithm,
            mode,
            quantum: TimeQuantum::default(),
        }
    }

    /// Round-robin with the given quantum
    pub fn round_robin(quantum: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            algorithm: Algorithm::RoundRobin,
            mode: Mode::Preemptive,
            quantum: TimeQuantum::new(quantum)?,
        })
    }

    #[must_use]
    pub fn with_quantum(mut self, quantum: TimeQuantum) -> Self {
        self.quantum = quantum;
        self
    }

    /// Build from the textual configuration surface
    ///
    /// The quantum is only validated for round-robin; other algorithms ignore
    /// it and keep the default.
    pub fn parse(algorithm: &str, mode: &str, quantum: Option<i64>) -> SchedResult<Self> {
        let algorithm: Algorithm = algorithm.parse()?;
        let mode: Mode = mode.parse()?;

        let quantum = match (algorithm, quantum) {
            (Algorithm::RoundRobin, Some(q)) => TimeQuantum::new(q)?,
            _ => TimeQuantum::default(),
        };

        Ok(Self {
            algorithm,
            mode,
            quantum,
        })
    }
}

#[derive(Serialize, Deserialize)]
struct RawConfig {
    algorithm: String,
    mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    quantum: Option<i64>,
}

impl TryFrom<RawConfig> for SchedulerConfig {
    type Error = SchedulerError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::parse(&raw.algorithm, &raw.mode, raw.quantum)
    }
}

impl From<SchedulerConfig> for RawConfig {
    fn from(config: SchedulerConfig) -> Self {
        Self {
            algorithm: config.algorithm.as_str().to_string(),
            mode: config.mode.as_str().to_string(),
            quantum: match config.algorithm {
                Algorithm::RoundRobin => Some(config.quantum.ticks() as i64),
                _ => None,
            },
        }
    }
}
