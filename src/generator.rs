/*!
 * Random Workload Generator
 * Reproducible process batches drawn from an injected RNG
 */

use crate::process::{ProcessDescriptor, ProcessType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Value ranges for generated descriptors (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorRanges {
    pub arrival: (i64, i64),
    pub burst: (i64, i64),
    pub priority: (i64, i64),
}

impl Default for GeneratorRanges {
    fn default() -> Self {
        Self {
            arrival: (0, 10),
            burst: (1, 10),
            priority: (1, 5),
        }
    }
}

/// `n` processes named `P1..Pn` using the default ranges
pub fn generate_processes<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<ProcessDescriptor> {
    generate_with_ranges(rng, n, GeneratorRanges::default())
}

pub fn generate_with_ranges<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    ranges: GeneratorRanges,
) -> Vec<ProcessDescriptor> {
    (1..=n)
        .map(|i| {
            let arrival = rng.gen_range(ranges.arrival.0..=ranges.arrival.1);
            let burst = rng.gen_range(ranges.burst.0..=ranges.burst.1);
            let priority = rng.gen_range(ranges.priority.0..=ranges.priority.1);
            let process_type = if rng.gen_bool(0.5) {
                ProcessType::Cpu
            } else {
                ProcessType::Io
            };
            ProcessDescriptor::new(format!("P{i}"), arrival, burst, priority, process_type)
        })
        .collect()
}

/// Convenience wrapper over a `StdRng` seeded with `seed`
pub fn seeded_processes(n: usize, seed: u64) -> Vec<ProcessDescriptor> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_processes(&mut rng, n)
}
