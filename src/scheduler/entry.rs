/*!
 * Ready Queue Entry Types
 * Explicit dispatch ordering keys for the ranked policies
 */

use crate::core::{Priority, ProcessId, Ticks};
use std::cmp::Ordering;

/// Ordering key captured when a process enters the ready queue
///
/// Keys are only compared against keys of the same policy. Ready processes do
/// not execute, so a key never goes stale while queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchKey {
    /// Higher priority, then earlier arrival, then smaller id
    Priority {
        priority: Priority,
        arrival: Ticks,
        id: ProcessId,
    },
    /// Less remaining work, then earlier arrival, then smaller id
    Remaining {
        remaining: Ticks,
        arrival: Ticks,
        id: ProcessId,
    },
    /// Earlier arrival, then smaller id
    Arrival { arrival: Ticks, id: ProcessId },
}

impl DispatchKey {
    /// Compare dispatch precedence; `Less` means `self` runs first
    pub fn precedence(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                Self::Priority {
                    priority: pa,
                    arrival: aa,
                    id: ia,
                },
                Self::Priority {
                    priority: pb,
                    arrival: ab,
                    id: ib,
                },
            ) => pb.cmp(pa).then_with(|| aa.cmp(ab)).then_with(|| ia.cmp(ib)),
            (
                Self::Remaining {
                    remaining: ra,
                    arrival: aa,
                    id: ia,
                },
                Self::Remaining {
                    remaining: rb,
                    arrival: ab,
                    id: ib,
                },
            ) => ra.cmp(rb).then_with(|| aa.cmp(ab)).then_with(|| ia.cmp(ib)),
            (Self::Arrival { arrival: aa, id: ia }, Self::Arrival { arrival: ab, id: ib }) => {
                aa.cmp(ab).then_with(|| ia.cmp(ib))
            }
            // Mixed keys never share a queue
            _ => self.rank_class().cmp(&other.rank_class()),
        }
    }

    fn rank_class(&self) -> u8 {
        match self {
            Self::Priority { .. } => 0,
            Self::Remaining { .. } => 1,
            Self::Arrival { .. } => 2,
        }
    }
}

/// Ranked ready-queue entry pointing at a record slot
#[derive(Debug, Clone)]
pub struct Entry {
    pub key: DispatchKey,
    pub slot: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest entry, so the best-ranked key must compare greatest
        other
            .key
            .precedence(&self.key)
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn prio(priority: Priority, arrival: Ticks, id: &str) -> DispatchKey {
        DispatchKey::Priority {
            priority,
            arrival,
            id: id.into(),
        }
    }

    #[test]
    fn test_priority_precedence() {
        assert_eq!(prio(3, 5, "P9").precedence(&prio(2, 0, "P1")), Ordering::Less);
        assert_eq!(prio(2, 0, "P2").precedence(&prio(2, 1, "P1")), Ordering::Less);
        assert_eq!(prio(2, 0, "P1").precedence(&prio(2, 0, "P2")), Ordering::Less);
    }

    #[test]
    fn test_remaining_precedence() {
        let short = DispatchKey::Remaining {
            remaining: 1,
            arrival: 4,
            id: "P4".into(),
        };
        let long = DispatchKey::Remaining {
            remaining: 6,
            arrival: 0,
            id: "P1".into(),
        };
        assert_eq!(short.precedence(&long), Ordering::Less);
    }

    #[test]
    fn test_entry_equality_agrees_with_ordering() {
        let a = Entry {
            key: prio(2, 0, "P1"),
            slot: 0,
        };
        let same = Entry {
            key: prio(2, 0, "P1"),
            slot: 0,
        };
        let other_key = Entry {
            key: prio(4, 0, "P1"),
            slot: 0,
        };
        let other_slot = Entry {
            key: prio(2, 0, "P1"),
            slot: 1,
        };

        assert_eq!(a, same);
        assert_eq!(a.cmp(&same), Ordering::Equal);
        assert_ne!(a, other_key);
        assert_ne!(a.cmp(&other_key), Ordering::Equal);
        assert_ne!(a, other_slot);
        assert_ne!(a.cmp(&other_slot), Ordering::Equal);
    }

    #[test]
    fn test_heap_pops_best_ranked() {
        let mut heap = BinaryHeap::new();
        heap.push(Entry {
            key: prio(1, 0, "P1"),
            slot: 0,
        });
        heap.push(Entry {
            key: prio(5, 3, "P3"),
            slot: 2,
        });
        heap.push(Entry {
            key: prio(5, 3, "P2"),
            slot: 1,
        });

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.slot)).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }
}
