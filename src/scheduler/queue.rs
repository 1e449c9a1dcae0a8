/*!
 * Ready Queue
 * Ranked heap for priority/SJF/FCFS, plain FIFO for round-robin
 */

use super::entry::{DispatchKey, Entry};
use std::collections::{BinaryHeap, VecDeque};

/// Processes eligible to run but not running, stored as record slots
#[derive(Debug, Clone)]
pub enum ReadyQueue {
    Ranked(BinaryHeap<Entry>),
    Fifo(VecDeque<usize>),
}

impl ReadyQueue {
    pub fn ranked() -> Self {
        Self::Ranked(BinaryHeap::new())
    }

    pub fn fifo() -> Self {
        Self::Fifo(VecDeque::new())
    }

    /// Insert a slot; ranked queues need a key, FIFO queues append at the tail
    pub(crate) fn insert(&mut self, slot: usize, key: Option<DispatchKey>) {
        match (self, key) {
            (Self::Ranked(heap), Some(key)) => heap.push(Entry { key, slot }),
            (Self::Ranked(_), None) => {
                debug_assert!(false, "ranked queue insert without a dispatch key");
            }
            (Self::Fifo(queue), _) => queue.push_back(slot),
        }
    }

    /// Best-ranked slot (or FIFO head) without removing it
    pub fn peek(&self) -> Option<usize> {
        match self {
            Self::Ranked(heap) => heap.peek().map(|e| e.slot),
            Self::Fifo(queue) => queue.front().copied(),
        }
    }

    pub fn pop(&mut self) -> Option<usize> {
        match self {
            Self::Ranked(heap) => heap.pop().map(|e| e.slot),
            Self::Fifo(queue) => queue.pop_front(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Ranked(heap) => heap.len(),
            Self::Fifo(queue) => queue.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, slot: usize) -> bool {
        match self {
            Self::Ranked(heap) => heap.iter().any(|e| e.slot == slot),
            Self::Fifo(queue) => queue.contains(&slot),
        }
    }

    /// Queued slots in unspecified order
    pub fn slots(&self) -> Vec<usize> {
        match self {
            Self::Ranked(heap) => heap.iter().map(|e| e.slot).collect(),
            Self::Fifo(queue) => queue.iter().copied().collect(),
        }
    }
}
