/*!
 * Event System
 * Ordered, replayable scheduling event log
 */

use crate::core::{ProcessId, Ticks};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened at a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Arrived,
    Dispatched,
    Preempted,
    QuantumExpired,
    Completed,
    Idle,
}

impl EventKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arrived => "arrived",
            Self::Dispatched => "dispatched",
            Self::Preempted => "preempted",
            Self::QuantumExpired => "quantum-expired",
            Self::Completed => "completed",
            Self::Idle => "idle",
        }
    }
}

/// One entry of the event log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub tick: Ticks,
    pub kind: EventKind,
    pub process_id: Option<ProcessId>,
}

impl Event {
    #[inline]
    pub fn process(tick: Ticks, kind: EventKind, id: &str) -> Self {
        Self {
            tick,
            kind,
            process_id: Some(id.to_string()),
        }
    }

    #[inline]
    pub fn idle(tick: Ticks) -> Self {
        Self {
            tick,
            kind: EventKind::Idle,
            process_id: None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.process_id.as_deref().unwrap_or("-");
        match self.kind {
            EventKind::Arrived => write!(f, "[Time {}] {} arrived", self.tick, id),
            EventKind::Dispatched => {
                write!(f, "[Time {}] {} started/resumed execution", self.tick, id)
            }
            EventKind::Preempted => write!(f, "[Time {}] {} preempted", self.tick, id),
            EventKind::QuantumExpired => write!(f, "[Time {}] {} quantum expired", self.tick, id),
            EventKind::Completed => write!(f, "[Time {}] {} completed", self.tick, id),
            EventKind::Idle => write!(f, "[Time {}] CPU idle", self.tick),
        }
    }
}

/// Append-only event log produced by one engine run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: Event) {
        debug_assert!(
            self.events.last().map_or(true, |last| last.tick <= event.tick),
            "event log must be ordered by tick"
        );
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Events of one kind, in log order
    pub fn of_kind(&self, kind: EventKind) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    /// Restartable cursor for incremental consumers
    pub fn replay(&self) -> Replay<'_> {
        Replay {
            events: &self.events,
            cursor: 0,
        }
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl IntoIterator for EventLog {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

/// Replay cursor over a finished log
///
/// The consumer owns pacing; the cursor only remembers its position.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    events: &'a [Event],
    cursor: usize,
}

impl<'a> Replay<'a> {
    /// Rewind to the first event
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Index of the next event to be yielded
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Jump to an index, clamped to the log length
    pub fn seek(&mut self, position: usize) {
        self.cursor = position.min(self.events.len());
    }

    /// Next event without advancing
    pub fn peek(&self) -> Option<&'a Event> {
        self.events.get(self.cursor)
    }

    /// Events up to and including `tick`, advancing past them
    pub fn advance_to(&mut self, tick: Ticks) -> &'a [Event] {
        let start = self.cursor;
        while self.events.get(self.cursor).is_some_and(|e| e.tick <= tick) {
            self.cursor += 1;
        }
        &self.events[start..self.cursor]
    }
}

impl<'a> Iterator for Replay<'a> {
    type Item = &'a Event;

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.events.get(self.cursor)?;
        self.cursor += 1;
        Some(event)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.events.len() - self.cursor;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Replay<'_> {}
