use std::collections::VecDeque;

use super::event::TelemetryEvent;
use super::metrics::{compute_snapshot, TelemetrySnapshot};
use crate::kernel::event::TurnId;

const MAX_EVENTS: usize = 10_000;

/// Bounded event log. Once full, the oldest events are evicted and counted.
#[derive(Debug)]
pub struct TelemetryRecorder {
    buffer: VecDeque<TelemetryEvent>,
    evicted: u64,
}

impl Default for TelemetryRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryRecorder {
    pub fn new() -> Self {
        Self {
            buffer: VecDeque::with_capacity(MAX_EVENTS),
            evicted: 0,
        }
    }

    pub fn record(&mut self, event: TelemetryEvent) {
        if self.buffer.len() >= MAX_EVENTS {
            self.buffer.pop_front();
            self.evicted += 1;
        }
        self.buffer.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Events of one turn in recording order. Empty once they have been evicted.
    pub fn turn_trace(&self, turn: TurnId) -> Vec<TelemetryEvent> {
        self.buffer.iter().filter(|e| e.turn() == turn).cloned().collect()
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            evicted_events: self.evicted,
            ..compute_snapshot(&self.buffer)
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.evicted = 0;
    }
}
