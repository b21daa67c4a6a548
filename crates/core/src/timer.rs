// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer primitives for the simulation
//!
//! A min-heap of one-shot and repeating timers. The engine polls due
//! entries and routes each fired `TimerId` to its owning state machine.
//! At most one entry per id is pending at any time; starting an id again
//! replaces its pending entry.

use crate::effect::TimerId;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

/// A scheduled timer
#[derive(Debug, Clone)]
pub struct TimerEntry {
    pub id: TimerId,
    pub fire_at: Instant,
    pub repeat: Option<Duration>,
}

impl PartialEq for TimerEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at == other.fire_at && self.id == other.id
    }
}

impl Eq for TimerEntry {}

impl PartialOrd for TimerEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Min-heap: earliest first
        Reverse(self.fire_at).cmp(&Reverse(other.fire_at))
    }
}

/// Manages the simulation's pending timers
#[derive(Debug, Default)]
pub struct Timers {
    entries: BinaryHeap<TimerEntry>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a one-shot timer, replacing any pending entry for the id
    pub fn start_after(&mut self, id: TimerId, now: Instant, delay: Duration) {
        self.cancel(id);
        self.entries.push(TimerEntry {
            id,
            fire_at: now + delay,
            repeat: None,
        });
    }

    /// Schedule a repeating timer; first fire is one period from now
    pub fn start_repeating(&mut self, id: TimerId, now: Instant, every: Duration) {
        self.cancel(id);
        self.entries.push(TimerEntry {
            id,
            fire_at: now + every,
            repeat: Some(every),
        });
    }

    /// Drop the pending entry for an id; idempotent, and a no-op for ids
    /// never scheduled
    pub fn cancel(&mut self, id: TimerId) {
        if self.entries.iter().any(|entry| entry.id == id) {
            let kept: Vec<TimerEntry> =
                self.entries.drain().filter(|entry| entry.id != id).collect();
            self.entries = kept.into_iter().collect();
        }
    }

    /// Get all timers due at or before the given time, in fire order.
    /// Repeating timers are rescheduled one period after the fire they
    /// just delivered, so a large clock jump yields catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> Vec<TimerEntry> {
        let mut ready = Vec::new();

        while let Some(entry) = self.entries.peek() {
            if entry.fire_at > now {
                break;
            }

            let Some(entry) = self.entries.pop() else {
                break;
            };

            // Re-schedule if repeating
            if let Some(every) = entry.repeat {
                self.entries.push(TimerEntry {
                    fire_at: entry.fire_at + every,
                    ..entry.clone()
                });
            }

            ready.push(entry);
        }

        ready
    }

    /// Check if any timers are pending
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the next fire time, if any
    pub fn next_fire_time(&self) -> Option<Instant> {
        self.entries.peek().map(|entry| entry.fire_at)
    }

    /// Drop every pending entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
