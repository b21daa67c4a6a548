// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Derived display values
//!
//! Pure functions of the simulation state; nothing here is stored. The
//! presentation layer recomputes these on every frame so the progress
//! value stays the single source of truth.

use serde::{Deserialize, Serialize};

/// Number of execution-plan steps shown while building
pub const STEP_COUNT: usize = 7;

/// Number of rotating process messages
pub const MESSAGE_COUNT: usize = 7;

/// Number of tech-stack items on the plan card
pub const STACK_ITEM_COUNT: usize = 6;

/// Width of one execution step in progress percent
const STEP_WIDTH: f64 = 14.3;

/// Width of one per-item status band in progress percent
const STACK_BAND: f64 = 15.0;

/// Rollout state of a single tech-stack item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackStatus {
    Completed,
    InProgress,
    Pending,
}

/// Index of the execution step currently underway
pub fn step_index(progress: f64, step_count: usize) -> usize {
    let index = (progress.max(0.0) / STEP_WIDTH) as usize;
    index.min(step_count.saturating_sub(1))
}

/// Index of the process message for the given progress.
///
/// Bucket edges sit at 14.3, 28.6, 42.9, 57.2, 71.5, and 85.8 percent.
pub fn message_index(progress: f64) -> usize {
    const CUTS: [f64; MESSAGE_COUNT - 1] = [14.3, 28.6, 42.9, 57.2, 71.5, 85.8];
    CUTS.iter()
        .position(|cut| progress < *cut)
        .unwrap_or(MESSAGE_COUNT - 1)
}

/// Rollout state of the stack item at the given index.
///
/// An item completes once progress passes (index + 1) * 15 and is
/// underway once progress passes index * 15.
pub fn stack_status(progress: f64, item_index: usize) -> StackStatus {
    let base = item_index as f64 * STACK_BAND;
    if progress > base + STACK_BAND {
        StackStatus::Completed
    } else if progress > base {
        StackStatus::InProgress
    } else {
        StackStatus::Pending
    }
}

/// Percentage of the ballot carried, rounded, as shown on the approved card
pub fn consensus_percent(votes: u32, capacity: u32) -> u32 {
    if capacity == 0 {
        return 0;
    }
    (votes * 100 + capacity / 2) / capacity
}

/// HH:MM:SS rendering of the launch countdown
pub fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
