// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Serializable view of the whole simulation
//!
//! Captured once per frame; the presentation layer reads this instead of
//! the state machines, and every derived value is recomputed here so the
//! raw progress number stays the single source of truth.

use chrono::{DateTime, Utc};
use serde::Serialize;
use vapor_core::clock::Clock;
use vapor_core::display::{self, StackStatus, STACK_ITEM_COUNT, STEP_COUNT};
use vapor_core::{Ballot, Development, SimConfig, Stage, Venture};

/// Everything the presentation layer renders
#[derive(Debug, Clone, Serialize)]
pub struct VentureSnapshot {
    pub stage: Stage,
    pub stage_index: u8,
    pub generating: bool,
    pub created_at: DateTime<Utc>,

    // Voting
    pub votes: u32,
    pub vote_capacity: u32,
    pub voting_active: bool,
    pub consensus_percent: u32,

    // Building
    pub progress: f64,
    pub progress_percent: u32,
    pub time_remaining_secs: u64,
    pub countdown: String,
    pub step_index: usize,
    pub message_index: usize,
    pub stack: Vec<StackStatus>,
    pub build_elapsed_secs: Option<u64>,
}

impl VentureSnapshot {
    pub fn capture(
        venture: &Venture,
        ballot: &Ballot,
        development: &Development,
        config: &SimConfig,
        clock: &impl Clock,
    ) -> Self {
        let progress = development.progress;
        Self {
            stage: venture.stage,
            stage_index: venture.stage.index(),
            generating: venture.generating,
            created_at: venture.created_at,
            votes: ballot.count,
            vote_capacity: config.vote_capacity,
            voting_active: ballot.active,
            consensus_percent: display::consensus_percent(ballot.count, config.vote_capacity),
            progress,
            progress_percent: progress.round() as u32,
            time_remaining_secs: development.time_remaining,
            countdown: display::format_hms(development.time_remaining),
            step_index: display::step_index(progress, STEP_COUNT),
            message_index: display::message_index(progress),
            stack: (0..STACK_ITEM_COUNT)
                .map(|item| display::stack_status(progress, item))
                .collect(),
            build_elapsed_secs: venture.build_elapsed(clock).map(|d| d.as_secs()),
        }
    }
}
