// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events for state machine orchestration
//!
//! State machines never touch timers or logs directly; transitions return
//! effects as data and the engine executes them.

use crate::stage::Stage;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Identifies one of the simulation's timers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerId {
    /// Repeating vote accumulation tick
    VoteTick,
    /// One-shot hold between consensus and the approved stage
    VoteAdvance,
    /// One-shot hold between approval and the revealed plan
    PlanReveal,
    /// Repeating development progress tick
    ProgressTick,
    /// Repeating launch countdown tick
    CountdownTick,
}

impl TimerId {
    /// All timers the simulation ever schedules, for bulk cancellation
    pub const ALL: [TimerId; 5] = [
        TimerId::VoteTick,
        TimerId::VoteAdvance,
        TimerId::PlanReveal,
        TimerId::ProgressTick,
        TimerId::CountdownTick,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TimerId::VoteTick => "vote-tick",
            TimerId::VoteAdvance => "vote-advance",
            TimerId::PlanReveal => "plan-reveal",
            TimerId::ProgressTick => "progress-tick",
            TimerId::CountdownTick => "countdown-tick",
        }
    }
}

/// Effects are side effects that state machines request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Emit an event for the engine to log and surface
    Emit(Event),
    /// Start a repeating timer
    StartRepeating { id: TimerId, every: Duration },
    /// Start a one-shot timer
    StartAfter { id: TimerId, delay: Duration },
    /// Cancel a timer before its next fire
    CancelTimer { id: TimerId },
}

/// Events emitted by state machines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Vote accumulation began
    VotingStarted,
    /// The vote count reached the approval threshold
    ConsensusReached { votes: u32 },
    /// The sequencer entered a new stage
    StageChanged { stage: Stage },
    /// The plan-reveal hold began
    PlanGenerating,
    /// The plan-reveal hold elapsed
    PlanRevealed,
    /// The development simulator started both of its processes
    BuildStarted,
    /// Development progress reached 100
    BuildComplete,
    /// The launch countdown hit zero (purely cosmetic; never gates a stage)
    CountdownExpired,
    /// Full reset back to the voting stage
    VentureReset,
}

impl Event {
    /// Get the event name for logging, format: "category:action"
    pub fn name(&self) -> &'static str {
        match self {
            Event::VotingStarted => "votes:started",
            Event::ConsensusReached { .. } => "votes:consensus",
            Event::StageChanged { .. } => "stage:changed",
            Event::PlanGenerating => "plan:generating",
            Event::PlanRevealed => "plan:revealed",
            Event::BuildStarted => "build:started",
            Event::BuildComplete => "build:complete",
            Event::CountdownExpired => "countdown:expired",
            Event::VentureReset => "venture:reset",
        }
    }
}
