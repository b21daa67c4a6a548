// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stage sequencer state machine
//!
//! A venture walks five display stages: voting, approved, planning,
//! building, complete. Stages only ever advance, apart from the explicit
//! reset back to voting, which also cancels every simulator timer.

use crate::clock::Clock;
use crate::config::SimConfig;
use crate::effect::{Effect, Event, TimerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// The five display stages of the demo pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    Voting,
    Approved,
    Planning,
    Building,
    Complete,
}

impl Stage {
    /// Ordinal used by the presentation layer (0 through 4)
    pub fn index(&self) -> u8 {
        match self {
            Stage::Voting => 0,
            Stage::Approved => 1,
            Stage::Planning => 2,
            Stage::Building => 3,
            Stage::Complete => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Voting => "voting",
            Stage::Approved => "approved",
            Stage::Planning => "planning",
            Stage::Building => "building",
            Stage::Complete => "complete",
        }
    }

    /// Check if this stage is terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Complete)
    }
}

/// Events that can change the sequencer state
#[derive(Debug, Clone)]
pub enum VentureEvent {
    /// Vote simulator finished and the advance hold elapsed
    AdvanceFromVoting,
    /// Operator approved the proposal
    Approve,
    /// Plan-reveal hold elapsed
    PlanReady,
    /// Operator launched the build
    Execute,
    /// Development progress reached 100
    BuildComplete,
    /// Start a fresh cycle from any stage
    Reset,
}

/// The sequencer: current stage plus the approval-transition flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venture {
    pub stage: Stage,
    /// True only between approval and the plan reveal; gates the
    /// "configuring" placeholder in the presentation layer
    pub generating: bool,
    pub created_at: DateTime<Utc>,
    /// Instant the building stage was entered, for the completion summary
    #[serde(skip)]
    pub build_started_at: Option<Instant>,
}

impl Default for Venture {
    fn default() -> Self {
        Self::new()
    }
}

impl Venture {
    /// Create a new venture at the voting stage
    pub fn new() -> Self {
        Self {
            stage: Stage::Voting,
            generating: false,
            created_at: Utc::now(),
            build_started_at: None,
        }
    }

    /// Pure transition function - returns new state and effects.
    /// Events arriving at the wrong stage are silent no-ops; the
    /// presentation layer only exposes valid actions.
    pub fn transition(
        &self,
        event: VentureEvent,
        config: &SimConfig,
        clock: &impl Clock,
    ) -> (Venture, Vec<Effect>) {
        let now = clock.now();

        match (self.stage, &event) {
            // Voting → Approved, driven by the vote-advance timer
            (Stage::Voting, VentureEvent::AdvanceFromVoting) => {
                let venture = Venture {
                    stage: Stage::Approved,
                    ..self.clone()
                };
                let effects = vec![Effect::Emit(Event::StageChanged {
                    stage: Stage::Approved,
                })];
                (venture, effects)
            }

            // Approved: approval starts the plan-reveal hold
            (Stage::Approved, VentureEvent::Approve) if !self.generating => {
                let venture = Venture {
                    generating: true,
                    ..self.clone()
                };
                let effects = vec![
                    Effect::StartAfter {
                        id: TimerId::PlanReveal,
                        delay: config.plan_reveal_delay,
                    },
                    Effect::Emit(Event::PlanGenerating),
                ];
                (venture, effects)
            }

            // Approved → Planning, when the plan-reveal timer fires
            (Stage::Approved, VentureEvent::PlanReady) if self.generating => {
                let venture = Venture {
                    stage: Stage::Planning,
                    generating: false,
                    ..self.clone()
                };
                let effects = vec![
                    Effect::Emit(Event::PlanRevealed),
                    Effect::Emit(Event::StageChanged {
                        stage: Stage::Planning,
                    }),
                ];
                (venture, effects)
            }

            // Planning → Building; the engine starts the development
            // simulator on the stage change
            (Stage::Planning, VentureEvent::Execute) => {
                let venture = Venture {
                    stage: Stage::Building,
                    build_started_at: Some(now),
                    ..self.clone()
                };
                let effects = vec![Effect::Emit(Event::StageChanged {
                    stage: Stage::Building,
                })];
                (venture, effects)
            }

            // Building → Complete, driven by the progress simulator
            (Stage::Building, VentureEvent::BuildComplete) => {
                let venture = Venture {
                    stage: Stage::Complete,
                    ..self.clone()
                };
                let effects = vec![Effect::Emit(Event::StageChanged {
                    stage: Stage::Complete,
                })];
                (venture, effects)
            }

            // Any stage → Voting on explicit reset; every timer from the
            // prior cycle is cancelled so no stale tick lands afterwards
            (_, VentureEvent::Reset) => {
                let venture = Venture {
                    stage: Stage::Voting,
                    generating: false,
                    build_started_at: None,
                    ..self.clone()
                };
                let mut effects: Vec<Effect> = TimerId::ALL
                    .into_iter()
                    .map(|id| Effect::CancelTimer { id })
                    .collect();
                effects.push(Effect::Emit(Event::VentureReset));
                effects.push(Effect::Emit(Event::StageChanged {
                    stage: Stage::Voting,
                }));
                (venture, effects)
            }

            // Invalid transitions - no change
            _ => (self.clone(), vec![]),
        }
    }

    /// Seconds spent in the building stage so far
    pub fn build_elapsed(&self, clock: &impl Clock) -> Option<std::time::Duration> {
        self.build_started_at.map(|started| clock.now() - started)
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
