// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Vote simulator state machine
//!
//! Accumulates synthetic consensus votes on a repeating tick until the
//! approval threshold is reached, then stops and schedules the hold that
//! advances the sequencer.

use crate::config::SimConfig;
use crate::effect::{Effect, Event, TimerId};
use crate::entropy::Entropy;
use serde::{Deserialize, Serialize};

/// Events that can change the ballot state
#[derive(Debug, Clone)]
pub enum BallotEvent {
    /// Operator started the voting protocol
    Start,
    /// Vote tick fired
    Tick,
}

/// The simulated ballot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ballot {
    /// Accumulated votes, clamped to the ballot size
    pub count: u32,
    /// True while the vote tick is running; guards re-entrant starts
    pub active: bool,
}

impl Ballot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure transition function - returns new state and effects
    pub fn transition(
        &self,
        event: BallotEvent,
        config: &SimConfig,
        entropy: &mut impl Entropy,
    ) -> (Ballot, Vec<Effect>) {
        match (self.active, &event) {
            // Idle → accumulating; re-entrant starts and finished ballots
            // fall through to the no-op arm
            (false, BallotEvent::Start) if self.count < config.vote_threshold => {
                let ballot = Ballot {
                    active: true,
                    ..self.clone()
                };
                let effects = vec![
                    Effect::StartRepeating {
                        id: TimerId::VoteTick,
                        every: config.vote_tick_period,
                    },
                    Effect::Emit(Event::VotingStarted),
                ];
                (ballot, effects)
            }

            // Each tick adds a random increment; reaching the threshold
            // stops the tick and schedules the advance hold
            (true, BallotEvent::Tick) => {
                let increment =
                    entropy.draw_u32(config.vote_increment_min, config.vote_increment_max);
                let count = (self.count + increment).min(config.vote_capacity);

                if count >= config.vote_threshold {
                    let ballot = Ballot {
                        count,
                        active: false,
                    };
                    let effects = vec![
                        Effect::CancelTimer {
                            id: TimerId::VoteTick,
                        },
                        Effect::StartAfter {
                            id: TimerId::VoteAdvance,
                            delay: config.vote_advance_delay,
                        },
                        Effect::Emit(Event::ConsensusReached { votes: count }),
                    ];
                    (ballot, effects)
                } else {
                    let ballot = Ballot {
                        count,
                        active: true,
                    };
                    (ballot, vec![])
                }
            }

            // Invalid transitions - no change
            _ => (self.clone(), vec![]),
        }
    }

    /// Check if the ballot carried
    pub fn carried(&self, config: &SimConfig) -> bool {
        self.count >= config.vote_threshold
    }
}

#[cfg(test)]
#[path = "vote_tests.rs"]
mod tests;
