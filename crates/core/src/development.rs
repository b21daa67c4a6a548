// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Development simulator state machine
//!
//! Two independent processes share this state: a progress percentage that
//! climbs on one tick and a launch countdown that falls on another. Only
//! progress reaching 100 completes the build; the countdown is theater
//! and may hit zero earlier or later.

use crate::config::SimConfig;
use crate::effect::{Effect, Event, TimerId};
use crate::entropy::Entropy;
use serde::{Deserialize, Serialize};

/// Events that can change the development state
#[derive(Debug, Clone)]
pub enum DevelopmentEvent {
    /// The building stage was entered; start both processes
    Start,
    /// Progress tick fired
    ProgressTick,
    /// Countdown tick fired
    CountdownTick,
}

/// The simulated development run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Development {
    /// Synthesis progress in percent, clamped to [0, 100],
    /// monotonically non-decreasing
    pub progress: f64,
    /// Launch countdown in seconds, floored at 0
    pub time_remaining: u64,
    /// True from start until progress reaches 100
    pub running: bool,
}

impl Development {
    /// Create a fresh run with the configured countdown
    pub fn new(config: &SimConfig) -> Self {
        Self {
            progress: 0.0,
            time_remaining: config.countdown_initial_secs,
            running: false,
        }
    }

    /// Pure transition function - returns new state and effects
    pub fn transition(
        &self,
        event: DevelopmentEvent,
        config: &SimConfig,
        entropy: &mut impl Entropy,
    ) -> (Development, Vec<Effect>) {
        match (self.running, &event) {
            // Start both processes; a completed run cannot be restarted
            (false, DevelopmentEvent::Start) if self.progress < 100.0 => {
                let development = Development {
                    running: true,
                    ..self.clone()
                };
                let effects = vec![
                    Effect::StartRepeating {
                        id: TimerId::ProgressTick,
                        every: config.progress_tick_period,
                    },
                    Effect::StartRepeating {
                        id: TimerId::CountdownTick,
                        every: config.countdown_tick_period,
                    },
                    Effect::Emit(Event::BuildStarted),
                ];
                (development, effects)
            }

            // Progress climbs by a random increment, slowing past the
            // deceleration threshold to stretch the home straight
            (true, DevelopmentEvent::ProgressTick) => {
                let (lo, hi) = if self.progress < config.decel_threshold {
                    config.early_increment
                } else {
                    config.late_increment
                };
                let next = (self.progress + entropy.draw_f64(lo, hi)).min(100.0);

                if next >= 100.0 {
                    let development = Development {
                        progress: 100.0,
                        running: false,
                        ..self.clone()
                    };
                    let effects = vec![
                        Effect::CancelTimer {
                            id: TimerId::ProgressTick,
                        },
                        Effect::Emit(Event::BuildComplete),
                    ];
                    (development, effects)
                } else {
                    let development = Development {
                        progress: next,
                        ..self.clone()
                    };
                    (development, vec![])
                }
            }

            // The countdown falls regardless of the progress process and
            // stops itself at zero without touching the stage
            (_, DevelopmentEvent::CountdownTick) if self.time_remaining > 0 => {
                let remaining = self
                    .time_remaining
                    .saturating_sub(config.countdown_step_secs);
                let development = Development {
                    time_remaining: remaining,
                    ..self.clone()
                };

                let effects = if remaining == 0 {
                    vec![
                        Effect::CancelTimer {
                            id: TimerId::CountdownTick,
                        },
                        Effect::Emit(Event::CountdownExpired),
                    ]
                } else {
                    vec![]
                };
                (development, effects)
            }

            // Invalid transitions - no change
            _ => (self.clone(), vec![]),
        }
    }

    /// Check if the build finished
    pub fn is_complete(&self) -> bool {
        self.progress >= 100.0
    }
}

#[cfg(test)]
#[path = "development_tests.rs"]
mod tests;
