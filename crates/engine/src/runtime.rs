// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Main engine for orchestrating the simulation state machines
//!
//! The engine is the only writer of simulation state. Operator actions
//! and fired timers both funnel through the same dispatch path:
//! transition, replace state, execute effects, cascade routed events.

use crate::snapshot::VentureSnapshot;
use vapor_core::clock::Clock;
use vapor_core::config::{ConfigError, SimConfig};
use vapor_core::effect::{Effect, Event, TimerId};
use vapor_core::entropy::Entropy;
use vapor_core::timer::Timers;
use vapor_core::{
    Ballot, BallotEvent, Development, DevelopmentEvent, Stage, Venture, VentureEvent,
};

/// The engine orchestrates the sequencer and both simulators
pub struct Engine<C: Clock, E: Entropy> {
    config: SimConfig,
    clock: C,
    entropy: E,
    timers: Timers,

    venture: Venture,
    ballot: Ballot,
    development: Development,
}

impl<C: Clock, E: Entropy> Engine<C, E> {
    /// Build an engine over a validated configuration
    pub fn new(config: SimConfig, clock: C, entropy: E) -> Result<Self, ConfigError> {
        config.validate()?;
        let development = Development::new(&config);
        Ok(Self {
            config,
            clock,
            entropy,
            timers: Timers::new(),
            venture: Venture::new(),
            ballot: Ballot::new(),
            development,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn venture(&self) -> &Venture {
        &self.venture
    }

    pub fn ballot(&self) -> &Ballot {
        &self.ballot
    }

    pub fn development(&self) -> &Development {
        &self.development
    }

    /// Capture the current state for the presentation layer
    pub fn snapshot(&self) -> VentureSnapshot {
        VentureSnapshot::capture(
            &self.venture,
            &self.ballot,
            &self.development,
            &self.config,
            &self.clock,
        )
    }

    // Operator actions. Each returns the events the action produced;
    // out-of-sequence actions no-op and return nothing.

    /// Begin vote accumulation (valid at the voting stage, once)
    pub fn start_voting(&mut self) -> Vec<Event> {
        let mut out = Vec::new();
        if self.venture.stage == Stage::Voting {
            self.dispatch_ballot(BallotEvent::Start, &mut out);
        }
        out
    }

    /// Approve the proposal (valid at the approved stage)
    pub fn approve(&mut self) -> Vec<Event> {
        let mut out = Vec::new();
        self.dispatch_venture(VentureEvent::Approve, &mut out);
        out
    }

    /// Launch the build (valid at the planning stage)
    pub fn execute(&mut self) -> Vec<Event> {
        let mut out = Vec::new();
        self.dispatch_venture(VentureEvent::Execute, &mut out);
        out
    }

    /// Start a fresh cycle from any stage; cancels all pending timers and
    /// reinitializes both simulators
    pub fn reset(&mut self) -> Vec<Event> {
        let mut out = Vec::new();
        self.dispatch_venture(VentureEvent::Reset, &mut out);
        self.ballot = Ballot::new();
        self.development = Development::new(&self.config);
        out
    }

    /// Fire every timer due at the current clock reading and route the
    /// ticks to their owning state machines
    pub fn poll(&mut self) -> Vec<Event> {
        let now = self.clock.now();
        let due = self.timers.poll(now);

        let mut out = Vec::new();
        for entry in due {
            tracing::trace!(timer = entry.id.name(), "timer fired");
            match entry.id {
                TimerId::VoteTick => self.dispatch_ballot(BallotEvent::Tick, &mut out),
                TimerId::VoteAdvance => {
                    self.dispatch_venture(VentureEvent::AdvanceFromVoting, &mut out);
                }
                TimerId::PlanReveal => self.dispatch_venture(VentureEvent::PlanReady, &mut out),
                TimerId::ProgressTick => {
                    self.dispatch_development(DevelopmentEvent::ProgressTick, &mut out);
                }
                TimerId::CountdownTick => {
                    self.dispatch_development(DevelopmentEvent::CountdownTick, &mut out);
                }
            }
        }
        out
    }

    /// Instant the next timer fires, if any is pending
    pub fn next_fire_time(&self) -> Option<std::time::Instant> {
        self.timers.next_fire_time()
    }

    /// Check if any timers are pending
    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }

    /// Sleep-and-poll until the venture completes or no timers remain.
    /// The observer runs after every poll round so the presentation layer
    /// can re-render even when a round produced no events.
    pub async fn run_until_settled(
        &mut self,
        mut observe: impl FnMut(VentureSnapshot, Vec<Event>),
    ) {
        while !self.venture.stage.is_terminal() {
            let Some(next) = self.timers.next_fire_time() else {
                break;
            };

            let now = self.clock.now();
            if next > now {
                tokio::time::sleep(next - now).await;
            }

            let events = self.poll();
            observe(self.snapshot(), events);
        }
    }

    fn dispatch_venture(&mut self, event: VentureEvent, out: &mut Vec<Event>) {
        let (next, effects) = self.venture.transition(event, &self.config, &self.clock);
        self.venture = next;
        self.apply(effects, out);
    }

    fn dispatch_ballot(&mut self, event: BallotEvent, out: &mut Vec<Event>) {
        let (next, effects) = self
            .ballot
            .transition(event, &self.config, &mut self.entropy);
        self.ballot = next;
        self.apply(effects, out);
    }

    fn dispatch_development(&mut self, event: DevelopmentEvent, out: &mut Vec<Event>) {
        let (next, effects) = self
            .development
            .transition(event, &self.config, &mut self.entropy);
        self.development = next;
        self.apply(effects, out);
    }

    /// Execute effects requested by a transition, cascading routed events
    /// into the machines that react to them
    fn apply(&mut self, effects: Vec<Effect>, out: &mut Vec<Event>) {
        let now = self.clock.now();

        for effect in effects {
            match effect {
                Effect::StartRepeating { id, every } => {
                    tracing::debug!(timer = id.name(), ?every, "timer started");
                    self.timers.start_repeating(id, now, every);
                }
                Effect::StartAfter { id, delay } => {
                    tracing::debug!(timer = id.name(), ?delay, "timer started");
                    self.timers.start_after(id, now, delay);
                }
                Effect::CancelTimer { id } => {
                    tracing::debug!(timer = id.name(), "timer cancelled");
                    self.timers.cancel(id);
                }
                Effect::Emit(event) => {
                    tracing::info!(event = event.name(), "event emitted");
                    out.push(event.clone());

                    match event {
                        // Entering the building stage starts the simulator
                        Event::StageChanged {
                            stage: Stage::Building,
                        } => self.dispatch_development(DevelopmentEvent::Start, out),
                        // Finished progress drives the terminal stage
                        Event::BuildComplete => {
                            self.dispatch_venture(VentureEvent::BuildComplete, out);
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
