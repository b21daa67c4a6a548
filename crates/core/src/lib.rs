// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! vapor-core: simulation core for the vapor demo pipeline
//!
//! This crate provides:
//! - Pure state machines for the stage sequencer, the vote simulator,
//!   and the development simulator
//! - Timer primitives (a min-heap of one-shot and repeating timers)
//! - Injectable clock and entropy sources for deterministic tests
//! - Derived display functions (progress bucketing, countdown formatting)

pub mod clock;
pub mod config;
pub mod display;
pub mod effect;
pub mod entropy;
pub mod timer;

// State machines
pub mod development;
pub mod stage;
pub mod vote;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, SimConfig};
pub use development::{Development, DevelopmentEvent};
pub use effect::{Effect, Event, TimerId};
pub use entropy::{ChaChaEntropy, Entropy, ScriptedEntropy};
pub use stage::{Stage, Venture, VentureEvent};
pub use timer::{TimerEntry, Timers};
pub use vote::{Ballot, BallotEvent};
