// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation configuration
//!
//! Every timing constant and threshold the demo exposes to integrators,
//! with defaults tuned for the stage show. A TOML file can override any
//! field. Durations use humantime syntax ("300ms", "1s").

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunable constants for the whole simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Ballot size shown on the voting card
    pub vote_capacity: u32,
    /// Votes required before the pipeline advances
    pub vote_threshold: u32,
    /// Smallest votes added per tick
    pub vote_increment_min: u32,
    /// Largest votes added per tick
    pub vote_increment_max: u32,
    /// Vote accumulation period
    #[serde(with = "humantime_serde")]
    pub vote_tick_period: Duration,
    /// Hold between consensus and the approved stage
    #[serde(with = "humantime_serde")]
    pub vote_advance_delay: Duration,
    /// Hold between approval and the revealed plan
    #[serde(with = "humantime_serde")]
    pub plan_reveal_delay: Duration,
    /// Development progress period
    #[serde(with = "humantime_serde")]
    pub progress_tick_period: Duration,
    /// Launch countdown period
    #[serde(with = "humantime_serde")]
    pub countdown_tick_period: Duration,
    /// Seconds removed per countdown tick
    pub countdown_step_secs: u64,
    /// Launch countdown starting value in seconds (one day by default)
    pub countdown_initial_secs: u64,
    /// Progress percent past which increments slow down
    pub decel_threshold: f64,
    /// Uniform progress increment range before deceleration, percent
    pub early_increment: (f64, f64),
    /// Uniform progress increment range after deceleration, percent
    pub late_increment: (f64, f64),
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            vote_capacity: 15,
            vote_threshold: 12,
            vote_increment_min: 1,
            vote_increment_max: 3,
            vote_tick_period: Duration::from_millis(300),
            vote_advance_delay: Duration::from_millis(1000),
            plan_reveal_delay: Duration::from_millis(3000),
            progress_tick_period: Duration::from_millis(200),
            countdown_tick_period: Duration::from_millis(1000),
            countdown_step_secs: 1,
            countdown_initial_secs: 86_400,
            decel_threshold: 30.0,
            early_increment: (0.2, 0.7),
            late_increment: (0.1, 0.3),
        }
    }
}

impl SimConfig {
    /// Load a config from a TOML file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: SimConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the simulators cannot make progress under
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vote_threshold > self.vote_capacity {
            return Err(ConfigError::Invalid(format!(
                "vote_threshold {} exceeds vote_capacity {}",
                self.vote_threshold, self.vote_capacity
            )));
        }
        if self.vote_increment_min < 1 {
            return Err(ConfigError::Invalid(
                "vote_increment_min must be at least 1".to_string(),
            ));
        }
        if self.vote_increment_min > self.vote_increment_max {
            return Err(ConfigError::Invalid(format!(
                "vote increment range [{}, {}] is inverted",
                self.vote_increment_min, self.vote_increment_max
            )));
        }
        if self.countdown_step_secs == 0 {
            return Err(ConfigError::Invalid(
                "countdown_step_secs must be at least 1".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.decel_threshold) {
            return Err(ConfigError::Invalid(format!(
                "decel_threshold {} is outside [0, 100]",
                self.decel_threshold
            )));
        }
        for (label, (lo, hi)) in [
            ("early_increment", self.early_increment),
            ("late_increment", self.late_increment),
        ] {
            if !(lo > 0.0 && lo < hi) {
                return Err(ConfigError::Invalid(format!(
                    "{} range [{}, {}) must be positive and ascending",
                    label, lo, hi
                )));
            }
        }
        for (label, period) in [
            ("vote_tick_period", self.vote_tick_period),
            ("progress_tick_period", self.progress_tick_period),
            ("countdown_tick_period", self.countdown_tick_period),
        ] {
            if period.is_zero() {
                return Err(ConfigError::Invalid(format!("{} must be non-zero", label)));
            }
        }
        Ok(())
    }

    /// Compress every period and hold by the given factor, for demo runs
    /// that should not take a minute and a half of wall clock
    pub fn accelerated(&self, factor: u32) -> SimConfig {
        if factor <= 1 {
            return self.clone();
        }
        let shrink = |d: Duration| (d / factor).max(Duration::from_millis(1));
        SimConfig {
            vote_tick_period: shrink(self.vote_tick_period),
            vote_advance_delay: shrink(self.vote_advance_delay),
            plan_reveal_delay: shrink(self.plan_reveal_delay),
            progress_tick_period: shrink(self.progress_tick_period),
            countdown_tick_period: shrink(self.countdown_tick_period),
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
