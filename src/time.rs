//! Simulation clock.
//!
//! Converts real frame time into simulated elapsed days, honoring the
//! pause flag and a days-per-second speed multiplier.

use bevy::prelude::*;

/// Factor applied by one speed-up or slow-down step.
pub const SPEED_STEP: f64 = 1.1;

/// Default simulation speed in days per real second.
pub const DEFAULT_DAYS_PER_SECOND: f64 = 500.0;

/// Simulated time since the start date.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationClock {
    /// Simulated days elapsed since the start date. Never decreases.
    elapsed_days: f64,
    /// How many simulated days pass per real second
    days_per_second: f64,
    /// Whether simulation time is frozen
    pub paused: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(DEFAULT_DAYS_PER_SECOND)
    }
}

impl SimulationClock {
    /// Create a running clock at day zero.
    ///
    /// Non-positive or non-finite speeds fall back to the default.
    pub fn new(days_per_second: f64) -> Self {
        let days_per_second = if days_per_second.is_finite() && days_per_second > 0.0 {
            days_per_second
        } else {
            DEFAULT_DAYS_PER_SECOND
        };

        Self {
            elapsed_days: 0.0,
            days_per_second,
            paused: false,
        }
    }

    pub fn elapsed_days(&self) -> f64 {
        self.elapsed_days
    }

    pub fn days_per_second(&self) -> f64 {
        self.days_per_second
    }

    /// Advance by `real_seconds` of wall-clock time.
    ///
    /// Returns the simulated days added (zero while paused). Negative or
    /// non-finite deltas are ignored so elapsed days stay monotonic.
    pub fn advance(&mut self, real_seconds: f64) -> f64 {
        if self.paused || !real_seconds.is_finite() || real_seconds <= 0.0 {
            return 0.0;
        }

        let days = self.days_per_second * real_seconds;
        self.elapsed_days += days;
        days
    }

    /// Multiply the speed by [`SPEED_STEP`].
    pub fn speed_up(&mut self) {
        let faster = self.days_per_second * SPEED_STEP;
        if faster.is_finite() {
            self.days_per_second = faster;
        }
    }

    /// Divide the speed by [`SPEED_STEP`].
    pub fn slow_down(&mut self) {
        let slower = self.days_per_second / SPEED_STEP;
        if slower > 0.0 {
            self.days_per_second = slower;
        }
    }

    /// Toggle pause; returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        debug!("Simulation {}", if self.paused { "paused" } else { "running" });
        self.paused
    }
}
