//! Earth proximity detection for the tracked asteroids.
//!
//! Each asteroid has an [`AlertState`] that is either idle or alerting:
//! - Idle → alerting when the Earth distance drops below the threshold.
//!   A [`ProximityAlert`] is emitted and a real-time countdown starts.
//! - Alerting → idle when the countdown runs out; the text is cleared.
//!
//! While alerting, further threshold crossings are ignored, so a body that
//! lingers inside the threshold raises one alert per display window.
//! Countdowns use real seconds and keep running while the simulation is paused.

use bevy::prelude::*;
use std::collections::BTreeMap;
use std::fmt;

use crate::calendar::CalendarDate;
use crate::ephemeris::{BodyId, BodyPositions};

/// Earth distance below which an asteroid raises an alert, in kilometers.
pub const PROXIMITY_THRESHOLD_KM: f64 = 3_800_000.0;

/// How long an alert stays on screen, in real seconds.
pub const ALERT_DISPLAY_SECONDS: f64 = 10.0;

/// Message fired when an asteroid comes within the proximity threshold.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct ProximityAlert {
    /// The asteroid that approached Earth.
    pub body: BodyId,
    /// Calendar date at detection.
    pub date: CalendarDate,
    /// Earth distance in kilometers.
    pub distance_km: f64,
    /// Simulated days since the start date.
    pub elapsed_days: f64,
}

impl fmt::Display for ProximityAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Proximity Alert - {}: {} (Distance: {:.6} km)",
            self.body.alert_name(),
            self.date,
            self.distance_km
        )
    }
}

/// Display state of one asteroid's alert.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertState {
    /// Current alert text; empty when idle.
    pub text: String,
    /// Real seconds left on screen. The alert is armed once this is ≤ 0.
    pub remaining: f64,
}

impl AlertState {
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Start a countdown showing `text`.
    fn trigger(&mut self, text: String, seconds: f64) {
        self.text = text;
        self.remaining = seconds;
    }

    /// Count down by `real_seconds`. Returns true when the alert expires now.
    fn tick(&mut self, real_seconds: f64) -> bool {
        if !self.is_active() {
            return false;
        }

        self.remaining -= real_seconds;
        if self.remaining <= 0.0 {
            self.text.clear();
            return true;
        }
        false
    }
}

/// Alert states for every monitored asteroid.
#[derive(Clone, Debug)]
pub struct AlertBoard {
    states: BTreeMap<BodyId, AlertState>,
    threshold_km: f64,
    display_seconds: f64,
}

impl Default for AlertBoard {
    fn default() -> Self {
        Self::new(PROXIMITY_THRESHOLD_KM, ALERT_DISPLAY_SECONDS)
    }
}

impl AlertBoard {
    /// Create idle alert states for all of [`BodyId::ASTEROIDS`].
    pub fn new(threshold_km: f64, display_seconds: f64) -> Self {
        let states = BodyId::ASTEROIDS
            .iter()
            .map(|&id| (id, AlertState::default()))
            .collect();

        Self {
            states,
            threshold_km,
            display_seconds,
        }
    }

    pub fn threshold_km(&self) -> f64 {
        self.threshold_km
    }

    /// Count every active alert down by real elapsed time.
    pub fn tick(&mut self, real_seconds: f64) {
        if !real_seconds.is_finite() || real_seconds <= 0.0 {
            return;
        }

        for (id, state) in &mut self.states {
            if state.tick(real_seconds) {
                debug!("Alert for {} expired", id);
            }
        }
    }

    /// Check Earth distances in `snapshot` and trigger idle alerts.
    ///
    /// Returns the alerts that fired this call, in asteroid order.
    pub fn evaluate(&mut self, snapshot: &BodyPositions, start: CalendarDate) -> Vec<ProximityAlert> {
        let mut fired = Vec::new();

        for (&id, state) in &mut self.states {
            if state.is_active() {
                continue;
            }

            let Some(distance_km) = snapshot.distance_km(BodyId::Earth, id) else {
                continue;
            };

            if distance_km < self.threshold_km {
                let alert = ProximityAlert {
                    body: id,
                    date: start.offset_by_days(snapshot.days),
                    distance_km,
                    elapsed_days: snapshot.days,
                };
                state.trigger(alert.to_string(), self.display_seconds);
                fired.push(alert);
            }
        }

        fired
    }

    pub fn get(&self, id: BodyId) -> Option<&AlertState> {
        self.states.get(&id)
    }

    /// Active alerts with their text, in asteroid order.
    pub fn active(&self) -> impl Iterator<Item = (BodyId, &str)> + '_ {
        self.states
            .iter()
            .filter(|(_, state)| state.is_active() && !state.text.is_empty())
            .map(|(&id, state)| (id, state.text.as_str()))
    }
}
