//! Ephemeris module for computing body positions.
//!
//! Every body follows an independent, unperturbed Kepler ellipse (plus the
//! asteroids' secular drift). Positions are produced as a [`BodyPositions`]
//! snapshot so that all bodies in one frame share the same elapsed-days value.
//!
//! Coordinate frame:
//! - 2D heliocentric, Sun at [`SCENE_ORIGIN`](crate::types::SCENE_ORIGIN) in scene units.

pub mod data;
pub mod kepler;

#[cfg(test)]
mod proptest_ephemeris;

pub use data::BodyId;
pub use kepler::{KEPLER_ITERATIONS, OrbitalElements};

use bevy::math::DVec2;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::types::{SCENE_ORIGIN, distance_km};

/// Resource providing orbital elements for all bodies.
#[derive(Resource, Clone, Debug)]
pub struct Ephemeris {
    orbits: HashMap<BodyId, OrbitalElements>,
}

impl Default for Ephemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl Ephemeris {
    /// Create an ephemeris with the built-in catalogue.
    pub fn new() -> Self {
        let orbits = BodyId::ALL
            .iter()
            .filter_map(|&id| id.orbit().map(|orbit| (id, orbit)))
            .collect();
        Self { orbits }
    }

    /// Get the orbital elements for a body (`None` for the Sun).
    pub fn orbit(&self, id: BodyId) -> Option<&OrbitalElements> {
        self.orbits.get(&id)
    }

    /// Scene position of a single body after `days`.
    pub fn position(&self, id: BodyId, days: f64, view_offset: DVec2) -> DVec2 {
        match self.orbits.get(&id) {
            Some(orbit) => orbit.position(days, view_offset),
            None => SCENE_ORIGIN + view_offset,
        }
    }

    /// Compute every body's scene position for one elapsed-days value.
    pub fn positions_at(&self, days: f64, view_offset: DVec2) -> BodyPositions {
        let positions = BodyId::ALL
            .iter()
            .map(|&id| (id, self.position(id, days, view_offset)))
            .collect();

        BodyPositions {
            days,
            view_offset,
            positions,
        }
    }
}

/// Scene positions of all bodies at a single instant.
#[derive(Clone, Debug, Default)]
pub struct BodyPositions {
    /// Elapsed simulated days the snapshot was taken at
    pub days: f64,
    /// View offset included in every position
    pub view_offset: DVec2,
    positions: HashMap<BodyId, DVec2>,
}

impl BodyPositions {
    pub fn get(&self, id: BodyId) -> Option<DVec2> {
        self.positions.get(&id).copied()
    }

    /// Distance in kilometers between two bodies.
    pub fn distance_km(&self, a: BodyId, b: BodyId) -> Option<f64> {
        Some(distance_km(self.get(a)?, self.get(b)?))
    }

    /// Iterate positions in [`BodyId::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, DVec2)> + '_ {
        BodyId::ALL
            .iter()
            .filter_map(|&id| self.get(id).map(|pos| (id, pos)))
    }

    /// Replace individual positions, e.g. to stage a close approach.
    #[cfg(test)]
    pub fn with_overrides(mut self, overrides: impl IntoIterator<Item = (BodyId, DVec2)>) -> Self {
        self.positions.extend(overrides);
        self
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
