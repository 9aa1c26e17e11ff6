//! Kepler orbit propagator using a fixed-iteration Newton solver.

use bevy::math::DVec2;

use crate::types::{AU_TO_KM, DEG_TO_RAD, km_to_scene};

/// Number of Newton-Raphson steps taken for every position.
///
/// The count is fixed so each frame costs the same and results are
/// reproducible bit-for-bit; there is no convergence check.
pub const KEPLER_ITERATIONS: usize = 10;

/// Orbital elements for one body.
/// Angles in degrees, distances in kilometers, time in days.
///
/// Only elliptical orbits are in contract (`0 <= e < 1`, `period > 0`).
/// Eccentricities at or above 1 produce non-physical positions (NaN
/// radii from the square roots) but never panic.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis in kilometers
    pub semi_major_axis: f64,
    /// Eccentricity (dimensionless, 0 ≤ e < 1)
    pub eccentricity: f64,
    /// Inclination in degrees
    pub inclination: f64,
    /// Longitude of the ascending node in degrees
    pub ascending_node: f64,
    /// Argument of periapsis in degrees
    pub argument_of_periapsis: f64,
    /// Orbital period in days
    pub period: f64,
    /// Mean anomaly at the simulation start in degrees
    pub mean_anomaly_at_epoch: f64,
    /// Secular semi-major axis drift (Yarkovsky A2), AU per day²
    pub yarkovsky: f64,
}

impl OrbitalElements {
    /// Create elements with zero epoch anomaly and no drift.
    pub const fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        ascending_node: f64,
        argument_of_periapsis: f64,
        period: f64,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node,
            argument_of_periapsis,
            period,
            mean_anomaly_at_epoch: 0.0,
            yarkovsky: 0.0,
        }
    }

    pub const fn with_mean_anomaly_at_epoch(mut self, degrees: f64) -> Self {
        self.mean_anomaly_at_epoch = degrees;
        self
    }

    pub const fn with_yarkovsky(mut self, a2: f64) -> Self {
        self.yarkovsky = a2;
        self
    }

    /// Semi-major axis after secular drift, in kilometers.
    ///
    /// The drift grows quadratically: `a + A2 · t² · AU_TO_KM`.
    pub fn drifted_semi_major_axis(&self, days: f64) -> f64 {
        self.semi_major_axis + self.yarkovsky * days * days * AU_TO_KM
    }

    /// Mean anomaly in radians after `days`. Not normalized.
    pub fn mean_anomaly(&self, days: f64) -> f64 {
        self.mean_anomaly_at_epoch * DEG_TO_RAD + std::f64::consts::TAU * (days / self.period)
    }

    /// Solve Kepler's equation M = E - e*sin(E) for eccentric anomaly E.
    ///
    /// Starts from E = M and always runs exactly [`KEPLER_ITERATIONS`]
    /// Newton steps. M is used as given, so E lands in the same revolution.
    pub fn solve_eccentric_anomaly(&self, mean_anomaly: f64) -> f64 {
        let e = self.eccentricity;
        let mut e_anomaly = mean_anomaly;

        for _ in 0..KEPLER_ITERATIONS {
            // f(E) = E - e*sin(E) - M, f'(E) = 1 - e*cos(E)
            e_anomaly -= (e_anomaly - e * e_anomaly.sin() - mean_anomaly)
                / (1.0 - e * e_anomaly.cos());
        }

        e_anomaly
    }

    /// Compute true anomaly ν from eccentric anomaly E (radians).
    pub fn eccentric_to_true_anomaly(&self, eccentric_anomaly: f64) -> f64 {
        let e = self.eccentricity;
        let half_e = eccentric_anomaly / 2.0;

        // atan2 keeps the full quadrant range
        let y = (1.0 + e).sqrt() * half_e.sin();
        let x = (1.0 - e).sqrt() * half_e.cos();
        2.0 * y.atan2(x)
    }

    /// Distance from the Sun in kilometers for eccentric anomaly E.
    pub fn radius(&self, eccentric_anomaly: f64, days: f64) -> f64 {
        self.drifted_semi_major_axis(days) * (1.0 - self.eccentricity * eccentric_anomaly.cos())
    }

    /// Heliocentric position in kilometers on the reference plane.
    ///
    /// Inclination only foreshortens the in-plane rotation by `cos(i)`;
    /// this is a flattened approximation, not a 3-D orthographic projection.
    pub fn ecliptic_position(&self, days: f64) -> DVec2 {
        let e_anomaly = self.solve_eccentric_anomaly(self.mean_anomaly(days));
        let true_anomaly = self.eccentric_to_true_anomaly(e_anomaly);
        let r = self.radius(e_anomaly, days);

        let omega = self.argument_of_periapsis * DEG_TO_RAD;
        let node = self.ascending_node * DEG_TO_RAD;
        let cos_i = (self.inclination * DEG_TO_RAD).cos();

        let u = true_anomaly + omega;
        let (sin_node, cos_node) = node.sin_cos();
        let (sin_u, cos_u) = u.sin_cos();

        DVec2::new(
            r * (cos_node * cos_u - sin_node * sin_u * cos_i),
            r * (sin_node * cos_u + cos_node * sin_u * cos_i),
        )
    }

    /// Scene position after `days`, shifted by the current view offset.
    pub fn position(&self, days: f64, view_offset: DVec2) -> DVec2 {
        km_to_scene(self.ecliptic_position(days), view_offset)
    }

    /// Perihelion distance in kilometers (without drift).
    pub fn perihelion(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Aphelion distance in kilometers (without drift).
    pub fn aphelion(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}
