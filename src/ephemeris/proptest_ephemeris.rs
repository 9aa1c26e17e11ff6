//! Property-based tests for ephemeris computations using proptest.
//!
//! These tests verify that orbital computations maintain expected properties
//! across a wide range of inputs.

use bevy::math::DVec2;
use proptest::prelude::*;
use std::f64::consts::TAU;

use super::kepler::OrbitalElements;
use super::{BodyId, Ephemeris};
use crate::types::{SCALE, SCENE_ORIGIN};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Ten Newton steps from E = M satisfy Kepler's equation for the
    /// eccentricities the catalogue uses.
    #[test]
    fn prop_kepler_residual_small(
        mean_anomaly_normalized in 0.0f64..1.0,
        eccentricity in 0.0f64..0.6,
    ) {
        let mean_anomaly = mean_anomaly_normalized * TAU;
        let orbit = OrbitalElements::new(1.0e8, eccentricity, 0.0, 0.0, 0.0, 365.0);

        let e_anom = orbit.solve_eccentric_anomaly(mean_anomaly);
        let residual = (e_anom - eccentricity * e_anom.sin() - mean_anomaly).abs();
        prop_assert!(
            residual < 1e-9,
            "Kepler solver failed: M={}, e={}, E={}, residual={}",
            mean_anomaly, eccentricity, e_anom, residual
        );
    }

    /// A circular, uninclined orbit is drawn at constant distance from the Sun.
    #[test]
    fn prop_circular_orbit_constant_radius(
        semi_major_axis in 5.0e7f64..5.0e8,
        days in 0.0f64..20_000.0,
        node in 0.0f64..360.0,
        periapsis in 0.0f64..360.0,
    ) {
        let orbit = OrbitalElements::new(semi_major_axis, 0.0, 0.0, node, periapsis, 500.0);
        let scene_r = (orbit.position(days, DVec2::ZERO) - SCENE_ORIGIN).length();
        let r_km = scene_r / SCALE;
        prop_assert!(
            ((r_km - semi_major_axis) / semi_major_axis).abs() < 1e-9,
            "radius {} vs {}", r_km, semi_major_axis
        );
    }

    /// Without drift the position repeats after one period.
    #[test]
    fn prop_position_periodic(
        days in 0.0f64..3650.0,
        eccentricity in 0.0f64..0.6,
        period in 50.0f64..1500.0,
    ) {
        let orbit = OrbitalElements::new(2.0e8, eccentricity, 4.0, 30.0, 60.0, period)
            .with_mean_anomaly_at_epoch(123.0);

        let p1 = orbit.ecliptic_position(days);
        let p2 = orbit.ecliptic_position(days + period);
        prop_assert!(
            (p2 - p1).length() < 10.0,
            "Position drifted by {} km over one period", (p2 - p1).length()
        );
    }

    /// Radius never leaves [perihelion, aphelion] when there is no drift.
    #[test]
    fn prop_radius_bounded(
        days in 0.0f64..10_000.0,
        eccentricity in 0.0f64..0.6,
    ) {
        let orbit = OrbitalElements::new(1.5e8, eccentricity, 0.0, 0.0, 0.0, 400.0);
        let r = orbit.ecliptic_position(days).length();
        prop_assert!(r >= orbit.perihelion() * (1.0 - 1e-9));
        prop_assert!(r <= orbit.aphelion() * (1.0 + 1e-9));
    }

    /// Every catalogue body produces finite positions over a century.
    #[test]
    fn prop_catalogue_positions_finite(days in 0.0f64..36_525.0) {
        let eph = Ephemeris::new();
        let snapshot = eph.positions_at(days, DVec2::ZERO);
        for &id in BodyId::ALL {
            let pos = snapshot.get(id).unwrap_or(DVec2::NAN);
            prop_assert!(pos.is_finite(), "{:?} at day {} -> {:?}", id, days, pos);
        }
    }
}
