//! Shared constants and unit conversions for the simulator.

use bevy::math::DVec2;

/// Astronomical unit in kilometers
pub const AU_TO_KM: f64 = 149_597_870.7;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Scene units (pixels at zoom 1.0) per kilometer.
///
/// 1 AU maps to ~74.8 scene units, so the orbit of 1950 DA fits
/// comfortably inside the 800-unit viewport.
pub const SCALE: f64 = 5.0e-7;

/// Scene-space position of the Sun.
pub const SCENE_ORIGIN: DVec2 = DVec2::new(400.0, 400.0);

/// Convert a heliocentric position in kilometers to scene coordinates.
pub fn km_to_scene(ecliptic_km: DVec2, view_offset: DVec2) -> DVec2 {
    ecliptic_km * SCALE + SCENE_ORIGIN + view_offset
}

/// Euclidean distance in kilometers between two scene positions.
///
/// Both points must have been projected with the same view offset; the
/// offset cancels in the difference.
pub fn distance_km(a: DVec2, b: DVec2) -> f64 {
    ((a - b) / SCALE).length()
}
