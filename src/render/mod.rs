//! Rendering systems for the orbit viewer.
//!
//! Bodies are spheres viewed from above; trails are drawn with gizmos.
//! Everything here only reads [`SimulationState`](crate::simulation::SimulationState).

pub mod bodies;
mod trails;

use bevy::prelude::*;

use self::bodies::{spawn_bodies, sync_body_transforms};
use self::trails::draw_trails;
use crate::simulation::SimulationSet;

pub use self::bodies::{BodyMarker, body_color, body_radius};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, spawn_bodies)
            .add_systems(
                Update,
                (sync_body_transforms, draw_trails).in_set(SimulationSet::Output),
            );
    }
}

/// Z-layer constants for rendering order.
pub mod z_layers {
    /// Trail lines.
    pub const TRAILS: f32 = 0.0;
    /// Sun and planets.
    pub const BODIES: f32 = 1.0;
    /// Asteroids, drawn over planets.
    pub const ASTEROIDS: f32 = 2.0;
}
