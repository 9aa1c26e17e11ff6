//! Trail rendering using Bevy Gizmos.
//!
//! Trails are stored without the view offset, so the current offset is added
//! here and the whole history moves with the view when panning.

use bevy::prelude::*;

use crate::camera::ViewState;
use crate::ephemeris::BodyId;
use crate::render::{body_color, z_layers};
use crate::simulation::SimulationState;

/// Trail alpha relative to the body color.
const TRAIL_ALPHA: f32 = 0.6;

pub fn draw_trails(mut gizmos: Gizmos, state: Res<SimulationState>, view: Res<ViewState>) {
    let offset = view.offset;

    for &id in BodyId::ALL {
        let Some(trail) = state.trails.get(id) else {
            continue;
        };
        if trail.len() < 2 {
            continue;
        }

        let points = trail.points().map(|p| {
            let p = p + offset;
            Vec3::new(p.x as f32, p.y as f32, z_layers::TRAILS)
        });
        gizmos.linestrip(points, body_color(id).with_alpha(TRAIL_ALPHA));
    }
}
