//! Body spheres: spawning and per-frame transform sync.

use bevy::prelude::*;

use crate::camera::ViewState;
use crate::ephemeris::BodyId;
use crate::render::z_layers;
use crate::simulation::SimulationState;

/// Component tagging the sphere that represents a body.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyMarker(pub BodyId);

/// Display color for a body.
pub fn body_color(id: BodyId) -> Color {
    match id {
        BodyId::Sun => Color::srgb(1.0, 1.0, 0.0),
        BodyId::Mercury => Color::srgb(0.66, 0.66, 0.66),
        BodyId::Venus => Color::srgb(1.0, 0.84, 0.0),
        BodyId::Earth => Color::srgb(0.0, 0.0, 1.0),
        BodyId::Apophis => Color::srgb(1.0, 0.0, 0.0),
        BodyId::Yr4 => Color::srgb(0.0, 1.0, 1.0),
        BodyId::Bennu => Color::srgb(0.5, 0.5, 0.0),
        BodyId::Wn5 => Color::srgb(0.7, 0.0, 0.7),
        BodyId::Da1950 => Color::srgb(0.0, 0.7, 0.0),
    }
}

/// Base display radius in scene units at zoom 1.0.
pub fn body_radius(id: BodyId) -> f32 {
    match id {
        BodyId::Sun => 15.0,
        BodyId::Earth => 8.0,
        BodyId::Venus => 6.0,
        BodyId::Mercury => 5.0,
        _ => 4.0,
    }
}

fn body_layer(id: BodyId) -> f32 {
    if id.is_asteroid() {
        z_layers::ASTEROIDS
    } else {
        z_layers::BODIES
    }
}

/// Spawn one unit sphere per body; [`sync_body_transforms`] sizes and places them.
pub fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(1.0));

    for &id in BodyId::ALL {
        let material = materials.add(StandardMaterial {
            base_color: body_color(id),
            unlit: true,
            ..default()
        });

        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_scale(Vec3::splat(body_radius(id))),
            BodyMarker(id),
        ));
    }

    info!("Spawned {} bodies", BodyId::ALL.len());
}

/// Place each sphere at its latest snapshot position, radius scaled by zoom.
pub fn sync_body_transforms(
    state: Res<SimulationState>,
    view: Res<ViewState>,
    mut query: Query<(&BodyMarker, &mut Transform)>,
) {
    let zoom = view.zoom() as f32;

    for (marker, mut transform) in query.iter_mut() {
        let Some(pos) = state.positions.get(marker.0) else {
            continue;
        };

        transform.translation = Vec3::new(pos.x as f32, pos.y as f32, body_layer(marker.0));
        transform.scale = Vec3::splat(body_radius(marker.0) * zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_is_largest() {
        for &id in BodyId::ALL {
            if id != BodyId::Sun {
                assert!(body_radius(id) < body_radius(BodyId::Sun));
            }
        }
    }

    #[test]
    fn test_asteroids_drawn_above_planets() {
        for &id in BodyId::ASTEROIDS {
            assert!(body_layer(id) > body_layer(BodyId::Earth));
            assert_eq!(body_radius(id), 4.0);
        }
    }
}
