//! Camera and view controls for the viewer.
//!
//! The camera looks at the scene origin with an orthographic projection.
//! Zoom rescales the projection; panning moves the bodies themselves through
//! [`ViewState::offset`], which the propagator adds to every scene position.

use bevy::{
    camera::ScalingMode,
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    math::DVec2,
    prelude::*,
};
use bevy_egui::EguiContexts;

use crate::simulation::SimulationSet;
use crate::types::SCENE_ORIGIN;

/// Minimum zoom level (furthest out).
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum zoom level (closest in).
pub const MAX_ZOOM: f64 = 10.0;

/// Zoom factor applied per scroll notch.
pub const ZOOM_STEP: f64 = 1.1;

/// Visible scene height at zoom 1.0.
pub const VIEWPORT_HEIGHT: f32 = 800.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Resource tracking pan and zoom.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Scene-space offset added to every body position
    pub offset: DVec2,
    /// Zoom level, clamped to [`MIN_ZOOM`, `MAX_ZOOM`]
    zoom: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            offset: DVec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl ViewState {
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    /// Pan by a screen-space drag delta (pixels, y down).
    pub fn pan(&mut self, screen_delta: Vec2) {
        self.offset.x += f64::from(screen_delta.x) / self.zoom;
        self.offset.y -= f64::from(screen_delta.y) / self.zoom;
    }
}

/// Left-button drag state for panning.
///
/// A drag only starts on a press that egui does not claim. Once started it
/// keeps panning until release, even if the pointer crosses a HUD panel.
#[derive(Resource, Default, Debug, PartialEq)]
pub struct PanGesture {
    active: bool,
}

impl PanGesture {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Update from this frame's button state; returns whether motion should pan.
    pub fn update(&mut self, just_pressed: bool, pressed: bool, pointer_free: bool) -> bool {
        if just_pressed {
            self.active = pointer_free;
        }
        if !pressed {
            self.active = false;
        }
        self.active
    }
}

/// Whether the pointer is over or captured by an egui panel.
fn egui_owns_pointer(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .is_ok_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewState>()
            .init_resource::<PanGesture>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (camera_zoom, camera_pan, apply_zoom)
                    .chain()
                    .in_set(SimulationSet::Input),
            );
    }
}

/// Spawn the main camera with orthographic projection.
fn setup_camera(mut commands: Commands) {
    let target = Vec3::new(SCENE_ORIGIN.x as f32, SCENE_ORIGIN.y as f32, 0.0);

    commands.spawn((
        Camera3d::default(),
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: VIEWPORT_HEIGHT,
            },
            scale: 1.0,
            near: -10000.0,
            far: 10000.0,
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_translation(target + Vec3::Z * 1000.0).looking_at(target, Vec3::Y),
        MainCamera,
    ));
}

/// Handle mouse scroll wheel for zoom, unless scrolling over the HUD.
fn camera_zoom(
    mut contexts: EguiContexts,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut view: ResMut<ViewState>,
) {
    if mouse_scroll.delta.y == 0.0 || egui_owns_pointer(&mut contexts) {
        return;
    }

    if mouse_scroll.delta.y > 0.0 {
        view.zoom_in();
    } else if mouse_scroll.delta.y < 0.0 {
        view.zoom_out();
    }
}

/// Handle left mouse button drag for panning.
fn camera_pan(
    mut contexts: EguiContexts,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut gesture: ResMut<PanGesture>,
    mut view: ResMut<ViewState>,
) {
    let just_pressed = mouse_buttons.just_pressed(MouseButton::Left);
    // Only ask egui when a drag could start
    let pointer_free = !just_pressed || !egui_owns_pointer(&mut contexts);

    let panning = gesture.update(
        just_pressed,
        mouse_buttons.pressed(MouseButton::Left),
        pointer_free,
    );
    if !panning || mouse_motion.delta == Vec2::ZERO {
        return;
    }

    view.pan(mouse_motion.delta);
}

/// Keep the projection scale in sync with the zoom level.
fn apply_zoom(view: Res<ViewState>, mut camera_query: Query<&mut Projection, With<MainCamera>>) {
    if !view.is_changed() {
        return;
    }

    let Ok(mut projection) = camera_query.single_mut() else {
        return;
    };

    let Projection::Orthographic(ref mut ortho) = *projection else {
        return;
    };

    ortho.scale = (1.0 / view.zoom) as f32;
}
