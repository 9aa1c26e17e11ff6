//! Keyboard shortcuts for simulation control.
//!
//! - `+` / numpad `+`: speed up
//! - `-` / numpad `-`: slow down
//! - Space: toggle pause
//! - Escape: exit

use bevy::prelude::*;

use crate::simulation::{SimulationSet, SimulationState};

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (keyboard_shortcuts, exit_on_escape).in_set(SimulationSet::Input),
        );
    }
}

/// Handle keyboard shortcuts for speed and pause.
fn keyboard_shortcuts(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<SimulationState>) {
    if keys.just_pressed(KeyCode::Space) {
        let paused = state.clock.toggle_pause();
        info!("Simulation {}", if paused { "paused" } else { "running" });
    }

    if keys.just_pressed(KeyCode::Equal) || keys.just_pressed(KeyCode::NumpadAdd) {
        state.clock.speed_up();
        info!("Speed: {:.2} days/s", state.clock.days_per_second());
    }

    if keys.just_pressed(KeyCode::Minus) || keys.just_pressed(KeyCode::NumpadSubtract) {
        state.clock.slow_down();
        info!("Speed: {:.2} days/s", state.clock.days_per_second());
    }
}

fn exit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("Exiting");
        exit.write(AppExit::Success);
    }
}
