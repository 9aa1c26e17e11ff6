//! UI module providing the egui heads-up display.

mod hud;
pub mod icons;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use hud::{legend_entries, speed_label, threshold_label};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (hud::status_panel, hud::legend_panel, hud::alert_panel)
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
