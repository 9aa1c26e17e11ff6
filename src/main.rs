//! Neowatch - near-Earth asteroid orbit viewer
//!
//! Propagates the inner planets and five near-Earth asteroids from a start
//! date and raises an alert whenever an asteroid passes close to Earth.

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::EguiPlugin;
use std::io::{self, Write};

use neowatch::alert_log::AlertLog;
use neowatch::camera::CameraPlugin;
use neowatch::input::InputPlugin;
use neowatch::render::RenderPlugin;
use neowatch::settings::{START_DATE_PROMPT, SettingsError, SimulationSettings};
use neowatch::simulation::SimulationPlugin;
use neowatch::ui::UiPlugin;

/// Exit code for unusable command-line input.
const USAGE_EXIT_CODE: u8 = 2;

/// Settings from the command line, prompting for the start date if absent.
fn load_settings() -> Result<SimulationSettings, SettingsError> {
    let (mut settings, has_date) = SimulationSettings::from_args(std::env::args().skip(1))?;

    if !has_date {
        print!("{START_DATE_PROMPT}");
        io::stdout().flush()?;
        settings.start_date = SimulationSettings::read_start_date(&mut io::stdin().lock())?;
    }

    Ok(settings)
}

fn main() -> AppExit {
    // Logging is not up yet, so report straight to stderr
    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("neowatch: {err}");
            eprintln!("usage: neowatch [YYYY-MM-DD | YYYY MM DD] [--speed <days/s>] [--log <path>]");
            return AppExit::from_code(USAGE_EXIT_CODE);
        }
    };

    let log_path = settings.alert_log_path.clone();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orbital Simulation".into(),
                resolution: WindowResolution::new(800, 800),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(settings)
        .insert_resource(AlertLog::open_or_disabled(log_path))
        .add_plugins((
            SimulationPlugin,
            CameraPlugin,
            InputPlugin,
            RenderPlugin,
            UiPlugin,
        ))
        .run()
}
