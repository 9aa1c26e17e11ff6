//! Headless Bevy integration tests.
//!
//! These tests drive [`SimulationPlugin`] without a window or GPU.

use approx::assert_relative_eq;
use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::path::PathBuf;
use std::time::Duration;

use neowatch::alert_log::AlertLog;
use neowatch::camera::ViewState;
use neowatch::ephemeris::{BodyId, Ephemeris};
use neowatch::settings::SimulationSettings;
use neowatch::simulation::{SimulationPlugin, SimulationState};
use neowatch::types::SCENE_ORIGIN;

const FRAME: Duration = Duration::from_millis(100);

fn create_minimal_app(settings: SimulationSettings) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .insert_resource(settings)
        .add_plugins(SimulationPlugin);
    app
}

fn elapsed_days(app: &App) -> f64 {
    app.world().resource::<SimulationState>().clock.elapsed_days()
}

fn temp_log_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "neowatch-headless-{}-{}.txt",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn test_plugin_inserts_resources() {
    let mut app = create_minimal_app(SimulationSettings::default());
    app.update();

    let world = app.world();
    assert!(world.contains_resource::<Ephemeris>());
    assert!(world.contains_resource::<ViewState>());

    let state = world.resource::<SimulationState>();
    assert_eq!(state.positions.len(), BodyId::ALL.len());
}

#[test]
fn test_clock_advances_with_frame_time() {
    let mut app = create_minimal_app(SimulationSettings::default());
    app.update();
    let start = elapsed_days(&app);

    for _ in 0..4 {
        app.update();
    }

    // 500 days/s for four 100 ms frames
    assert_relative_eq!(elapsed_days(&app) - start, 200.0, epsilon = 1e-9);
}

#[test]
fn test_settings_speed_is_used() {
    let settings = SimulationSettings {
        days_per_second: 10.0,
        ..Default::default()
    };
    let mut app = create_minimal_app(settings);
    app.update();
    let start = elapsed_days(&app);

    for _ in 0..10 {
        app.update();
    }

    assert_relative_eq!(elapsed_days(&app) - start, 10.0, epsilon = 1e-9);
}

#[test]
fn test_pause_freezes_clock() {
    let mut app = create_minimal_app(SimulationSettings::default());
    app.update();

    app.world_mut().resource_mut::<SimulationState>().clock.paused = true;
    let frozen = elapsed_days(&app);

    for _ in 0..5 {
        app.update();
    }

    assert_eq!(elapsed_days(&app), frozen);
}

#[test]
fn test_view_offset_moves_bodies_not_trails() {
    let mut app = create_minimal_app(SimulationSettings::default());
    let offset = DVec2::new(30.0, -20.0);
    app.world_mut().resource_mut::<ViewState>().offset = offset;

    app.update();

    let state = app.world().resource::<SimulationState>();
    assert_eq!(state.positions.get(BodyId::Sun), Some(SCENE_ORIGIN + offset));
    let earth = state.positions.get(BodyId::Earth).unwrap();
    assert_eq!(
        state.trails.get(BodyId::Earth).and_then(|t| t.newest()),
        Some(earth - offset)
    );
}

#[test]
fn test_alerts_are_persisted() {
    let path = temp_log_path("persist");
    let settings = SimulationSettings {
        // Every asteroid is inside this threshold
        proximity_threshold_km: 1.0e10,
        ..Default::default()
    };
    let mut app = create_minimal_app(settings);
    app.insert_resource(AlertLog::open(&path).unwrap());

    // Alerts stay up for ten real seconds, so these frames fire once each
    for _ in 0..5 {
        app.update();
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    let names: Vec<&str> = contents
        .lines()
        .map(|line| {
            line.strip_prefix("Proximity Alert - ")
                .and_then(|rest| rest.split(':').next())
                .unwrap()
        })
        .collect();
    assert_eq!(names, vec!["APOPHIS", "YR4", "BENNU", "2001 WN5", "1950 DA"]);

    let state = app.world().resource::<SimulationState>();
    assert_eq!(state.alerts.active().count(), BodyId::ASTEROIDS.len());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_missing_alert_log_is_skipped() {
    let settings = SimulationSettings {
        proximity_threshold_km: 1.0e10,
        ..Default::default()
    };
    let mut app = create_minimal_app(settings);

    app.update();

    let state = app.world().resource::<SimulationState>();
    assert_eq!(state.alerts.active().count(), BodyId::ASTEROIDS.len());
}
