//! Ten simulated years over the built-in catalogue.
//!
//! At 100 days/s with 10 ms frames every tick advances exactly one day, so
//! the close approach lands on a whole day and its calendar date is exact.

use bevy::math::DVec2;
use neowatch::calendar::CalendarDate;
use neowatch::ephemeris::{BodyId, Ephemeris};
use neowatch::proximity::ProximityAlert;
use neowatch::settings::SimulationSettings;
use neowatch::simulation::SimulationState;

const FRAME_SECONDS: f64 = 0.01;

fn fast_settings() -> SimulationSettings {
    SimulationSettings {
        start_date: CalendarDate::new(2025, 1, 1),
        days_per_second: 100.0,
        ..Default::default()
    }
}

fn run_ten_years() -> (SimulationState, Vec<(usize, ProximityAlert)>) {
    let eph = Ephemeris::new();
    let mut state = SimulationState::from_settings(&fast_settings());

    let mut fired = Vec::new();
    for frame in 0..3650 {
        let report = state.tick(&eph, FRAME_SECONDS, DVec2::ZERO);
        fired.extend(report.fired.into_iter().map(|alert| (frame, alert)));
    }

    (state, fired)
}

#[test]
fn test_bennu_close_approach() {
    let (_, fired) = run_ten_years();

    assert_eq!(fired.len(), 1, "expected one alert, got {:?}", fired);
    let (frame, alert) = &fired[0];

    assert_eq!(*frame, 1703);
    assert_eq!(alert.body, BodyId::Bennu);
    assert_eq!(alert.elapsed_days, 1704.0);
    assert_eq!(alert.date, CalendarDate::new(2029, 9, 1));
    assert!(
        (alert.distance_km - 3_693_170.0).abs() < 100.0,
        "distance {}",
        alert.distance_km
    );
    assert!(
        alert
            .to_string()
            .starts_with("Proximity Alert - BENNU: 2029-09-01 (Distance: 3693")
    );
}

#[test]
fn test_alert_expires_after_display_window() {
    let eph = Ephemeris::new();
    let mut state = SimulationState::from_settings(&fast_settings());

    for _ in 0..1704 {
        state.tick(&eph, FRAME_SECONDS, DVec2::ZERO);
    }
    let active: Vec<BodyId> = state.alerts.active().map(|(id, _)| id).collect();
    assert_eq!(active, vec![BodyId::Bennu]);

    // Five real seconds later the text is still up
    for _ in 0..500 {
        state.tick(&eph, FRAME_SECONDS, DVec2::ZERO);
    }
    assert!(state.alerts.get(BodyId::Bennu).unwrap().is_active());

    for _ in 0..600 {
        state.tick(&eph, FRAME_SECONDS, DVec2::ZERO);
    }
    let bennu = state.alerts.get(BodyId::Bennu).unwrap();
    assert!(!bennu.is_active());
    assert!(bennu.text.is_empty());
}

#[test]
fn test_trails_stay_bounded() {
    let (state, _) = run_ten_years();

    for &id in BodyId::PLANETS.iter().chain(BodyId::ASTEROIDS) {
        assert_eq!(state.trails.get(id).unwrap().len(), 2000);
    }
    assert!(state.trails.get(BodyId::Sun).is_none());

    let earth = state.trails.get(BodyId::Earth).unwrap();
    assert_eq!(earth.newest(), state.positions.get(BodyId::Earth));
}

#[test]
fn test_date_tracks_elapsed_days() {
    let (state, _) = run_ten_years();
    assert_eq!(state.clock.elapsed_days(), 3650.0);
    // 2028 is a leap year
    assert_eq!(state.current_date(), CalendarDate::new(2034, 12, 30));
}
