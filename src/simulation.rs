//! Per-frame simulation tick.
//!
//! [`SimulationState`] owns everything the core mutates between frames:
//! the clock, the trails and the alert board. One call to
//! [`SimulationState::tick`] advances them in a fixed order and takes a
//! single position snapshot, so every body in a frame shares the same
//! elapsed-days value.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::alert_log::{AlertLog, persist_alerts};
use crate::calendar::CalendarDate;
use crate::camera::ViewState;
use crate::ephemeris::{BodyPositions, Ephemeris};
use crate::proximity::{AlertBoard, ProximityAlert};
use crate::settings::SimulationSettings;
use crate::time::SimulationClock;
use crate::trail::Trails;

/// Mutable simulation state shared by the tick and the viewer.
#[derive(Resource, Clone, Debug)]
pub struct SimulationState {
    pub start_date: CalendarDate,
    pub clock: SimulationClock,
    pub trails: Trails,
    pub alerts: AlertBoard,
    /// Snapshot from the most recent tick
    pub positions: BodyPositions,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::from_settings(&SimulationSettings::default())
    }
}

/// What one tick produced.
#[derive(Clone, Debug)]
pub struct TickReport {
    /// Elapsed simulated days after the tick
    pub elapsed_days: f64,
    /// Alerts that fired during the tick
    pub fired: Vec<ProximityAlert>,
}

impl SimulationState {
    pub fn from_settings(settings: &SimulationSettings) -> Self {
        Self {
            start_date: settings.start_date,
            clock: SimulationClock::new(settings.days_per_second),
            trails: Trails::new(settings.trail_capacity),
            alerts: AlertBoard::new(
                settings.proximity_threshold_km,
                settings.alert_display_seconds,
            ),
            positions: BodyPositions::default(),
        }
    }

    /// Advance one frame by `real_seconds` of wall-clock time.
    ///
    /// Order: clock, alert countdowns, position snapshot, trails, proximity.
    /// Countdowns advance even while the clock is paused.
    pub fn tick(&mut self, ephemeris: &Ephemeris, real_seconds: f64, view_offset: DVec2) -> TickReport {
        self.clock.advance(real_seconds);
        self.alerts.tick(real_seconds);

        let snapshot = ephemeris.positions_at(self.clock.elapsed_days(), view_offset);
        self.trails.record(&snapshot);
        let fired = self.alerts.evaluate(&snapshot, self.start_date);
        self.positions = snapshot;

        TickReport {
            elapsed_days: self.clock.elapsed_days(),
            fired,
        }
    }

    /// Calendar date at the current elapsed days.
    pub fn current_date(&self) -> CalendarDate {
        self.start_date.offset_by_days(self.clock.elapsed_days())
    }
}

/// System sets ordering the frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Keyboard and mouse handling
    Input,
    /// [`SimulationState::tick`]
    Tick,
    /// Consumers of the tick: alert log, meshes, gizmos
    Output,
}

/// Plugin running the simulation tick every frame.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<SimulationSettings>()
            .cloned()
            .unwrap_or_default();

        app.add_message::<ProximityAlert>()
            .insert_resource(SimulationState::from_settings(&settings))
            .init_resource::<Ephemeris>()
            .init_resource::<ViewState>()
            .configure_sets(
                Update,
                (SimulationSet::Input, SimulationSet::Tick, SimulationSet::Output).chain(),
            )
            .add_systems(Update, run_tick.in_set(SimulationSet::Tick))
            .add_systems(
                Update,
                persist_alerts
                    .in_set(SimulationSet::Output)
                    .run_if(resource_exists::<AlertLog>),
            );

        info!("Simulation starting at {}", settings.start_date);
    }
}

/// Advance the simulation by this frame's real delta.
fn run_tick(
    time: Res<Time>,
    ephemeris: Res<Ephemeris>,
    view: Res<ViewState>,
    mut state: ResMut<SimulationState>,
    mut alerts: MessageWriter<ProximityAlert>,
) {
    let report = state.tick(&ephemeris, time.delta_secs_f64(), view.offset);
    for alert in report.fired {
        alerts.write(alert);
    }
}
