//! Neowatch - near-Earth asteroid orbit viewer
//!
//! A library crate providing the Kepler propagator, calendar, proximity
//! alerts and the Bevy plugins that drive and render them.

pub mod alert_log;
pub mod calendar;
pub mod camera;
pub mod ephemeris;
pub mod input;
pub mod proximity;
pub mod render;
pub mod settings;
pub mod simulation;
pub mod time;
pub mod trail;
pub mod types;
pub mod ui;
