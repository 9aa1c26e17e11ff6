//! Startup settings and command-line parsing.
//!
//! ```text
//! neowatch [YYYY-MM-DD | YYYY MM DD] [--speed <days/s>] [--log <path>]
//! ```
//!
//! Without a date the start date is read from stdin.

use bevy::prelude::*;
use std::io::BufRead;
use std::path::PathBuf;

use crate::alert_log::DEFAULT_ALERT_LOG;
use crate::calendar::{CalendarDate, DateParseError};
use crate::proximity::{ALERT_DISPLAY_SECONDS, PROXIMITY_THRESHOLD_KM};
use crate::time::DEFAULT_DAYS_PER_SECOND;
use crate::trail::DEFAULT_TRAIL_CAPACITY;

/// Prompt shown when no start date is given on the command line.
pub const START_DATE_PROMPT: &str = "Enter start date (YYYY MM DD): ";

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("invalid start date: {0}")]
    Date(#[from] DateParseError),
    #[error("{flag} expects a value")]
    MissingValue { flag: &'static str },
    #[error("invalid value {value:?} for {flag}: must be a positive number")]
    InvalidSpeed { flag: &'static str, value: String },
    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),
    #[error("could not read start date: {0}")]
    Stdin(#[from] std::io::Error),
}

/// Tunables for one simulation run.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationSettings {
    /// Calendar date at elapsed day zero
    pub start_date: CalendarDate,
    /// Initial simulation speed in days per real second
    pub days_per_second: f64,
    /// Earth distance that triggers an alert, in kilometers
    pub proximity_threshold_km: f64,
    /// Real seconds an alert stays on screen
    pub alert_display_seconds: f64,
    /// Points kept per body trail
    pub trail_capacity: usize,
    /// Where alert lines are appended
    pub alert_log_path: PathBuf,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            start_date: CalendarDate::default(),
            days_per_second: DEFAULT_DAYS_PER_SECOND,
            proximity_threshold_km: PROXIMITY_THRESHOLD_KM,
            alert_display_seconds: ALERT_DISPLAY_SECONDS,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            alert_log_path: PathBuf::from(DEFAULT_ALERT_LOG),
        }
    }
}

impl SimulationSettings {
    /// Parse command-line arguments (without the program name).
    ///
    /// Returns the settings and whether a start date was supplied.
    pub fn from_args<I, S>(args: I) -> Result<(Self, bool), SettingsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut settings = Self::default();
        let mut date_parts = Vec::new();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--speed" => {
                    let value = args.next().ok_or(SettingsError::MissingValue { flag: "--speed" })?;
                    settings.days_per_second = match value.parse::<f64>() {
                        Ok(speed) if speed.is_finite() && speed > 0.0 => speed,
                        _ => return Err(SettingsError::InvalidSpeed { flag: "--speed", value }),
                    };
                }
                "--log" => {
                    let value = args.next().ok_or(SettingsError::MissingValue { flag: "--log" })?;
                    settings.alert_log_path = PathBuf::from(value);
                }
                other if other.starts_with("--") => {
                    return Err(SettingsError::UnexpectedArgument(arg));
                }
                _ => date_parts.push(arg),
            }
        }

        let has_date = !date_parts.is_empty();
        if has_date {
            settings.start_date = date_parts.join(" ").parse()?;
        }

        Ok((settings, has_date))
    }

    /// Read a start date line from `input`.
    pub fn read_start_date(input: &mut impl BufRead) -> Result<CalendarDate, SettingsError> {
        let mut line = String::new();
        input.read_line(&mut line)?;
        Ok(line.parse()?)
    }
}
