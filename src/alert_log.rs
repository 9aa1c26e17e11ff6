//! Append-only text log of proximity alerts.
//!
//! The file is opened once at startup in append mode and every line is
//! flushed as soon as it is written, so the log survives an abnormal exit.
//! Write failures are reported and otherwise ignored; the simulation keeps
//! running without persistence.

use bevy::prelude::*;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::proximity::ProximityAlert;

/// Default alert log location, relative to the working directory.
pub const DEFAULT_ALERT_LOG: &str = "proximity_alerts.txt";

#[derive(thiserror::Error, Debug)]
pub enum AlertLogError {
    #[error("could not open alert log {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write to alert log {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("alert log {0} is unavailable")]
    Unavailable(PathBuf),
}

/// Resource owning the alert log file handle.
#[derive(Resource, Debug)]
pub struct AlertLog {
    path: PathBuf,
    file: Option<File>,
}

impl AlertLog {
    /// Open (or create) the log in append mode.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AlertLogError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| AlertLogError::Open {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            file: Some(file),
        })
    }

    /// Open the log, falling back to a disabled log on failure.
    pub fn open_or_disabled(path: impl AsRef<Path>) -> Self {
        match Self::open(&path) {
            Ok(log) => {
                info!("Writing proximity alerts to {}", log.path.display());
                log
            }
            Err(err) => {
                error!("{err}; alerts will not be persisted");
                Self::disabled(path)
            }
        }
    }

    /// A log that rejects every write.
    pub fn disabled(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            file: None,
        }
    }

    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Append one line and flush it.
    pub fn append(&mut self, line: &str) -> Result<(), AlertLogError> {
        let Some(file) = self.file.as_mut() else {
            return Err(AlertLogError::Unavailable(self.path.clone()));
        };

        writeln!(file, "{line}")
            .and_then(|_| file.flush())
            .map_err(|source| AlertLogError::Write {
                path: self.path.clone(),
                source,
            })
    }
}

/// Persist alerts fired this frame. Failures are logged, never fatal.
pub fn persist_alerts(mut alerts: MessageReader<ProximityAlert>, mut log: ResMut<AlertLog>) {
    for alert in alerts.read() {
        info!("{alert}");
        if let Err(err) = log.append(&alert.to_string()) {
            warn!("{err}");
        }
    }
}
