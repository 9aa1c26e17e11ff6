//! Orbital elements for the tracked bodies.
//! Source: NASA JPL Small-Body Database and planetary fact sheets, flattened to 2D.

use super::kepler::OrbitalElements;

/// Identifier for bodies in the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    // Near-Earth asteroids
    Apophis,
    Yr4,
    Bennu,
    Wn5,
    Da1950,
}

impl BodyId {
    /// Every body, in draw order.
    pub const ALL: &'static [BodyId] = &[
        BodyId::Sun,
        BodyId::Earth,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Apophis,
        BodyId::Yr4,
        BodyId::Bennu,
        BodyId::Wn5,
        BodyId::Da1950,
    ];

    /// Planets (not including the Sun)
    pub const PLANETS: &'static [BodyId] = &[BodyId::Mercury, BodyId::Venus, BodyId::Earth];

    /// Asteroids monitored for Earth proximity
    pub const ASTEROIDS: &'static [BodyId] = &[
        BodyId::Apophis,
        BodyId::Yr4,
        BodyId::Bennu,
        BodyId::Wn5,
        BodyId::Da1950,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            BodyId::Sun => "Sun",
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Earth => "Earth",
            BodyId::Apophis => "Apophis",
            BodyId::Yr4 => "YR4",
            BodyId::Bennu => "Bennu",
            BodyId::Wn5 => "2001 WN5",
            BodyId::Da1950 => "1950 DA",
        }
    }

    /// Name used in proximity alert lines.
    pub fn alert_name(&self) -> &'static str {
        match self {
            BodyId::Apophis => "APOPHIS",
            BodyId::Yr4 => "YR4",
            BodyId::Bennu => "BENNU",
            other => other.name(),
        }
    }

    pub fn is_asteroid(&self) -> bool {
        Self::ASTEROIDS.contains(self)
    }

    /// Orbital elements, or `None` for the Sun which sits at the origin.
    pub fn orbit(&self) -> Option<OrbitalElements> {
        let elements = match self {
            BodyId::Sun => return None,

            // Planets: no epoch anomaly, no drift
            BodyId::Mercury => {
                OrbitalElements::new(57_909_050.0, 0.205635, 7.005, 48.331, 29.124, 87.9691)
            }
            BodyId::Venus => {
                OrbitalElements::new(108_208_000.0, 0.006772, 3.39458, 76.680, 54.884, 224.701)
            }
            BodyId::Earth => {
                OrbitalElements::new(149_598_023.0, 0.0167086, 0.0, 0.0, 114.20783, 365.256363)
            }

            // Asteroids carry a mean anomaly at epoch and a Yarkovsky A2 term (AU/day²)
            BodyId::Apophis => {
                OrbitalElements::new(137_996_000.0, 0.1911, 3.339, 204.183, 126.404, 324.0)
                    .with_mean_anomaly_at_epoch(297.8)
                    .with_yarkovsky(-2.899e-14)
            }
            BodyId::Yr4 => {
                OrbitalElements::new(306_675_000.0, 0.556, 3.41, 73.5, 297.4, 1458.0)
                    .with_yarkovsky(-1.0e-14)
            }
            BodyId::Bennu => {
                OrbitalElements::new(168_580_000.0, 0.2037, 6.035, 2.061, 66.223, 436.6)
                    .with_mean_anomaly_at_epoch(340.0)
                    .with_yarkovsky(-1.9e-13)
            }
            BodyId::Wn5 => {
                OrbitalElements::new(256_016_000.0, 0.4672, 1.915, 285.885, 68.349, 817.7)
                    .with_mean_anomaly_at_epoch(10.0)
                    .with_yarkovsky(-1.0e-14)
            }
            BodyId::Da1950 => {
                OrbitalElements::new(254_121_000.0, 0.5082, 12.175, 356.747, 224.572, 808.5)
                    .with_mean_anomaly_at_epoch(200.0)
                    .with_yarkovsky(-2.5e-13)
            }
        };
        Some(elements)
    }
}

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
