use std::{fmt::Display, num::ParseIntError, str::FromStr};

use chrono::{DateTime, Utc};
use strum::{AsRefStr, EnumString};

use super::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VesselId(i64);

impl VesselId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn into_inner(self) -> i64 {
        self.0
    }
}

impl FromStr for VesselId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<VesselId> for i64 {
    fn from(value: VesselId) -> Self {
        value.0
    }
}

impl Display for VesselId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of the satellite tracker unit mounted on a vessel, derived
/// deterministically from the vessel id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerId(String);

impl TrackerId {
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<VesselId> for TrackerId {
    fn from(value: VesselId) -> Self {
        Self(format!("GARMIN-{:04}", value.0))
    }
}

impl AsRef<str> for TrackerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for TrackerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum VesselStatus {
    Sailing,
    Anchored,
    Docked,
}

/// One roster entry of literal configuration data the engine is seeded with.
#[derive(Debug, Clone, Copy)]
pub struct SeedVessel {
    pub id: VesselId,
    pub name: &'static str,
    pub location: &'static str,
    pub position: Coordinates,
    pub status: VesselStatus,
    pub speed: f64,
    pub heading: f64,
}

#[derive(Debug, Clone)]
pub struct Vessel {
    pub id: VesselId,
    pub name: String,
    pub location: String,
    pub position: Coordinates,
    pub status: VesselStatus,
    pub speed: f64,
    pub heading: f64,
    pub last_update: DateTime<Utc>,
    pub tracker_id: TrackerId,
    /// Trailing positions, chronological, oldest first.
    pub trajectory: Vec<Coordinates>,
}

impl Vessel {
    pub fn from_seed(seed: &SeedVessel, now: DateTime<Utc>) -> Self {
        Self {
            id: seed.id,
            name: seed.name.to_owned(),
            location: seed.location.to_owned(),
            position: seed.position,
            status: seed.status,
            speed: seed.speed,
            heading: seed.heading,
            last_update: now,
            tracker_id: seed.id.into(),
            trajectory: vec![seed.position],
        }
    }

    /// Appends to the trail, evicting the oldest point once `limit` is
    /// exceeded.
    pub fn push_position(&mut self, position: Coordinates, limit: usize) {
        self.trajectory.push(position);
        if self.trajectory.len() > limit {
            self.trajectory.remove(0);
        }
    }
}

#[cfg(feature = "test")]
mod test {
    use super::*;

    impl SeedVessel {
        pub fn test_default(id: i64) -> SeedVessel {
            SeedVessel {
                id: VesselId::new(id),
                name: "test_vessel",
                location: "test harbour",
                position: Coordinates {
                    latitude: 31.5,
                    longitude: 32.0,
                },
                status: VesselStatus::Sailing,
                speed: 8.0,
                heading: 90.0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_tracker_id_is_zero_padded_to_width_four() {
        assert_eq!(TrackerId::from(VesselId::new(7)).as_ref(), "GARMIN-0007");
        assert_eq!(TrackerId::from(VesselId::new(44)).as_ref(), "GARMIN-0044");
    }

    #[test]
    fn test_push_position_evicts_oldest_beyond_limit() {
        let seed = SeedVessel {
            id: VesselId::new(1),
            name: "a",
            location: "",
            position: Coordinates {
                latitude: 0.0,
                longitude: 0.0,
            },
            status: VesselStatus::Sailing,
            speed: 7.0,
            heading: 90.0,
        };
        let mut vessel = Vessel::from_seed(&seed, Utc::now());

        for i in 1..=60 {
            vessel.push_position(
                Coordinates {
                    latitude: i as f64,
                    longitude: 0.0,
                },
                50,
            );
        }

        assert_eq!(vessel.trajectory.len(), 50);
        // The seed position and the first ten pushes are gone.
        assert_eq!(vessel.trajectory[0].latitude, 11.0);
        assert_eq!(vessel.trajectory[49].latitude, 60.0);
    }
}
