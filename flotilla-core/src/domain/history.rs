use chrono::{DateTime, Utc};

use super::{Coordinates, TrackerId, Vessel, VesselId, VesselStatus};

/// One precomputed hourly sample of a vessel's simulated state.
#[derive(Debug, Clone, Copy)]
pub struct HistoryPoint {
    pub position: Coordinates,
    pub timestamp: DateTime<Utc>,
    pub speed: f64,
    pub heading: f64,
    pub status: VesselStatus,
}

/// Per-vessel mission history: strictly increasing timestamps, immutable
/// after construction. Carries the static vessel header so playback records
/// can be synthesized without touching live state.
#[derive(Debug, Clone)]
pub struct VesselHistory {
    vessel_id: VesselId,
    name: String,
    location: String,
    tracker_id: TrackerId,
    points: Vec<HistoryPoint>,
}

impl VesselHistory {
    pub fn new(
        vessel_id: VesselId,
        name: String,
        location: String,
        points: Vec<HistoryPoint>,
    ) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        Self {
            vessel_id,
            name,
            location,
            tracker_id: vessel_id.into(),
            points,
        }
    }

    pub fn vessel_id(&self) -> VesselId {
        self.vessel_id
    }

    pub fn points(&self) -> &[HistoryPoint] {
        &self.points
    }

    /// Index of the latest point with timestamp <= `timestamp`. Timestamps
    /// outside the sampled window clamp to the first/last point. `None` only
    /// when the history is empty.
    pub fn index_at(&self, timestamp: DateTime<Utc>) -> Option<usize> {
        if self.points.is_empty() {
            return None;
        }
        match self.points.partition_point(|p| p.timestamp <= timestamp) {
            0 => Some(0),
            n => Some(n - 1),
        }
    }

    /// Positions of all points up to `timestamp`, trimmed to the newest
    /// `limit`.
    pub fn track_until(&self, timestamp: DateTime<Utc>, limit: usize) -> Vec<Coordinates> {
        let end = self.points.partition_point(|p| p.timestamp <= timestamp);
        self.points[end.saturating_sub(limit)..end]
            .iter()
            .map(|p| p.position)
            .collect()
    }

    /// Reconstructs the vessel as it looked at `timestamp`.
    pub fn snapshot_at(&self, timestamp: DateTime<Utc>, limit: usize) -> Option<Vessel> {
        let point = self.points[self.index_at(timestamp)?];
        Some(Vessel {
            id: self.vessel_id,
            name: self.name.clone(),
            location: self.location.clone(),
            position: point.position,
            status: point.status,
            speed: point.speed,
            heading: point.heading,
            last_update: point.timestamp,
            tracker_id: self.tracker_id.clone(),
            trajectory: self.track_until(timestamp, limit),
        })
    }
}
