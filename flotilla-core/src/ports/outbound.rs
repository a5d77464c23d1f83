use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{Coordinates, DateRange, Result, Vessel, VesselId};

/// Engine-side boundary consumed by the presentation layer. `fetch_vessels`
/// is the only operation that advances the simulation; the playback
/// operations read immutable history and are safe to call concurrently with
/// it.
#[async_trait]
pub trait VesselStatePort: Send + Sync + 'static {
    /// Current live snapshot without advancing the simulation.
    async fn vessels(&self) -> Result<Vec<Vessel>>;
    /// Advances the simulation one step after the configured transmission
    /// delay and returns the updated fleet.
    async fn fetch_vessels(&self) -> Result<Vec<Vessel>>;
    /// Fleet state reconstructed from precomputed history at `timestamp`.
    async fn vessels_at_time(&self, timestamp: DateTime<Utc>) -> Result<Vec<Vessel>>;
    /// Live trajectory of a single vessel, empty when the id is unknown.
    async fn vessel_track(&self, vessel_id: VesselId) -> Result<Vec<Coordinates>>;
    /// The fixed mission window backing the playback timeline.
    async fn mission_date_range(&self) -> Result<DateRange>;
}
