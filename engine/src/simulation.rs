use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use flotilla_core::{
    Coordinates, DateRange, SeedVessel, Vessel, VesselHistory, VesselId, VesselStatePort,
};
use rand::{SeedableRng, rngs::StdRng};
use snafu::{ResultExt, ensure};
use tokio::sync::Mutex;
use tracing::{Level, event};

use crate::{
    Settings, advance_position, drift,
    error::{
        Result,
        error::{EmptyRosterSnafu, MissionWindowSnafu},
    },
    generate_history,
};

/// Authoritative owner of the simulated fleet: the live vessel list, the
/// precomputed mission histories, and the queries over both. Live state sits
/// behind a mutex so `tick` is serialized against itself; histories are
/// immutable after construction and read lock-free.
pub struct VesselStateEngine {
    settings: Settings,
    window: DateRange,
    histories: BTreeMap<VesselId, VesselHistory>,
    live: Mutex<LiveState>,
}

struct LiveState {
    vessels: Vec<Vessel>,
    last_tick: DateTime<Utc>,
    rng: StdRng,
}

impl VesselStateEngine {
    pub fn new(roster: &[SeedVessel], settings: Settings) -> Result<Self> {
        Self::with_rng(roster, settings, StdRng::from_os_rng())
    }

    /// Seeded construction makes drift deterministic in tests.
    pub fn with_rng(roster: &[SeedVessel], settings: Settings, mut rng: StdRng) -> Result<Self> {
        ensure!(!roster.is_empty(), EmptyRosterSnafu);

        let window = DateRange::new(
            settings.mission_start,
            settings.mission_start + Duration::days(settings.mission_days),
        )
        .context(MissionWindowSnafu)?;

        let histories: BTreeMap<VesselId, VesselHistory> = roster
            .iter()
            .map(|seed| (seed.id, generate_history(seed, &window, &mut rng)))
            .collect();

        let now = Utc::now();
        let vessels = roster
            .iter()
            .map(|seed| Vessel::from_seed(seed, now))
            .collect();

        event!(
            Level::INFO,
            "seeded {} vessels with {} history points each",
            roster.len(),
            window.duration().num_hours(),
        );

        Ok(Self {
            settings,
            window,
            histories,
            live: Mutex::new(LiveState {
                vessels,
                last_tick: now,
                rng,
            }),
        })
    }

    /// Advances every vessel by the time elapsed since the previous tick
    /// (engine construction on the first call). Drift is applied first and
    /// the motion step uses the drifted speed and heading.
    pub async fn tick(&self, now: DateTime<Utc>) {
        let mut guard = self.live.lock().await;
        let state = &mut *guard;

        let elapsed = (now - state.last_tick).num_milliseconds() as f64 / 1000.0;

        for vessel in &mut state.vessels {
            let (heading, speed) = drift(vessel.heading, vessel.speed, &mut state.rng);
            vessel.heading = heading;
            vessel.speed = speed;

            let position = advance_position(vessel.position, speed, heading, elapsed);
            vessel.position = position;
            vessel.push_position(position, self.settings.trajectory_limit);
            vessel.last_update = now;
        }

        state.last_tick = now;
    }

    /// Current live snapshot without advancing the simulation.
    pub async fn vessels(&self) -> Vec<Vessel> {
        self.live.lock().await.vessels.clone()
    }

    /// One poll of the simulated tracker uplink: the configured transmission
    /// delay, one tick, then the updated snapshot. The delay sits outside
    /// the lock so playback queries never wait on it.
    pub async fn fetch_vessels(&self) -> Vec<Vessel> {
        tokio::time::sleep(self.settings.fetch_delay).await;
        self.tick(Utc::now()).await;
        self.vessels().await
    }

    /// Fleet state reconstructed from history at `timestamp`, ordered by
    /// vessel id. Timestamps outside the mission window clamp to its
    /// boundary points; vessels with an empty history are skipped.
    pub fn vessels_at_time(&self, timestamp: DateTime<Utc>) -> Vec<Vessel> {
        self.histories
            .values()
            .filter_map(|history| history.snapshot_at(timestamp, self.settings.trajectory_limit))
            .collect()
    }

    /// Live trajectory of a single vessel, empty when the id is unknown.
    pub async fn vessel_track(&self, vessel_id: VesselId) -> Vec<Coordinates> {
        self.live
            .lock()
            .await
            .vessels
            .iter()
            .find(|v| v.id == vessel_id)
            .map(|v| v.trajectory.clone())
            .unwrap_or_default()
    }

    pub fn mission_date_range(&self) -> DateRange {
        self.window.clone()
    }
}

#[async_trait]
impl VesselStatePort for VesselStateEngine {
    async fn vessels(&self) -> flotilla_core::Result<Vec<Vessel>> {
        Ok(self.vessels().await)
    }

    async fn fetch_vessels(&self) -> flotilla_core::Result<Vec<Vessel>> {
        Ok(self.fetch_vessels().await)
    }

    async fn vessels_at_time(&self, timestamp: DateTime<Utc>) -> flotilla_core::Result<Vec<Vessel>> {
        Ok(self.vessels_at_time(timestamp))
    }

    async fn vessel_track(&self, vessel_id: VesselId) -> flotilla_core::Result<Vec<Coordinates>> {
        Ok(self.vessel_track(vessel_id).await)
    }

    async fn mission_date_range(&self) -> flotilla_core::Result<DateRange> {
        Ok(self.mission_date_range())
    }
}
