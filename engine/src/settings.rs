use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Start of the fixed mission window the history timeline covers.
    pub mission_start: DateTime<Utc>,
    pub mission_days: i64,
    /// Trail length cap, live and playback alike.
    pub trajectory_limit: usize,
    /// Cosmetic tracker-uplink latency applied before each live poll.
    #[serde(with = "humantime_serde")]
    pub fetch_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            mission_start: Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap(),
            mission_days: 30,
            trajectory_limit: 50,
            fetch_delay: Duration::from_millis(100),
        }
    }
}
