use chrono::Duration;
use flotilla_core::{DateRange, HistoryPoint, SeedVessel, VesselHistory};
use rand::Rng;

use crate::{advance_position, drift};

const STEP_SECONDS: f64 = 3600.0;

/// Walks the motion and drift models forward one simulated hour at a time
/// across the mission window, sampling one point per step. The first sample
/// falls one hour after the window start, the last exactly on its end.
pub fn generate_history(
    seed: &SeedVessel,
    window: &DateRange,
    rng: &mut impl Rng,
) -> VesselHistory {
    let hours = window.duration().num_hours();
    let mut points = Vec::with_capacity(hours as usize);

    let mut position = seed.position;
    let mut speed = seed.speed;
    let mut heading = seed.heading;

    for hour in 1..=hours {
        (heading, speed) = drift(heading, speed, rng);
        position = advance_position(position, speed, heading, STEP_SECONDS);

        points.push(HistoryPoint {
            position,
            timestamp: window.start() + Duration::hours(hour),
            speed,
            heading,
            status: seed.status,
        });
    }

    VesselHistory::new(
        seed.id,
        seed.name.to_owned(),
        seed.location.to_owned(),
        points,
    )
}
