use rand::Rng;

pub const MIN_SPEED_KNOTS: f64 = 4.0;
pub const MAX_SPEED_KNOTS: f64 = 12.0;

const HEADING_JITTER_DEGREES: f64 = 5.0;
const SPEED_JITTER_KNOTS: f64 = 0.5;

/// Randomized per-step perturbation of heading and speed, keeping trails
/// from being perfectly linear. Heading wraps into [0, 360), speed clamps to
/// the sailing band.
pub fn drift(heading: f64, speed: f64, rng: &mut impl Rng) -> (f64, f64) {
    let heading_offset = rng.random_range(-HEADING_JITTER_DEGREES..=HEADING_JITTER_DEGREES);
    let heading = (heading + heading_offset + 360.0) % 360.0;

    let speed_offset = rng.random_range(-SPEED_JITTER_KNOTS..=SPEED_JITTER_KNOTS);
    let speed = (speed + speed_offset).clamp(MIN_SPEED_KNOTS, MAX_SPEED_KNOTS);

    (heading, speed)
}
