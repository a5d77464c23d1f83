use flotilla_core::Coordinates;

// 1 knot ≈ 1.852 km/h, ≈111.32 km per degree of latitude. Flat-Earth
// approximation: longitude degrees are treated like latitude degrees, so the
// error grows towards the poles, and positions are never clamped.
const KNOT_KMH: f64 = 1.852;
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Dead-reckons a new position from speed and heading over `elapsed_seconds`.
/// Heading 0° is north (+latitude), 90° is east (+longitude).
pub fn advance_position(
    position: Coordinates,
    speed_knots: f64,
    heading_degrees: f64,
    elapsed_seconds: f64,
) -> Coordinates {
    let rate = speed_knots * KNOT_KMH / METERS_PER_DEGREE;
    let distance = rate * elapsed_seconds;
    let heading = heading_degrees.to_radians();

    Coordinates {
        latitude: position.latitude + distance * heading.cos(),
        longitude: position.longitude + distance * heading.sin(),
    }
}
