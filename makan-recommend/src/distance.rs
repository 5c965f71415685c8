//! Great-circle distance between campus coordinates.

use geo::Coord;

/// Earth radius in meters, matching the queue-monitoring backend.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Compute the Haversine distance between two WGS84 coordinates, in meters.
///
/// Coordinates are decimal degrees with `x = longitude` and `y = latitude`.
/// The computation is pure; non-finite inputs propagate as NaN.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use makan_recommend::haversine_distance;
///
/// let hall = Coord { x: 103.6831, y: 1.3483 };
/// assert_eq!(haversine_distance(hall, hall), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "Haversine is floating-point trigonometry"
)]
pub fn haversine_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let (lat1, lon1) = (a.y.to_radians(), a.x.to_radians());
    let (lat2, lon2) = (b.y.to_radians(), b.x.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}
