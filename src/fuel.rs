//! Fuel-stop placement along the combined route geometry.

use crate::model::Coordinate;

pub const METERS_PER_MILE: f64 = 1609.34;

/// Indices into `coordinates` at which the truck refuels.
///
/// One stop per full `interval_miles` of trip distance, rounded down. The
/// stops are spread evenly over the *points* of the geometry, not over road
/// distance, so they only approximate the true interval when points are
/// unevenly spaced. Indices are strictly increasing and in bounds; when the
/// geometry is too short to hold every stop, the trailing ones are dropped.
pub fn plan_fuel_stops(
    coordinates: &[Coordinate],
    total_distance_meters: f64,
    interval_miles: f64,
) -> Vec<usize> {
    // More stops than points can never all fit; capping keeps `needed + 1` sane.
    let needed = stops_needed(total_distance_meters, interval_miles).min(coordinates.len());
    if needed == 0 || coordinates.len() < 2 {
        return Vec::new();
    }

    let step = (coordinates.len() / (needed + 1)).max(1);
    (1..=needed)
        .map(|k| k * step)
        .take_while(|&index| index < coordinates.len())
        .collect()
}

/// `floor(miles / interval_miles)`, zero for non-positive or non-finite input.
pub fn stops_needed(total_distance_meters: f64, interval_miles: f64) -> usize {
    let positive = |value: f64| value.is_finite() && value > 0.0;
    if !positive(total_distance_meters) || !positive(interval_miles) {
        return 0;
    }
    let miles = total_distance_meters / METERS_PER_MILE;
    let needed = (miles / interval_miles).floor();
    if needed.is_finite() { needed as usize } else { 0 }
}
