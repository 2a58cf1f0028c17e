//! Deterministic offline providers (used when the live service is
//! unconfigured or a call fails).
//!
//! Neither touches the network. Results are placeholders, not estimates of
//! the real road network.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::{PolylineError, ProviderError};
use crate::model::{Coordinate, RouteSegment};
use crate::polyline;
use crate::traits::{Geocoder, Router};

const LAT_BAND_START: f64 = 30.0;
const LNG_BAND_START: f64 = -100.0;
/// Both bands are 10 degrees wide, in 0.01 degree steps.
const BAND_STEPS: u64 = 1000;
const BAND_STEP_DEGREES: f64 = 0.01;

const DEFAULT_LEG_DISTANCE_METERS: f64 = 850_000.0;
const DEFAULT_NOMINAL_MILES: f64 = 850.0;
const DEFAULT_SPEED_MPH: f64 = 55.0;

/// Maps place names onto the band lat [30, 40), lng [-100, -90).
///
/// The mapping hashes the place text with std's `DefaultHasher` (fixed
/// keys), so a given string always lands on the same point within a build.
/// It is not a cryptographic hash and not portable across toolchains.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticGeocoder;

impl SyntheticGeocoder {
    pub fn coordinate_for(&self, place: &str) -> Coordinate {
        let mut hasher = DefaultHasher::new();
        place.hash(&mut hasher);
        let hash = hasher.finish();

        let lat_step = hash % BAND_STEPS;
        let lng_step = (hash / BAND_STEPS) % BAND_STEPS;

        Coordinate::new(
            LAT_BAND_START + lat_step as f64 * BAND_STEP_DEGREES,
            LNG_BAND_START + lng_step as f64 * BAND_STEP_DEGREES,
        )
    }
}

impl Geocoder for SyntheticGeocoder {
    fn resolve(&self, place: &str) -> Result<Coordinate, ProviderError> {
        Ok(self.coordinate_for(place))
    }
}

/// Straight-line stand-in for a routed leg.
///
/// Every leg gets the same fixed distance and a duration derived from an
/// assumed average speed over a nominal leg length, regardless of where the
/// points are.
#[derive(Debug, Clone)]
pub struct SyntheticRouter {
    pub distance_meters: f64,
    /// Leg length the duration estimate assumes.
    pub nominal_miles: f64,
    pub speed_mph: f64,
}

impl Default for SyntheticRouter {
    fn default() -> Self {
        Self {
            distance_meters: DEFAULT_LEG_DISTANCE_METERS,
            nominal_miles: DEFAULT_NOMINAL_MILES,
            speed_mph: DEFAULT_SPEED_MPH,
        }
    }
}

impl SyntheticRouter {
    /// Whole seconds, truncated.
    pub fn duration_seconds(&self) -> f64 {
        (self.nominal_miles / self.speed_mph * 3600.0).trunc()
    }

    /// Fails only when a point is outside the valid coordinate range.
    pub fn segment_for(&self, points: &[Coordinate]) -> Result<RouteSegment, PolylineError> {
        Ok(RouteSegment {
            distance_meters: self.distance_meters,
            duration_seconds: self.duration_seconds(),
            encoded_polyline: polyline::encode(points)?,
            coordinates: points.to_vec(),
            instructions: Vec::new(),
        })
    }
}

impl Router for SyntheticRouter {
    fn route(&self, points: &[Coordinate]) -> Result<RouteSegment, ProviderError> {
        if points.len() < 2 {
            return Err(ProviderError::InsufficientPoints { got: points.len() });
        }
        Ok(self.segment_for(points)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocode_is_deterministic() {
        let geocoder = SyntheticGeocoder;
        assert_eq!(
            geocoder.coordinate_for("Chicago, IL"),
            geocoder.coordinate_for("Chicago, IL")
        );
    }

    #[test]
    fn test_geocode_distinguishes_places() {
        let geocoder = SyntheticGeocoder;
        let places = ["A", "B", "C", "Chicago, IL", "Denver, CO", "Memphis, TN"];
        let coords: Vec<Coordinate> = places.iter().map(|p| geocoder.coordinate_for(p)).collect();
        for (i, a) in coords.iter().enumerate() {
            for b in &coords[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_geocode_stays_in_band() {
        let geocoder = SyntheticGeocoder;
        for i in 0..500 {
            let coord = geocoder.coordinate_for(&format!("place-{i}"));
            assert!((30.0..40.0).contains(&coord.lat), "lat {} out of band", coord.lat);
            assert!((-100.0..-90.0).contains(&coord.lng), "lng {} out of band", coord.lng);
        }
    }

    #[test]
    fn test_router_fixed_leg() {
        let router = SyntheticRouter::default();
        let points = vec![Coordinate::new(32.0, -97.0), Coordinate::new(39.7, -104.9)];
        let segment = router.route(&points).unwrap();

        assert_eq!(segment.distance_meters, 850_000.0);
        assert_eq!(segment.duration_seconds, 55_636.0);
        assert_eq!(segment.coordinates, points);
        assert_eq!(segment.encoded_polyline, polyline::encode(&points).unwrap());
        assert!(segment.instructions.is_empty());
    }

    #[test]
    fn test_router_rejects_out_of_range_points() {
        let router = SyntheticRouter::default();
        let points = vec![Coordinate::new(32.0, -97.0), Coordinate::new(32.0, -197.0)];
        let err = router.route(&points).unwrap_err();
        assert!(matches!(err, ProviderError::Geometry(PolylineError::Encode(_))));
    }

    #[test]
    fn test_router_needs_two_points() {
        let router = SyntheticRouter::default();
        let err = router.route(&[Coordinate::new(32.0, -97.0)]).unwrap_err();
        assert!(matches!(err, ProviderError::InsufficientPoints { got: 1 }));
    }
}
