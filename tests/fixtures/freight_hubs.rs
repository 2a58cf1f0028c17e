//! Real US freight hubs and stub providers built on them.
//!
//! Coordinates sourced from OpenStreetMap city nodes.

use std::collections::HashMap;
use std::sync::Mutex;

use hos_trip_planner::polyline;
use hos_trip_planner::{Coordinate, Instruction, ProviderError, RouteSegment};
use hos_trip_planner::traits::{Geocoder, Router};

/// A named location with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Hub {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Hub {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

pub const DALLAS: Hub = Hub::new("Dallas, TX", 32.7767, -96.7970);
pub const OKLAHOMA_CITY: Hub = Hub::new("Oklahoma City, OK", 35.4676, -97.5164);
pub const DENVER: Hub = Hub::new("Denver, CO", 39.7392, -104.9903);
pub const MEMPHIS: Hub = Hub::new("Memphis, TN", 35.1495, -90.0490);
pub const CHICAGO: Hub = Hub::new("Chicago, IL", 41.8781, -87.6298);
pub const LOS_ANGELES: Hub = Hub::new("Los Angeles, CA", 34.0522, -118.2437);

pub const HUBS: &[Hub] = &[DALLAS, OKLAHOMA_CITY, DENVER, MEMPHIS, CHICAGO, LOS_ANGELES];

/// Geocoder answering only for the known hubs; anything else has no results.
#[derive(Debug, Default)]
pub struct HubGeocoder;

impl Geocoder for HubGeocoder {
    fn resolve(&self, place: &str) -> Result<Coordinate, ProviderError> {
        HUBS.iter()
            .find(|hub| hub.name == place)
            .map(Hub::coordinate)
            .ok_or_else(|| ProviderError::NoResults {
                query: place.to_string(),
            })
    }
}

/// Router returning pre-baked legs keyed by (from, to) hub name.
///
/// Legs are interpolated straight lines with `points` vertices, so the
/// combined geometry has enough points to place fuel stops on. Unknown
/// pairs fail like an unreachable provider. Every request is recorded.
#[derive(Debug, Default)]
pub struct StubRouter {
    legs: HashMap<(&'static str, &'static str), StubLeg>,
    requests: Mutex<Vec<Vec<Coordinate>>>,
}

#[derive(Debug, Clone, Copy)]
struct StubLeg {
    miles: f64,
    minutes: u32,
    points: usize,
}

impl StubRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_leg(mut self, from: Hub, to: Hub, miles: f64, minutes: u32, points: usize) -> Self {
        self.legs
            .insert((from.name, to.name), StubLeg { miles, minutes, points });
        self
    }

    pub fn requests(&self) -> Vec<Vec<Coordinate>> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn hub_at(point: Coordinate) -> Option<Hub> {
        HUBS.iter().copied().find(|hub| hub.coordinate() == point)
    }
}

impl Router for StubRouter {
    fn route(&self, points: &[Coordinate]) -> Result<RouteSegment, ProviderError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(points.to_vec());
        }

        let (from, to) = match points {
            [from, to] => (*from, *to),
            _ => return Err(ProviderError::InsufficientPoints { got: points.len() }),
        };
        let leg = Self::hub_at(from)
            .zip(Self::hub_at(to))
            .and_then(|(a, b)| self.legs.get(&(a.name, b.name)).copied())
            .ok_or_else(|| ProviderError::MalformedResponse("unknown leg".to_string()))?;

        let coordinates = interpolate(from, to, leg.points);
        Ok(RouteSegment {
            distance_meters: leg.miles * 1609.34,
            duration_seconds: f64::from(leg.minutes * 60),
            encoded_polyline: polyline::encode(&coordinates)?,
            coordinates,
            instructions: vec![Instruction {
                instruction: format!("Continue for {:.0} miles", leg.miles),
                distance: leg.miles * 1609.34,
                duration: f64::from(leg.minutes * 60),
                name: None,
            }],
        })
    }
}

/// `count` evenly spaced points from `from` to `to`, both ends included.
pub fn interpolate(from: Coordinate, to: Coordinate, count: usize) -> Vec<Coordinate> {
    let count = count.max(2);
    let last = (count - 1) as f64;
    (0..count)
        .map(|i| {
            let t = i as f64 / last;
            Coordinate::new(
                from.lat + (to.lat - from.lat) * t,
                from.lng + (to.lng - from.lng) * t,
            )
        })
        .collect()
}
