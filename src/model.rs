//! Trip-plan data types.
//!
//! Everything here is plain data: built once per planning request and
//! serialized as the response payload. Field names on the wire follow the
//! JSON contract the front end consumes.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::PlanningError;

/// A point on the map in (latitude, longitude) order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a coordinate from a provider pair in (longitude, latitude) order.
    pub fn from_lng_lat(pair: [f64; 2]) -> Self {
        Self {
            lat: pair[1],
            lng: pair[0],
        }
    }

    /// Provider wire order: (longitude, latitude).
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Finite and within [-90, 90] latitude, [-180, 180] longitude.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A single turn-by-turn step from the directions provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub instruction: String,
    /// Meters.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One routed leg of the trip.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub encoded_polyline: String,
    /// Route-order geometry.
    pub coordinates: Vec<Coordinate>,
    pub instructions: Vec<Instruction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopKind {
    Pickup,
    Fuel,
    Dropoff,
}

/// A stop on the itinerary. Rest periods only appear in the duty log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    #[serde(rename = "type")]
    pub kind: StopKind,
    pub name: String,
    #[serde(flatten)]
    pub location: Coordinate,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    OffDuty,
    Sleeper,
    Driving,
    OnDuty,
}

/// Minutes since midnight of the log's reference day, rendered as "HH:MM".
///
/// 1440 is the end-of-day sentinel and renders as "24:00".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime(u32);

impl ClockTime {
    pub const END_OF_DAY: ClockTime = ClockTime(24 * 60);

    /// Clamps to the end-of-day sentinel.
    pub fn from_minutes(minutes: u32) -> Self {
        Self(minutes.min(Self::END_OF_DAY.0))
    }

    pub fn hm(hours: u32, minutes: u32) -> Self {
        Self::from_minutes(hours * 60 + minutes)
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn add_minutes(self, minutes: u32) -> Self {
        Self::from_minutes(self.0.saturating_add(minutes))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DutyBlock {
    pub status: DutyStatus,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl DutyBlock {
    pub fn new(status: DutyStatus, start: ClockTime, end: ClockTime) -> Self {
        Self { status, start, end }
    }

    pub fn minutes(&self) -> u32 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }
}

/// Duty blocks for one calendar day of the trip.
pub type DayLog = Vec<DutyBlock>;

/// Inbound request fields, as handed over by the web layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    /// Accepted and validated; not yet consumed by the duty-log model.
    pub current_cycle_used_hours: f64,
}

impl TripRequest {
    pub fn new(
        current_location: impl Into<String>,
        pickup_location: impl Into<String>,
        dropoff_location: impl Into<String>,
        current_cycle_used_hours: f64,
    ) -> Self {
        Self {
            current_location: current_location.into(),
            pickup_location: pickup_location.into(),
            dropoff_location: dropoff_location.into(),
            current_cycle_used_hours,
        }
    }

    /// Rejects requests that slipped past the web layer's validation.
    pub fn validate(&self) -> Result<(), PlanningError> {
        for (field, value) in [
            ("current_location", &self.current_location),
            ("pickup_location", &self.pickup_location),
            ("dropoff_location", &self.dropoff_location),
        ] {
            if value.trim().is_empty() {
                return Err(PlanningError::invalid(field, "must not be blank"));
            }
        }

        let hours = self.current_cycle_used_hours;
        if !hours.is_finite() || hours < 0.0 {
            return Err(PlanningError::invalid(
                "current_cycle_used_hours",
                "must be a finite number >= 0",
            ));
        }

        Ok(())
    }
}

/// The assembled itinerary returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPlan {
    pub distance_miles: f64,
    pub duration_minutes: u32,
    /// Combined geometry of both legs.
    pub polyline: String,
    /// Per-leg encoded geometry, in leg order.
    #[serde(rename = "polylines")]
    pub segment_polylines: Vec<String>,
    pub stops: Vec<Stop>,
    pub logs: Vec<DayLog>,
    pub instructions: Vec<Instruction>,
}
