//! Provider traits for the planner.
//!
//! Each external dependency sits behind a trait with a live HTTP
//! implementation (`ors`) and a deterministic offline one (`synthetic`).
//! Which one backs a planner is decided from configuration.

use crate::error::ProviderError;
use crate::model::{Coordinate, RouteSegment};

/// Resolves free-text place names to coordinates.
pub trait Geocoder: Send + Sync {
    fn resolve(&self, place: &str) -> Result<Coordinate, ProviderError>;
}

/// Routes an ordered sequence of at least two points.
pub trait Router: Send + Sync {
    fn route(&self, points: &[Coordinate]) -> Result<RouteSegment, ProviderError>;
}
