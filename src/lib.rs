//! hos-trip-planner core
//!
//! Turns three place names into a truck trip plan: routed legs, fuel stops
//! and a simplified hours-of-service duty log. External geocoding and
//! routing sit behind traits with deterministic offline fallbacks.

pub mod config;
pub mod error;
pub mod fuel;
pub mod hos;
pub mod model;
pub mod ors;
pub mod planner;
pub mod polyline;
pub mod synthetic;
pub mod traits;

pub use config::{PlannerSettings, ProviderConfig};
pub use error::{PlanningError, PolylineError, ProviderError};
pub use model::{
    ClockTime, Coordinate, DayLog, DutyBlock, DutyStatus, Instruction, RouteSegment, Stop,
    StopKind, TripPlan, TripRequest,
};
pub use planner::TripPlanner;
