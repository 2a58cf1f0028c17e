//! Test fixtures for hos-trip-planner.
//!
//! Provides:
//! - Real US freight hubs (coordinates from OpenStreetMap)
//! - Stub geocoder/router that answer from those hubs without network access

pub mod freight_hubs;

pub use freight_hubs::*;
