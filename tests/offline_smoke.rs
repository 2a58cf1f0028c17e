//! Offline end-to-end checks.
//!
//! No API key is configured, so every location and leg comes from the
//! synthetic providers and no request leaves the machine.

use hos_trip_planner::hos::driving_minutes;
use hos_trip_planner::polyline::Polyline;
use hos_trip_planner::synthetic::SyntheticGeocoder;
use hos_trip_planner::{PlannerSettings, ProviderConfig, StopKind, TripPlanner};

fn offline_planner() -> TripPlanner {
    let config = ProviderConfig::from_lookup(|_| None);
    assert!(config.is_offline());
    TripPlanner::from_config(&config, PlannerSettings::default()).expect("offline planner")
}

#[test]
fn offline_plan_uses_two_synthetic_legs() {
    let plan = offline_planner().plan_trip("A", "B", "C", 0.0).unwrap();

    assert_eq!(plan.distance_miles, 1056.3);
    // 2 x 55636 s driving + 7200 s service, rounded up to whole minutes.
    assert_eq!(plan.duration_minutes, 1975);
    assert!(plan.instructions.is_empty());

    let kinds: Vec<StopKind> = plan.stops.iter().map(|stop| stop.kind).collect();
    assert_eq!(kinds, vec![StopKind::Pickup, StopKind::Fuel, StopKind::Dropoff]);

    assert_eq!(plan.logs.len(), 3);
    assert_eq!(driving_minutes(&plan.logs), plan.duration_minutes);
}

#[test]
fn offline_polyline_starts_at_current_and_ends_at_dropoff() {
    let plan = offline_planner().plan_trip("A", "B", "C", 0.0).unwrap();
    let current = SyntheticGeocoder.coordinate_for("A");
    let dropoff = SyntheticGeocoder.coordinate_for("C");

    let points = Polyline::decode(&plan.polyline).unwrap().into_points();
    let first = points.first().unwrap();
    let last = points.last().unwrap();

    assert!((first.lat - current.lat).abs() < 1e-5);
    assert!((first.lng - current.lng).abs() < 1e-5);
    assert!((last.lat - dropoff.lat).abs() < 1e-5);
    assert!((last.lng - dropoff.lng).abs() < 1e-5);
}

#[test]
fn offline_plan_is_deterministic() {
    let planner = offline_planner();
    let first = planner.plan_trip("Dallas, TX", "Tulsa, OK", "Denver, CO", 8.5).unwrap();
    let second = planner.plan_trip("Dallas, TX", "Tulsa, OK", "Denver, CO", 8.5).unwrap();
    assert_eq!(first, second);
}
