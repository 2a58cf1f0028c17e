//! Trip orchestration: geocode, route both legs, place fuel stops and build
//! the duty log.

use tracing::{debug, info, warn};

use crate::config::{PlannerSettings, ProviderConfig};
use crate::error::{PlanningError, ProviderError};
use crate::fuel::{METERS_PER_MILE, plan_fuel_stops};
use crate::hos::build_logs;
use crate::model::{Coordinate, RouteSegment, Stop, StopKind, TripPlan, TripRequest};
use crate::ors::OrsClient;
use crate::polyline;
use crate::synthetic::{SyntheticGeocoder, SyntheticRouter};
use crate::traits::{Geocoder, Router};

pub const FUEL_STOP_NAME: &str = "Fuel stop";

/// Plans trips against a pair of providers.
///
/// Provider failures never fail a plan: a location that cannot be resolved
/// gets a synthetic coordinate and a leg that cannot be routed gets a
/// synthetic straight-line segment.
pub struct TripPlanner {
    geocoder: Box<dyn Geocoder>,
    router: Box<dyn Router>,
    fallback_geocoder: SyntheticGeocoder,
    fallback_router: SyntheticRouter,
    settings: PlannerSettings,
}

impl TripPlanner {
    /// Live providers when an API key is configured, synthetic ones otherwise.
    pub fn from_config(
        config: &ProviderConfig,
        settings: PlannerSettings,
    ) -> Result<Self, PlanningError> {
        match &config.api_key {
            Some(api_key) => {
                let client =
                    OrsClient::new(api_key.clone(), config.clone()).map_err(ProviderError::from)?;
                debug!(geocode_url = %config.geocode_url, directions_url = %config.directions_url, "using live providers");
                Ok(Self::with_providers(client.clone(), client, settings))
            }
            None => {
                info!("no API key configured, planning with synthetic providers");
                Ok(Self::offline(settings))
            }
        }
    }

    pub fn offline(settings: PlannerSettings) -> Self {
        Self::with_providers(SyntheticGeocoder, SyntheticRouter::default(), settings)
    }

    pub fn with_providers<G, R>(geocoder: G, router: R, settings: PlannerSettings) -> Self
    where
        G: Geocoder + 'static,
        R: Router + 'static,
    {
        Self {
            geocoder: Box::new(geocoder),
            router: Box::new(router),
            fallback_geocoder: SyntheticGeocoder,
            fallback_router: SyntheticRouter::default(),
            settings,
        }
    }

    pub fn with_fallback_router(mut self, router: SyntheticRouter) -> Self {
        self.fallback_router = router;
        self
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    pub fn plan_trip(
        &self,
        current_location: &str,
        pickup_location: &str,
        dropoff_location: &str,
        current_cycle_used_hours: f64,
    ) -> Result<TripPlan, PlanningError> {
        self.plan(&TripRequest::new(
            current_location,
            pickup_location,
            dropoff_location,
            current_cycle_used_hours,
        ))
    }

    pub fn plan(&self, request: &TripRequest) -> Result<TripPlan, PlanningError> {
        request.validate()?;
        self.settings.validate()?;
        debug!(
            cycle_used_hours = request.current_cycle_used_hours,
            "planning trip"
        );

        let (current, (pickup, dropoff)) = rayon::join(
            || self.geocode(&request.current_location),
            || {
                rayon::join(
                    || self.geocode(&request.pickup_location),
                    || self.geocode(&request.dropoff_location),
                )
            },
        );

        let (to_pickup, to_dropoff) = rayon::join(
            || self.route_leg("current->pickup", &[current, pickup]),
            || self.route_leg("pickup->dropoff", &[pickup, dropoff]),
        );

        let plan = self.assemble(request, pickup, dropoff, to_pickup?, to_dropoff?)?;
        info!(
            distance_miles = plan.distance_miles,
            duration_minutes = plan.duration_minutes,
            stops = plan.stops.len(),
            days = plan.logs.len(),
            "trip planned"
        );
        Ok(plan)
    }

    fn geocode(&self, place: &str) -> Coordinate {
        match self.geocoder.resolve(place) {
            Ok(coordinate) if coordinate.is_valid() => coordinate,
            Ok(coordinate) => {
                warn!(
                    place,
                    lat = coordinate.lat,
                    lng = coordinate.lng,
                    "geocoded point out of range, using synthetic coordinate"
                );
                self.fallback_geocoder.coordinate_for(place)
            }
            Err(err) => {
                warn!(place, error = %err, "geocoding failed, using synthetic coordinate");
                self.fallback_geocoder.coordinate_for(place)
            }
        }
    }

    fn route_leg(
        &self,
        leg: &str,
        points: &[Coordinate],
    ) -> Result<RouteSegment, PlanningError> {
        match self.router.route(points) {
            Ok(segment) => Ok(segment),
            Err(err) => {
                warn!(leg, error = %err, "routing failed, using synthetic leg");
                Ok(self.fallback_router.segment_for(points)?)
            }
        }
    }

    fn assemble(
        &self,
        request: &TripRequest,
        pickup: Coordinate,
        dropoff: Coordinate,
        to_pickup: RouteSegment,
        to_dropoff: RouteSegment,
    ) -> Result<TripPlan, PlanningError> {
        let settings = &self.settings;

        let total_meters = to_pickup.distance_meters + to_dropoff.distance_meters;
        let service_seconds = f64::from(2 * settings.pickup_drop_duration_min * 60);
        let total_seconds = to_pickup.duration_seconds + to_dropoff.duration_seconds + service_seconds;
        let duration_minutes = (total_seconds / 60.0).ceil().max(0.0) as u32;

        let mut coordinates = to_pickup.coordinates;
        coordinates.extend(to_dropoff.coordinates);

        let fuel_indices = plan_fuel_stops(&coordinates, total_meters, settings.fuel_interval_miles);

        let mut stops = Vec::with_capacity(fuel_indices.len() + 2);
        stops.push(Stop {
            kind: StopKind::Pickup,
            name: request.pickup_location.clone(),
            location: pickup,
            duration_minutes: settings.pickup_drop_duration_min,
        });
        stops.extend(fuel_indices.iter().filter_map(|&index| {
            coordinates.get(index).map(|&location| Stop {
                kind: StopKind::Fuel,
                name: FUEL_STOP_NAME.to_string(),
                location,
                duration_minutes: settings.fuel_stop_min,
            })
        }));
        stops.push(Stop {
            kind: StopKind::Dropoff,
            name: request.dropoff_location.clone(),
            location: dropoff,
            duration_minutes: settings.pickup_drop_duration_min,
        });

        let mut instructions = to_pickup.instructions;
        instructions.extend(to_dropoff.instructions);

        Ok(TripPlan {
            distance_miles: round_tenth(total_meters.max(0.0) / METERS_PER_MILE),
            duration_minutes,
            polyline: polyline::encode(&coordinates)?,
            segment_polylines: vec![to_pickup.encoded_polyline, to_dropoff.encoded_polyline],
            stops,
            logs: build_logs(duration_minutes, settings)?,
            instructions,
        })
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
