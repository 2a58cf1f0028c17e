//! openrouteservice HTTP adapter for geocoding and truck directions.

use reqwest::blocking::Response;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::model::{Coordinate, Instruction, RouteSegment};
use crate::polyline;
use crate::traits::{Geocoder, Router};

/// Live client. One instance serves both the geocoding and directions
/// endpoints, each call attempted once with its endpoint's timeout.
#[derive(Debug, Clone)]
pub struct OrsClient {
    api_key: String,
    config: ProviderConfig,
    client: reqwest::blocking::Client,
}

impl OrsClient {
    pub fn new(api_key: impl Into<String>, config: ProviderConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            api_key: api_key.into(),
            config,
            client,
        })
    }
}

impl Geocoder for OrsClient {
    fn resolve(&self, place: &str) -> Result<Coordinate, ProviderError> {
        debug!(place, url = %self.config.geocode_url, "geocoding");

        let response = self
            .client
            .get(&self.config.geocode_url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("text", place),
                ("size", "1"),
            ])
            .timeout(self.config.geocode_timeout)
            .send()?;

        let body: GeocodeResponse = check_status(response)?.json()?;
        let coordinate = body.first_coordinate().ok_or_else(|| ProviderError::NoResults {
            query: place.to_string(),
        })?;
        if !coordinate.is_valid() {
            return Err(ProviderError::MalformedResponse(format!(
                "geocoded point ({}, {}) is out of range",
                coordinate.lat, coordinate.lng
            )));
        }
        Ok(coordinate)
    }
}

impl Router for OrsClient {
    fn route(&self, points: &[Coordinate]) -> Result<RouteSegment, ProviderError> {
        if points.len() < 2 {
            return Err(ProviderError::InsufficientPoints { got: points.len() });
        }
        debug!(points = points.len(), url = %self.config.directions_url, "requesting directions");

        let request = DirectionsRequest {
            coordinates: points.iter().map(|point| point.to_lng_lat()).collect(),
            instructions: true,
            preference: "recommended",
        };

        let response = self
            .client
            .post(&self.config.directions_url)
            .header(reqwest::header::AUTHORIZATION, self.api_key.as_str())
            .json(&request)
            .timeout(self.config.directions_timeout)
            .send()?;

        let body: DirectionsResponse = check_status(response)?.json()?;
        body.into_segment()
    }
}

fn check_status(response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(ProviderError::Status { status, body })
}

#[derive(Debug, Serialize)]
struct DirectionsRequest {
    /// (longitude, latitude) pairs.
    coordinates: Vec<[f64; 2]>,
    instructions: bool,
    preference: &'static str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    features: Vec<PointFeature>,
}

#[derive(Debug, Deserialize)]
struct PointFeature {
    geometry: PointGeometry,
}

#[derive(Debug, Deserialize)]
struct PointGeometry {
    coordinates: [f64; 2],
}

impl GeocodeResponse {
    fn first_coordinate(&self) -> Option<Coordinate> {
        self.features
            .first()
            .map(|feature| Coordinate::from_lng_lat(feature.geometry.coordinates))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DirectionsResponse {
    #[serde(default)]
    features: Vec<RouteFeature>,
}

#[derive(Debug, Deserialize)]
struct RouteFeature {
    properties: RouteProperties,
    geometry: LineGeometry,
}

#[derive(Debug, Deserialize)]
struct RouteProperties {
    summary: RouteSummary,
    #[serde(default)]
    segments: Vec<RouteLegSegment>,
}

/// The provider omits zero-valued summary fields.
#[derive(Debug, Deserialize)]
struct RouteSummary {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct RouteLegSegment {
    #[serde(default)]
    steps: Vec<RouteStep>,
}

#[derive(Debug, Deserialize)]
struct RouteStep {
    instruction: String,
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LineGeometry {
    coordinates: Vec<[f64; 2]>,
}

impl DirectionsResponse {
    fn into_segment(self) -> Result<RouteSegment, ProviderError> {
        let feature = self
            .features
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::MalformedResponse("no route features".to_string()))?;

        let coordinates: Vec<Coordinate> = feature
            .geometry
            .coordinates
            .into_iter()
            .map(Coordinate::from_lng_lat)
            .collect();
        if coordinates.len() < 2 {
            return Err(ProviderError::MalformedResponse(format!(
                "route geometry has {} points",
                coordinates.len()
            )));
        }

        let instructions = feature
            .properties
            .segments
            .into_iter()
            .flat_map(|segment| segment.steps)
            .map(|step| Instruction {
                instruction: step.instruction,
                distance: step.distance,
                duration: step.duration,
                name: step.name.filter(|name| !name.is_empty() && name != "-"),
            })
            .collect();

        Ok(RouteSegment {
            distance_meters: feature.properties.summary.distance.max(0.0),
            duration_seconds: feature.properties.summary.duration.max(0.0),
            encoded_polyline: polyline::encode(&coordinates)?,
            coordinates,
            instructions,
        })
    }
}
