//! Error types for providers, polylines and planning.

use thiserror::Error;

/// Failure of a single geocoding or directions call.
///
/// The planner recovers every variant with synthetic data, so these only
/// reach logs and direct callers of a provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("no results for `{query}`")]
    NoResults { query: String },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("a route needs at least 2 points, got {got}")]
    InsufficientPoints { got: usize },

    #[error("route geometry could not be encoded: {0}")]
    Geometry(#[from] PolylineError),
}

/// Encoded-polyline failure, in either direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolylineError {
    #[error("invalid character {ch:?} at byte {index}")]
    InvalidCharacter { index: usize, ch: char },

    #[error("value starting at byte {index} is too long for a coordinate")]
    Overflow { index: usize },

    #[error("cannot decode polyline: {0}")]
    Decode(String),

    #[error("cannot encode polyline: {0}")]
    Encode(String),
}

/// Unrecoverable trip-planning failure surfaced to the caller.
#[derive(Debug, Error)]
pub enum PlanningError {
    #[error("invalid `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("invalid planner setting `{field}`: {reason}")]
    InvalidSettings { field: &'static str, reason: String },

    #[error("failed to set up providers: {0}")]
    Setup(#[from] ProviderError),

    #[error("trip geometry could not be encoded: {0}")]
    Geometry(#[from] PolylineError),
}

impl PlanningError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        PlanningError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn invalid_setting(field: &'static str, reason: impl Into<String>) -> Self {
        PlanningError::InvalidSettings {
            field,
            reason: reason.into(),
        }
    }
}
