//! Provider endpoints and planner constants.

use std::time::Duration;

use crate::error::PlanningError;
use crate::model::ClockTime;

pub const DEFAULT_GEOCODE_URL: &str = "https://api.openrouteservice.org/geocode/search";
pub const DEFAULT_DIRECTIONS_URL: &str =
    "https://api.openrouteservice.org/v2/directions/driving-hgv/geojson";
pub const DEFAULT_USER_AGENT: &str = "hos-trip-planner/0.1";

const DEFAULT_GEOCODE_TIMEOUT_SECS: u64 = 20;
const DEFAULT_DIRECTIONS_TIMEOUT_SECS: u64 = 30;

/// Credential and endpoints for the external geocoding/directions service.
///
/// Without an API key the planner runs in offline mode and every location
/// and leg comes from the synthetic providers.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub geocode_url: String,
    pub directions_url: String,
    pub geocode_timeout: Duration,
    pub directions_timeout: Duration,
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            directions_url: DEFAULT_DIRECTIONS_URL.to_string(),
            geocode_timeout: Duration::from_secs(DEFAULT_GEOCODE_TIMEOUT_SECS),
            directions_timeout: Duration::from_secs(DEFAULT_DIRECTIONS_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ProviderConfig {
    /// Reads `ORS_API_KEY`, `GEOCODE_URL` and `DIRECTIONS_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Self {
            api_key: read("ORS_API_KEY"),
            geocode_url: read("GEOCODE_URL").unwrap_or(defaults.geocode_url),
            directions_url: read("DIRECTIONS_URL").unwrap_or(defaults.directions_url),
            ..defaults
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn is_offline(&self) -> bool {
        self.api_key.is_none()
    }
}

/// Hours-of-service, fueling and service-time constants.
///
/// Only the daily drive cap is enforced by the duty-log builder. The on-duty
/// and cycle limits are carried for a future cycle-hour model.
#[derive(Debug, Clone)]
pub struct PlannerSettings {
    pub max_drive_hours_per_day: u32,
    pub on_duty_limit_hours: u32,
    pub cycle_limit_hours: u32,
    pub fuel_interval_miles: f64,
    pub pickup_drop_duration_min: u32,
    pub fuel_stop_min: u32,
    /// Start of the daily on-duty block.
    pub day_start: ClockTime,
    /// Length of the on-duty block before driving (inspection, loading).
    pub pre_trip_min: u32,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            max_drive_hours_per_day: 11,
            on_duty_limit_hours: 14,
            cycle_limit_hours: 70,
            fuel_interval_miles: 1000.0,
            pickup_drop_duration_min: 60,
            fuel_stop_min: 15,
            day_start: ClockTime::hm(7, 0),
            pre_trip_min: 60,
        }
    }
}

impl PlannerSettings {
    /// Saturates instead of wrapping; [`validate`](Self::validate) rejects
    /// caps that would.
    pub fn max_drive_minutes_per_day(&self) -> u32 {
        self.max_drive_hours_per_day.saturating_mul(60)
    }

    /// Checks that every day of a duty log can hold some driving.
    pub fn validate(&self) -> Result<(), PlanningError> {
        match self.max_drive_hours_per_day.checked_mul(60) {
            None => {
                return Err(PlanningError::invalid_setting(
                    "max_drive_hours_per_day",
                    format!("{} hours overflows a minute count", self.max_drive_hours_per_day),
                ));
            }
            Some(0) => {
                return Err(PlanningError::invalid_setting(
                    "max_drive_hours_per_day",
                    "must be at least 1 hour",
                ));
            }
            Some(_) => {}
        }

        let drive_start = self.day_start.minutes().checked_add(self.pre_trip_min);
        if !matches!(drive_start, Some(start) if start < ClockTime::END_OF_DAY.minutes()) {
            return Err(PlanningError::invalid_setting(
                "pre_trip_min",
                format!(
                    "{} minutes after {} leaves no time to drive before 24:00",
                    self.pre_trip_min, self.day_start
                ),
            ));
        }

        if !(self.fuel_interval_miles.is_finite() && self.fuel_interval_miles > 0.0) {
            return Err(PlanningError::invalid_setting(
                "fuel_interval_miles",
                format!("must be a positive number, got {}", self.fuel_interval_miles),
            ));
        }

        Ok(())
    }

    pub fn with_max_drive_hours_per_day(mut self, hours: u32) -> Self {
        self.max_drive_hours_per_day = hours;
        self
    }

    pub fn with_fuel_interval_miles(mut self, miles: f64) -> Self {
        self.fuel_interval_miles = miles;
        self
    }

    pub fn with_pickup_drop_duration_min(mut self, minutes: u32) -> Self {
        self.pickup_drop_duration_min = minutes;
        self
    }

    pub fn with_fuel_stop_min(mut self, minutes: u32) -> Self {
        self.fuel_stop_min = minutes;
        self
    }
}
