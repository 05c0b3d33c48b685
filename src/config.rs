//! Engine configuration.
//!
//! Every field has a default, so a JSON document only needs to name what it
//! overrides. Call [`EngineConfig::validate`] (or construct a
//! [`crate::RoutingEngine`], which does it for you) before use.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::coverage::CoverageMap;
use crate::error::{Result, RoutingError};

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Weights for the composite location score. Must sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingWeights {
    pub distance: f64,
    pub capacity: f64,
    pub availability: f64,
    pub driver_availability: f64,
}

impl Default for RoutingWeights {
    fn default() -> Self {
        Self {
            distance: 0.40,
            capacity: 0.25,
            availability: 0.20,
            driver_availability: 0.15,
        }
    }
}

impl RoutingWeights {
    pub fn sum(&self) -> f64 {
        self.distance + self.capacity + self.availability + self.driver_availability
    }
}

/// Delivery batching parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchingOptions {
    /// Maximum orders per batch.
    pub max_batch_size: usize,
    /// Fixed minutes per trip.
    pub base_minutes: u32,
    /// Handling minutes per stop.
    pub minutes_per_stop: u32,
    /// Travel minutes between stops.
    pub travel_minutes_per_stop: u32,
    /// Flat per-order distance average.
    pub miles_per_order: f64,
}

impl Default for BatchingOptions {
    fn default() -> Self {
        Self {
            max_batch_size: 4,
            base_minutes: 10,
            minutes_per_stop: 5,
            travel_minutes_per_stop: 3,
            miles_per_order: 1.5,
        }
    }
}

/// Fixed coordinates for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub location_id: String,
    pub lat: f64,
    pub lng: f64,
}

impl Site {
    pub fn new(location_id: &str, lat: f64, lng: f64) -> Self {
        Self {
            location_id: location_id.to_string(),
            lat,
            lng,
        }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: RoutingWeights,
    /// Drivers strictly closer than this count as near a location.
    pub driver_radius_miles: f64,
    /// Street-number difference per distance unit for the address heuristic.
    pub street_block_size: f64,
    pub batching: BatchingOptions,
    /// Location used by `recommend_location` when nothing covers an address.
    pub fallback_location: String,
    pub sites: Vec<Site>,
    pub coverage: CoverageMap,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: RoutingWeights::default(),
            driver_radius_miles: 3.0,
            street_block_size: 100.0,
            batching: BatchingOptions::default(),
            fallback_location: "times-square".to_string(),
            sites: vec![
                Site::new("brooklyn", 40.6962, -73.9901),
                Site::new("ues", 40.7614, -73.9776),
                Site::new("times-square", 40.7589, -73.9851),
            ],
            coverage: CoverageMap::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON document, filling unspecified fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        let all = [w.distance, w.capacity, w.availability, w.driver_availability];
        if all.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(RoutingError::invalid_config(
                "routing weights must be finite and non-negative",
            ));
        }
        if (w.sum() - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(RoutingError::invalid_config(format!(
                "routing weights must sum to 1.0, got {}",
                w.sum()
            )));
        }
        if !(self.driver_radius_miles.is_finite() && self.driver_radius_miles > 0.0) {
            return Err(RoutingError::invalid_config("driver_radius_miles must be positive"));
        }
        if !(self.street_block_size.is_finite() && self.street_block_size > 0.0) {
            return Err(RoutingError::invalid_config("street_block_size must be positive"));
        }
        if self.batching.max_batch_size == 0 {
            return Err(RoutingError::invalid_config("max_batch_size must be at least 1"));
        }
        let miles = self.batching.miles_per_order;
        if !(miles.is_finite() && miles >= 0.0) {
            return Err(RoutingError::invalid_config(
                "miles_per_order must be finite and non-negative",
            ));
        }
        if self.fallback_location.is_empty() {
            return Err(RoutingError::invalid_config("fallback_location must not be empty"));
        }
        if self.coverage.neighborhoods.is_empty() {
            return Err(RoutingError::invalid_config("coverage table is empty"));
        }
        Ok(())
    }

    /// Fixed coordinates for a location id.
    pub fn site(&self, location_id: &str) -> Option<(f64, f64)> {
        self.sites
            .iter()
            .find(|site| site.location_id == location_id)
            .map(Site::coords)
    }
}
