//! # Forecast Conditions Input
//!
//! One snapshot of the raw measurements for a spot, as handed over by whatever
//! fetches the forecast. The record is plain JSON:
//!
//! ```json
//! {
//!   "wave_height": 1.8,
//!   "wave_period": 12.0,
//!   "wind_speed": 8.0,
//!   "wind_direction": "NE",
//!   "tide_height": 1.9,
//!   "swell_direction": "SW",
//!   "secondary_height": 0.9,
//!   "secondary_period": 8.0,
//!   "secondary_direction": "S"
//! }
//! ```
//!
//! Units: heights in meters, periods in seconds, wind in km/h. Everything after
//! `wind_direction` is optional. The secondary swell only counts when all three
//! of its fields are present.

use crate::interaction::SwellTrain;
use crate::validation::{validate_finite, validate_measurement, MeasurementError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{fs, io};
use thiserror::Error;

/// Errors while reading a conditions file.
#[derive(Error, Debug)]
pub enum ConditionsError {
    /// File could not be read
    #[error("conditions IO: {0}")]
    Io(#[from] io::Error),

    /// File contents are not a valid conditions record
    #[error("conditions parse: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Raw measurements for one forecast time step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    /// Primary significant wave height in meters
    pub wave_height: f64,
    /// Primary swell period in seconds
    pub wave_period: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Direction the wind blows from, as a compass abbreviation
    pub wind_direction: String,
    /// Tide height in meters; scoring assumes 2.0 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tide_height: Option<f64>,
    /// Direction the primary swell arrives from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swell_direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_period: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_direction: Option<String>,
}

impl Conditions {
    /// Read a conditions record from a JSON file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Conditions, ConditionsError> {
        let data = fs::read(path)?;
        let conditions = serde_json::from_slice(&data)?;
        Ok(conditions)
    }

    /// Primary swell train. A missing direction reads as north downstream.
    pub fn primary_swell(&self) -> SwellTrain {
        SwellTrain::new(
            self.wave_height,
            self.wave_period,
            self.swell_direction.clone().unwrap_or_default(),
        )
    }

    /// Secondary swell train, if every secondary field is present.
    pub fn secondary_swell(&self) -> Option<SwellTrain> {
        SwellTrain::from_parts(
            self.secondary_height,
            self.secondary_period,
            self.secondary_direction.as_deref(),
        )
    }

    /// Reject negative or non-finite measurements.
    ///
    /// Secondary swell fields are checked only when present.
    pub fn validate(&self) -> Result<(), MeasurementError> {
        validate_measurement("wave_height", self.wave_height)?;
        validate_measurement("wave_period", self.wave_period)?;
        validate_measurement("wind_speed", self.wind_speed)?;
        if let Some(tide) = self.tide_height {
            validate_finite("tide_height", tide)?;
        }
        if let Some(height) = self.secondary_height {
            validate_measurement("secondary_height", height)?;
        }
        if let Some(period) = self.secondary_period {
            validate_measurement("secondary_period", period)?;
        }
        Ok(())
    }
}
