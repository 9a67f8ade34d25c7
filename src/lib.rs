//! # Surf Score Core Library
//!
//! This library turns raw oceanographic measurements into the numbers a surf
//! forecast page shows: heights in feet, swell classifications, component
//! scores and a single overall rating.
//!
//! ## Design Philosophy
//!
//! ### Pure Functions
//! - **Stateless**: every engine function depends only on its arguments, so
//!   identical inputs always produce identical output and results can be cached
//!   freely by callers
//! - **Total**: nothing panics and nothing returns an error; unknown directions
//!   read as north and a missing second swell reads as a single swell
//! - **Validation at the edge**: [`validation`] rejects negative or non-finite
//!   measurements for callers that prefer an error over a nonsense score
//!
//! ### Layering
//! 1. [`units`] and [`energy`]: unit conversion and the `height² × period` energy proxy
//! 2. [`swell`]: period-based swell classification
//! 3. [`scoring`]: wave, wind and tide component scores and the weighted composite
//! 4. [`interaction`]: two-swell interaction and energy dominance
//! 5. [`report`]: everything above bundled for one [`conditions::Conditions`] snapshot
//!
//! ## Core Types
//! - [`WaveMetrics`]: display heights derived from a significant height
//! - [`SurfScore`]: overall rating plus its components

use serde::{Deserialize, Serialize};

pub mod conditions;
pub mod config;
pub mod direction;
pub mod energy;
pub mod interaction;
pub mod renderer;
pub mod report;
pub mod scoring;
pub mod swell;
pub mod units;
pub mod validation;

#[cfg(test)]
mod tests;

pub use direction::CompassPoint;
pub use interaction::{SwellDominance, SwellInteraction, SwellTrain};
pub use swell::{SwellClassification, SwellQuality, SwellType};

/// Display heights derived from one significant wave height.
///
/// All heights except `height_meters` are rounded to one decimal.
///
/// # Example
/// ```
/// use surf_metrics_lib::units::convert_wave_height;
///
/// let metrics = convert_wave_height(1.5).with_energy(12.0);
/// assert_eq!(metrics.height_feet, 4.9);
/// assert_eq!(metrics.wave_energy, 27.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveMetrics {
    /// Significant wave height as reported, in meters
    pub height_meters: f64,
    /// Significant wave height in feet
    pub height_feet: f64,
    /// Estimated open-water swell height, in meters
    pub swell_height: f64,
    /// Estimated height at the break, in meters
    pub breaking_height: f64,
    /// `height² × period` energy proxy, `0.0` until a period is supplied
    pub wave_energy: f64,
    /// Confidence percentage, currently a fixed placeholder
    pub confidence: u8,
}

impl WaveMetrics {
    /// Fill in `wave_energy` for the given period in seconds.
    pub fn with_energy(mut self, period: f64) -> Self {
        self.wave_energy = energy::calculate_wave_energy(self.height_meters, period);
        self
    }
}

/// Overall surf rating and the component scores it was built from.
///
/// Every field lies in `[1.0, 10.0]` for finite, non-negative inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfScore {
    /// Weighted blend of the four components
    pub overall_score: f64,
    pub wave_quality: f64,
    pub wind_quality: f64,
    pub tide_optimal: f64,
    /// Fixed placeholder, not yet derived from forecast variance
    pub consistency_score: f64,
}
