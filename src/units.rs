//! # Wave Height Unit Conversion
//!
//! Forecast providers report a single significant wave height in meters. The UI
//! wants that number in feet, plus two derived estimates:
//!
//! - **Swell height**: open-water swell is slightly larger than the reported
//!   significant height (`× 1.15`)
//! - **Breaking height**: waves lose a little height as they break over the
//!   reef or sandbar (`× 0.9`)
//!
//! Every derived value is rounded to one decimal place for display.

use crate::WaveMetrics;

/// Meters to feet.
pub const FEET_PER_METER: f64 = 3.28084;

/// Open-water swell estimate relative to significant height.
pub const SWELL_HEIGHT_FACTOR: f64 = 1.15;

/// Breaking wave estimate relative to significant height.
pub const BREAKING_HEIGHT_FACTOR: f64 = 0.9;

/// Placeholder confidence until forecast uncertainty is modelled.
pub const DEFAULT_CONFIDENCE: u8 = 85;

/// Round to one decimal place.
///
/// ```
/// use surf_metrics_lib::units::round1;
///
/// assert_eq!(round1(6.5617), 6.6);
/// assert_eq!(round1(1.84), 1.8);
/// ```
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Convert a significant wave height in meters into display metrics.
///
/// No validation is performed: NaN or negative input propagates through the
/// arithmetic. Use [`crate::validation`] at the boundary if that matters.
///
/// `wave_energy` is left at `0.0` since energy needs a period; see
/// [`WaveMetrics::with_energy`].
///
/// # Example
/// ```
/// use surf_metrics_lib::units::convert_wave_height;
///
/// let metrics = convert_wave_height(2.0);
/// assert_eq!(metrics.height_feet, 6.6);
/// assert_eq!(metrics.swell_height, 2.3);
/// assert_eq!(metrics.breaking_height, 1.8);
/// assert_eq!(metrics.confidence, 85);
/// ```
pub fn convert_wave_height(height_meters: f64) -> WaveMetrics {
    WaveMetrics {
        height_meters,
        height_feet: round1(height_meters * FEET_PER_METER),
        swell_height: round1(height_meters * SWELL_HEIGHT_FACTOR),
        breaking_height: round1(height_meters * BREAKING_HEIGHT_FACTOR),
        wave_energy: 0.0,
        confidence: DEFAULT_CONFIDENCE,
    }
}
