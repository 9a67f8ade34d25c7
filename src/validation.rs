//! # Boundary Validation
//!
//! The scoring engine is total: it never panics and never rejects input, so a
//! garbage measurement yields a garbage (but displayable) score. Callers that
//! want stricter behaviour validate here first and get a typed error back.
//!
//! Heights, periods and wind speeds must be finite and non-negative. Tide
//! heights only need to be finite since they can sit below chart datum.

use crate::scoring::calculate_surf_score;
use crate::SurfScore;
use thiserror::Error;

/// A measurement that the scoring engine would accept but should not.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    /// NaN or infinite value
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// Negative value for a quantity that cannot be negative
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
}

/// Check that a measurement is finite and non-negative.
///
/// ```
/// use surf_metrics_lib::validation::{validate_measurement, MeasurementError};
///
/// assert_eq!(validate_measurement("wave_height", 1.5), Ok(1.5));
/// assert!(matches!(
///     validate_measurement("wave_height", -1.0),
///     Err(MeasurementError::Negative { .. })
/// ));
/// ```
pub fn validate_measurement(field: &'static str, value: f64) -> Result<f64, MeasurementError> {
    let value = validate_finite(field, value)?;
    if value < 0.0 {
        return Err(MeasurementError::Negative { field, value });
    }
    Ok(value)
}

/// Check that a measurement is finite. Negative values pass.
pub fn validate_finite(field: &'static str, value: f64) -> Result<f64, MeasurementError> {
    if !value.is_finite() {
        return Err(MeasurementError::NotFinite { field });
    }
    Ok(value)
}

/// [`calculate_surf_score`] with its numeric inputs validated first.
pub fn checked_surf_score(
    wave_height: f64,
    wave_period: f64,
    wind_speed: f64,
    wind_direction: &str,
    tide_height: Option<f64>,
) -> Result<SurfScore, MeasurementError> {
    let wave_height = validate_measurement("wave_height", wave_height)?;
    let wave_period = validate_measurement("wave_period", wave_period)?;
    let wind_speed = validate_measurement("wind_speed", wind_speed)?;
    let tide_height = tide_height
        .map(|tide| validate_finite("tide_height", tide))
        .transpose()?;

    Ok(calculate_surf_score(
        wave_height,
        wave_period,
        wind_speed,
        wind_direction,
        tide_height,
    ))
}
