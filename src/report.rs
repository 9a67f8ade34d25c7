//! # Surf Report
//!
//! Runs every engine calculation for one [`Conditions`] snapshot and one spot,
//! producing the full set of numbers a forecast page needs. Input is validated
//! first; after that the calculations cannot fail.

use crate::conditions::Conditions;
use crate::config::SpotConfig;
use crate::energy::interpret_energy_level;
use crate::interaction::{analyze_swell_interaction, calculate_swell_dominance};
use crate::scoring::{
    calculate_spot_relative_wind_score, calculate_tide_score, calculate_wave_score,
    calculate_wind_score, combine_scores, DEFAULT_TIDE_HEIGHT,
};
use crate::swell::classify_swell_quality;
use crate::units::convert_wave_height;
use crate::validation::MeasurementError;
use crate::{SurfScore, SwellClassification, SwellDominance, SwellInteraction, WaveMetrics};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything derived from one conditions snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfReport {
    pub spot: String,
    pub metrics: WaveMetrics,
    pub swell: SwellClassification,
    pub energy_label: String,
    pub score: SurfScore,
    pub interaction: SwellInteraction,
    pub dominance: SwellDominance,
    pub generated_at: DateTime<Utc>,
}

impl SurfReport {
    /// Build a report stamped with the current time.
    pub fn build(
        conditions: &Conditions,
        spot: &SpotConfig,
    ) -> Result<SurfReport, MeasurementError> {
        Self::build_at(conditions, spot, Utc::now())
    }

    /// Build a report with an explicit timestamp.
    pub fn build_at(
        conditions: &Conditions,
        spot: &SpotConfig,
        generated_at: DateTime<Utc>,
    ) -> Result<SurfReport, MeasurementError> {
        conditions.validate()?;

        let metrics =
            convert_wave_height(conditions.wave_height).with_energy(conditions.wave_period);
        let swell = classify_swell_quality(conditions.wave_period);
        let energy_label = interpret_energy_level(metrics.wave_energy).to_string();

        let wave = calculate_wave_score(conditions.wave_height, conditions.wave_period);
        let wind = if spot.shore_relative_wind {
            calculate_spot_relative_wind_score(
                conditions.wind_speed,
                &conditions.wind_direction,
                spot.shore_direction.as_str(),
            )
        } else {
            calculate_wind_score(
                conditions.wind_speed,
                &conditions.wind_direction,
                Some(spot.shore_direction.as_str()),
            )
        };
        let tide = calculate_tide_score(
            conditions.tide_height.unwrap_or(DEFAULT_TIDE_HEIGHT),
            Some(spot.optimal_tide.as_str()),
        );
        let score = combine_scores(wave, wind, tide);

        let primary = conditions.primary_swell();
        let secondary = conditions.secondary_swell();
        let interaction = analyze_swell_interaction(&primary, secondary.as_ref());
        let dominance = calculate_swell_dominance(
            primary.height,
            primary.period,
            secondary.as_ref().map(|swell| (swell.height, swell.period)),
        );

        debug!(
            spot = %spot.name,
            overall = score.overall_score,
            interaction = %interaction,
            "built surf report"
        );

        Ok(SurfReport {
            spot: spot.name.clone(),
            metrics,
            swell,
            energy_label,
            score,
            interaction,
            dominance,
            generated_at,
        })
    }
}
