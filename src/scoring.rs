//! # Surf Quality Scoring
//!
//! Each condition gets its own 1.0–10.0 component score, and the composite
//! [`calculate_surf_score`] blends them with fixed weights:
//!
//! | component   | weight |
//! |-------------|--------|
//! | waves       | 40 %   |
//! | wind        | 30 %   |
//! | tide        | 20 %   |
//! | consistency | 10 %   |
//!
//! The weights sum to 1.0 and every component is bounded to `[1, 10]`, so the
//! overall score stays in `[1, 10]` without a clamp. Keep it that way when
//! tuning weights; the property tests in `src/tests/` check it.
//!
//! ## Wind direction
//! [`calculate_wind_score`] treats N/NE/NW as offshore and S/SE/SW as onshore
//! regardless of the spot. Its `shore_direction` argument is accepted and
//! ignored. Spots that need real offshore detection opt into
//! [`calculate_spot_relative_wind_score`] through `spot.shore_relative_wind`.

use crate::direction::{angular_separation, CompassPoint};
use crate::energy::calculate_wave_energy;
use crate::swell::classify_swell_quality;
use crate::units::round1;
use crate::SurfScore;

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;

pub const WAVE_WEIGHT: f64 = 0.4;
pub const WIND_WEIGHT: f64 = 0.3;
pub const TIDE_WEIGHT: f64 = 0.2;
pub const CONSISTENCY_WEIGHT: f64 = 0.1;

/// Placeholder until multi-day forecast variance is available.
pub const CONSISTENCY_SCORE: f64 = 7.0;

/// Tide height used when the caller has no reading.
pub const DEFAULT_TIDE_HEIGHT: f64 = 2.0;

/// Tide stage a spot works best on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimalTide {
    Low,
    #[default]
    Mid,
    High,
}

impl OptimalTide {
    /// Parse a tide label. Only the exact labels `low`, `mid` and `high` match.
    pub fn parse(label: &str) -> Option<OptimalTide> {
        match label {
            "low" => Some(OptimalTide::Low),
            "mid" => Some(OptimalTide::Mid),
            "high" => Some(OptimalTide::High),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptimalTide::Low => "low",
            OptimalTide::Mid => "mid",
            OptimalTide::High => "high",
        }
    }

    /// Whether a tide height in meters falls in this stage's bracket.
    pub fn contains(self, tide_height: f64) -> bool {
        match self {
            OptimalTide::Low => tide_height < 1.5,
            OptimalTide::Mid => (1.5..=2.5).contains(&tide_height),
            OptimalTide::High => tide_height > 2.5,
        }
    }
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Energy bonus tiers for the wave score.
fn energy_bonus(energy: f64) -> f64 {
    if energy >= 150.0 {
        4.0
    } else if energy >= 75.0 {
        3.0
    } else if energy >= 30.0 {
        2.0
    } else if energy >= 10.0 {
        1.0
    } else {
        0.0
    }
}

/// Wind speed adjustment in km/h. Glassy beats blown out.
fn wind_speed_adjustment(wind_speed: f64) -> f64 {
    if wind_speed <= 5.0 {
        3.0
    } else if wind_speed <= 10.0 {
        2.0
    } else if wind_speed <= 15.0 {
        1.0
    } else if wind_speed <= 20.0 {
        -1.0
    } else if wind_speed <= 30.0 {
        -2.0
    } else {
        -4.0
    }
}

const OFFSHORE_BONUS: f64 = 2.0;
const ONSHORE_PENALTY: f64 = 1.0;

/// Wave quality from height (m) and period (s).
///
/// Starts at 1.0, adds an energy-tier bonus (0–4) and a swell-quality bonus
/// (0–3), capped at 10.0. Non-decreasing in both height and period.
pub fn calculate_wave_score(height: f64, period: f64) -> f64 {
    let energy = calculate_wave_energy(height, period);
    let swell = classify_swell_quality(period);

    let score = 1.0 + energy_bonus(energy) + swell.quality.score_bonus();
    score.min(MAX_SCORE)
}

/// Wind quality from speed (km/h) and compass direction.
///
/// `shore_direction` is accepted for interface compatibility and has no effect;
/// offshore is always taken to mean N/NE/NW. Unknown direction strings get no
/// directional adjustment.
pub fn calculate_wind_score(
    wind_speed: f64,
    wind_direction: &str,
    _shore_direction: Option<&str>,
) -> f64 {
    let mut score = 5.0 + wind_speed_adjustment(wind_speed);

    match CompassPoint::parse(wind_direction) {
        Some(CompassPoint::N | CompassPoint::NE | CompassPoint::NW) => score += OFFSHORE_BONUS,
        Some(CompassPoint::S | CompassPoint::SE | CompassPoint::SW) => score -= ONSHORE_PENALTY,
        _ => {}
    }

    clamp_score(score)
}

/// Wind quality judged against the direction the shore faces.
///
/// Wind blowing from within 45° of the direction opposite the shore face is
/// offshore; wind from within 45° of the shore face itself is onshore. If either
/// string is unrecognised no directional adjustment is made.
pub fn calculate_spot_relative_wind_score(
    wind_speed: f64,
    wind_direction: &str,
    shore_facing: &str,
) -> f64 {
    let mut score = 5.0 + wind_speed_adjustment(wind_speed);

    if let (Some(wind), Some(shore)) = (
        CompassPoint::parse(wind_direction),
        CompassPoint::parse(shore_facing),
    ) {
        let separation = angular_separation(wind.degrees(), shore.degrees());
        if separation >= 135.0 {
            score += OFFSHORE_BONUS;
        } else if separation <= 45.0 {
            score -= ONSHORE_PENALTY;
        }
    }

    clamp_score(score)
}

/// Tide suitability for a spot's preferred tide stage.
///
/// `spot_optimal_tide` defaults to `"mid"`. This is a coarse heuristic: it
/// knows nothing of spot-specific tide curves or whether the tide is rising.
pub fn calculate_tide_score(current_tide_height: f64, spot_optimal_tide: Option<&str>) -> f64 {
    let optimal = spot_optimal_tide.map_or(Some(OptimalTide::Mid), OptimalTide::parse);
    let in_window = optimal.is_some_and(|tide| tide.contains(current_tide_height));

    let score = 5.0 + if in_window { 3.0 } else { 1.0 };
    clamp_score(score)
}

/// Composite surf score with the default spot assumptions (mid tide, fixed
/// offshore directions).
///
/// # Example
/// ```
/// use surf_metrics_lib::scoring::calculate_surf_score;
///
/// let score = calculate_surf_score(2.0, 12.0, 5.0, "N", None);
/// assert!(score.overall_score > 7.0);
/// assert_eq!(score.consistency_score, 7.0);
/// ```
pub fn calculate_surf_score(
    wave_height: f64,
    wave_period: f64,
    wind_speed: f64,
    wind_direction: &str,
    tide_height: Option<f64>,
) -> SurfScore {
    let tide_height = tide_height.unwrap_or(DEFAULT_TIDE_HEIGHT);

    combine_scores(
        calculate_wave_score(wave_height, wave_period),
        calculate_wind_score(wind_speed, wind_direction, None),
        calculate_tide_score(tide_height, None),
    )
}

/// Weighted blend of component scores into a [`SurfScore`].
///
/// The overall value is computed from the unrounded components and rounded
/// once at the end.
pub fn combine_scores(wave: f64, wind: f64, tide: f64) -> SurfScore {
    let overall = wave * WAVE_WEIGHT
        + wind * WIND_WEIGHT
        + tide * TIDE_WEIGHT
        + CONSISTENCY_SCORE * CONSISTENCY_WEIGHT;

    SurfScore {
        overall_score: round1(overall),
        wave_quality: round1(wave),
        wind_quality: round1(wind),
        tide_optimal: round1(tide),
        consistency_score: CONSISTENCY_SCORE,
    }
}
