//! # Multi-Swell Analysis
//!
//! Many breaks see two swell trains at once, say a long-period groundswell
//! from one storm and a shorter swell from another. How they combine depends on
//! how much energy the second train carries and where it comes from:
//!
//! 1. No second swell: `single_swell`
//! 2. Second swell under 30 % of the primary's energy: `neutral`
//! 3. Directions within 45° (or 315° and more apart, numerically): `constructive`
//! 4. Directions 135°–225° apart: `destructive`
//! 5. Anything else: `neutral`
//!
//! The direction difference is the plain absolute difference of the two table
//! bearings, which is why both ends of the range count as aligned.

use crate::direction::direction_degrees;
use crate::energy::calculate_wave_energy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Secondary swell energy below this fraction of the primary is ignored.
pub const NEGLIGIBLE_ENERGY_RATIO: f64 = 0.3;

/// One swell train: significant height (m), period (s), compass direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwellTrain {
    pub height: f64,
    pub period: f64,
    pub direction: String,
}

impl SwellTrain {
    pub fn new(height: f64, period: f64, direction: impl Into<String>) -> Self {
        SwellTrain {
            height,
            period,
            direction: direction.into(),
        }
    }

    /// Assemble a swell train from optional forecast fields. Returns `None` if
    /// any field is missing, meaning there is no usable second swell.
    ///
    /// ```
    /// use surf_metrics_lib::interaction::SwellTrain;
    ///
    /// assert!(SwellTrain::from_parts(Some(1.2), Some(9.0), Some("W")).is_some());
    /// assert!(SwellTrain::from_parts(Some(1.2), None, Some("W")).is_none());
    /// ```
    pub fn from_parts(
        height: Option<f64>,
        period: Option<f64>,
        direction: Option<&str>,
    ) -> Option<SwellTrain> {
        Some(SwellTrain::new(height?, period?, direction?))
    }

    pub fn energy(&self) -> f64 {
        calculate_wave_energy(self.height, self.period)
    }
}

/// How two swell trains combine at the break.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwellInteraction {
    SingleSwell,
    Neutral,
    Constructive,
    Destructive,
}

impl SwellInteraction {
    pub fn as_str(self) -> &'static str {
        match self {
            SwellInteraction::SingleSwell => "single_swell",
            SwellInteraction::Neutral => "neutral",
            SwellInteraction::Constructive => "constructive",
            SwellInteraction::Destructive => "destructive",
        }
    }
}

impl fmt::Display for SwellInteraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage share of total energy carried by each swell train.
///
/// Each side is rounded on its own, so the two may not add up to exactly 100.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwellDominance {
    pub primary: f64,
    pub secondary: f64,
}

impl SwellDominance {
    pub const PRIMARY_ONLY: SwellDominance = SwellDominance {
        primary: 100.0,
        secondary: 0.0,
    };
}

/// Classify the interaction between a primary and an optional secondary swell.
///
/// Unknown direction strings are read as north.
///
/// # Example
/// ```
/// use surf_metrics_lib::interaction::{analyze_swell_interaction, SwellInteraction, SwellTrain};
///
/// let primary = SwellTrain::new(2.0, 12.0, "N");
/// let opposing = SwellTrain::new(2.0, 12.0, "S");
/// assert_eq!(
///     analyze_swell_interaction(&primary, Some(&opposing)),
///     SwellInteraction::Destructive
/// );
/// assert_eq!(analyze_swell_interaction(&primary, None), SwellInteraction::SingleSwell);
/// ```
pub fn analyze_swell_interaction(
    primary: &SwellTrain,
    secondary: Option<&SwellTrain>,
) -> SwellInteraction {
    let Some(secondary) = secondary else {
        return SwellInteraction::SingleSwell;
    };

    if secondary.energy() < primary.energy() * NEGLIGIBLE_ENERGY_RATIO {
        return SwellInteraction::Neutral;
    }

    let difference =
        (direction_degrees(&primary.direction) - direction_degrees(&secondary.direction)).abs();

    if difference <= 45.0 || difference >= 315.0 {
        SwellInteraction::Constructive
    } else if (135.0..=225.0).contains(&difference) {
        SwellInteraction::Destructive
    } else {
        SwellInteraction::Neutral
    }
}

/// Split of total swell energy between the primary and optional secondary
/// train, as `(height, period)`.
///
/// Returns 100/0 without a secondary swell, and also when both trains carry
/// zero energy.
pub fn calculate_swell_dominance(
    primary_height: f64,
    primary_period: f64,
    secondary: Option<(f64, f64)>,
) -> SwellDominance {
    let Some((secondary_height, secondary_period)) = secondary else {
        return SwellDominance::PRIMARY_ONLY;
    };

    let primary_energy = calculate_wave_energy(primary_height, primary_period);
    let secondary_energy = calculate_wave_energy(secondary_height, secondary_period);
    let total = primary_energy + secondary_energy;

    if total == 0.0 {
        return SwellDominance::PRIMARY_ONLY;
    }

    SwellDominance {
        primary: (primary_energy / total * 100.0).round(),
        secondary: (secondary_energy / total * 100.0).round(),
    }
}
